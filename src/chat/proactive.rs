// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Deferred delivery of proactive messages
//!
//! Each scheduled message gets its own one-shot timer. When the timer fires
//! the content is sent over a channel owned by the session, which applies it
//! the next time the host drains pending deliveries.

use std::time::Duration;

use rand::Rng;
use tokio::sync::mpsc;

/// Half-open range `[min, max)` a proactive delay is drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayWindow {
    min: Duration,
    max: Duration,
}

impl DelayWindow {
    /// Create a window. A `max` not above `min` is widened by one millisecond.
    pub fn new(min: Duration, max: Duration) -> Self {
        let max = if max > min {
            max
        } else {
            min + Duration::from_millis(1)
        };
        Self { min, max }
    }

    pub fn min(&self) -> Duration {
        self.min
    }

    pub fn max(&self) -> Duration {
        self.max
    }

    /// Draw a delay uniformly from the window.
    pub fn sample(&self) -> Duration {
        let min_ms = self.min.as_millis() as u64;
        let max_ms = self.max.as_millis() as u64;
        let mut rng = rand::rng();
        Duration::from_millis(rng.random_range(min_ms..max_ms.max(min_ms + 1)))
    }
}

impl Default for DelayWindow {
    fn default() -> Self {
        Self::new(Duration::from_millis(2000), Duration::from_millis(5000))
    }
}

/// A proactive message whose delay has elapsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProactiveDelivery {
    pub content: String,
}

pub(crate) type DeliverySender = mpsc::UnboundedSender<ProactiveDelivery>;
pub(crate) type DeliveryReceiver = mpsc::UnboundedReceiver<ProactiveDelivery>;

pub(crate) fn delivery_channel() -> (DeliverySender, DeliveryReceiver) {
    mpsc::unbounded_channel()
}

/// Start a one-shot timer that hands `content` back after `delay`.
///
/// Runs on the ambient tokio runtime when there is one, otherwise on a
/// detached thread. Either way the caller never waits.
pub(crate) fn schedule(tx: DeliverySender, content: String, delay: Duration) {
    let delivery = ProactiveDelivery { content };

    match tokio::runtime::Handle::try_current() {
        Ok(handle) => {
            handle.spawn(async move {
                tokio::time::sleep(delay).await;
                send(&tx, delivery);
            });
        }
        Err(_) => {
            std::thread::spawn(move || {
                std::thread::sleep(delay);
                send(&tx, delivery);
            });
        }
    }
}

fn send(tx: &DeliverySender, delivery: ProactiveDelivery) {
    if tx.send(delivery).is_err() {
        tracing::debug!(
            target: "bella.chat.proactive",
            "session dropped before proactive message was delivered"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_window() {
        let window = DelayWindow::default();
        assert_eq!(window.min(), Duration::from_millis(2000));
        assert_eq!(window.max(), Duration::from_millis(5000));
    }

    #[test]
    fn test_sample_within_window() {
        let window = DelayWindow::default();
        for _ in 0..200 {
            let delay = window.sample();
            assert!(delay >= window.min());
            assert!(delay < window.max());
        }
    }

    #[test]
    fn test_degenerate_window_is_widened() {
        let window = DelayWindow::new(Duration::from_millis(10), Duration::from_millis(10));
        assert_eq!(window.max(), Duration::from_millis(11));
        assert_eq!(window.sample(), Duration::from_millis(10));
    }

    #[tokio::test(start_paused = true)]
    async fn test_schedule_delivers_after_delay() {
        let (tx, mut rx) = delivery_channel();
        let start = tokio::time::Instant::now();
        schedule(tx, "hello".to_string(), Duration::from_millis(3000));

        let delivery = rx.recv().await.unwrap();
        assert_eq!(delivery.content, "hello");
        assert!(start.elapsed() >= Duration::from_millis(3000));
    }

    #[test]
    fn test_schedule_without_runtime_uses_thread() {
        let (tx, mut rx) = delivery_channel();
        schedule(tx, "later".to_string(), Duration::from_millis(5));
        let delivery = rx.blocking_recv().unwrap();
        assert_eq!(delivery.content, "later");
    }
}
