//! In-memory event bus spy

use crate::error::{HarnessError, HarnessResult};
use crate::event::Event;
use async_trait::async_trait;
use dashmap::DashMap;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;

/// Observes events published during a scenario
#[async_trait]
pub trait EventObserver: Send + Sync {
    /// Start recording an event type; repeated calls are no-ops
    fn subscribe(&self, event_type: &str);

    /// Record an event, returning `false` if its type is not subscribed
    fn record(&self, event: Event) -> bool;

    /// Take the next queued event of a type, waiting up to `timeout`
    ///
    /// # Errors
    /// [`HarnessError::NotSubscribed`] if the type was never subscribed
    async fn wait_for(&self, event_type: &str, timeout: Duration) -> HarnessResult<Option<Event>>;

    /// Whether any event of the type was recorded since the last clear
    fn has_event(&self, event_type: &str) -> bool;

    /// Snapshot of recorded events of a type
    fn events(&self, event_type: &str) -> Vec<Event>;

    /// Forget recorded and queued events, keeping subscriptions
    fn clear(&self);
}

#[derive(Debug, Default)]
struct Subscription {
    // consumed by wait_for
    queue: Mutex<VecDeque<Event>>,
    // kept until clear
    captured: Mutex<Vec<Event>>,
    arrived: Notify,
}

impl Subscription {
    fn pop(&self) -> Option<Event> {
        self.queue.lock().pop_front()
    }
}

/// Event observer backed by per-type queues
///
/// Recording never blocks; waiters are woken through a [`Notify`] permit,
/// so an event recorded between a waiter's queue check and its await is
/// not missed.
///
/// ```rust
/// use std::time::Duration;
/// use storygen_harness::{Event, EventBusSpy, EventObserver};
///
/// # async fn run() -> storygen_harness::HarnessResult<()> {
/// let spy = EventBusSpy::new();
/// spy.subscribe("orderPlaced");
/// spy.record(Event::empty("orderPlaced"));
///
/// let event = spy.wait_for("orderPlaced", Duration::from_secs(1)).await?;
/// assert!(event.is_some());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct EventBusSpy {
    subscriptions: DashMap<String, Arc<Subscription>>,
}

impl EventBusSpy {
    /// Create spy with no subscriptions
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the event type is subscribed
    #[inline]
    #[must_use]
    pub fn is_subscribed(&self, event_type: &str) -> bool {
        self.subscriptions.contains_key(event_type)
    }

    /// Subscribed event types, in no particular order
    #[must_use]
    pub fn subscribed_types(&self) -> Vec<String> {
        self.subscriptions.iter().map(|entry| entry.key().clone()).collect()
    }

    fn subscription(&self, event_type: &str) -> Option<Arc<Subscription>> {
        self.subscriptions
            .get(event_type)
            .map(|entry| Arc::clone(entry.value()))
    }
}

#[async_trait]
impl EventObserver for EventBusSpy {
    fn subscribe(&self, event_type: &str) {
        self.subscriptions
            .entry(event_type.to_string())
            .or_default();
        tracing::debug!(event_type, "subscribed");
    }

    fn record(&self, event: Event) -> bool {
        let Some(subscription) = self.subscription(event.event_type()) else {
            tracing::trace!(event_type = event.event_type(), "ignoring unsubscribed event");
            return false;
        };

        tracing::debug!(event_type = event.event_type(), "recorded event");
        subscription.captured.lock().push(event.clone());
        subscription.queue.lock().push_back(event);
        subscription.arrived.notify_one();
        true
    }

    async fn wait_for(&self, event_type: &str, timeout: Duration) -> HarnessResult<Option<Event>> {
        let subscription = self
            .subscription(event_type)
            .ok_or_else(|| HarnessError::not_subscribed(event_type))?;

        let deadline = tokio::time::Instant::now() + timeout;
        loop {
            if let Some(event) = subscription.pop() {
                return Ok(Some(event));
            }

            let remaining = deadline.saturating_duration_since(tokio::time::Instant::now());
            if tokio::time::timeout(remaining, subscription.arrived.notified())
                .await
                .is_err()
            {
                let last_chance = subscription.pop();
                if last_chance.is_none() {
                    tracing::warn!(event_type, ?timeout, "timed out waiting for event");
                }
                return Ok(last_chance);
            }
        }
    }

    fn has_event(&self, event_type: &str) -> bool {
        self.subscription(event_type)
            .is_some_and(|subscription| !subscription.captured.lock().is_empty())
    }

    fn events(&self, event_type: &str) -> Vec<Event> {
        self.subscription(event_type)
            .map(|subscription| subscription.captured.lock().clone())
            .unwrap_or_default()
    }

    fn clear(&self) {
        for entry in &self.subscriptions {
            entry.queue.lock().clear();
            entry.captured.lock().clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHORT: Duration = Duration::from_millis(50);

    #[tokio::test]
    async fn waits_for_recorded_event() {
        let spy = EventBusSpy::new();
        spy.subscribe("orderPlaced");
        assert!(spy.record(Event::empty("orderPlaced").with_field("id", 7)));

        let event = spy.wait_for("orderPlaced", SHORT).await.unwrap().unwrap();
        assert_eq!(event.get("id"), Some(&serde_json::json!(7)));

        // queue is consumed but the capture remains
        assert!(spy.wait_for("orderPlaced", SHORT).await.unwrap().is_none());
        assert!(spy.has_event("orderPlaced"));
        assert_eq!(spy.events("orderPlaced").len(), 1);
    }

    #[tokio::test]
    async fn unsubscribed_events_are_ignored() {
        let spy = EventBusSpy::new();
        assert!(!spy.record(Event::empty("stray")));
        assert!(!spy.has_event("stray"));
        assert!(spy.events("stray").is_empty());
        assert_eq!(
            spy.wait_for("stray", SHORT).await,
            Err(HarnessError::not_subscribed("stray"))
        );
    }

    #[tokio::test]
    async fn wakes_on_event_from_another_task() {
        let spy = Arc::new(EventBusSpy::new());
        spy.subscribe("paymentCaptured");

        let producer = Arc::clone(&spy);
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            producer.record(Event::empty("paymentCaptured"));
        });

        let event = spy
            .wait_for("paymentCaptured", Duration::from_secs(5))
            .await
            .unwrap();
        assert_eq!(event.map(|e| e.event_type().to_string()).as_deref(), Some("paymentCaptured"));
    }

    #[tokio::test(start_paused = true)]
    async fn times_out_without_event() {
        let spy = EventBusSpy::new();
        spy.subscribe("never");
        assert!(spy.wait_for("never", Duration::from_secs(30)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn events_are_taken_in_order() {
        let spy = EventBusSpy::new();
        spy.subscribe("tick");
        for i in 0..3 {
            spy.record(Event::empty("tick").with_field("n", i));
        }
        for i in 0..3 {
            let event = spy.wait_for("tick", SHORT).await.unwrap().unwrap();
            assert_eq!(event.get("n"), Some(&serde_json::json!(i)));
        }
    }

    #[test]
    fn clear_keeps_subscriptions() {
        let spy = EventBusSpy::new();
        spy.subscribe("a");
        spy.subscribe("a");
        spy.record(Event::empty("a"));
        spy.clear();

        assert!(spy.is_subscribed("a"));
        assert!(!spy.has_event("a"));
        assert_eq!(spy.subscribed_types(), vec!["a".to_string()]);
    }
}
