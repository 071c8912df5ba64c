//! Pointer position fan-out.
//!
//! A [`PointerTracker`] holds the latest global pointer position and
//! republishes every move to its subscribers. Each card owns its own
//! tracker; nothing here is process-wide.

use std::fmt;

use crate::types::PointerPosition;

/// Handle returned by [`PointerTracker::subscribe`]. Subscriptions are
/// identified by this handle, so unsubscribing never depends on comparing
/// closures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type PointerCallback = Box<dyn FnMut(PointerPosition)>;

/// Latest pointer position plus the callbacks interested in it
pub struct PointerTracker {
    position: PointerPosition,
    subscribers: Vec<(SubscriptionId, PointerCallback)>,
    next_id: u64,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self {
            position: PointerPosition::default(),
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    /// Register a callback for position updates.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(PointerPosition) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a subscription. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }

    /// Store `position` and invoke every subscriber with it, in
    /// subscription order.
    pub fn publish(&mut self, position: PointerPosition) {
        self.position = position;
        for (_, callback) in self.subscribers.iter_mut() {
            callback(position);
        }
    }

    /// Latest published position (the origin before the first move)
    pub fn position(&self) -> PointerPosition {
        self.position
    }

    pub fn is_subscribed(&self, id: SubscriptionId) -> bool {
        self.subscribers.iter().any(|(sub_id, _)| *sub_id == id)
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PointerTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PointerTracker")
            .field("position", &self.position)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recorder() -> (Rc<RefCell<Vec<PointerPosition>>>, impl FnMut(PointerPosition)) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        (seen, move |pos| sink.borrow_mut().push(pos))
    }

    #[test]
    fn subscriber_receives_published_position_once() {
        let mut tracker = PointerTracker::new();
        let (seen, callback) = recorder();
        tracker.subscribe(callback);

        tracker.publish(PointerPosition::new(12.0, 34.0));

        assert_eq!(*seen.borrow(), vec![PointerPosition::new(12.0, 34.0)]);
        assert_eq!(tracker.position(), PointerPosition::new(12.0, 34.0));
    }

    #[test]
    fn unsubscribed_callback_is_not_invoked() {
        let mut tracker = PointerTracker::new();
        let (seen, callback) = recorder();
        let id = tracker.subscribe(callback);

        assert!(tracker.unsubscribe(id));
        tracker.publish(PointerPosition::new(1.0, 1.0));

        assert!(seen.borrow().is_empty());
        assert_eq!(tracker.subscriber_count(), 0);
    }

    #[test]
    fn unsubscribe_unknown_is_noop() {
        let mut tracker = PointerTracker::new();
        let (_seen, callback) = recorder();
        let id = tracker.subscribe(callback);
        assert!(tracker.unsubscribe(id));
        assert!(!tracker.unsubscribe(id));
    }

    #[test]
    fn subscribers_run_in_registration_order() {
        let mut tracker = PointerTracker::new();
        let order = Rc::new(RefCell::new(Vec::new()));
        for tag in ["first", "second", "third"] {
            let order = order.clone();
            tracker.subscribe(move |_| order.borrow_mut().push(tag));
        }

        tracker.publish(PointerPosition::new(0.0, 0.0));

        assert_eq!(*order.borrow(), vec!["first", "second", "third"]);
    }

    #[test]
    fn position_tracks_without_subscribers() {
        let mut tracker = PointerTracker::new();
        assert_eq!(tracker.position(), PointerPosition::default());
        tracker.publish(PointerPosition::new(5.0, 6.0));
        tracker.publish(PointerPosition::new(7.0, 8.0));
        assert_eq!(tracker.position(), PointerPosition::new(7.0, 8.0));
    }
}
