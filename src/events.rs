//! Synchronous event notification.
//!
//! Subscribers register for one [`EventKind`] and are called, in registration
//! order, every time the grid emits an event of that kind. Dispatch is
//! synchronous: [`EventBus::emit`] returns only after every subscriber ran.
//!
//! A subscriber returns a [`Flow`]. Only [`Event::RowRemoved`] honours it: if
//! any subscriber answers [`Flow::Stop`] the removal is vetoed.
//!
//! ```rust
//! use bubbletea_writetable::events::{Event, EventBus, EventKind, Flow};
//!
//! let mut bus = EventBus::new();
//! bus.subscribe(EventKind::RowRemoved, |_event: &Event<'_>| Flow::Stop);
//! assert_eq!(bus.emit(&Event::Init), Flow::Continue);
//! ```

use crate::cell::Row;

/// What a subscriber asks of the emitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Flow {
    /// Carry on.
    #[default]
    Continue,
    /// Cancel the pending operation.
    Stop,
}

/// An event with its payload.
#[derive(Debug, Clone, Copy)]
pub enum Event<'a> {
    /// The grid was created.
    Create,
    /// Initialization finished, including any auto-added row.
    Init,
    /// The grid was torn down.
    Destroyed,
    /// A row was appended.
    RowAdded(&'a Row),
    /// A row is about to be removed. Cancelable.
    RowRemoved(&'a Row),
    /// A row was selected by the user.
    RowSelected(&'a Row),
}

impl Event<'_> {
    /// The kind of this event.
    pub fn kind(&self) -> EventKind {
        match self {
            Event::Create => EventKind::Create,
            Event::Init => EventKind::Init,
            Event::Destroyed => EventKind::Destroyed,
            Event::RowAdded(_) => EventKind::RowAdded,
            Event::RowRemoved(_) => EventKind::RowRemoved,
            Event::RowSelected(_) => EventKind::RowSelected,
        }
    }

    /// The row carried by row events.
    pub fn row(&self) -> Option<&Row> {
        match *self {
            Event::RowAdded(r) | Event::RowRemoved(r) | Event::RowSelected(r) => Some(r),
            _ => None,
        }
    }
}

/// Event names subscribers register for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// See [`Event::Create`].
    Create,
    /// See [`Event::Init`].
    Init,
    /// See [`Event::Destroyed`].
    Destroyed,
    /// See [`Event::RowAdded`].
    RowAdded,
    /// See [`Event::RowRemoved`].
    RowRemoved,
    /// See [`Event::RowSelected`].
    RowSelected,
}

/// Handle returned by [`EventBus::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// A subscriber callback.
pub type Handler = Box<dyn FnMut(&Event<'_>) -> Flow + Send>;

struct Subscription {
    id: SubscriptionId,
    kind: EventKind,
    handler: Handler,
}

/// Ordered list of subscribers.
#[derive(Default)]
pub struct EventBus {
    subscriptions: Vec<Subscription>,
    next_id: u64,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("subscriptions", &self.subscriptions.len())
            .finish()
    }
}

impl EventBus {
    /// Creates a bus with no subscribers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a subscriber for one kind of event.
    pub fn subscribe<F>(&mut self, kind: EventKind, handler: F) -> SubscriptionId
    where
        F: FnMut(&Event<'_>) -> Flow + Send + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscriptions.push(Subscription {
            id,
            kind,
            handler: Box::new(handler),
        });
        id
    }

    /// Removes a subscriber. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscriptions.len();
        self.subscriptions.retain(|s| s.id != id);
        self.subscriptions.len() != before
    }

    /// Removes every subscriber.
    pub fn clear(&mut self) {
        self.subscriptions.clear();
    }

    /// Number of registered subscribers.
    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    /// Reports whether nobody is subscribed.
    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }

    /// Calls every subscriber of the event's kind in registration order.
    /// Returns [`Flow::Stop`] if any of them did; all of them run regardless.
    pub fn emit(&mut self, event: &Event<'_>) -> Flow {
        let kind = event.kind();
        let mut flow = Flow::Continue;
        for sub in self.subscriptions.iter_mut().filter(|s| s.kind == kind) {
            if (sub.handler)(event) == Flow::Stop {
                flow = Flow::Stop;
            }
        }
        flow
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_registration_order_and_kind_filter() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut bus = EventBus::new();
        for tag in ["a", "b"] {
            let log = Arc::clone(&log);
            bus.subscribe(EventKind::Init, move |_| {
                log.lock().unwrap().push(tag);
                Flow::Continue
            });
        }
        let other = Arc::clone(&log);
        bus.subscribe(EventKind::Create, move |_| {
            other.lock().unwrap().push("create");
            Flow::Continue
        });

        bus.emit(&Event::Init);
        assert_eq!(*log.lock().unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn test_stop_reported_but_all_run() {
        let calls = Arc::new(Mutex::new(0));
        let mut bus = EventBus::new();
        bus.subscribe(EventKind::RowRemoved, |_| Flow::Stop);
        let c = Arc::clone(&calls);
        bus.subscribe(EventKind::RowRemoved, move |_| {
            *c.lock().unwrap() += 1;
            Flow::Continue
        });

        let row = Row::new(Some(0), vec![String::new()]);
        assert_eq!(bus.emit(&Event::RowRemoved(&row)), Flow::Stop);
        assert_eq!(*calls.lock().unwrap(), 1);
    }

    #[test]
    fn test_unsubscribe() {
        let mut bus = EventBus::new();
        let id = bus.subscribe(EventKind::RowRemoved, |_| Flow::Stop);
        assert_eq!(bus.len(), 1);
        assert!(bus.unsubscribe(id));
        assert!(!bus.unsubscribe(id));
        let row = Row::new(Some(0), vec![]);
        assert_eq!(bus.emit(&Event::RowRemoved(&row)), Flow::Continue);
        assert!(bus.is_empty());
    }

    #[test]
    fn test_event_row_payload() {
        let row = Row::new(Some(4), vec!["x".into()]);
        assert_eq!(Event::RowAdded(&row).row().and_then(|r| r.row_id), Some(4));
        assert!(Event::Destroyed.row().is_none());
    }
}
