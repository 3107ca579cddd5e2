//! Event bus and subscription guards.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::error::{BusError, HandlerError};

/// An event that can travel over an [`EventBus`].
pub trait Event: fmt::Debug {
    /// Channel the event is delivered on.
    type Topic: Copy + Eq + fmt::Debug + fmt::Display;

    /// The topic this event is published to.
    fn topic(&self) -> Self::Topic;
}

type Handler<E> = Rc<RefCell<dyn FnMut(&E) -> Result<(), HandlerError>>>;

struct Slot<E: Event> {
    id: u64,
    topic: E::Topic,
    handler: Handler<E>,
}

struct Registry<E: Event> {
    next_id: u64,
    slots: Vec<Slot<E>>,
}

/// Publish/subscribe channel shared by page components.
///
/// Cloning yields another handle to the same set of subscribers.
pub struct EventBus<E: Event> {
    registry: Rc<RefCell<Registry<E>>>,
}

impl<E: Event + 'static> EventBus<E> {
    /// Create an empty bus.
    pub fn new() -> Self {
        Self {
            registry: Rc::new(RefCell::new(Registry {
                next_id: 0,
                slots: Vec::new(),
            })),
        }
    }

    /// Register `handler` for `topic`.
    ///
    /// The handler stays registered until the returned [`Subscription`] is
    /// dropped, so subscribers keep the guard alongside their own state.
    #[must_use = "dropping the subscription unsubscribes the handler"]
    pub fn subscribe<F>(&self, topic: E::Topic, handler: F) -> Subscription
    where
        F: FnMut(&E) -> Result<(), HandlerError> + 'static,
    {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.slots.push(Slot {
            id,
            topic,
            handler: Rc::new(RefCell::new(handler)),
        });

        let weak: Weak<RefCell<Registry<E>>> = Rc::downgrade(&self.registry);
        Subscription {
            unsubscribe: Some(Box::new(move || {
                if let Some(registry) = weak.upgrade() {
                    registry.borrow_mut().slots.retain(|slot| slot.id != id);
                }
            })),
        }
    }

    /// Deliver `event` to every current subscriber of its topic.
    ///
    /// Subscribers are called in subscription order against the set registered
    /// when `publish` starts; nothing is buffered or replayed. The first
    /// failing handler stops delivery. Returns the number of handlers called.
    pub fn publish(&self, event: E) -> Result<usize, BusError> {
        let topic = event.topic();
        let handlers: Vec<Handler<E>> = self
            .registry
            .borrow()
            .slots
            .iter()
            .filter(|slot| slot.topic == topic)
            .map(|slot| Rc::clone(&slot.handler))
            .collect();

        for handler in &handlers {
            let mut handler = handler.try_borrow_mut().map_err(|_| BusError::Reentrant {
                topic: topic.to_string(),
            })?;
            (&mut *handler)(&event).map_err(|source| BusError::Handler {
                topic: topic.to_string(),
                source,
            })?;
        }

        Ok(handlers.len())
    }

    /// Number of handlers currently registered for `topic`.
    pub fn subscriber_count(&self, topic: E::Topic) -> usize {
        self.registry
            .borrow()
            .slots
            .iter()
            .filter(|slot| slot.topic == topic)
            .count()
    }
}

impl<E: Event + 'static> Default for EventBus<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Event> Clone for EventBus<E> {
    fn clone(&self) -> Self {
        Self {
            registry: Rc::clone(&self.registry),
        }
    }
}

impl<E: Event> fmt::Debug for EventBus<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.registry.borrow().slots.len())
            .finish()
    }
}

/// Keeps a handler registered; dropping it unsubscribes.
pub struct Subscription {
    unsubscribe: Option<Box<dyn FnOnce()>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.unsubscribe.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum TestTopic {
        Greeting,
        Farewell,
    }

    impl fmt::Display for TestTopic {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                TestTopic::Greeting => write!(f, "greeting"),
                TestTopic::Farewell => write!(f, "farewell"),
            }
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    enum TestEvent {
        Hello(String),
        Bye,
    }

    impl Event for TestEvent {
        type Topic = TestTopic;

        fn topic(&self) -> TestTopic {
            match self {
                TestEvent::Hello(_) => TestTopic::Greeting,
                TestEvent::Bye => TestTopic::Farewell,
            }
        }
    }

    fn recorder(log: &Rc<RefCell<Vec<String>>>, tag: &'static str) -> impl FnMut(&TestEvent) -> Result<(), HandlerError> {
        let log = Rc::clone(log);
        move |event| {
            log.borrow_mut().push(format!("{}:{:?}", tag, event));
            Ok(())
        }
    }

    #[test]
    fn test_delivers_in_subscription_order() {
        let bus = EventBus::<TestEvent>::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        let _a = bus.subscribe(TestTopic::Greeting, recorder(&log, "a"));
        let _b = bus.subscribe(TestTopic::Greeting, recorder(&log, "b"));

        let delivered = bus.publish(TestEvent::Hello("x".into())).unwrap();

        assert_eq!(delivered, 2);
        assert_eq!(
            *log.borrow(),
            vec![r#"a:Hello("x")"#.to_string(), r#"b:Hello("x")"#.to_string()]
        );
    }

    #[test]
    fn test_only_matching_topic_is_delivered() {
        let bus = EventBus::<TestEvent>::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        let _greet = bus.subscribe(TestTopic::Greeting, recorder(&log, "greet"));

        assert_eq!(bus.publish(TestEvent::Bye).unwrap(), 0);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_no_replay_for_late_subscribers() {
        let bus = EventBus::<TestEvent>::new();
        bus.publish(TestEvent::Hello("early".into())).unwrap();

        let log = Rc::new(RefCell::new(Vec::new()));
        let _late = bus.subscribe(TestTopic::Greeting, recorder(&log, "late"));

        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_drop_unsubscribes() {
        let bus = EventBus::<TestEvent>::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        let sub = bus.subscribe(TestTopic::Greeting, recorder(&log, "a"));
        assert_eq!(bus.subscriber_count(TestTopic::Greeting), 1);

        drop(sub);

        assert_eq!(bus.subscriber_count(TestTopic::Greeting), 0);
        assert_eq!(bus.publish(TestEvent::Hello("x".into())).unwrap(), 0);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_clones_share_subscribers() {
        let bus = EventBus::<TestEvent>::new();
        let other = bus.clone();
        let log = Rc::new(RefCell::new(Vec::new()));
        let _sub = other.subscribe(TestTopic::Farewell, recorder(&log, "a"));

        assert_eq!(bus.publish(TestEvent::Bye).unwrap(), 1);
    }

    #[test]
    fn test_failing_handler_stops_delivery() {
        let bus = EventBus::<TestEvent>::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        let _first = bus.subscribe(TestTopic::Farewell, |_| Err(HandlerError::new("boom")));
        let _second = bus.subscribe(TestTopic::Farewell, recorder(&log, "second"));

        let err = bus.publish(TestEvent::Bye).unwrap_err();

        assert_eq!(
            err,
            BusError::Handler {
                topic: "farewell".to_string(),
                source: HandlerError::new("boom"),
            }
        );
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_reentrant_publish_is_an_error() {
        let bus = EventBus::<TestEvent>::new();
        let inner = bus.clone();
        let seen = Rc::new(RefCell::new(None));
        let seen_in_handler = Rc::clone(&seen);
        let _sub = bus.subscribe(TestTopic::Greeting, move |_| {
            *seen_in_handler.borrow_mut() = Some(inner.publish(TestEvent::Hello("again".into())));
            Ok(())
        });

        bus.publish(TestEvent::Hello("once".into())).unwrap();

        let nested = seen.borrow_mut().take().unwrap();
        assert_eq!(
            nested.unwrap_err(),
            BusError::Reentrant {
                topic: "greeting".to_string()
            }
        );
    }

    #[test]
    fn test_subscribe_during_delivery_misses_in_flight_event() {
        let bus = EventBus::<TestEvent>::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        let late_subs = Rc::new(RefCell::new(Vec::new()));

        let inner = bus.clone();
        let inner_log = Rc::clone(&log);
        let keep = Rc::clone(&late_subs);
        let _first = bus.subscribe(TestTopic::Greeting, move |_| {
            if keep.borrow().is_empty() {
                let late = inner.subscribe(TestTopic::Greeting, recorder(&inner_log, "late"));
                keep.borrow_mut().push(late);
            }
            Ok(())
        });

        let delivered = bus.publish(TestEvent::Hello("first".into())).unwrap();

        assert_eq!(delivered, 1);
        assert!(log.borrow().is_empty());
        assert_eq!(bus.subscriber_count(TestTopic::Greeting), 2);

        assert_eq!(bus.publish(TestEvent::Hello("second".into())).unwrap(), 2);
        assert_eq!(*log.borrow(), vec![r#"late:Hello("second")"#.to_string()]);
    }

    #[test]
    fn test_unsubscribe_during_delivery_keeps_publish_snapshot() {
        let bus = EventBus::<TestEvent>::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        let doomed: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));

        let to_drop = Rc::clone(&doomed);
        let _first = bus.subscribe(TestTopic::Greeting, move |_| {
            drop(to_drop.borrow_mut().take());
            Ok(())
        });
        *doomed.borrow_mut() = Some(bus.subscribe(TestTopic::Greeting, recorder(&log, "second")));

        assert_eq!(bus.publish(TestEvent::Hello("first".into())).unwrap(), 2);
        assert_eq!(*log.borrow(), vec![r#"second:Hello("first")"#.to_string()]);
        assert_eq!(bus.subscriber_count(TestTopic::Greeting), 1);

        assert_eq!(bus.publish(TestEvent::Hello("again".into())).unwrap(), 1);
        assert_eq!(log.borrow().len(), 1);
    }

    #[test]
    fn test_subscription_outliving_bus_is_harmless() {
        let bus = EventBus::<TestEvent>::new();
        let sub = bus.subscribe(TestTopic::Greeting, |_| Ok(()));
        drop(bus);
        drop(sub);
    }
}
