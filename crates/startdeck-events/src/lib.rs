//! In-process event bus
//!
//! Implements the `IEventBus` port with synchronous, single-threaded,
//! fire-and-forget dispatch: `publish` runs every registered subscriber on
//! the calling thread, in registration order, and returns. There is no
//! acknowledgement and no delivery guarantee beyond "ran before publish
//! returned". The publisher never learns who is subscribed.

use std::sync::{Arc, Mutex};

use tracing::debug;

use startdeck_core::ports::{DomainEvent, IEventBus};

type Subscriber = Box<dyn Fn(&DomainEvent) + Send + Sync>;

/// Synchronous in-process publish/subscribe bus
///
/// Designed to be shared as `Arc<InProcessBus>`. Subscribers are boxed
/// callbacks; a subscriber that panics is that subscriber's bug and is not
/// caught here.
#[derive(Default)]
pub struct InProcessBus {
    subscribers: Mutex<Vec<Subscriber>>,
}

impl InProcessBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared-handle constructor, the shape adapters are wired with
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Registers a callback for every published event
    ///
    /// Consumers filter on [`DomainEvent::topic`] themselves; the bus does
    /// not maintain per-topic lists.
    pub fn subscribe(&self, subscriber: impl Fn(&DomainEvent) + Send + Sync + 'static) {
        self.subscribers.lock().unwrap().push(Box::new(subscriber));
    }

    /// Number of registered subscribers
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.lock().unwrap().len()
    }
}

impl IEventBus for InProcessBus {
    fn publish(&self, event: DomainEvent) {
        let subscribers = self.subscribers.lock().unwrap();
        debug!(
            topic = event.topic(),
            subscribers = subscribers.len(),
            "Publishing event"
        );
        for subscriber in subscribers.iter() {
            subscriber(&event);
        }
    }
}
