use super::BusEvent;
use log::trace;
use std::any::Any;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Handler = Box<dyn Fn(&dyn Any)>;

struct Subscription {
    id: SubscriptionId,
    event_type: &'static str,
    handler: Handler,
}

/// Synchronous in-process event bus. Handlers run on the publishing call,
/// in subscription order.
#[derive(Default)]
pub struct EventBus {
    next_id: u64,
    subscriptions: Vec<Subscription>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<E: BusEvent>(&mut self, handler: impl Fn(&E) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;

        self.subscriptions.push(Subscription {
            id,
            event_type: E::TYPE,
            handler: Box::new(move |event: &dyn Any| {
                if let Some(event) = event.downcast_ref::<E>() {
                    handler(event);
                }
            }),
        });

        id
    }

    /// Returns false when `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscriptions.len();
        self.subscriptions.retain(|s| s.id != id);
        self.subscriptions.len() != before
    }

    /// Deliver `event` to every handler of its type. Returns how many ran.
    pub fn publish<E: BusEvent>(&self, event: &E) -> usize {
        let mut delivered = 0;
        for subscription in self.subscriptions.iter().filter(|s| s.event_type == E::TYPE) {
            (subscription.handler)(event as &dyn Any);
            delivered += 1;
        }
        trace!("published {} to {} handler(s)", E::TYPE, delivered);
        delivered
    }

    pub fn subscriber_count(&self, event_type: &str) -> usize {
        self.subscriptions
            .iter()
            .filter(|s| s.event_type == event_type)
            .count()
    }
}
