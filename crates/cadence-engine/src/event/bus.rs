use std::cell::{Cell, RefCell};
use std::rc::Rc;

type Callback<T> = Rc<RefCell<dyn FnMut(&T)>>;

struct Inner<T> {
    subscribers: RefCell<Vec<(u64, Callback<T>)>>,
    next_id: Cell<u64>,
}

/// One-to-many synchronous event channel.
///
/// The bus is a cheaply cloneable handle over shared single-threaded state,
/// so a callback may itself hold a clone and subscribe or unsubscribe from
/// inside a publish. Delivery is snapshotted at the start of each publish:
/// registrations added or removed by a running callback take effect for the
/// next publish, never the one in progress.
pub struct EventBus<T> {
    inner: Rc<Inner<T>>,
}

/// Handle returned by [`EventBus::subscribe`], identifying one registration.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Subscription {
    id: u64,
}

impl<T> EventBus<T> {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(Inner {
                subscribers: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
            }),
        }
    }

    /// Registers a callback and returns its [`Subscription`] handle.
    ///
    /// Callbacks are invoked in registration order.
    pub fn subscribe(&self, callback: impl FnMut(&T) + 'static) -> Subscription {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);

        self.inner
            .subscribers
            .borrow_mut()
            .push((id, Rc::new(RefCell::new(callback))));

        Subscription { id }
    }

    /// Removes the registration behind `subscription`.
    ///
    /// Removing the same subscription twice is a no-op.
    pub fn unsubscribe(&self, subscription: &Subscription) {
        self.inner
            .subscribers
            .borrow_mut()
            .retain(|(id, _)| *id != subscription.id);
    }

    /// Removes every registration.
    pub fn clear_subscribers(&self) {
        self.inner.subscribers.borrow_mut().clear();
    }

    /// Invokes every currently registered callback once with `value`.
    ///
    /// Publishing with zero subscribers is fine.
    pub fn publish(&self, value: &T) {
        // Snapshot so mutation from inside a callback cannot invalidate the
        // delivery list mid-publish.
        let snapshot: Vec<Callback<T>> = self
            .inner
            .subscribers
            .borrow()
            .iter()
            .map(|(_, cb)| Rc::clone(cb))
            .collect();

        for callback in snapshot {
            (callback.borrow_mut())(value);
        }
    }

    pub fn len(&self) -> usize {
        self.inner.subscribers.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Clone for EventBus<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T> Default for EventBus<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn publishes_in_subscription_order() {
        let bus: EventBus<u32> = EventBus::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        for tag in ["a", "b", "c"] {
            let seen = Rc::clone(&seen);
            bus.subscribe(move |v: &u32| seen.borrow_mut().push((tag, *v)));
        }

        bus.publish(&7);
        assert_eq!(*seen.borrow(), vec![("a", 7), ("b", 7), ("c", 7)]);
    }

    #[test]
    fn publish_with_no_subscribers_is_fine() {
        let bus: EventBus<()> = EventBus::new();
        bus.publish(&());
    }

    #[test]
    fn unsubscribe_removes_exactly_one_registration() {
        let bus: EventBus<()> = EventBus::new();
        let count = Rc::new(Cell::new(0u32));

        let keep = {
            let count = Rc::clone(&count);
            bus.subscribe(move |_| count.set(count.get() + 1))
        };
        let drop = {
            let count = Rc::clone(&count);
            bus.subscribe(move |_| count.set(count.get() + 10))
        };

        bus.unsubscribe(&drop);
        bus.publish(&());
        assert_eq!(count.get(), 1);

        // Repeat removal is a no-op, including for a still-live handle.
        bus.unsubscribe(&drop);
        bus.unsubscribe(&keep);
        bus.unsubscribe(&keep);
        bus.publish(&());
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn subscribe_during_publish_waits_for_next_publish() {
        let bus: EventBus<()> = EventBus::new();
        let late_calls = Rc::new(Cell::new(0u32));

        {
            let bus = bus.clone();
            let late_calls = Rc::clone(&late_calls);
            bus.clone().subscribe(move |_| {
                let late_calls = Rc::clone(&late_calls);
                bus.subscribe(move |_| late_calls.set(late_calls.get() + 1));
            });
        }

        bus.publish(&());
        assert_eq!(late_calls.get(), 0, "registration joined the in-progress publish");

        bus.publish(&());
        assert_eq!(late_calls.get(), 1);
    }

    #[test]
    fn unsubscribe_during_publish_still_delivers_current_publish() {
        let bus: EventBus<()> = EventBus::new();
        let count = Rc::new(Cell::new(0u32));
        let victim = Rc::new(RefCell::new(None::<Subscription>));

        {
            let bus = bus.clone();
            let victim = Rc::clone(&victim);
            bus.clone().subscribe(move |_| {
                if let Some(v) = victim.borrow().as_ref() {
                    bus.unsubscribe(v);
                }
            });
        }
        *victim.borrow_mut() = Some({
            let count = Rc::clone(&count);
            bus.subscribe(move |_| count.set(count.get() + 1))
        });

        // The remover runs first but the victim was snapshotted into this
        // publish's delivery list.
        bus.publish(&());
        assert_eq!(count.get(), 1);

        bus.publish(&());
        assert_eq!(count.get(), 1, "victim should be gone from the second publish");
    }

    #[test]
    fn clear_subscribers_empties_the_bus() {
        let bus: EventBus<()> = EventBus::new();
        bus.subscribe(|_| {});
        bus.subscribe(|_| {});
        assert_eq!(bus.len(), 2);

        bus.clear_subscribers();
        assert!(bus.is_empty());
        bus.publish(&());
    }
}
