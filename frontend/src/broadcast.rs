use std::cell::RefCell;
use std::rc::{Rc, Weak};

type Listener<T> = Rc<dyn Fn(&T)>;

struct Inner<T> {
    value: T,
    next_id: usize,
    listeners: Vec<(usize, Listener<T>)>,
}

/// Latest value of some page-wide state plus everyone who wants to hear about
/// changes to it.
///
/// Cloning gives another handle to the same cell, so one instance is built per
/// page session by its provider and handed down from there.
pub struct Broadcast<T> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T> Clone for Broadcast<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T> PartialEq for Broadcast<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T: Clone + 'static> Broadcast<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                value,
                next_id: 0,
                listeners: Vec::new(),
            })),
        }
    }

    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Replaces the value and runs every listener before returning.
    pub fn publish(&self, value: T) {
        // Listeners run with the cell released so they can read or publish themselves.
        let listeners: Vec<Listener<T>> = {
            let mut inner = self.inner.borrow_mut();
            inner.value = value.clone();
            inner.listeners.iter().map(|(_, l)| l.clone()).collect()
        };
        for listener in listeners {
            listener(&value);
        }
    }

    pub fn subscribe<F>(&self, listener: F) -> Subscription<T>
    where
        F: Fn(&T) + 'static,
    {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.listeners.push((id, Rc::new(listener)));
        Subscription {
            id,
            inner: Rc::downgrade(&self.inner),
        }
    }

    #[cfg(test)]
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

/// Keeps a listener registered until dropped.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription<T> {
    id: usize,
    inner: Weak<RefCell<Inner<T>>>,
}

impl<T> Drop for Subscription<T> {
    fn drop(&mut self) {
        if let Some(inner) = self.inner.upgrade() {
            inner.borrow_mut().listeners.retain(|(id, _)| *id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn publish_replaces_value_and_notifies() {
        let state = Broadcast::new(1u32);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let _sub = {
            let seen = seen.clone();
            state.subscribe(move |v| seen.borrow_mut().push(*v))
        };

        state.publish(2);
        state.publish(3);

        assert_eq!(state.get(), 3);
        assert_eq!(*seen.borrow(), vec![2, 3]);
    }

    #[test]
    fn clones_share_one_cell() {
        let state = Broadcast::new("light".to_string());
        let other = state.clone();
        other.publish("dark".to_string());
        assert_eq!(state.get(), "dark");
        assert!(state == other);
        assert!(state != Broadcast::new("dark".to_string()));
    }

    #[test]
    fn dropping_subscription_stops_notifications() {
        let state = Broadcast::new(0i32);
        let hits = Rc::new(Cell::new(0));
        let sub = {
            let hits = hits.clone();
            state.subscribe(move |_| hits.set(hits.get() + 1))
        };
        state.publish(1);
        drop(sub);
        state.publish(2);

        assert_eq!(hits.get(), 1);
        assert_eq!(state.subscriber_count(), 0);
    }

    #[test]
    fn listener_may_read_current_value() {
        let state = Broadcast::new(10u8);
        let observed = Rc::new(Cell::new(0u8));
        let _sub = {
            let observed = observed.clone();
            let reader = state.clone();
            state.subscribe(move |_| observed.set(reader.get()))
        };
        state.publish(42);
        assert_eq!(observed.get(), 42);
    }

    #[test]
    fn subscription_outliving_state_is_harmless() {
        let state = Broadcast::new(());
        let sub = state.subscribe(|_| {});
        drop(state);
        drop(sub);
    }
}
