//! Callback registry shared by the stores.

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback<T> = Box<dyn FnMut(&T)>;

pub(crate) struct Subscribers<T: ?Sized> {
    next_id: u64,
    entries: Vec<(SubscriptionId, Callback<T>)>,
}

impl<T: ?Sized> Subscribers<T> {
    pub(crate) fn new() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }

    /// Registers `callback` and calls it once with `current`.
    pub(crate) fn add(&mut self, current: &T, mut callback: Callback<T>) -> SubscriptionId {
        callback(current);
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, callback));
        id
    }

    pub(crate) fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    /// Calls every callback in subscription order.
    pub(crate) fn notify(&mut self, value: &T) {
        for (_, callback) in &mut self.entries {
            callback(value);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::Subscribers;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn notifies_in_order_until_removed() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut subscribers: Subscribers<u32> = Subscribers::new();

        let first_log = Rc::clone(&seen);
        let first = subscribers.add(&0, Box::new(move |v: &u32| first_log.borrow_mut().push(("a", *v))));
        let second_log = Rc::clone(&seen);
        subscribers.add(&0, Box::new(move |v: &u32| second_log.borrow_mut().push(("b", *v))));

        subscribers.notify(&1);
        assert!(subscribers.remove(first));
        assert!(!subscribers.remove(first));
        subscribers.notify(&2);

        assert_eq!(
            *seen.borrow(),
            vec![("a", 0), ("b", 0), ("a", 1), ("b", 1), ("b", 2)]
        );
        assert_eq!(subscribers.len(), 1);
    }
}
