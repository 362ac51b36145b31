//! Change subscriptions.

use std::fmt;
use std::sync::Arc;

use crate::model::Resume;

/// Callback invoked after every store change with the new and previous resume.
pub type Listener = Box<dyn FnMut(&Arc<Resume>, &Arc<Resume>)>;

/// Handle returned by [`ResumeStore::subscribe`](super::ResumeStore::subscribe).
///
/// Pass it back to [`ResumeStore::unsubscribe`](super::ResumeStore::unsubscribe)
/// to stop receiving notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription {
    id: u64,
}

/// Registered listeners in registration order.
#[derive(Default)]
pub(crate) struct Listeners {
    next_id: u64,
    entries: Vec<(Subscription, Listener)>,
}

impl Listeners {
    pub(crate) fn add(&mut self, listener: Listener) -> Subscription {
        let subscription = Subscription { id: self.next_id };
        self.next_id += 1;
        self.entries.push((subscription, listener));
        subscription
    }

    pub(crate) fn remove(&mut self, subscription: Subscription) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(s, _)| *s != subscription);
        self.entries.len() != before
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn notify(&mut self, next: &Arc<Resume>, prev: &Arc<Resume>) {
        for (_, listener) in &mut self.entries {
            listener(next, prev);
        }
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.entries.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counting(counter: &Rc<Cell<usize>>) -> Listener {
        let counter = Rc::clone(counter);
        Box::new(move |_, _| counter.set(counter.get() + 1))
    }

    #[test]
    fn notify_calls_every_listener() {
        let mut listeners = Listeners::default();
        let a = Rc::new(Cell::new(0));
        let b = Rc::new(Cell::new(0));
        listeners.add(counting(&a));
        listeners.add(counting(&b));

        let resume = Arc::new(Resume::initial());
        listeners.notify(&resume, &resume);

        assert_eq!(a.get(), 1);
        assert_eq!(b.get(), 1);
    }

    #[test]
    fn remove_stops_notifications() {
        let mut listeners = Listeners::default();
        let count = Rc::new(Cell::new(0));
        let subscription = listeners.add(counting(&count));

        assert!(listeners.remove(subscription));
        assert!(!listeners.remove(subscription));
        assert_eq!(listeners.len(), 0);

        let resume = Arc::new(Resume::initial());
        listeners.notify(&resume, &resume);
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn subscriptions_are_distinct() {
        let mut listeners = Listeners::default();
        let first = listeners.add(Box::new(|_, _| {}));
        let second = listeners.add(Box::new(|_, _| {}));
        assert_ne!(first, second);
    }

    #[test]
    fn notify_runs_in_registration_order() {
        let mut listeners = Listeners::default();
        let order = Rc::new(std::cell::RefCell::new(Vec::new()));
        for name in ["first", "second", "third"] {
            let order = Rc::clone(&order);
            listeners.add(Box::new(move |_, _| order.borrow_mut().push(name)));
        }

        let resume = Arc::new(Resume::initial());
        listeners.notify(&resume, &resume);
        assert_eq!(*order.borrow(), vec!["first", "second", "third"]);
    }
}
