use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use super::Observer;

type ObserverRc<V> = Rc<RefCell<dyn Observer<V>>>;
type ObserverWeak<V> = Weak<RefCell<dyn Observer<V>>>;

/// Ordered, non-owning list of observers.
///
/// # Invariants
///
/// 1. Entries are kept in registration order; `notify` walks them front to back.
/// 2. No deduplication: an observer subscribed twice is notified twice.
/// 3. `unsubscribe` removes every entry pointing at the given observer.
/// 4. Entries whose observer has been dropped are pruned on the next `notify`.
///
/// # Changes during `notify`
///
/// `notify` takes a snapshot of the live entries before dispatching. A
/// `subscribe`/`unsubscribe` issued from inside an `update` callback edits the
/// list right away but only affects later notifications; the round in flight
/// still reaches exactly the entries present when it started.
///
/// # Panics
///
/// `notify` mutably borrows each observer's `RefCell`. Notifying an observer
/// that is already borrowed (for example from inside its own `update`) panics.
pub struct Subject<V: ?Sized + 'static> {
    observers: RefCell<Vec<ObserverWeak<V>>>,
}

impl<V: ?Sized + 'static> Subject<V> {
    pub fn new() -> Self {
        Self {
            observers: RefCell::new(Vec::new()),
        }
    }

    /// Appends `observer` to the end of the list.
    pub fn subscribe<O>(&self, observer: &Rc<RefCell<O>>)
    where
        O: Observer<V> + 'static,
    {
        let erased: ObserverRc<V> = observer.clone();
        self.subscribe_dyn(&erased);
    }

    /// Same as [`subscribe`](Self::subscribe), for a handle that is already a
    /// trait object.
    pub fn subscribe_dyn(&self, observer: &Rc<RefCell<dyn Observer<V>>>) {
        self.observers.borrow_mut().push(Rc::downgrade(observer));
        log::trace!("observer {:p} subscribed", Rc::as_ptr(observer).cast::<()>());
    }

    /// Removes every entry that refers to `observer`. Unknown observers are ignored.
    pub fn unsubscribe<O>(&self, observer: &Rc<RefCell<O>>)
    where
        O: Observer<V> + ?Sized + 'static,
    {
        let target = Rc::as_ptr(observer).cast::<()>();
        let mut observers = self.observers.borrow_mut();
        let before = observers.len();
        observers.retain(|entry| !points_at(entry, target));

        let removed = before - observers.len();
        if removed > 0 {
            log::trace!("observer {target:p} unsubscribed ({removed} entries)");
        }
    }

    /// Calls `update(value)` on every live entry, first registered first.
    pub fn notify(&self, value: &V) {
        let live: Vec<ObserverRc<V>> = {
            let mut observers = self.observers.borrow_mut();
            let before = observers.len();
            observers.retain(|entry| entry.strong_count() > 0);

            let pruned = before - observers.len();
            if pruned > 0 {
                log::debug!("pruned {pruned} dropped observer(s)");
            }

            observers.iter().filter_map(Weak::upgrade).collect()
        };

        for observer in &live {
            observer.borrow_mut().update(value);
        }
    }

    /// Whether at least one entry refers to `observer`.
    pub fn contains<O>(&self, observer: &Rc<RefCell<O>>) -> bool
    where
        O: Observer<V> + ?Sized + 'static,
    {
        let target = Rc::as_ptr(observer).cast::<()>();
        self.observers
            .borrow()
            .iter()
            .any(|entry| entry.strong_count() > 0 && points_at(entry, target))
    }

    /// Number of registration entries whose observer is still alive.
    pub fn len(&self) -> usize {
        self.observers
            .borrow()
            .iter()
            .filter(|entry| entry.strong_count() > 0)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[inline]
fn points_at<V: ?Sized + 'static>(entry: &ObserverWeak<V>, target: *const ()) -> bool {
    entry.as_ptr().cast::<()>() == target
}

impl<V: ?Sized + 'static> Default for Subject<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: ?Sized + 'static> fmt::Debug for Subject<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subject")
            .field("entries", &self.observers.borrow().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Log = Rc<RefCell<Vec<String>>>;

    struct Recorder {
        name: &'static str,
        log: Log,
    }

    impl Observer<str> for Recorder {
        fn update(&mut self, value: &str) {
            self.log.borrow_mut().push(format!("{}:{}", self.name, value));
        }
    }

    fn recorder(name: &'static str, log: &Log) -> Rc<RefCell<Recorder>> {
        Rc::new(RefCell::new(Recorder { name, log: log.clone() }))
    }

    fn entries(log: &Log) -> Vec<String> {
        log.borrow().clone()
    }

    // ── subscription identity ─────────────────────────────────────────────

    #[test]
    fn unsubscribed_observer_is_not_notified() {
        let log = Log::default();
        let subject = Subject::<str>::new();
        let o = recorder("o", &log);

        subject.subscribe(&o);
        subject.unsubscribe(&o);
        subject.notify("hit");

        assert!(entries(&log).is_empty());
        assert!(subject.is_empty());
    }

    #[test]
    fn unsubscribe_compares_identity_not_value() {
        let log = Log::default();
        let subject = Subject::<str>::new();
        let a = recorder("same", &log);
        let b = recorder("same", &log);

        subject.subscribe(&a);
        subject.subscribe(&b);
        subject.unsubscribe(&a);

        assert!(!subject.contains(&a));
        assert!(subject.contains(&b));
        assert_eq!(subject.len(), 1);
    }

    #[test]
    fn unsubscribe_unknown_observer_is_noop() {
        let log = Log::default();
        let subject = Subject::<str>::new();
        let a = recorder("a", &log);
        let stranger = recorder("stranger", &log);

        subject.subscribe(&a);
        subject.unsubscribe(&stranger);
        subject.notify("x");

        assert_eq!(entries(&log), vec!["a:x"]);
    }

    // ── ordering ──────────────────────────────────────────────────────────

    #[test]
    fn notify_follows_registration_order() {
        let log = Log::default();
        let subject = Subject::<str>::new();
        let o1 = recorder("o1", &log);
        let o2 = recorder("o2", &log);
        let o3 = recorder("o3", &log);

        subject.subscribe(&o1);
        subject.subscribe(&o2);
        subject.subscribe(&o3);
        subject.notify("v");

        assert_eq!(entries(&log), vec!["o1:v", "o2:v", "o3:v"]);
    }

    // ── duplicates ────────────────────────────────────────────────────────

    #[test]
    fn double_registration_delivers_twice() {
        let log = Log::default();
        let subject = Subject::<str>::new();
        let o = recorder("o", &log);

        subject.subscribe(&o);
        subject.subscribe(&o);
        subject.notify("v");

        assert_eq!(entries(&log), vec!["o:v", "o:v"]);
        assert_eq!(subject.len(), 2);
    }

    #[test]
    fn unsubscribe_removes_adjacent_duplicates() {
        let log = Log::default();
        let subject = Subject::<str>::new();
        let a = recorder("a", &log);
        let b = recorder("b", &log);

        subject.subscribe(&a);
        subject.subscribe(&a);
        subject.subscribe(&a);
        subject.subscribe(&b);
        subject.unsubscribe(&a);
        subject.notify("v");

        assert_eq!(entries(&log), vec!["b:v"]);
    }

    // ── lifetime ──────────────────────────────────────────────────────────

    #[test]
    fn dropped_observer_is_pruned() {
        let log = Log::default();
        let subject = Subject::<str>::new();
        let kept = recorder("kept", &log);
        {
            let gone = recorder("gone", &log);
            subject.subscribe(&gone);
        }
        subject.subscribe(&kept);

        assert_eq!(subject.len(), 1);
        subject.notify("v");
        assert_eq!(entries(&log), vec!["kept:v"]);
    }

    #[test]
    fn subject_does_not_keep_observer_alive() {
        let log = Log::default();
        let subject = Subject::<str>::new();
        let o = recorder("o", &log);
        subject.subscribe(&o);

        assert_eq!(Rc::strong_count(&o), 1);
    }

    // ── changes during notify ─────────────────────────────────────────────

    struct Remover {
        subject: Rc<Subject<str>>,
        victim: Rc<RefCell<Recorder>>,
        log: Log,
    }

    impl Observer<str> for Remover {
        fn update(&mut self, value: &str) {
            self.subject.unsubscribe(&self.victim);
            self.log.borrow_mut().push(format!("remover:{value}"));
        }
    }

    #[test]
    fn unsubscribe_during_notify_applies_to_next_round() {
        let log = Log::default();
        let subject = Rc::new(Subject::<str>::new());
        let victim = recorder("victim", &log);
        let tail = recorder("tail", &log);
        let remover = Rc::new(RefCell::new(Remover {
            subject: subject.clone(),
            victim: victim.clone(),
            log: log.clone(),
        }));

        subject.subscribe(&remover);
        subject.subscribe(&victim);
        subject.subscribe(&tail);

        subject.notify("1");
        assert_eq!(entries(&log), vec!["remover:1", "victim:1", "tail:1"]);

        log.borrow_mut().clear();
        subject.notify("2");
        assert_eq!(entries(&log), vec!["remover:2", "tail:2"]);
    }

    struct Adder {
        subject: Rc<Subject<str>>,
        pending: Option<Rc<RefCell<Recorder>>>,
        log: Log,
    }

    impl Observer<str> for Adder {
        fn update(&mut self, value: &str) {
            if let Some(late) = self.pending.take() {
                self.subject.subscribe(&late);
            }
            self.log.borrow_mut().push(format!("adder:{value}"));
        }
    }

    #[test]
    fn subscribe_during_notify_applies_to_next_round() {
        let log = Log::default();
        let subject = Rc::new(Subject::<str>::new());
        let late = recorder("late", &log);
        let adder = Rc::new(RefCell::new(Adder {
            subject: subject.clone(),
            pending: Some(late.clone()),
            log: log.clone(),
        }));

        subject.subscribe(&adder);
        subject.notify("1");
        assert_eq!(entries(&log), vec!["adder:1"]);
        assert!(subject.contains(&late));

        subject.notify("2");
        assert_eq!(entries(&log), vec!["adder:1", "adder:2", "late:2"]);
    }

    struct Quitter {
        subject: Rc<Subject<str>>,
        me: Weak<RefCell<Quitter>>,
        log: Log,
    }

    impl Observer<str> for Quitter {
        fn update(&mut self, value: &str) {
            if let Some(me) = self.me.upgrade() {
                self.subject.unsubscribe(&me);
            }
            self.log.borrow_mut().push(format!("self:{value}"));
        }
    }

    #[test]
    fn self_unsubscribe_does_not_skip_next_entry() {
        let log = Log::default();
        let subject = Rc::new(Subject::<str>::new());
        let quitter = Rc::new_cyclic(|me| {
            RefCell::new(Quitter {
                subject: subject.clone(),
                me: me.clone(),
                log: log.clone(),
            })
        });
        let b = recorder("b", &log);

        subject.subscribe(&quitter);
        subject.subscribe(&b);

        subject.notify("1");
        assert!(!subject.contains(&quitter));
        subject.notify("2");

        assert_eq!(entries(&log), vec!["self:1", "b:1", "b:2"]);
        assert_eq!(subject.len(), 1);
    }

    // ── trait-object handles ──────────────────────────────────────────────

    #[test]
    fn erased_handle_subscribes_and_unsubscribes() {
        let log = Log::default();
        let subject = Subject::<str>::new();
        let concrete = recorder("dyn", &log);
        let erased: Rc<RefCell<dyn Observer<str>>> = concrete.clone();

        subject.subscribe_dyn(&erased);
        assert!(subject.contains(&erased));
        assert!(subject.contains(&concrete));

        subject.notify("v");
        subject.unsubscribe(&erased);
        subject.notify("w");

        assert_eq!(entries(&log), vec!["dyn:v"]);
        assert!(subject.is_empty());
    }

    // ── payload types ─────────────────────────────────────────────────────

    struct Sum(u64);

    impl Observer<u64> for Sum {
        fn update(&mut self, value: &u64) {
            self.0 += *value;
        }
    }

    #[test]
    fn sized_payloads_work() {
        let subject = Subject::<u64>::default();
        let sum = Rc::new(RefCell::new(Sum(0)));
        subject.subscribe(&sum);

        subject.notify(&3);
        subject.notify(&4);

        assert_eq!(sum.borrow().0, 7);
    }
}
