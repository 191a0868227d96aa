//! Unit tests for pb-notify.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;

use crate::{FnObserver, Observer, Recorder, Subject, SubscriptionId};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Appends `(tag, event)` to a shared log so cross-observer order is visible.
struct Tagged {
    tag: &'static str,
    log: Arc<Mutex<Vec<(&'static str, u32)>>>,
}

impl Observer<u32> for Tagged {
    fn on_event(&self, event: &u32) {
        self.log.lock().push((self.tag, *event));
    }
}

/// Detaches itself on the first event it sees.
struct DetachOnFirst {
    subject: Arc<Subject<u32>>,
    id:      Mutex<Option<SubscriptionId>>,
    hits:    AtomicUsize,
}

impl Observer<u32> for DetachOnFirst {
    fn on_event(&self, _event: &u32) {
        self.hits.fetch_add(1, Ordering::SeqCst);
        if let Some(id) = self.id.lock().take() {
            self.subject.detach(id);
        }
    }
}

/// Attaches a late recorder the first time it is notified.
struct AttachLate {
    subject: Arc<Subject<u32>>,
    late:    Arc<Recorder<u32>>,
    done:    Mutex<bool>,
}

impl Observer<u32> for AttachLate {
    fn on_event(&self, _event: &u32) {
        let mut done = self.done.lock();
        if !*done {
            self.subject.attach(&self.late);
            *done = true;
        }
    }
}

// ── Subject ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod subject_tests {
    use super::*;

    #[test]
    fn delivers_in_attachment_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let subject = Subject::new();
        let a = Arc::new(Tagged { tag: "a", log: Arc::clone(&log) });
        let b = Arc::new(Tagged { tag: "b", log: Arc::clone(&log) });
        subject.attach(&b);
        subject.attach(&a);
        assert_eq!(subject.notify(&7), 2);
        assert_eq!(*log.lock(), vec![("b", 7), ("a", 7)]);
    }

    #[test]
    fn detach_stops_delivery() {
        let subject = Subject::new();
        let rec = Arc::new(Recorder::new());
        let id = subject.attach(&rec);
        subject.notify(&1u32);
        assert!(subject.detach(id));
        assert!(!subject.detach(id));
        subject.notify(&2u32);
        assert_eq!(rec.events(), vec![1]);
    }

    #[test]
    fn dropped_observer_is_pruned() {
        let subject = Subject::new();
        let keep = Arc::new(Recorder::new());
        let gone = Arc::new(Recorder::new());
        subject.attach(&keep);
        subject.attach(&gone);
        assert_eq!(subject.len(), 2);
        drop(gone);
        assert_eq!(subject.len(), 1);
        assert_eq!(subject.notify(&5u32), 1);
        assert_eq!(keep.events(), vec![5]);
    }

    #[test]
    fn subject_does_not_keep_observer_alive() {
        let subject: Subject<u32> = Subject::new();
        let rec = Arc::new(Recorder::new());
        subject.attach(&rec);
        assert_eq!(Arc::strong_count(&rec), 1);
    }

    #[test]
    fn observer_can_detach_itself_during_notify() {
        let subject = Arc::new(Subject::new());
        let observer = Arc::new(DetachOnFirst {
            subject: Arc::clone(&subject),
            id:      Mutex::new(None),
            hits:    AtomicUsize::new(0),
        });
        let id = subject.attach(&observer);
        *observer.id.lock() = Some(id);

        assert_eq!(subject.notify(&1), 1);
        assert_eq!(subject.notify(&2), 0);
        assert_eq!(observer.hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn attach_during_notify_applies_next_time() {
        let subject = Arc::new(Subject::new());
        let late = Arc::new(Recorder::new());
        let spawner = Arc::new(AttachLate {
            subject: Arc::clone(&subject),
            late:    Arc::clone(&late),
            done:    Mutex::new(false),
        });
        subject.attach(&spawner);

        assert_eq!(subject.notify(&1), 1);
        assert!(late.is_empty());
        assert_eq!(subject.notify(&2), 2);
        assert_eq!(late.events(), vec![2]);
    }

    #[test]
    fn notify_from_many_threads() {
        let subject = Subject::new();
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);
        let obs = Arc::new(FnObserver::new(move |_: &u32| {
            counter.fetch_add(1, Ordering::SeqCst);
        }));
        subject.attach(&obs);
        std::thread::scope(|s| {
            for t in 0..8u32 {
                let subject = &subject;
                s.spawn(move || {
                    for i in 0..100 {
                        subject.notify(&(t * 100 + i));
                    }
                });
            }
        });
        assert_eq!(count.load(Ordering::SeqCst), 800);
    }

    #[test]
    fn empty_subject_delivers_nothing() {
        let subject: Subject<String> = Subject::default();
        assert!(subject.is_empty());
        assert_eq!(subject.notify(&"x".to_owned()), 0);
    }
}

// ── Observers ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use super::*;

    #[test]
    fn recorder_drain_empties() {
        let rec = Recorder::new();
        rec.on_event(&"a");
        rec.on_event(&"b");
        assert_eq!(rec.len(), 2);
        assert_eq!(rec.drain(), vec!["a", "b"]);
        assert!(rec.is_empty());
    }

    #[test]
    fn fn_observer_calls_closure() {
        let seen = Arc::new(Mutex::new(None));
        let sink = Arc::clone(&seen);
        let obs = FnObserver::new(move |e: &i32| *sink.lock() = Some(*e));
        obs.on_event(&-3);
        assert_eq!(*seen.lock(), Some(-3));
    }
}
