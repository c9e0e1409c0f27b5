//! End-to-end scenarios for the observer registry.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use eventvisor::{
    NotifyError, NotifyMode, Observer, ObserverError, ObserverFn, ObserverRef, Registry, kind_of,
};

#[derive(Debug)]
struct MockSubject {
    id: u32,
}

#[derive(Default)]
struct Seen {
    notified: usize,
    event: Option<String>,
    context: Option<String>,
    subject_id: Option<u32>,
}

/// Records the last notification it received and always reports "handled".
#[derive(Default)]
struct MockObserver {
    seen: Mutex<Seen>,
}

impl MockObserver {
    fn notified(&self) -> usize {
        self.seen.lock().unwrap().notified
    }
}

impl Observer<MockSubject, str> for MockObserver {
    fn update(
        &self,
        subject: &MockSubject,
        event: &str,
        context: Option<&str>,
    ) -> Result<bool, ObserverError> {
        let mut seen = self.seen.lock().unwrap();
        seen.notified += 1;
        seen.event = Some(event.to_string());
        seen.context = context.map(str::to_string);
        seen.subject_id = Some(subject.id);
        Ok(true)
    }
}

/// A second observer type, used to check kind-based grouping.
struct Bystander;

impl Observer<MockSubject, str> for Bystander {
    fn update(&self, _: &MockSubject, _: &str, _: Option<&str>) -> Result<bool, ObserverError> {
        Ok(false)
    }
}

fn mock() -> (Arc<MockObserver>, ObserverRef<MockSubject, str>) {
    let m = Arc::new(MockObserver::default());
    let o: ObserverRef<MockSubject, str> = m.clone();
    (m, o)
}

fn ptrs(list: &[ObserverRef<MockSubject, str>]) -> Vec<*const ()> {
    list.iter().map(|o| Arc::as_ptr(o) as *const ()).collect()
}

fn registry() -> Registry<MockSubject, str> {
    Registry::new(Arc::new(MockSubject { id: 1 }), Vec::new())
}

#[test]
fn attach_is_idempotent() {
    let subject = Arc::new(MockSubject { id: 7 });
    let (_, o) = mock();
    let mut reg = Registry::new(Arc::clone(&subject), vec![o.clone()]);

    assert_eq!(ptrs(&reg.attached()), ptrs(&[o.clone()]));
    assert_eq!(reg.subject().id, 7);

    reg.attach(o.clone(), 0);
    reg.attach(o.clone(), 50);
    assert_eq!(ptrs(&reg.attached()), ptrs(&[o]));
}

#[test]
fn attached_by_kind() {
    let mut reg = registry();
    let (_, o) = mock();
    reg.attach(o.clone(), 0);

    assert_eq!(ptrs(&reg.attached()), ptrs(&[o.clone()]));
    assert_eq!(ptrs(&reg.attached_of(kind_of::<MockObserver>())), ptrs(&[o]));
    assert!(reg.attached_of(kind_of::<Bystander>()).is_empty());
}

#[test]
fn detach_returns_removed_observer() {
    let mut reg = registry();
    let (_, o) = mock();

    assert!(reg.detach(&o).is_none());

    reg.attach(o.clone(), 0);
    let removed = reg.detach(&o).unwrap();
    assert!(Arc::ptr_eq(&removed, &o));
    assert!(reg.attached().is_empty());

    let other: ObserverRef<MockSubject, str> = Arc::new(Bystander);
    reg.attach(other.clone(), 0);
    reg.attach(o.clone(), 0);
    reg.detach(&other);
    assert_eq!(ptrs(&reg.attached()), ptrs(&[o]));
}

#[test]
fn detach_all_by_template() {
    let mut reg = registry();
    let (_, o) = mock();
    assert!(reg.detach_all(&o).is_empty());

    reg.attach(o.clone(), 0);
    assert_eq!(ptrs(&reg.detach_all(&o)), ptrs(&[o]));
    assert!(reg.attached().is_empty());
}

#[test]
fn detach_all_leaves_other_kinds() {
    let mut reg = registry();
    let (_, a) = mock();
    let (_, b) = mock();
    let x: ObserverRef<MockSubject, str> = Arc::new(Bystander);
    let (_, template) = mock();

    reg.attach(a.clone(), -1);
    reg.attach(x.clone(), 3);
    reg.attach(b.clone(), 2);

    assert_eq!(ptrs(&reg.detach_all(&template)), ptrs(&[b, a]));
    assert_eq!(ptrs(&reg.attached()), ptrs(&[x]));
}

#[test]
fn has_observer_by_instance_and_kind() {
    let mut reg = registry();
    let (_, o) = mock();
    assert!(!reg.has_observer(&o));
    assert!(!reg.has_observer(kind_of::<MockObserver>()));

    reg.attach(o.clone(), 0);
    assert!(reg.has_observer(&o));
    assert!(reg.has_observer(kind_of::<MockObserver>()));
}

#[test]
fn notify_in_priority_order() {
    let priorities = [10, 0, 999, 0, -10];
    let mocks: Vec<_> = (0..5).map(|_| mock()).collect();
    let subject = Arc::new(MockSubject { id: 42 });
    let mut reg = Registry::new(Arc::clone(&subject), Vec::new());
    for ((_, o), p) in mocks.iter().zip(priorities) {
        reg.attach(o.clone(), p);
    }

    let expected = [2usize, 0, 1, 3, 4].map(|i| mocks[i].1.clone());
    assert_eq!(reg.len(), 5);
    assert_eq!(ptrs(&reg.attached()), ptrs(&expected));

    assert_eq!(reg.notify("test", Some("context")).unwrap(), vec![true; 5]);
    for (m, _) in &mocks {
        let seen = m.seen.lock().unwrap();
        assert_eq!(seen.event.as_deref(), Some("test"));
        assert_eq!(seen.context.as_deref(), Some("context"));
        assert_eq!(seen.notified, 1);
        assert_eq!(seen.subject_id, Some(42));
    }

    // Context does not carry over from the previous pass.
    assert_eq!(reg.notify("test", None).unwrap(), vec![true; 5]);
    for (m, _) in &mocks {
        let seen = m.seen.lock().unwrap();
        assert_eq!(seen.context, None);
        assert_eq!(seen.notified, 2);
    }
}

#[test]
fn notify_until_stops_at_first_taker() {
    let mut reg = registry();
    let mocks: Vec<_> = (0..4).map(|_| mock()).collect();
    for (_, o) in &mocks {
        reg.attach(o.clone(), 0);
    }

    assert_eq!(reg.notify_until("test", None).unwrap(), vec![true]);
    assert_eq!(mocks[0].0.notified(), 1);
    assert!(mocks[1..].iter().all(|(m, _)| m.notified() == 0));
}

#[test]
fn notify_until_with_no_observers_is_empty() {
    let reg = registry();
    assert!(reg.notify_until("test", None).unwrap().is_empty());
    assert!(reg.notify_with("test", None, NotifyMode::Broadcast).unwrap().is_empty());
}

#[test]
fn failing_observer_aborts_pass() {
    let mut reg = registry();
    let before = Arc::new(AtomicUsize::new(0));
    let after = Arc::new(AtomicUsize::new(0));

    let b = Arc::clone(&before);
    reg.attach(
        ObserverFn::arc("before", move |_: &MockSubject, _: &str, _| {
            b.fetch_add(1, Ordering::SeqCst);
            Ok(false)
        }),
        10,
    );
    reg.attach(
        ObserverFn::arc("broken", |_: &MockSubject, _: &str, _| {
            Err(ObserverError::fail("socket closed"))
        }),
        5,
    );
    let a = Arc::clone(&after);
    reg.attach(
        ObserverFn::arc("after", move |_: &MockSubject, _: &str, _| {
            a.fetch_add(1, Ordering::SeqCst);
            Ok(true)
        }),
        0,
    );

    let err = reg.notify("request.sent", None).unwrap_err();
    assert_eq!(err.as_label(), "notify_aborted");
    assert!(matches!(
        &err,
        NotifyError::Aborted { observer, position: 1, .. } if observer == "broken"
    ));
    assert_eq!(before.load(Ordering::SeqCst), 1);
    assert_eq!(after.load(Ordering::SeqCst), 0);
}

#[test]
fn attach_then_detach_round_trips() {
    let mut reg = registry();
    let (_, a) = mock();
    let (_, b) = mock();
    reg.attach(a, 3);
    reg.attach(b, 3);
    let before = ptrs(&reg.attached());

    let (_, c) = mock();
    reg.attach(c.clone(), 3);
    reg.detach(&c);
    assert_eq!(ptrs(&reg.attached()), before);
}
