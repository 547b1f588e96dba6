use super::*;
use crate::routing::RedirectReason;
use std::cell::RefCell;
use std::rc::Rc;

fn recording_executor() -> (RedirectExecutor<impl Fn(&str)>, Rc<RefCell<Vec<String>>>) {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&calls);
    let executor = RedirectExecutor::new(move |path: &str| {
        sink.borrow_mut().push(path.to_owned());
    });
    (executor, calls)
}

fn decision(target: &str) -> RedirectDecision {
    RedirectDecision {
        target: target.to_owned(),
        reason: RedirectReason::AuthRequired,
    }
}

#[test]
fn absent_decision_never_navigates() {
    let (executor, calls) = recording_executor();
    executor.execute(None, "/en/dashboard");
    assert!(calls.borrow().is_empty());
}

#[test]
fn target_equal_to_current_path_never_navigates() {
    let (executor, calls) = recording_executor();
    executor.execute(Some(decision("/en/login")), "/en/login");
    assert!(calls.borrow().is_empty());
}

#[test]
fn differing_target_replaces_once() {
    let (executor, calls) = recording_executor();
    executor.execute(Some(decision("/en/login")), "/en/dashboard");
    assert_eq!(*calls.borrow(), vec!["/en/login".to_owned()]);
}
