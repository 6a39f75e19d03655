use super::*;

#[test]
fn new_indicator_is_idle() {
    let ind = SaveIndicator::new();
    assert_eq!(*ind.status(), SaveStatus::Idle);
    assert_eq!(ind.label(), "Save Layout");
}

#[test]
fn begin_enters_saving() {
    let mut ind = SaveIndicator::new();
    assert!(ind.begin());
    assert!(ind.is_saving());
    assert_eq!(ind.label(), "Saving...");
}

#[test]
fn begin_refused_while_saving() {
    let mut ind = SaveIndicator::new();
    ind.begin();
    assert!(!ind.begin());
    assert!(ind.is_saving());
}

#[test]
fn success_shows_saved_then_clears_after_interval() {
    let mut ind = SaveIndicator::new();
    ind.begin();
    assert!(ind.succeed(10_000));
    assert_eq!(*ind.status(), SaveStatus::Saved { at_ms: 10_000 });
    assert_eq!(ind.label(), "Saved!");

    assert!(!ind.tick(12_999));
    assert_eq!(ind.label(), "Saved!");
    assert!(ind.tick(13_000));
    assert_eq!(*ind.status(), SaveStatus::Idle);
}

#[test]
fn tick_with_clock_going_backwards_keeps_saved() {
    let mut ind = SaveIndicator::new();
    ind.begin();
    ind.succeed(5_000);
    assert!(!ind.tick(1_000));
    assert_eq!(*ind.status(), SaveStatus::Saved { at_ms: 5_000 });
}

#[test]
fn failure_persists_across_ticks() {
    let mut ind = SaveIndicator::new();
    ind.begin();
    assert!(ind.fail("backend returned 503"));
    assert!(!ind.tick(u64::MAX));
    assert_eq!(*ind.status(), SaveStatus::Failed { message: "backend returned 503".into() });
    assert_eq!(ind.label(), "Save failed");
}

#[test]
fn failure_cleared_by_dismiss_or_retry() {
    let mut ind = SaveIndicator::new();
    ind.begin();
    ind.fail("offline");
    assert!(ind.dismiss());
    assert_eq!(*ind.status(), SaveStatus::Idle);
    assert!(!ind.dismiss());

    ind.begin();
    ind.fail("offline");
    assert!(ind.begin());
    assert!(ind.is_saving());
}

#[test]
fn outcomes_ignored_when_not_saving() {
    let mut ind = SaveIndicator::new();
    assert!(!ind.succeed(1));
    assert!(!ind.fail("late"));
    assert_eq!(*ind.status(), SaveStatus::Idle);
}

#[test]
fn save_again_after_success() {
    let mut ind = SaveIndicator::new();
    ind.begin();
    ind.succeed(0);
    assert!(ind.begin());
    assert!(ind.is_saving());
}
