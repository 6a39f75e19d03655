use venue_canvas::doc::ElementKind;
use venue_canvas::save::SaveStatus;

use super::*;
use crate::memory::InMemoryGateway;

fn fixed_clock() -> u64 {
    10_000
}

#[tokio::test]
async fn successful_save_marks_editor_saved() {
    let gw = InMemoryGateway::new();
    let mut core = EngineCore::new();
    core.add_element(ElementKind::Booth);

    let receipt = run_save(&gw, &mut core, fixed_clock).await.unwrap();

    assert_eq!(receipt.status, 200);
    assert_eq!(*core.save_status(), SaveStatus::Saved { at_ms: 10_000 });
    assert_eq!(gw.last(), Some(core.doc.clone()));
}

#[tokio::test]
async fn failed_save_marks_editor_failed_and_keeps_model() {
    let gw = InMemoryGateway::failing("backend offline");
    let mut core = EngineCore::new();
    core.add_element(ElementKind::Stage);
    let before = core.doc.clone();

    let err = run_save(&gw, &mut core, fixed_clock).await.unwrap_err();

    assert!(matches!(err, GatewayError::Unavailable(_)));
    assert_eq!(
        *core.save_status(),
        SaveStatus::Failed { message: "backend unavailable: backend offline".into() }
    );
    assert_eq!(core.doc, before);
}

#[tokio::test]
async fn save_refused_while_another_is_in_flight() {
    let gw = InMemoryGateway::new();
    let mut core = EngineCore::new();
    core.request_save();

    let err = run_save(&gw, &mut core, fixed_clock).await.unwrap_err();

    assert!(matches!(err, GatewayError::SaveInFlight));
    assert!(gw.saved().is_empty());
}

#[tokio::test]
async fn saved_indicator_clears_after_interval() {
    let gw = InMemoryGateway::new();
    let mut core = EngineCore::new();
    run_save(&gw, &mut core, fixed_clock).await.unwrap();

    core.tick(12_999);
    assert_eq!(core.save_label(), "Saved!");
    core.tick(13_000);
    assert_eq!(*core.save_status(), SaveStatus::Idle);
}

#[tokio::test]
async fn retry_after_failure_succeeds() {
    let gw = InMemoryGateway::failing("down");
    let mut core = EngineCore::new();
    assert!(run_save(&gw, &mut core, fixed_clock).await.is_err());
    gw.set_failure(None);
    assert!(run_save(&gw, &mut core, fixed_clock).await.is_ok());
    assert_eq!(gw.saved().len(), 1);
}

#[test]
fn system_clock_is_after_2020() {
    assert!(system_clock_ms() > 1_577_836_800_000);
}
