use super::*;

#[test]
fn record_appends_in_order() {
    let mut diag = DiagState::default();
    diag.record(ReadOp::Videos, "offline");
    diag.record(ReadOp::Markers, "status 500");

    assert_eq!(diag.read_failures.len(), 2);
    assert_eq!(diag.read_failures[0].op, ReadOp::Videos);
    assert_eq!(diag.last().map(|f| f.op), Some(ReadOp::Markers));
    assert_eq!(diag.last().map(|f| f.detail.as_str()), Some("status 500"));
}

#[test]
fn history_is_bounded_dropping_the_oldest() {
    let mut diag = DiagState::default();
    for i in 0..40 {
        diag.record(ReadOp::Videos, format!("failure {i}"));
    }

    assert_eq!(diag.read_failures.len(), 32);
    assert_eq!(diag.read_failures[0].detail, "failure 8");
    assert_eq!(diag.last().map(|f| f.detail.as_str()), Some("failure 39"));
}
