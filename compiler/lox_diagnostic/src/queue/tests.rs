use super::*;
use crate::ErrorCode;
use pretty_assertions::assert_eq;

fn err(code: ErrorCode, line: u32, msg: &str) -> Diagnostic {
    Diagnostic::error(code).with_message(msg).at_line(line)
}

fn limited(error_limit: usize) -> DiagnosticQueue {
    DiagnosticQueue::with_config(DiagnosticConfig {
        error_limit,
        deduplicate: true,
    })
}

#[test]
fn default_config() {
    let config = DiagnosticConfig::default();
    assert_eq!(config.error_limit, 10);
    assert!(config.deduplicate);
}

#[test]
fn unlimited_config() {
    let config = DiagnosticConfig::unlimited();
    assert_eq!(config.error_limit, 0);
    assert!(!config.deduplicate);
}

// === Limit ===

#[test]
fn error_limit_stops_collection() {
    let mut queue = limited(2);
    assert_eq!(queue.push(err(ErrorCode::E0002, 1, "a")), Ok(()));
    assert_eq!(queue.push(err(ErrorCode::E0002, 2, "b")), Ok(()));
    assert!(queue.limit_reached());
    assert_eq!(queue.push(err(ErrorCode::E0002, 3, "c")), Err(Dropped::OverLimit));
    assert_eq!(queue.push(err(ErrorCode::E0001, 4, "d")), Err(Dropped::OverLimit));

    assert_eq!(
        queue.stats(),
        QueueStats {
            shown: 2,
            over_limit: 2,
            repeated: 0,
        }
    );
    assert_eq!(queue.stats().total(), 4);
}

#[test]
fn zero_limit_is_unlimited() {
    let mut queue = DiagnosticQueue::with_config(DiagnosticConfig::unlimited());
    for line in 1..=50 {
        assert_eq!(queue.push(err(ErrorCode::E0002, line, "x")), Ok(()));
    }
    assert!(!queue.limit_reached());
    assert_eq!(queue.stats().shown, 50);
}

// === Repeats ===

#[test]
fn distinct_errors_on_one_line_are_all_kept() {
    let mut queue = limited(10);
    assert_eq!(queue.push(err(ErrorCode::E0002, 1, "Unexpected character '@'.")), Ok(()));
    assert_eq!(queue.push(err(ErrorCode::E0002, 1, "Unexpected character '#'.")), Ok(()));
    assert_eq!(queue.push(err(ErrorCode::E0001, 1, "Unterminated string.")), Ok(()));
    assert_eq!(queue.stats().shown, 3);
}

#[test]
fn exact_repeat_is_folded_but_counted() {
    let mut queue = limited(10);
    assert_eq!(queue.push(err(ErrorCode::E0002, 1, "Unexpected character '@'.")), Ok(()));
    assert_eq!(
        queue.push(err(ErrorCode::E0002, 1, "Unexpected character '@'.")),
        Err(Dropped::Repeat)
    );
    assert_eq!(queue.push(err(ErrorCode::E0002, 2, "Unexpected character '@'.")), Ok(()));

    let stats = queue.stats();
    assert_eq!(stats.shown, 2);
    assert_eq!(stats.repeated, 1);
    assert_eq!(stats.total(), 3);
}

#[test]
fn repeat_of_an_earlier_error_is_folded() {
    let mut queue = limited(10);
    assert_eq!(queue.push(err(ErrorCode::E0002, 1, "a")), Ok(()));
    assert_eq!(queue.push(err(ErrorCode::E0002, 1, "b")), Ok(()));
    assert_eq!(queue.push(err(ErrorCode::E0002, 1, "a")), Err(Dropped::Repeat));
}

#[test]
fn repeats_do_not_use_up_the_limit() {
    let mut queue = limited(2);
    assert_eq!(queue.push(err(ErrorCode::E0002, 1, "a")), Ok(()));
    assert_eq!(queue.push(err(ErrorCode::E0002, 1, "a")), Err(Dropped::Repeat));
    assert_eq!(queue.push(err(ErrorCode::E0002, 2, "b")), Ok(()));
    assert_eq!(queue.stats().over_limit, 0);
}

#[test]
fn folding_disabled() {
    let mut queue = DiagnosticQueue::with_config(DiagnosticConfig::unlimited());
    assert_eq!(queue.push(err(ErrorCode::E0002, 1, "a")), Ok(()));
    assert_eq!(queue.push(err(ErrorCode::E0002, 1, "a")), Ok(()));
    assert_eq!(queue.stats().shown, 2);
}

// === Draining ===

#[test]
fn into_sorted_orders_stably_by_line() {
    let mut queue = DiagnosticQueue::with_config(DiagnosticConfig::unlimited());
    for diag in [
        err(ErrorCode::E0001, 5, "late"),
        err(ErrorCode::E0002, 2, "first on 2"),
        err(ErrorCode::E0003, 2, "second on 2"),
        Diagnostic::error(ErrorCode::E0004).with_message("no line"),
    ] {
        assert_eq!(queue.push(diag), Ok(()));
    }

    let (sorted, stats) = queue.into_sorted();
    let messages: Vec<String> = sorted.into_iter().map(|d| d.message).collect();
    assert_eq!(messages, vec!["no line", "first on 2", "second on 2", "late"]);
    assert_eq!(stats.shown, 4);
}

#[test]
fn has_errors_tracks_every_push() {
    let mut queue = limited(1);
    assert!(queue.has_errors().is_none());
    assert_eq!(queue.push(err(ErrorCode::E0001, 1, "x")), Ok(()));
    assert!(queue.has_errors().is_some());
    assert_eq!(queue.push(err(ErrorCode::E0001, 2, "y")), Err(Dropped::OverLimit));
    assert_eq!(queue.stats().total(), 2);
}
