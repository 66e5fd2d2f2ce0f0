use super::*;
use crate::ErrorCode;
use pretty_assertions::assert_eq;

fn render(colors: ColorMode, f: impl FnOnce(&mut TerminalEmitter<Vec<u8>>)) -> String {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), colors, false);
    f(&mut emitter);
    emitter.flush();
    String::from_utf8(emitter.into_inner()).unwrap()
}

fn sample_diagnostic() -> Diagnostic {
    Diagnostic::error(ErrorCode::E0002)
        .with_message("Unexpected character '@'.")
        .at_line(3)
        .with_note("remove the character")
}

#[test]
fn emit_without_color() {
    let text = render(ColorMode::Never, |e| e.emit(&sample_diagnostic()));
    assert_eq!(
        text,
        "[line 3] error[E0002]: Unexpected character '@'.\n  = note: remove the character\n"
    );
}

#[test]
fn emit_matches_display_without_color() {
    let diag = sample_diagnostic();
    let text = render(ColorMode::Never, |e| e.emit(&diag));
    assert_eq!(text.trim_end(), diag.to_string());
}

#[test]
fn emit_with_color() {
    let text = render(ColorMode::Always, |e| e.emit(&sample_diagnostic()));
    assert!(text.contains("\x1b[1;31merror\x1b[0m"));
    assert!(text.contains("E0002"));
    assert!(text.contains("Unexpected character '@'."));
}

#[test]
fn emit_all_keeps_order() {
    let diagnostics = vec![
        Diagnostic::error(ErrorCode::E0002).with_message("first").at_line(1),
        Diagnostic::error(ErrorCode::E0001).with_message("second").at_line(2),
    ];
    let text = render(ColorMode::Never, |e| e.emit_all(&diagnostics));
    let first = text.find("first").unwrap();
    let second = text.find("second").unwrap();
    assert!(first < second);
}

#[test]
fn summary_multiple_errors() {
    let text = render(ColorMode::Never, |e| e.emit_summary(3));
    assert_eq!(text, "error: aborting due to 3 previous errors\n");
}

#[test]
fn summary_single_error() {
    let text = render(ColorMode::Never, |e| e.emit_summary(1));
    assert_eq!(text, "error: aborting due to previous error\n");
}

#[test]
fn summary_with_color() {
    let text = render(ColorMode::Always, |e| e.emit_summary(2));
    assert_eq!(text, "\x1b[1;31merror\x1b[0m: aborting due to 2 previous errors\n");
}

#[test]
fn summary_nothing_to_report() {
    assert_eq!(render(ColorMode::Never, |e| e.emit_summary(0)), "");
}

#[test]
fn emit_without_line_omits_location() {
    let diag = Diagnostic::error(ErrorCode::E0001).with_message("Unterminated string.");
    let text = render(ColorMode::Never, |e| e.emit(&diag));
    assert_eq!(text, "error[E0001]: Unterminated string.\n");
}

// --- ColorMode ---

#[test]
fn color_mode_resolution() {
    assert!(ColorMode::Auto.should_use_colors(true));
    assert!(!ColorMode::Auto.should_use_colors(false));
    assert!(ColorMode::Always.should_use_colors(false));
    assert!(!ColorMode::Never.should_use_colors(true));
}

#[test]
fn color_mode_default_is_auto() {
    assert_eq!(ColorMode::default(), ColorMode::Auto);
}

#[test]
fn color_mode_parse() {
    assert_eq!("auto".parse::<ColorMode>(), Ok(ColorMode::Auto));
    assert_eq!("always".parse::<ColorMode>(), Ok(ColorMode::Always));
    assert_eq!("never".parse::<ColorMode>(), Ok(ColorMode::Never));
    assert_eq!("sometimes".parse::<ColorMode>(), Err(()));
}
