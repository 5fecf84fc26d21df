//! Error rendering using ariadne
//!
//! Parse errors are shown as reports over the offending input line, with
//! the failing span labelled.

use crate::ParseError;
use ariadne::{ColorGenerator, Label, Report, ReportKind, Source};
use std::io::Write;

const SOURCE_ID: &str = "<stdin>";

/// Render an error with formatting to stderr
///
/// # Example
/// ```no_run
/// use rylisp::{interpret, render_error};
///
/// if let Err(e) = interpret("+ (1 2") {
///     render_error(&e);
/// }
/// ```
pub fn render_error(error: &ParseError) {
    render_error_to_writer(error, &mut std::io::stderr(), true).ok();
}

/// Render an error to a specific writer
pub fn render_error_to(error: &ParseError, writer: &mut dyn Write) -> std::io::Result<()> {
    render_error_to_writer(error, writer, true)
}

/// Render an error to a specific writer without color codes
pub fn render_error_to_no_color(
    error: &ParseError,
    writer: &mut dyn Write,
) -> std::io::Result<()> {
    render_error_to_writer(error, writer, false)
}

/// Render an error to a String
pub fn render_error_to_string(error: &ParseError) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(error, &mut buf, true).ok();
    String::from_utf8_lossy(&buf).to_string()
}

/// Render an error to a String without color codes (useful for tests)
pub fn render_error_to_string_no_color(error: &ParseError) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(error, &mut buf, false).ok();
    String::from_utf8_lossy(&buf).to_string()
}

fn render_error_to_writer(
    error: &ParseError,
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    let mut colors = ColorGenerator::new();
    colors.next(); // Skip the first color.

    let message = error.to_string();
    let span = error.span.0.clone();

    let mut report = Report::build(ReportKind::Error, (SOURCE_ID, span.clone()))
        .with_message(&message)
        .with_code(error.code())
        .with_config(ariadne::Config::default().with_color(use_color))
        .with_label(
            Label::new((SOURCE_ID, span))
                .with_message(&message)
                .with_color(colors.next()),
        );

    if let Some(help) = error.help() {
        report = report.with_help(help);
    }

    report
        .finish()
        .write((SOURCE_ID, Source::from(error.src.as_str())), &mut *writer)
}
