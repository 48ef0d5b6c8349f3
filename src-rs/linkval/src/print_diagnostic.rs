//! Diagnostic formatting and display

//       warning: placeholder `{{A:X}}` is not defined
//        --> expression:1:8
//         |
//       1 | prefix-{{A:X}}
//         |        ^------
//

use anstream::eprintln;
use linkval_shared::error::{Context, Diagnostic, ErrorLocation};
use owo_colors::{OwoColorize, Style};

use crate::stylesheet;

/// Prints a diagnostic to stderr as a warning
pub fn print(diagnostic: &Diagnostic) {
    eprintln!("{}", diagnostic_to_string(diagnostic));
}

/// Prints a plain status message to stderr as a warning
pub fn print_status(message: &str) {
    eprintln!("{}\n", get_message_line("warning", stylesheet::WARNING_COLOR, message));
}

fn diagnostic_to_string(diagnostic: &Diagnostic) -> String {
    let message_line = get_message_line("warning", stylesheet::WARNING_COLOR, diagnostic.message());

    let mut lines = vec![message_line];
    match diagnostic.location() {
        Some(location) => {
            lines.push(get_location_line(diagnostic.label(), location));
            lines.push(get_source_lines(
                location,
                diagnostic.context(),
                stylesheet::WARNING_COLOR,
            ));
        }
        None => lines.extend(get_context_lines(" ", diagnostic.context())),
    }
    lines.push(String::new());

    lines.join("\n")
}

fn get_message_line(kind: &str, kind_color: Style, message: &str) -> String {
    // <kind>: <message>
    let kind_str = kind_color.style(kind);
    let message_line = format!("{kind_str}: {message}");

    message_line.bold().to_string()
}

fn get_location_line(label: Option<&str>, location: &ErrorLocation) -> String {
    //  --> <label>:<line>:<column>
    let arrow = stylesheet::SOURCE_ANNOTATION.style("-->");
    let label = label.unwrap_or("expression");

    format!(" {arrow} {label}:{}:{}", location.line(), location.column())
}

fn get_source_lines(
    location: &ErrorLocation,
    context: &[Context],
    code_highlight_color: Style,
) -> String {
    //   |
    // 1 | prefix-{{A:X}}
    //   |        ^------
    let line = location.line();
    let column = location.column();
    let length = location.length();
    let line_source = location.line_source();

    // one column per digit of the line number
    let margin_width = line.ilog10() + 1;
    let margin = " ".repeat(margin_width as usize);

    let bar = stylesheet::SOURCE_ANNOTATION.style("|");
    let line_label = stylesheet::SOURCE_ANNOTATION.style(line.to_string());

    let pointer_indent = " ".repeat(column - 1);
    let pointer = code_highlight_color.bold().style("^");
    let pointer_rest = code_highlight_color.bold().style("-".repeat(length - 1));

    let blank_line = format!("{margin} {bar} ");
    let source_line = format!("{line_label} {bar} {line_source}");
    let pointer_line = format!("{margin} {bar} {pointer_indent}{pointer}{pointer_rest}");

    let mut source_lines = vec![blank_line, source_line, pointer_line];
    source_lines.extend(get_context_lines(&margin, context));

    source_lines.join("\n")
}

fn get_context_lines(margin: &str, context: &[Context]) -> Vec<String> {
    context
        .iter()
        .map(|context| {
            let (equals, message) = match context {
                Context::Note(message) => (
                    stylesheet::NOTE_COLOR.bold().style("="),
                    get_message_line("note", stylesheet::NOTE_COLOR, message),
                ),
                Context::Help(message) => (
                    stylesheet::HELP_COLOR.bold().style("="),
                    get_message_line("help", stylesheet::HELP_COLOR, message),
                ),
            };
            format!("{margin} {equals} {message}")
        })
        .collect()
}
