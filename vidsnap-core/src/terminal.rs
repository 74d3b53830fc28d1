//! Human-readable progress output.
//!
//! Every line goes through the `log` facade at info level, so the logger
//! decides where it lands (stderr) and silent mode drops it. Stdout is left
//! to the caller for the list of produced paths.

use console::style;
use log::info;
use owo_colors::OwoColorize;
use unicode_width::UnicodeWidthStr;

const STEP_INDENT: &str = "  ";
const DETAIL_INDENT: &str = "    ";
const FIELD_INDENT: &str = "      ";

/// Labels are padded to this display width in status lines.
const LABEL_WIDTH: usize = 15;

/// Honors `NO_COLOR`.
fn color_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

/// `label: value` with the value aligned after a padded label.
fn status_line(label: &str, value: &str) -> String {
    let padding = LABEL_WIDTH.saturating_sub(label.width()).max(1);
    format!("{FIELD_INDENT}{label}:{} {value}", " ".repeat(padding))
}

/// Blank-line separated `===== TITLE =====` header.
pub fn print_section(title: &str) {
    let title = title.to_uppercase();
    info!("");
    if color_enabled() {
        info!("===== {} =====", title.cyan());
    } else {
        info!("===== {title} =====");
    }
    info!("");
}

/// One step of the run, e.g. a single snapshot.
pub fn print_processing(message: &str) {
    if color_enabled() {
        info!("{STEP_INDENT}» {}", style(message).bold());
    } else {
        info!("{STEP_INDENT}» {message}");
    }
}

/// Detail line under a step.
pub fn print_sub_item(message: &str) {
    info!("{DETAIL_INDENT}{message}");
}

pub fn print_success(message: &str) {
    info!("");
    if color_enabled() {
        info!("{STEP_INDENT}✓ {}", message.green());
    } else {
        info!("{STEP_INDENT}✓ {message}");
    }
}

/// Key-value line; `highlight` bolds the value.
pub fn print_status(label: &str, value: &str, highlight: bool) {
    if color_enabled() && highlight {
        info!("{}", status_line(label, &value.bold().to_string()));
    } else {
        info!("{}", status_line(label, value));
    }
}

pub fn print_error(title: &str, message: &str, suggestion: Option<&str>) {
    if color_enabled() {
        info!("✗ {}", title.red().bold());
    } else {
        info!("✗ {title}");
    }
    info!("");
    info!("{STEP_INDENT}Message:  {message}");
    if let Some(suggestion) = suggestion {
        info!("");
        info!("{STEP_INDENT}Suggestion: {suggestion}");
    }
    info!("");
}

pub fn print_warning(message: &str) {
    if color_enabled() {
        info!("{STEP_INDENT}⚠ {}", message.yellow());
    } else {
        info!("{STEP_INDENT}⚠ {message}");
    }
}

/// Echoes an external invocation as `    $ <line>`.
pub fn print_command(command_line: &str) {
    if color_enabled() {
        info!("{DETAIL_INDENT}$ {}", command_line.dimmed());
    } else {
        info!("{DETAIL_INDENT}$ {command_line}");
    }
}
