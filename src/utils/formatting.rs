//! Formatting utilities used by the browse and list views.

use crate::models::Entry;
use crate::utils::colors::colorize_optional;
use crate::utils::date::format_long_date;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Column at which notes are wrapped in the browse view.
pub const WRAP_WIDTH: usize = 72;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn mins2readable(mins: i64, short: bool) -> String {
    let abs_m = mins.abs();
    let hours = abs_m / 60;
    let minutes = abs_m % 60;

    if short {
        // es: 02:25
        format!("{:02}:{:02}", hours, minutes)
    } else {
        // es: 02h 25m
        format!("{:02}h {:02}m", hours, minutes)
    }
}

/// Horizontal rule as wide (in terminal cells) as `title`.
pub fn rule_for(title: &str, separator: &str) -> String {
    let width = UnicodeWidthStr::width(title).max(1);
    let unit = if UnicodeWidthStr::width(separator) == 0 {
        "="
    } else {
        separator
    };

    let mut rule = String::new();
    let mut used = 0;
    for ch in unit.chars().cycle() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > width {
            break;
        }
        rule.push(ch);
        used += w;
        if used == width {
            break;
        }
    }
    rule
}

/// Render one entry of a result set, "Result i of N" style.
pub fn render_entry(entry: &Entry, position: usize, total: usize, separator: &str) -> String {
    let title = format_long_date(&entry.task_date);
    let rule = rule_for(&title, separator);

    let notes_label = "Notes: ";
    let notes = if entry.notes.trim().is_empty() {
        format!("{}{}", notes_label, colorize_optional("--"))
    } else {
        let indent = " ".repeat(notes_label.len());
        let opts = textwrap::Options::new(WRAP_WIDTH)
            .initial_indent(notes_label)
            .subsequent_indent(&indent);
        textwrap::fill(&entry.notes, opts)
    };

    let mut out = String::new();
    out.push_str(&bold(&title));
    out.push('\n');
    out.push_str(&rule);
    out.push('\n');
    out.push_str(&format!("Result {} of {}\n", position, total));
    out.push_str(&format!("Employee: {}\n", entry.employee_name));
    out.push_str(&format!("Task: {}\n", entry.task_name));
    out.push_str(&format!(
        "Task Time (Minutes): {} ({})\n",
        entry.task_time,
        mins2readable(entry.task_time, false)
    ));
    out.push_str(&format!("Date: {}\n", entry.date_str()));
    out.push_str(&notes);
    out.push('\n');
    out.push_str(&rule);
    out.push('\n');
    out
}

/// One line of a numbered pick list, e.g. " 3. Timmy".
pub fn numbered(index: usize, total: usize, label: &str) -> String {
    let width = total.to_string().len();
    format!("{:>width$}. {}", index, label, width = width)
}
