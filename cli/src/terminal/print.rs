//! Report output. Every line goes through `tracing` under [`PRINT_TARGET`],
//! which the formatter in [`crate::terminal::logging`] writes verbatim.

use colored::*;
use tracing::info;

use crate::terminal::colors;
use crate::terminal::format::Detail;

pub const TOTAL_WIDTH: usize = 64;
pub const PRINT_TARGET: &str = "iprange::print";

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, raw_msg = msg);
}

/// `────⟦ TITLE ⟧────`, hidden once any `-q` is given.
pub fn header(title: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }
    let label: String = format!("⟦ {} ⟧", title.to_uppercase());
    let fill: usize = TOTAL_WIDTH.saturating_sub(label.chars().count());
    let (left, right) = (fill / 2, fill - fill / 2);

    print(&format!(
        "{}{}{}",
        "─".repeat(left).color(colors::SEPARATOR),
        label.color(colors::PRIMARY),
        "─".repeat(right).color(colors::SEPARATOR)
    ));
}

/// Closing line of a report: a heavy rule, then the message as a status line.
pub fn summary<T: AsRef<str>>(msg: T) {
    print(&"═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR).to_string());
    status(msg);
}

pub fn status<T: AsRef<str>>(msg: T) {
    print(&format!(
        "{} {}",
        ">".color(colors::SEPARATOR),
        msg.as_ref().color(colors::TEXT_DEFAULT)
    ));
}

/// `> Key.....: value`
pub fn field(key: &str, value: ColoredString, key_width: usize) {
    status(format!("{} {}", dotted_key(key, key_width, colors::PRIMARY), value));
}

/// One numbered entry, `[idx] title`, with its details as branches below it.
pub fn range_tree(idx: usize, title: &str, details: &[Detail]) {
    print(&format!(
        "{}{}{} {}",
        "[".color(colors::SEPARATOR),
        idx.to_string().color(colors::ACCENT),
        "]".color(colors::SEPARATOR),
        title.color(colors::PRIMARY)
    ));

    let key_width: usize = details.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
    for (i, (key, value)) in details.iter().enumerate() {
        let branch: &str = if i + 1 < details.len() { "├─" } else { "└─" };
        print(&format!(
            " {} {} {}",
            branch.color(colors::SEPARATOR),
            dotted_key(key, key_width, colors::TEXT_DEFAULT),
            value
        ));
    }
}

pub fn no_results() {
    print(&"No ranges given.".red().bold().to_string());
}

/// Pads `key` with dots to `width` and closes it with a colon.
fn dotted_key(key: &str, width: usize, key_color: Color) -> String {
    let dots: String = ".".repeat((width + 1).saturating_sub(key.len()));
    format!(
        "{}{}",
        key.color(key_color),
        format!("{dots}:").color(colors::SEPARATOR)
    )
}
