use serde::Serialize;
use unicode_width::UnicodeWidthStr;

/// Compute the max display width of `values`, with a minimum of `min`.
pub fn max_width<'a>(values: impl Iterator<Item = &'a str>, min: usize) -> usize {
    values
        .map(UnicodeWidthStr::width)
        .max()
        .unwrap_or(min)
        .max(min)
}

/// Left-align `value` in a column of `width` terminal cells.
///
/// `format!("{:<w$}")` pads by char count, which misaligns wide glyphs.
pub fn pad_right(value: &str, width: usize) -> String {
    let pad = width.saturating_sub(value.width());
    format!("{value}{}", " ".repeat(pad))
}

/// Print a horizontal separator of box-drawing chars.
pub fn separator(width: usize) -> String {
    "\u{2500}".repeat(width)
}

/// Serialize to pretty JSON and print to stdout.
pub fn print_json_stdout(value: &impl Serialize) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
#[path = "report_helpers_test.rs"]
mod tests;
