use chrono::NaiveDate;

use crate::feed::filter::DATE_FORMAT;

/// Format a stored ISO `YYYY-MM-DD` date for display. Falls back to the raw
/// string when it does not parse; display formatting never fails a render.
pub fn format_date(raw: &str, fmt: &str) -> String {
    match NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        Ok(date) => date.format(fmt).to_string(),
        Err(_) => raw.to_string(),
    }
}

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

pub fn truncate_words(text: &str, max_words: usize) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() <= max_words {
        text.to_string()
    } else {
        let mut result = words[..max_words].join(" ");
        result.push_str("…");
        result
    }
}
