//! Output formatting utilities

use crate::domain::{Entry, QuickAdd};

/// Format a single entry as `<short id>  <timestamp>  <content>`
pub fn format_entry(entry: &Entry, display_format: &str) -> String {
    format!(
        "{:<8}  {}  {}",
        entry.short_id(),
        entry.created.format(display_format),
        entry.content
    )
}

/// Format a list of entries for display, one per line
pub fn format_entry_list(entries: &[Entry], display_format: &str) -> String {
    if entries.is_empty() {
        return "No entries found".to_string();
    }

    entries
        .iter()
        .map(|entry| format_entry(entry, display_format))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format numbered quick-add suggestions
pub fn format_suggestions(suggestions: &[QuickAdd]) -> String {
    if suggestions.is_empty() {
        return "No quick-add suggestions".to_string();
    }

    suggestions
        .iter()
        .enumerate()
        .map(|(idx, s)| format!("{}. {} (x{})", idx + 1, s.content, s.count))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn entry(id: &str, content: &str, day: u32) -> Entry {
        Entry::new(
            id.to_string(),
            content.to_string(),
            NaiveDate::from_ymd_opt(2025, 1, day)
                .unwrap()
                .and_hms_opt(9, 30, 0)
                .unwrap(),
        )
    }

    #[test]
    fn test_format_empty_list() {
        assert_eq!(format_entry_list(&[], "%Y-%m-%d"), "No entries found");
    }

    #[test]
    fn test_format_entry_list() {
        let entries = vec![
            entry("0123456789", "Buy milk", 17),
            entry("1", "Call mum", 16),
        ];

        let output = format_entry_list(&entries, "%Y-%m-%d %H:%M");
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "01234567  2025-01-17 09:30  Buy milk");
        assert_eq!(lines[1], "1         2025-01-16 09:30  Call mum");
    }

    #[test]
    fn test_format_uses_display_format() {
        let output = format_entry(&entry("1", "x", 17), "%d/%m/%Y");
        assert!(output.contains("17/01/2025"));
    }

    #[test]
    fn test_format_empty_suggestions() {
        assert_eq!(format_suggestions(&[]), "No quick-add suggestions");
    }

    #[test]
    fn test_format_suggestions() {
        let suggestions = vec![
            QuickAdd {
                content: "a".to_string(),
                count: 3,
            },
            QuickAdd {
                content: "c".to_string(),
                count: 2,
            },
        ];
        assert_eq!(format_suggestions(&suggestions), "1. a (x3)\n2. c (x2)");
    }
}
