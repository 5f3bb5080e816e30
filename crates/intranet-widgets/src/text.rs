//! Width-aware text helpers shared by the widgets.

use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

/// Truncate to at most `max` display columns, appending an ellipsis when
/// anything was cut.
pub(crate) fn truncate(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }

    let budget = max.saturating_sub(1);
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_unchanged() {
        assert_eq!(truncate("abc", 10), "abc");
    }

    #[test]
    fn long_text_gets_ellipsis() {
        assert_eq!(truncate("abcdef", 4), "abc…");
    }

    #[test]
    fn accented_text_counts_columns() {
        assert_eq!(truncate("Relatório", 20), "Relatório");
        assert_eq!(truncate("Relatório", 5), "Rela…");
    }

    #[test]
    fn zero_width_is_empty() {
        assert_eq!(truncate("abc", 0), "");
    }
}
