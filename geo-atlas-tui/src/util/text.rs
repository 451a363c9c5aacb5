use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cuts `text` to at most `max_width` terminal columns, ending with `…` when cut.
pub fn fit_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

/// Input text with a block cursor when the field has focus.
pub fn with_cursor(text: &str, focused: bool) -> String {
    if focused {
        format!("{text}▎")
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_unchanged() {
        assert_eq!(fit_width("Kraków", 10), "Kraków");
        assert_eq!(fit_width("Kraków", 6), "Kraków");
    }

    #[test]
    fn long_text_gets_an_ellipsis() {
        assert_eq!(fit_width("Mariacki Church", 8), "Mariack…");
        assert_eq!(fit_width("abc", 0), "");
    }

    #[test]
    fn wide_characters_count_twice() {
        // Each CJK character takes two columns.
        assert_eq!(fit_width("東京都庁", 5), "東京…");
    }

    #[test]
    fn cursor_only_on_focus() {
        assert_eq!(with_cursor("Wawel", true), "Wawel▎");
        assert_eq!(with_cursor("Wawel", false), "Wawel");
    }
}
