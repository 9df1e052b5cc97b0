//! Staggered letter reveal for the hero name.

/// Delay between consecutive letters, seconds.
pub const LETTER_STAGGER_S: f64 = 0.05;

const NBSP: char = '\u{00A0}';

#[derive(Debug, Clone, PartialEq)]
pub struct Letter {
    pub glyph: char,
    pub delay_s: f64,
}

impl Letter {
    pub fn css(&self) -> String {
        format!(
            "animation-delay:{}s;animation-fill-mode:forwards;",
            format_seconds(self.delay_s)
        )
    }
}

/// One entry per character. Spaces become non-breaking so the inline-block
/// spans keep their width.
pub fn letters(name: &str) -> Vec<Letter> {
    name.chars()
        .enumerate()
        .map(|(index, ch)| Letter {
            glyph: if ch == ' ' { NBSP } else { ch },
            delay_s: index as f64 * LETTER_STAGGER_S,
        })
        .collect()
}

fn format_seconds(seconds: f64) -> String {
    let text = format!("{:.3}", seconds);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text.is_empty() {
        "0".to_string()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_letter_per_char() {
        let letters = letters("Ada L");
        assert_eq!(letters.len(), 5);
        assert_eq!(letters[0].glyph, 'A');
        assert_eq!(letters[3].glyph, '\u{00A0}');
        assert_eq!(letters[4].glyph, 'L');
    }

    #[test]
    fn test_stagger() {
        let letters = letters("abcd");
        for (index, letter) in letters.iter().enumerate() {
            assert!((letter.delay_s - index as f64 * 0.05).abs() < 1e-12);
        }
        assert_eq!(letters[0].css(), "animation-delay:0s;animation-fill-mode:forwards;");
        assert_eq!(letters[3].css(), "animation-delay:0.15s;animation-fill-mode:forwards;");
    }

    #[test]
    fn test_multibyte_names() {
        let letters = letters("Zoë");
        assert_eq!(letters.len(), 3);
        assert_eq!(letters[2].glyph, 'ë');
    }

    #[test]
    fn test_empty_name() {
        assert!(letters("").is_empty());
    }
}
