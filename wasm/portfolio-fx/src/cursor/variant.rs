//! Cursor variants and hovered-element classification.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Elements opted into magnetic attraction.
pub const MAGNETIC_SELECTOR: &str = r#"[data-magnetic="true"]"#;

/// Button-role elements.
pub const BUTTON_SELECTOR: &str = r#"button, [role="button"]"#;

/// Links, plus magnetic elements which behave like links.
pub const LINK_SELECTOR: &str = r#"a, [data-magnetic="true"]"#;

/// Block and inline text.
pub const TEXT_SELECTOR: &str = "p, h1, h2, h3, h4, h5, h6, span";

/// Visual treatment of the glyph, derived from the element under the pointer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum CursorVariant {
    #[default]
    Default,
    Text,
    Link,
    Button,
}

impl CursorVariant {
    pub const ALL: [CursorVariant; 4] = [
        CursorVariant::Default,
        CursorVariant::Text,
        CursorVariant::Link,
        CursorVariant::Button,
    ];

    /// Classify an element by first-match priority: button, link, text,
    /// default.
    ///
    /// `closest` answers whether the element or one of its ancestors matches
    /// a selector, the way `Element.closest()` does.
    pub fn classify<F>(closest: F) -> Self
    where
        F: Fn(&str) -> bool,
    {
        if closest(BUTTON_SELECTOR) {
            CursorVariant::Button
        } else if closest(LINK_SELECTOR) {
            CursorVariant::Link
        } else if closest(TEXT_SELECTOR) {
            CursorVariant::Text
        } else {
            CursorVariant::Default
        }
    }

    /// Whether hovering this variant puts the glyph in its hovered look.
    pub fn is_interactive(&self) -> bool {
        matches!(self, CursorVariant::Link | CursorVariant::Button)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CursorVariant::Default => "default",
            CursorVariant::Text => "text",
            CursorVariant::Link => "link",
            CursorVariant::Button => "button",
        }
    }
}

impl std::fmt::Display for CursorVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Stand-in for `Element.closest()` over a fixed set of matched selectors.
    fn matching(selectors: &'static [&'static str]) -> impl Fn(&str) -> bool {
        move |selector| selectors.iter().any(|s| *s == selector)
    }

    #[test]
    fn test_classify_each_selector() {
        assert_eq!(
            CursorVariant::classify(matching(&[BUTTON_SELECTOR])),
            CursorVariant::Button
        );
        assert_eq!(
            CursorVariant::classify(matching(&[LINK_SELECTOR])),
            CursorVariant::Link
        );
        assert_eq!(
            CursorVariant::classify(matching(&[TEXT_SELECTOR])),
            CursorVariant::Text
        );
        assert_eq!(CursorVariant::classify(matching(&[])), CursorVariant::Default);
    }

    #[test]
    fn test_classify_priority() {
        // A magnetic link inside a paragraph is a link, not text.
        assert_eq!(
            CursorVariant::classify(matching(&[LINK_SELECTOR, TEXT_SELECTOR])),
            CursorVariant::Link
        );
        // A button inside a link is a button.
        assert_eq!(
            CursorVariant::classify(matching(&[
                BUTTON_SELECTOR,
                LINK_SELECTOR,
                TEXT_SELECTOR
            ])),
            CursorVariant::Button
        );
    }

    #[test]
    fn test_classify_is_total_and_exclusive() {
        let selectors = [BUTTON_SELECTOR, LINK_SELECTOR, TEXT_SELECTOR];
        // Every subset of matching selectors maps to exactly one variant.
        for mask in 0u8..8 {
            let matched: Vec<&str> = selectors
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, s)| *s)
                .collect();
            let variant = CursorVariant::classify(|s| matched.iter().any(|m| *m == s));
            let expected = match mask {
                m if m & 1 != 0 => CursorVariant::Button,
                m if m & 2 != 0 => CursorVariant::Link,
                m if m & 4 != 0 => CursorVariant::Text,
                _ => CursorVariant::Default,
            };
            assert_eq!(variant, expected, "mask {mask:03b}");
            assert!(CursorVariant::ALL.contains(&variant));
        }
    }

    #[test]
    fn test_magnetic_marker_classifies_as_link() {
        assert!(LINK_SELECTOR.contains(MAGNETIC_SELECTOR));
    }

    #[test]
    fn test_is_interactive() {
        assert!(CursorVariant::Button.is_interactive());
        assert!(CursorVariant::Link.is_interactive());
        assert!(!CursorVariant::Text.is_interactive());
        assert!(!CursorVariant::Default.is_interactive());
    }

    #[test]
    fn test_serialized_names() {
        let json = serde_json::to_string(&CursorVariant::Button).unwrap();
        assert_eq!(json, "\"button\"");
        assert_eq!(CursorVariant::Text.to_string(), "text");
    }
}
