//! Document-wide cursor hiding.

use web_sys::{Document, Element, HtmlElement};

use crate::error::{OptionExt, PortfolioResult, ResultExt};

/// Hides the platform cursor on pointer-capable devices only.
pub const HIDE_NATIVE_CURSOR_CSS: &str = r#"
@media (hover: hover) and (pointer: fine) {
  a, button, [role="button"], select,
  input[type="submit"], input[type="reset"], input[type="button"],
  [data-hover-effect="true"], [data-interactive="true"], .interactive {
    cursor: none !important;
  }
  * {
    cursor: none !important;
  }
}
"#;

/// Marker attribute on the injected node.
const STYLE_MARKER: &str = "data-portfolio-fx";

/// The injected `<style>` node plus the inline `cursor: none` on `<html>` and
/// `<body>`. Dropping removes the node and restores the inline values.
pub struct InjectedStyle {
    node: Element,
    overridden: Vec<(HtmlElement, String)>,
}

impl InjectedStyle {
    pub fn install(document: &Document, css: &str) -> PortfolioResult<Self> {
        let head = document.head().or_missing("document.head")?;
        let node = document
            .create_element("style")
            .context("failed to create style element")?;
        node.set_attribute(STYLE_MARKER, "cursor").context("failed to mark style element")?;
        node.set_text_content(Some(css));
        head.append_child(&node).context("failed to append style element")?;

        let mut overridden = Vec::with_capacity(2);
        let roots = [
            document
                .document_element()
                .and_then(|el| wasm_bindgen::JsCast::dyn_into::<HtmlElement>(el).ok()),
            document.body(),
        ];
        for element in roots.into_iter().flatten() {
            let style = element.style();
            let previous = style.get_property_value("cursor").unwrap_or_default();
            if style.set_property("cursor", "none").is_ok() {
                overridden.push((element, previous));
            }
        }

        log::debug!("[Cursor] Native cursor hidden ({} inline overrides)", overridden.len());
        Ok(Self { node, overridden })
    }
}

impl Drop for InjectedStyle {
    fn drop(&mut self) {
        self.node.remove();
        for (element, previous) in self.overridden.drain(..) {
            let style = element.style();
            let _ = if previous.is_empty() {
                style.remove_property("cursor").map(|_| ())
            } else {
                style.set_property("cursor", &previous)
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_is_scoped_to_fine_pointers() {
        assert!(HIDE_NATIVE_CURSOR_CSS.contains("@media (hover: hover) and (pointer: fine)"));
        assert!(HIDE_NATIVE_CURSOR_CSS.contains("* {"));
        assert_eq!(HIDE_NATIVE_CURSOR_CSS.matches("cursor: none !important").count(), 2);
    }
}
