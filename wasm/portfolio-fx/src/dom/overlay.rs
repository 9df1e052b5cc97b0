//! The on-screen glyph.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::cursor::glyph::{GlyphStyle, Ring};
use crate::cursor::XY;
use crate::error::{OptionExt, PortfolioResult, ResultExt};

const KEYFRAMES: &str = "\
@keyframes portfolio-fx-pulse { \
  0%, 100% { filter: brightness(1); } \
  50% { filter: brightness(1.3); } }\n\
@keyframes portfolio-fx-ping { \
  0% { transform: scale(1); opacity: 0.2; } \
  75%, 100% { transform: scale(2); opacity: 0; } }";

const ROOT_CSS: &str = "position:fixed;pointer-events:none;z-index:9999;\
    mix-blend-mode:difference;border-radius:50%;background:#fff;display:none;";

const HALO_CSS: &str = "position:absolute;inset:-4px;border-radius:50%;pointer-events:none;\
    background:radial-gradient(circle, rgba(255,255,255,0.5) 0%, rgba(255,255,255,0) 70%);\
    animation:portfolio-fx-pulse 1.5s ease-in-out infinite;display:none;";

const OUTLINE_CSS: &str = "position:absolute;inset:-6px;border-radius:50%;pointer-events:none;\
    border:1px solid rgba(255,255,255,0.4);display:none;";

const PING_CSS: &str = "position:absolute;inset:0;border-radius:50%;pointer-events:none;\
    background:rgba(255,255,255,0.2);\
    animation:portfolio-fx-ping 1s cubic-bezier(0, 0, 0.2, 1) infinite;display:none;";

/// Glyph element with its three decorations, appended to `<body>`.
pub struct Overlay {
    keyframes: Element,
    root: HtmlElement,
    halo: HtmlElement,
    outline: HtmlElement,
    ping: HtmlElement,
}

impl Overlay {
    pub fn mount(document: &Document) -> PortfolioResult<Self> {
        let body = document.body().or_missing("document.body")?;

        let keyframes = document
            .create_element("style")
            .context("failed to create overlay keyframes")?;
        keyframes.set_text_content(Some(KEYFRAMES));

        let root = create_div(document, ROOT_CSS)?;
        root.set_class_name("cursor-glyph cursor-glyph--default");
        let halo = create_div(document, HALO_CSS)?;
        let outline = create_div(document, OUTLINE_CSS)?;
        let ping = create_div(document, PING_CSS)?;
        for child in [&halo, &outline, &ping] {
            root.append_child(child).context("failed to assemble overlay")?;
        }

        body.append_child(&keyframes).context("failed to append overlay keyframes")?;
        if let Err(e) = body.append_child(&root) {
            keyframes.remove();
            return Err(e).context("failed to append overlay");
        }

        Ok(Self {
            keyframes,
            root,
            halo,
            outline,
            ping,
        })
    }

    pub fn paint(&self, frame: Option<(&GlyphStyle, XY)>) {
        let Some((style, position)) = frame else {
            let _ = self.root.style().set_property("display", "none");
            return;
        };

        self.root.set_class_name(&style.class_name());
        self.root
            .style()
            .set_css_text(&format!("{}{}", ROOT_CSS, style.css(position)));
        paint_ring(&self.halo, HALO_CSS, style.halo);
        paint_ring(&self.outline, OUTLINE_CSS, style.outline);
        match style.ping_opacity {
            Some(opacity) => self
                .ping
                .style()
                .set_css_text(&format!("{}display:block;opacity:{};", PING_CSS, opacity)),
            None => self.ping.style().set_css_text(PING_CSS),
        }
    }

    pub fn remove(&self) {
        self.root.remove();
        self.keyframes.remove();
    }
}

fn create_div(document: &Document, css: &str) -> PortfolioResult<HtmlElement> {
    let element: HtmlElement = document
        .create_element("div")
        .context("failed to create overlay element")?
        .dyn_into()
        .map_err(|_| crate::error::PortfolioError::DomError("div is not an HtmlElement".into()))?;
    element.style().set_css_text(css);
    Ok(element)
}

fn paint_ring(element: &HtmlElement, base: &str, ring: Option<Ring>) {
    match ring {
        Some(ring) => element.style().set_css_text(&format!("{}{}", base, ring.css())),
        None => element.style().set_css_text(base),
    }
}

/// Shared overlay slot: the host paints through it, the guard empties it.
pub type OverlaySlot = Rc<RefCell<Option<Overlay>>>;

/// Removes the overlay from the document when dropped.
pub struct OverlayGuard {
    slot: OverlaySlot,
}

impl OverlayGuard {
    pub fn new(slot: OverlaySlot) -> Self {
        Self { slot }
    }
}

impl Drop for OverlayGuard {
    fn drop(&mut self) {
        if let Some(overlay) = self.slot.borrow_mut().take() {
            overlay.remove();
        }
    }
}
