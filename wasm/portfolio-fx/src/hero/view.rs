//! Hero section DOM.
//!
//! Builds the section into a container, wires the image and link listeners,
//! and removes everything again on unmount.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Node, Window};

use super::blur::ImageBlur;
use super::config::{HeroConfig, SocialLink, StatusBadge};
use super::reveal::letters;
use crate::dom::{EventListener, ListenOptions};
use crate::error::{OptionExt, PortfolioError, PortfolioResult, ResultExt};

/// A mounted hero section.
pub struct HeroView {
    inner: Option<Rc<HeroInner>>,
}

struct HeroInner {
    document: Document,
    section: Element,
    image: HtmlElement,
    image_inner: HtmlElement,
    glow: HtmlElement,
    blur: Cell<ImageBlur>,
    listeners: RefCell<Vec<EventListener>>,
    /// Document capture listener, present only while click blur is on.
    outside: RefCell<Option<EventListener>>,
}

impl HeroView {
    pub fn mount(
        window: &Window,
        container_id: &str,
        config: &HeroConfig,
    ) -> PortfolioResult<Self> {
        let document = window.document().or_missing("document")?;
        let container = document
            .get_element_by_id(container_id)
            .ok_or_else(|| PortfolioError::ElementNotFound {
                id: container_id.to_string(),
            })?;

        let parts = build(&document, config)?;
        container
            .append_child(&parts.section)
            .context("failed to append hero section")?;

        let inner = Rc::new(HeroInner {
            document,
            section: parts.section,
            image: parts.image,
            image_inner: parts.image_inner,
            glow: parts.glow,
            blur: Cell::new(ImageBlur::default()),
            listeners: RefCell::new(Vec::new()),
            outside: RefCell::new(None),
        });

        if let Err(e) = inner.wire(window, &parts.link_buttons) {
            log::warn!("[Hero] Mount failed: {}", e);
            inner.teardown();
            return Err(e);
        }
        inner.render();

        log::info!(
            "[Hero] Mounted into #{} with {} links",
            container_id,
            parts.link_buttons.len()
        );
        Ok(Self { inner: Some(inner) })
    }

    /// Remove listeners and the section. Safe to call more than once.
    pub fn unmount(&mut self) {
        if let Some(inner) = self.inner.take() {
            inner.teardown();
            log::info!("[Hero] Unmounted");
        }
    }
}

impl Drop for HeroView {
    fn drop(&mut self) {
        self.unmount();
    }
}

impl HeroInner {
    fn wire(
        self: &Rc<Self>,
        window: &Window,
        link_buttons: &[(Element, String)],
    ) -> PortfolioResult<()> {
        let mut listeners = Vec::with_capacity(3 + link_buttons.len());

        let weak = Rc::downgrade(self);
        listeners.push(EventListener::new(
            &self.image,
            "mouseenter",
            ListenOptions::passive(),
            move |_| update(&weak, ImageBlur::enter),
        )?);

        let weak = Rc::downgrade(self);
        listeners.push(EventListener::new(
            &self.image,
            "mouseleave",
            ListenOptions::passive(),
            move |_| update(&weak, ImageBlur::leave),
        )?);

        let weak = Rc::downgrade(self);
        listeners.push(EventListener::new(
            &self.image,
            "click",
            ListenOptions::default(),
            move |event| {
                event.stop_propagation();
                update(&weak, ImageBlur::click_image);
            },
        )?);

        for (button, href) in link_buttons {
            let window = window.clone();
            let href = href.clone();
            listeners.push(EventListener::new(
                button,
                "click",
                ListenOptions::default(),
                move |_| {
                    let opened = window.open_with_url_and_target_and_features(
                        &href,
                        "_blank",
                        "noopener,noreferrer",
                    );
                    if let Err(e) = opened {
                        log::warn!("[Hero] Failed to open {}: {:?}", href, e);
                    }
                },
            )?);
        }

        *self.listeners.borrow_mut() = listeners;
        Ok(())
    }

    /// Attach or drop the outside-click listener to match the blur state.
    fn sync_outside_listener(self: &Rc<Self>) {
        let wanted = self.blur.get().needs_outside_listener();
        let attached = self.outside.borrow().is_some();
        if wanted == attached {
            return;
        }
        if !wanted {
            // May run inside the listener's own callback; the closure stays
            // alive until that call returns.
            let listener = self.outside.borrow_mut().take();
            drop(listener);
            return;
        }

        let weak = Rc::downgrade(self);
        let image: Node = self.image.clone().into();
        let listener = EventListener::new(
            &self.document,
            "click",
            ListenOptions::capture(),
            move |event| {
                let Some(inner) = weak.upgrade() else {
                    return;
                };
                let inside = event
                    .target()
                    .and_then(|target| target.dyn_into::<Node>().ok())
                    .is_some_and(|node| image.contains(Some(&node)));
                let mut blur = inner.blur.get();
                if blur.click_document(inside) {
                    inner.blur.set(blur);
                    inner.render();
                    inner.sync_outside_listener();
                }
            },
        );
        match listener {
            Ok(listener) => *self.outside.borrow_mut() = Some(listener),
            Err(e) => log::warn!("[Hero] Failed to attach outside-click listener: {}", e),
        }
    }

    fn render(&self) {
        let blur = self.blur.get();
        self.image_inner
            .style()
            .set_css_text(&format!("{}{}", IMAGE_INNER_CSS, blur.display().css()));
        self.glow
            .style()
            .set_css_text(&format!("{}{}", GLOW_CSS, blur.glow().css()));
    }

    fn teardown(&self) {
        self.outside.borrow_mut().take();
        self.listeners.borrow_mut().clear();
        self.section.remove();
    }
}

fn update(inner: &Weak<HeroInner>, transition: fn(&mut ImageBlur)) {
    let Some(inner) = inner.upgrade() else {
        return;
    };
    let mut blur = inner.blur.get();
    transition(&mut blur);
    inner.blur.set(blur);
    inner.render();
    inner.sync_outside_listener();
}

const IMAGE_INNER_CSS: &str = "width:100%;height:100%;pointer-events:none;\
    will-change:transform, filter;backface-visibility:hidden;\
    transition:transform 0.3s ease, filter 0.2s ease-in-out;";

const GLOW_CSS: &str = "position:absolute;inset:-2px;border-radius:9999px;\
    will-change:transform, opacity;transition:transform 0.3s ease, opacity 0.3s ease;";

struct HeroParts {
    section: Element,
    image: HtmlElement,
    image_inner: HtmlElement,
    glow: HtmlElement,
    link_buttons: Vec<(Element, String)>,
}

fn element(document: &Document, tag: &str, class: &str) -> PortfolioResult<Element> {
    let element = document
        .create_element(tag)
        .with_context(|| format!("failed to create <{}>", tag))?;
    element.set_class_name(class);
    Ok(element)
}

fn html_element(document: &Document, tag: &str, class: &str) -> PortfolioResult<HtmlElement> {
    element(document, tag, class)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| PortfolioError::DomError(format!("<{}> is not an HTMLElement", tag)))
}

/// Append any node type the builder produces.
fn append(parent: &Element, child: &impl AsRef<Node>) -> PortfolioResult<()> {
    parent
        .append_child(child.as_ref())
        .map(|_| ())
        .context("failed to build hero section")
}

fn text(document: &Document, tag: &str, class: &str, content: &str) -> PortfolioResult<Element> {
    let element = element(document, tag, class)?;
    element.set_text_content(Some(content));
    Ok(element)
}

fn build(document: &Document, config: &HeroConfig) -> PortfolioResult<HeroParts> {
    let section = element(document, "section", "hero-section")?;
    let content = element(document, "div", "hero-content")?;
    append(&section, &content)?;

    append(&content, &build_status(document, &config.status)?)?;

    let portrait = element(document, "div", "hero-portrait")?;
    let glow = html_element(document, "div", "hero-glow")?;
    let image = html_element(document, "div", "hero-image")?;
    let image_inner = html_element(document, "div", "hero-image-inner")?;
    let img = element(document, "img", "hero-image-img")?;
    img.set_attribute("src", &config.profile_image)
        .context("failed to set profile image")?;
    img.set_attribute("alt", "Profile memoji")
        .context("failed to set profile image")?;
    img.set_attribute("draggable", "false")
        .context("failed to set profile image")?;
    append(&image_inner, &img)?;
    append(&image, &image_inner)?;
    append(&portrait, &glow)?;
    append(&portrait, &image)?;
    append(&content, &portrait)?;

    let copy = element(document, "div", "hero-copy")?;
    let heading = element(document, "h1", "hero-name")?;
    for letter in letters(&config.name) {
        let span = text(document, "span", "hero-letter", &letter.glyph.to_string())?;
        span.set_attribute("style", &letter.css())
            .context("failed to style hero letter")?;
        append(&heading, &span)?;
    }
    let tagline = element(document, "p", "hero-tagline")?;
    append(&tagline, &document.create_text_node(&config.title))?;
    append(&tagline, &element(document, "br", "")?)?;
    append(&tagline, &document.create_text_node(&config.subtitle))?;
    append(&copy, &heading)?;
    append(&copy, &tagline)?;
    append(&content, &copy)?;

    let links = element(document, "div", "hero-links")?;
    let mut link_buttons = Vec::new();
    for link in config.links() {
        let (wrapper, button) = build_link(document, &link)?;
        append(&links, &wrapper)?;
        link_buttons.push((button, link.href));
    }
    append(&content, &links)?;

    let indicator = element(document, "div", "hero-scroll-indicator")?;
    indicator
        .set_attribute("aria-hidden", "true")
        .context("failed to build scroll indicator")?;
    append(&indicator, &element(document, "div", "hero-scroll-dot")?)?;
    append(&section, &indicator)?;

    Ok(HeroParts {
        section,
        image,
        image_inner,
        glow,
        link_buttons,
    })
}

fn build_status(document: &Document, badge: &StatusBadge) -> PortfolioResult<Element> {
    let wrapper = element(document, "div", "hero-status")?;
    let icon = element(document, "i", &format!("icon icon-{}", badge.icon))?;
    append(&wrapper, &icon)?;
    append(&wrapper, &text(document, "span", "hero-status-label", &badge.status)?)?;
    append(&wrapper, &text(document, "span", "hero-status-text", &badge.text)?)?;
    Ok(wrapper)
}

fn build_link(document: &Document, link: &SocialLink) -> PortfolioResult<(Element, Element)> {
    let wrapper = element(document, "div", "hero-link")?;
    let button = element(document, "button", "hero-link-button")?;
    button
        .set_attribute("type", "button")
        .context("failed to build link button")?;
    button
        .set_attribute("aria-label", &link.label)
        .context("failed to build link button")?;
    let icon = element(document, "i", &format!("icon icon-{}", link.icon))?;
    append(&button, &icon)?;
    let tooltip = text(document, "span", "hero-tooltip", &link.label)?;
    tooltip
        .set_attribute("role", "tooltip")
        .context("failed to build tooltip")?;
    append(&wrapper, &button)?;
    append(&wrapper, &tooltip)?;
    Ok((wrapper, button))
}

#[cfg(test)]
mod tests {
    use super::*;
    use web_sys::Text;

    fn appendable<T: AsRef<Node>>() {}

    #[test]
    fn test_append_accepts_every_built_node_type() {
        // Elements from `element`/`text`, cast elements and text nodes all
        // go through the same helper.
        appendable::<Element>();
        appendable::<HtmlElement>();
        appendable::<Text>();
    }
}
