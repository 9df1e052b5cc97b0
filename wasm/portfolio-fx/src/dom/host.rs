//! Browser implementation of `CursorHost`.

use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, HtmlElement, MouseEvent, Window};

use super::listener::{EventListener, ListenOptions};
use super::observer::InsertionObserver;
use super::oneshot::{OneShot, OneShotKind};
use super::overlay::{Overlay, OverlayGuard, OverlaySlot};
use super::style::{InjectedStyle, HIDE_NATIVE_CURSOR_CSS};
use crate::cursor::geometry::{Rect, XY};
use crate::cursor::glyph::GlyphStyle;
use crate::cursor::host::{CursorHost, InputSink, PointerInput, TimerId};
use crate::cursor::probe::TouchProbe;
use crate::cursor::schedule::FrameId;
use crate::cursor::variant::{CursorVariant, MAGNETIC_SELECTOR};
use crate::error::{OptionExt, PortfolioResult};

pub struct WebCursorHost {
    window: Window,
    document: Document,
    overlay: OverlaySlot,
    frames: OneShot,
    timers: OneShot,
}

impl WebCursorHost {
    pub fn new() -> PortfolioResult<Self> {
        let window = super::window()?;
        let document = window.document().or_missing("document")?;
        Ok(Self {
            frames: OneShot::new(window.clone(), OneShotKind::AnimationFrame),
            timers: OneShot::new(window.clone(), OneShotKind::Timeout),
            window,
            document,
            overlay: Rc::new(RefCell::new(None)),
        })
    }
}

fn pointer_of(event: &Event) -> Option<XY> {
    event
        .dyn_ref::<MouseEvent>()
        .map(|mouse| XY::new(mouse.client_x() as f64, mouse.client_y() as f64))
}

fn closest(element: &Element, selector: &str) -> Option<Element> {
    element.closest(selector).ok().flatten()
}

fn translate_over(event: &Event) -> Option<PointerInput<HtmlElement>> {
    let pointer = pointer_of(event)?;
    let target = event.target()?.dyn_into::<Element>().ok()?;
    let magnetic =
        closest(&target, MAGNETIC_SELECTOR).and_then(|el| el.dyn_into::<HtmlElement>().ok());
    let variant = CursorVariant::classify(|selector| closest(&target, selector).is_some());
    Some(PointerInput::Over {
        pointer,
        magnetic,
        variant,
    })
}

impl CursorHost for WebCursorHost {
    type Element = HtmlElement;
    type Resource = Box<dyn Any>;

    fn touch_probe(&self) -> TouchProbe {
        let navigator = self.window.navigator();
        let touch_start =
            js_sys::Reflect::has(&self.window, &JsValue::from_str("ontouchstart")).unwrap_or(false);
        let ms_max_touch_points =
            js_sys::Reflect::get(&navigator, &JsValue::from_str("msMaxTouchPoints"))
                .ok()
                .and_then(|value| value.as_f64());
        TouchProbe {
            touch_start,
            max_touch_points: navigator.max_touch_points(),
            ms_max_touch_points,
        }
    }

    fn install_cursor_style(&self) -> PortfolioResult<Self::Resource> {
        let style = InjectedStyle::install(&self.document, HIDE_NATIVE_CURSOR_CSS)?;
        Ok(Box::new(style))
    }

    fn observe_insertions(&self) -> PortfolioResult<Self::Resource> {
        let body = self.document.body().or_missing("document.body")?;
        let observer = InsertionObserver::hide_cursor_on_insert(&body)?;
        Ok(Box::new(observer))
    }

    fn subscribe(&self, sink: InputSink<Self::Element>) -> PortfolioResult<Vec<Self::Resource>> {
        let mut listeners: Vec<Self::Resource> = Vec::with_capacity(5);

        let on_move = Rc::clone(&sink);
        listeners.push(Box::new(EventListener::new(
            &self.window,
            "mousemove",
            ListenOptions::passive(),
            move |event| {
                if let Some(pointer) = pointer_of(&event) {
                    on_move(PointerInput::Move(pointer));
                }
            },
        )?));

        let on_over = Rc::clone(&sink);
        listeners.push(Box::new(EventListener::new(
            &self.window,
            "mouseover",
            ListenOptions::passive(),
            move |event| {
                if let Some(input) = translate_over(&event) {
                    on_over(input);
                }
            },
        )?));

        // `mouseleave` is not dispatched on window; the root element gets it
        // when the pointer exits the viewport.
        let root = self
            .document
            .document_element()
            .or_missing("document.documentElement")?;
        let on_leave = Rc::clone(&sink);
        listeners.push(Box::new(EventListener::new(
            &root,
            "mouseleave",
            ListenOptions::passive(),
            move |_| on_leave(PointerInput::Leave),
        )?));

        let on_down = sink;
        listeners.push(Box::new(EventListener::new(
            &self.window,
            "mousedown",
            ListenOptions::passive(),
            move |_| on_down(PointerInput::Down),
        )?));

        listeners.push(Box::new(EventListener::new(
            &self.document,
            "dragstart",
            ListenOptions::default(),
            |event| {
                event.prevent_default();
                let source = event
                    .target()
                    .and_then(|target| target.dyn_into::<HtmlElement>().ok());
                if let Some(element) = source {
                    let _ = element.style().set_property("cursor", "none");
                }
            },
        )?));

        Ok(listeners)
    }

    fn mount_overlay(&self) -> PortfolioResult<Self::Resource> {
        let overlay = Overlay::mount(&self.document)?;
        *self.overlay.borrow_mut() = Some(overlay);
        Ok(Box::new(OverlayGuard::new(Rc::clone(&self.overlay))))
    }

    fn paint(&self, frame: Option<(&GlyphStyle, XY)>) {
        if let Some(overlay) = self.overlay.borrow().as_ref() {
            overlay.paint(frame);
        }
    }

    fn bounding_rect(&self, element: &Self::Element) -> Rect {
        let rect = element.get_bounding_client_rect();
        Rect::from_edges(rect.left(), rect.top(), rect.right(), rect.bottom())
    }

    fn request_frame(&self, callback: Box<dyn FnOnce()>) -> PortfolioResult<FrameId> {
        self.frames.schedule(0, callback)
    }

    fn cancel_frame(&self, frame: FrameId) {
        self.frames.cancel(frame);
    }

    fn start_timer(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> PortfolioResult<TimerId> {
        self.timers.schedule(delay_ms, callback)
    }

    fn cancel_timer(&self, timer: TimerId) {
        self.timers.cancel(timer);
    }
}
