//! Cursor tracker lifecycle and event handling.
//!
//! Mounting acquires, in order: the cursor-hiding stylesheet, the insertion
//! observer, the overlay and the pointer listeners. Unmounting cancels the
//! pending frame and press pulse, then drops every acquired resource. On a
//! touch device nothing is acquired and the tracker is inert.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use super::geometry::XY;
use super::glyph::GlyphStyle;
use super::host::{CursorHost, InputSink, PointerInput, TimerId};
use super::schedule::{FrameSlot, Ticket};
use super::slot::{MountClaim, MountSlot};
use super::state::{CursorSnapshot, CursorState};
use crate::config::CursorConfig;
use crate::error::PortfolioResult;

/// A mounted (or inert) custom cursor.
pub struct CursorTracker<H: CursorHost> {
    inner: Option<Rc<TrackerInner<H>>>,
    claim: Option<MountClaim>,
}

struct TrackerInner<H: CursorHost> {
    host: H,
    config: CursorConfig,
    state: RefCell<CursorState<H::Element>>,
    slot: RefCell<FrameSlot<XY>>,
    pulse: Cell<Option<TimerId>>,
    resources: RefCell<Vec<H::Resource>>,
}

impl<H: CursorHost> CursorTracker<H> {
    /// Mount on `host` with a config snapshot.
    ///
    /// Returns an inert tracker on touch devices. If acquiring any resource
    /// fails, everything acquired so far is released before the error
    /// propagates.
    pub fn mount(host: H, config: CursorConfig) -> PortfolioResult<Self> {
        let probe = host.touch_probe();
        if probe.is_touch_device() {
            log::info!("[Cursor] Touch device detected ({:?}), custom cursor disabled", probe);
            return Ok(Self {
                inner: None,
                claim: None,
            });
        }

        let inner = Rc::new(TrackerInner {
            host,
            config,
            state: RefCell::new(CursorState::new()),
            slot: RefCell::new(FrameSlot::new()),
            pulse: Cell::new(None),
            resources: RefCell::new(Vec::new()),
        });

        if let Err(e) = inner.acquire() {
            log::warn!("[Cursor] Mount failed, releasing partial resources: {}", e);
            inner.release();
            return Err(e);
        }

        inner.paint();
        log::info!(
            "[Cursor] Mounted with {} resources",
            inner.resources.borrow().len()
        );
        Ok(Self {
            inner: Some(inner),
            claim: None,
        })
    }

    /// Mount unless `slot` already holds an active tracker.
    ///
    /// An active tracker keeps the slot until it is unmounted or dropped. An
    /// inert tracker on a touch device never takes it.
    pub fn mount_in(slot: &MountSlot, host: H, config: CursorConfig) -> PortfolioResult<Self> {
        slot.ensure_free()?;
        let mut tracker = Self::mount(host, config)?;
        if tracker.is_active() {
            tracker.claim = Some(slot.claim()?);
        }
        Ok(tracker)
    }

    /// False on touch devices and after unmount.
    pub fn is_active(&self) -> bool {
        self.inner.is_some()
    }

    pub fn snapshot(&self) -> Option<CursorSnapshot> {
        self.inner.as_ref().map(|inner| inner.state.borrow().snapshot())
    }

    /// Tear down. Safe to call more than once.
    pub fn unmount(&mut self) {
        if let Some(inner) = self.inner.take() {
            inner.release();
            log::info!("[Cursor] Unmounted");
        }
        self.claim.take();
    }
}

impl<H: CursorHost> Drop for CursorTracker<H> {
    fn drop(&mut self) {
        self.unmount();
    }
}

impl<H: CursorHost> TrackerInner<H> {
    fn acquire(self: &Rc<Self>) -> PortfolioResult<()> {
        if self.config.hide_native_cursor {
            let style = self.host.install_cursor_style()?;
            self.resources.borrow_mut().push(style);
            let observer = self.host.observe_insertions()?;
            self.resources.borrow_mut().push(observer);
        }

        let overlay = self.host.mount_overlay()?;
        self.resources.borrow_mut().push(overlay);

        let weak = Rc::downgrade(self);
        let sink: InputSink<H::Element> = Rc::new(move |input| {
            if let Some(inner) = weak.upgrade() {
                inner.handle(input);
            }
        });
        let listeners = self.host.subscribe(sink)?;
        self.resources.borrow_mut().extend(listeners);
        Ok(())
    }

    fn release(&self) {
        if let Some(frame) = self.slot.borrow_mut().cancel() {
            self.host.cancel_frame(frame);
        }
        if let Some(timer) = self.pulse.take() {
            self.host.cancel_timer(timer);
        }
        // Listeners were acquired last; release them first.
        let mut resources = std::mem::take(&mut *self.resources.borrow_mut());
        while let Some(resource) = resources.pop() {
            drop(resource);
        }
    }

    fn handle(self: &Rc<Self>, input: PointerInput<H::Element>) {
        match input {
            PointerInput::Move(pointer) => self.schedule_frame(pointer),
            PointerInput::Over {
                pointer,
                magnetic,
                variant,
            } => {
                let magnetic = magnetic.map(|element| {
                    let rect = self.host.bounding_rect(&element);
                    (element, rect)
                });
                self.state
                    .borrow_mut()
                    .pointer_over(pointer, magnetic, variant, self.config.attraction);
                self.paint();
            },
            PointerInput::Leave => {
                self.state.borrow_mut().pointer_leave();
                self.paint();
            },
            PointerInput::Down => self.start_pulse(),
        }
    }

    fn schedule_frame(self: &Rc<Self>, pointer: XY) {
        let (ticket, superseded) = self.slot.borrow_mut().submit(pointer);
        if let Some(frame) = superseded {
            self.host.cancel_frame(frame);
        }

        let weak = Rc::downgrade(self);
        let callback = Box::new(move || run_frame(&weak, ticket));
        match self.host.request_frame(callback) {
            Ok(frame) => self.slot.borrow_mut().bind(ticket, frame),
            Err(e) => {
                log::warn!("[Cursor] Failed to request animation frame: {}", e);
                self.slot.borrow_mut().cancel();
            },
        }
    }

    fn apply_frame(&self, ticket: Ticket) {
        let Some(pointer) = self.slot.borrow_mut().fire(ticket) else {
            return;
        };

        let target = self.state.borrow().magnetic_target().cloned();
        let rect = target.map(|element| self.host.bounding_rect(&element));
        self.state
            .borrow_mut()
            .apply_frame(pointer, rect, self.config.attraction);
        self.paint();
    }

    fn start_pulse(self: &Rc<Self>) {
        self.state.borrow_mut().press();
        self.paint();

        if let Some(timer) = self.pulse.take() {
            self.host.cancel_timer(timer);
        }
        let weak = Rc::downgrade(self);
        let callback = Box::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.end_pulse();
            }
        });
        match self.host.start_timer(self.config.press_pulse_ms, callback) {
            Ok(timer) => self.pulse.set(Some(timer)),
            Err(e) => {
                log::warn!("[Cursor] Failed to start press pulse timer: {}", e);
                self.end_pulse();
            },
        }
    }

    fn end_pulse(&self) {
        self.pulse.set(None);
        self.state.borrow_mut().press_released();
        self.paint();
    }

    fn paint(&self) {
        let state = self.state.borrow();
        if state.visible {
            let style =
                GlyphStyle::compute(state.variant, state.hovered, state.magnetic_strength());
            self.host.paint(Some((&style, state.position)));
        } else {
            self.host.paint(None);
        }
    }
}

fn run_frame<H: CursorHost>(inner: &Weak<TrackerInner<H>>, ticket: Ticket) {
    if let Some(inner) = inner.upgrade() {
        inner.apply_frame(ticket);
    }
}
