//! Single-slot browser callback scheduling.
//!
//! `requestAnimationFrame` and `setTimeout` want a JS function per request.
//! Allocating a fresh `Closure` for every request leaks it whenever the
//! request is cancelled, so each `OneShot` owns one trampoline closure for
//! its whole life and swaps the Rust callback behind it.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::error::{PortfolioResult, ResultExt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OneShotKind {
    AnimationFrame,
    Timeout,
}

type Pending = Rc<RefCell<Option<(i32, Box<dyn FnOnce()>)>>>;

pub struct OneShot {
    window: Window,
    kind: OneShotKind,
    pending: Pending,
    trampoline: Closure<dyn FnMut()>,
}

impl OneShot {
    pub fn new(window: Window, kind: OneShotKind) -> Self {
        let pending: Pending = Rc::new(RefCell::new(None));
        let slot = Rc::clone(&pending);
        let trampoline = Closure::<dyn FnMut()>::new(move || {
            // Taken before the call so the callback may schedule again.
            let callback = slot.borrow_mut().take();
            if let Some((_, callback)) = callback {
                callback();
            }
        });
        Self {
            window,
            kind,
            pending,
            trampoline,
        }
    }

    /// Schedule `callback`, replacing whatever was pending. `delay_ms` is
    /// ignored for animation frames.
    pub fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> PortfolioResult<i32> {
        let previous = self.pending.borrow_mut().take();
        if let Some((id, _)) = previous {
            self.clear(id);
        }

        let function = self.trampoline.as_ref().unchecked_ref();
        let id = match self.kind {
            OneShotKind::AnimationFrame => self
                .window
                .request_animation_frame(function)
                .context("requestAnimationFrame failed")?,
            OneShotKind::Timeout => self
                .window
                .set_timeout_with_callback_and_timeout_and_arguments_0(
                    function,
                    delay_ms.min(i32::MAX as u32) as i32,
                )
                .context("setTimeout failed")?,
        };
        *self.pending.borrow_mut() = Some((id, callback));
        Ok(id)
    }

    /// Cancel `id` if it is still the pending request.
    pub fn cancel(&self, id: i32) {
        let matches = matches!(&*self.pending.borrow(), Some((pending, _)) if *pending == id);
        if matches {
            let callback = self.pending.borrow_mut().take();
            self.clear(id);
            drop(callback);
        }
    }

    fn clear(&self, id: i32) {
        match self.kind {
            OneShotKind::AnimationFrame => {
                let _ = self.window.cancel_animation_frame(id);
            },
            OneShotKind::Timeout => self.window.clear_timeout_with_handle(id),
        }
    }
}

impl Drop for OneShot {
    fn drop(&mut self) {
        let pending = self.pending.borrow_mut().take();
        if let Some((id, _)) = pending {
            self.clear(id);
        }
    }
}
