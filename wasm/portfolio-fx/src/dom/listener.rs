//! Event listener guard.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Event, EventTarget};

use crate::error::{PortfolioResult, ResultExt};

/// Listener registration flags.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListenOptions {
    pub passive: bool,
    pub capture: bool,
}

impl ListenOptions {
    pub fn passive() -> Self {
        Self {
            passive: true,
            capture: false,
        }
    }

    pub fn capture() -> Self {
        Self {
            passive: false,
            capture: true,
        }
    }
}

/// A registered DOM event listener, removed when dropped.
pub struct EventListener {
    target: EventTarget,
    event_type: &'static str,
    capture: bool,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    pub fn new<F>(
        target: &EventTarget,
        event_type: &'static str,
        options: ListenOptions,
        handler: F,
    ) -> PortfolioResult<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);

        let js_options = AddEventListenerOptions::new();
        js_options.set_passive(options.passive);
        js_options.set_capture(options.capture);

        target
            .add_event_listener_with_callback_and_add_event_listener_options(
                event_type,
                callback.as_ref().unchecked_ref(),
                &js_options,
            )
            .with_context(|| format!("failed to listen for {}", event_type))?;

        Ok(Self {
            target: target.clone(),
            event_type,
            capture: options.capture,
            callback,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        // removeEventListener never throws for an unknown callback
        let _ = self.target.remove_event_listener_with_callback_and_bool(
            self.event_type,
            self.callback.as_ref().unchecked_ref(),
            self.capture,
        );
    }
}

impl std::fmt::Debug for EventListener {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventListener")
            .field("event_type", &self.event_type)
            .field("capture", &self.capture)
            .finish()
    }
}
