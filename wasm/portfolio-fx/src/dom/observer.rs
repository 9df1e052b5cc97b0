//! Keeps the platform cursor hidden on nodes inserted after mount.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MutationObserver, MutationObserverInit, MutationRecord, Node};

use crate::error::{PortfolioResult, ResultExt};

/// A `MutationObserver` watching `childList` over a whole subtree. Dropping
/// disconnects it.
pub struct InsertionObserver {
    observer: MutationObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, MutationObserver)>,
}

impl InsertionObserver {
    pub fn hide_cursor_on_insert(root: &Node) -> PortfolioResult<Self> {
        let callback = Closure::<dyn FnMut(js_sys::Array, MutationObserver)>::new(
            |records: js_sys::Array, _observer: MutationObserver| {
                for record in records.iter() {
                    let Ok(record) = record.dyn_into::<MutationRecord>() else {
                        continue;
                    };
                    let added = record.added_nodes();
                    for index in 0..added.length() {
                        let element = added
                            .get(index)
                            .and_then(|node| node.dyn_into::<HtmlElement>().ok());
                        if let Some(element) = element {
                            let _ = element.style().set_property("cursor", "none");
                        }
                    }
                }
            },
        );

        let observer = MutationObserver::new(callback.as_ref().unchecked_ref())
            .context("failed to create mutation observer")?;
        let init = MutationObserverInit::new();
        init.set_child_list(true);
        init.set_subtree(true);
        observer
            .observe_with_options(root, &init)
            .context("failed to observe document body")?;

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for InsertionObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
