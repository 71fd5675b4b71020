//! Mount/unmount lifecycle and the WASM entry points.
//!
//! DESIGN
//! ======
//! Mounting inserts a `<style>` into `<head>` and a root `<div>` into
//! `<body>`, then mounts `ChatWidget` into the root. The root's id doubles as
//! the idempotency marker: a second mount on the same page finds it and does
//! nothing. Unmounting drops the reactive view (detaching its listeners) and
//! removes both injected nodes.

#[cfg(test)]
#[path = "mount_test.rs"]
mod mount_test;

use crate::config::WidgetConfig;

#[cfg(feature = "csr")]
use std::any::Any;
#[cfg(feature = "csr")]
use std::cell::RefCell;

/// What a call to [`mount`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MountOutcome {
    Mounted,
    /// The marker element was already present; nothing was inserted.
    AlreadyMounted,
}

#[derive(Debug, thiserror::Error)]
pub enum MountError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no <head>")]
    NoHead,
    #[error("document has no <body>")]
    NoBody,
    #[error("DOM operation failed: {0}")]
    Dom(String),
}

#[cfg(feature = "csr")]
thread_local! {
    // Dropping the handle unmounts the view.
    static MOUNTED: RefCell<Option<Box<dyn Any>>> = const { RefCell::new(None) };
}

/// Inject the widget into the current document unless it is already there.
///
/// # Errors
///
/// Returns a [`MountError`] when the document is unavailable or a DOM
/// insertion fails. Outside the browser this is always [`MountError::NoWindow`].
pub fn mount(config: WidgetConfig) -> Result<MountOutcome, MountError> {
    #[cfg(feature = "csr")]
    {
        use leptos::prelude::*;
        use wasm_bindgen::JsCast;

        use crate::components::chat_widget::ChatWidget;
        use crate::styles::{ROOT_ID, STYLE_ID, STYLESHEET};

        let document = web_sys::window()
            .ok_or(MountError::NoWindow)?
            .document()
            .ok_or(MountError::NoDocument)?;
        if document.get_element_by_id(ROOT_ID).is_some() {
            return Ok(MountOutcome::AlreadyMounted);
        }
        let head = document.head().ok_or(MountError::NoHead)?;
        let body = document.body().ok_or(MountError::NoBody)?;

        let style = document.create_element("style").map_err(dom_error)?;
        style.set_id(STYLE_ID);
        style.set_text_content(Some(STYLESHEET));
        head.append_child(&style).map_err(dom_error)?;

        let root = document
            .create_element("div")
            .map_err(dom_error)?
            .dyn_into::<web_sys::HtmlElement>()
            .map_err(|_| MountError::Dom("root is not an HtmlElement".to_owned()))?;
        root.set_id(ROOT_ID);
        body.append_child(&root).map_err(dom_error)?;

        log::info!("chat widget mounted (endpoint {})", config.endpoint);
        let handle = leptos::mount::mount_to(root, move || view! { <ChatWidget config/> });
        MOUNTED.with(|m| *m.borrow_mut() = Some(Box::new(handle)));
        Ok(MountOutcome::Mounted)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = config;
        Err(MountError::NoWindow)
    }
}

/// Remove the widget and everything it injected.
///
/// Returns `true` if anything was removed.
pub fn unmount() -> bool {
    #[cfg(feature = "csr")]
    {
        use crate::styles::{ROOT_ID, STYLE_ID};

        let handle = MOUNTED.with(|m| m.borrow_mut().take());
        let mut removed = handle.is_some();
        drop(handle);

        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            for id in [ROOT_ID, STYLE_ID] {
                if let Some(el) = document.get_element_by_id(id) {
                    el.remove();
                    removed = true;
                }
            }
        }
        if removed {
            log::info!("chat widget unmounted");
        }
        removed
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}

#[cfg(feature = "csr")]
fn dom_error(err: wasm_bindgen::JsValue) -> MountError {
    MountError::Dom(format!("{err:?}"))
}

/// Module start: install the panic hook and console logger, then mount with
/// the config found on the page.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    if let Err(e) = mount(WidgetConfig::from_document()) {
        log::error!("chat widget mount failed: {e}");
    }
}

/// JS: `mountChatWidget(endpoint?)`. Returns `true` if the widget was
/// inserted, `false` if it was already on the page.
///
/// # Errors
///
/// Rejects with the [`MountError`] message.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(js_name = mountChatWidget)]
pub fn mount_chat_widget(endpoint: Option<String>) -> Result<bool, wasm_bindgen::JsError> {
    let config = match endpoint {
        Some(endpoint) => WidgetConfig::with_endpoint(&endpoint),
        None => WidgetConfig::from_document(),
    };
    mount(config)
        .map(|outcome| outcome == MountOutcome::Mounted)
        .map_err(|e| wasm_bindgen::JsError::new(&e.to_string()))
}

/// JS: `unmountChatWidget()`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(js_name = unmountChatWidget)]
pub fn unmount_chat_widget() -> bool {
    unmount()
}
