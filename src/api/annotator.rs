//! Annotator class for JavaScript
//!
//! Binds one [`Session`] to a live container. Reflow signals (window resize,
//! `document.fonts.ready`) reach the session through weak references, so a
//! dropped annotator simply stops reacting instead of keeping the page alive.

use super::helpers::{js_error, js_exception, parse_config, serialize};
use crate::annotate::AnnotateError;
use crate::config::AnnotatorConfig;
use crate::dom::{install_stylesheet, DomScheduler, DomTree};
use crate::reflow::Trigger;
use crate::session::Session;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, FontFaceSet, Window};

type DomSession = Session<DomTree, DomScheduler>;

thread_local! {
    // Page-wide instance created by `installTransliteration`
    static INSTALLED: RefCell<Option<CherokeeAnnotator>> = const { RefCell::new(None) };
}

struct ReflowListeners {
    window: Window,
    on_resize: Closure<dyn FnMut()>,
}

impl Drop for ReflowListeners {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("resize", self.on_resize.as_ref().unchecked_ref());
    }
}

/// Run `f` on the session if it is still alive and not mid-pass.
fn with_session(session: &Weak<RefCell<DomSession>>, f: impl FnOnce(&mut DomSession)) {
    let Some(session) = session.upgrade() else {
        return;
    };
    match session.try_borrow_mut() {
        Ok(mut s) => f(&mut s),
        Err(_) => log::warn!("annotator busy; dropping reflow signal"),
    };
}

fn browser_context() -> Result<(Window, Document), JsValue> {
    let window = web_sys::window().ok_or_else(|| js_error("no global window"))?;
    let document = window.document().ok_or_else(|| js_error("window has no document"))?;
    Ok((window, document))
}

/// Transliteration annotator for one container element.
#[wasm_bindgen]
pub struct CherokeeAnnotator {
    session: Rc<RefCell<DomSession>>,
    window: Window,
    listeners: Option<ReflowListeners>,
}

#[wasm_bindgen]
impl CherokeeAnnotator {
    /// Create an annotator for the container matched by
    /// `options.containerSelector` (default `#article-body`).
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> Result<CherokeeAnnotator, JsValue> {
        let config = parse_config(options)?;
        let (window, document) = browser_context()?;
        let tree = DomTree::from_selector(document, &config).map_err(js_error)?;
        Ok(Self::with_tree(window, tree, &config))
    }

    /// Annotate (or re-annotate) the container now.
    ///
    /// Returns `{ skipped, runsAnnotated, linesEmitted, blocksReversed }`.
    pub fn process(&self) -> Result<JsValue, JsValue> {
        let report = self.session.borrow_mut().process().map_err(js_error)?;
        serialize(&report, "Failed to serialize annotation report")
    }

    /// Restore the container's original text.
    pub fn reverse(&self) -> Result<usize, JsValue> {
        self.session.borrow_mut().reverse().map_err(js_error)
    }

    /// Show or hide the transliteration lines.
    #[wasm_bindgen(js_name = setVisibility)]
    pub fn set_visibility(&self, visible: bool) {
        self.session.borrow_mut().set_visibility(visible);
    }

    #[wasm_bindgen(js_name = isVisible)]
    pub fn is_visible(&self) -> bool {
        self.session.borrow().is_visible()
    }

    /// Add the hide/show stylesheet to the document (once per page).
    #[wasm_bindgen(js_name = installStylesheet)]
    pub fn install_stylesheet(&self) -> Result<bool, JsValue> {
        let session = self.session.borrow();
        let tree = session.tree();
        install_stylesheet(tree.document(), tree.classes()).map_err(js_error)
    }

    /// Re-annotate after window resizes (debounced) and once after web fonts
    /// have loaded. Calling it again is a no-op.
    #[wasm_bindgen(js_name = attachReflowListeners)]
    pub fn attach_reflow_listeners(&mut self) -> Result<(), JsValue> {
        if self.listeners.is_some() {
            return Ok(());
        }

        let weak = Rc::downgrade(&self.session);
        let on_resize = Closure::<dyn FnMut()>::new(move || with_session(&weak, |s| s.on_resize()));
        self.window
            .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
            .map_err(|e| js_exception("Failed to listen for resize", e))?;

        self.listeners = Some(ReflowListeners {
            window: self.window.clone(),
            on_resize,
        });
        self.watch_fonts();
        Ok(())
    }
}

impl CherokeeAnnotator {
    fn with_tree(window: Window, tree: DomTree, config: &AnnotatorConfig) -> Self {
        let session = Rc::new_cyclic(|weak: &Weak<RefCell<DomSession>>| {
            let weak = weak.clone();
            let dispatch: Rc<dyn Fn(Trigger)> = Rc::new(move |trigger: Trigger| {
                with_session(&weak, |s| {
                    s.fire(trigger);
                })
            });
            RefCell::new(Session::new(tree, DomScheduler::new(window.clone(), dispatch), config))
        });
        Self {
            session,
            window,
            listeners: None,
        }
    }

    fn watch_fonts(&self) {
        let weak = Rc::downgrade(&self.session);
        let fonts = self
            .window
            .document()
            .and_then(|document| js_sys::Reflect::get(&document, &JsValue::from_str("fonts")).ok())
            .filter(|fonts| !fonts.is_undefined() && !fonts.is_null());
        let Some(fonts) = fonts else {
            with_session(&weak, |s| s.on_fonts_unavailable("document.fonts not supported"));
            return;
        };

        let ready = match fonts.unchecked_into::<FontFaceSet>().ready() {
            Ok(ready) => ready,
            Err(e) => {
                with_session(&weak, |s| s.on_fonts_unavailable(&format!("{:?}", e)));
                return;
            }
        };

        let weak_ready = weak.clone();
        let on_ready: Closure<dyn FnMut(JsValue)> =
            Closure::once(move |_: JsValue| with_session(&weak_ready, |s| s.on_fonts_ready()));
        let on_failed: Closure<dyn FnMut(JsValue)> = Closure::once(move |reason: JsValue| {
            with_session(&weak, |s| s.on_fonts_unavailable(&format!("{:?}", reason)))
        });
        let _ = ready.then(&on_ready).catch(&on_failed);

        // One-shot and holding only weak references; the promise owns them from here.
        on_ready.forget();
        on_failed.forget();
    }
}

/// Annotate the page's article container and keep it annotated across
/// reflows. Runs at most once per page; a missing container leaves the page
/// untouched.
///
/// Returns whether this call installed the annotator.
#[wasm_bindgen(js_name = installTransliteration)]
pub fn install_transliteration(options: JsValue) -> Result<bool, JsValue> {
    if INSTALLED.with(|slot| slot.borrow().is_some()) {
        log::debug!("transliteration already installed on this page");
        return Ok(false);
    }

    let config = parse_config(options)?;
    let (window, document) = browser_context()?;
    let tree = match DomTree::from_selector(document.clone(), &config) {
        Ok(tree) => tree,
        Err(AnnotateError::MissingContainer(selector)) => {
            log::info!("no element matches {}; leaving page untouched", selector);
            return Ok(false);
        }
        Err(e) => return Err(js_error(e)),
    };

    install_stylesheet(&document, &config.classes).map_err(js_error)?;

    let mut annotator = CherokeeAnnotator::with_tree(window, tree, &config);
    if let Err(e) = annotator.session.borrow_mut().process() {
        log::warn!("initial annotation failed: {}", e);
    }
    annotator.attach_reflow_listeners()?;

    INSTALLED.with(|slot| *slot.borrow_mut() = Some(annotator));
    log::info!("Cherokee transliteration installed");
    Ok(true)
}
