//! `setTimeout`-backed scheduler

use crate::reflow::{Scheduler, Trigger};
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

/// Schedules triggers on the window's timer queue and hands them to
/// `dispatch` when they fire.
pub struct DomScheduler {
    window: Window,
    dispatch: Rc<dyn Fn(Trigger)>,
}

impl DomScheduler {
    pub fn new(window: Window, dispatch: Rc<dyn Fn(Trigger)>) -> Self {
        Self { window, dispatch }
    }
}

impl Scheduler for DomScheduler {
    /// `setTimeout` handle; 0 when scheduling failed (clearing it is a no-op)
    type Token = i32;

    fn schedule(&mut self, trigger: Trigger, delay: Duration) -> i32 {
        let dispatch = Rc::clone(&self.dispatch);
        let callback = Closure::once_into_js(move || dispatch(trigger));
        let delay_ms = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);

        match self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), delay_ms)
        {
            Ok(handle) => handle,
            Err(e) => {
                log::warn!("could not schedule {:?}: {:?}", trigger, e);
                0
            }
        }
    }

    fn cancel(&mut self, token: i32) {
        self.window.clear_timeout_with_handle(token);
    }
}
