use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A pending `setTimeout`. Dropping the handle clears the timer; clearing an
/// already fired timer is a no-op.
pub struct Timeout {
    id: i32,
}

impl Timeout {
    pub fn new(delay: Duration, f: impl FnOnce() + 'static) -> Option<Self> {
        let window = web::window()?;
        let callback = Closure::once_into_js(f);
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            delay.as_millis() as i32,
        ) {
            Ok(id) => Some(Self { id }),
            Err(e) => {
                log::error!("setTimeout error: {:?}", e);
                None
            }
        }
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        if let Some(w) = web::window() {
            w.clear_timeout_with_handle(self.id);
        }
    }
}

/// A repeating `setInterval` that owns its callback.
///
/// `stop` may be called from inside the callback itself; the closure stays
/// alive until the handle is dropped.
pub struct Interval {
    id: i32,
    _closure: Closure<dyn FnMut()>,
}

impl Interval {
    pub fn new(period: Duration, f: impl FnMut() + 'static) -> Option<Self> {
        let window = web::window()?;
        let closure = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
        match window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            period.as_millis() as i32,
        ) {
            Ok(id) => Some(Self {
                id,
                _closure: closure,
            }),
            Err(e) => {
                log::error!("setInterval error: {:?}", e);
                None
            }
        }
    }

    pub fn stop(&self) {
        if let Some(w) = web::window() {
            w.clear_interval_with_handle(self.id);
        }
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        self.stop();
    }
}
