use crate::candle::Candle;
use crate::dom;
use std::rc::Rc;
use web_sys as web;

/// Wire click, press-and-hold (mouse and touch) on the candle element.
pub fn wire_candle_handlers(candle: &Rc<Candle>) {
    let target: web::EventTarget = candle.view().candle().clone().into();

    let c = candle.clone();
    dom::add_listener(&target, "click", move |_ev: web::Event| {
        log::debug!("[input] click");
        c.handle(|ctl| ctl.tap());
    });

    for event in ["mousedown", "touchstart"] {
        let c = candle.clone();
        dom::add_listener(&target, event, move |_ev: web::Event| {
            c.handle(|ctl| ctl.press_start());
        });
    }

    for event in ["mouseup", "touchend", "touchcancel"] {
        let c = candle.clone();
        dom::add_listener(&target, event, move |_ev: web::Event| {
            c.handle(|ctl| ctl.press_end());
        });
    }
}
