use crate::constants::*;
use crate::core::{WishLabel, CAPTION_FULFILLED, CAPTION_LIT, HINT_IDLE, HINT_LISTENING};
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

/// DOM side of the candle section.
pub struct View {
    document: web::Document,
    candle: web::Element,
    wish_field: web::Element,
}

impl View {
    pub fn new(document: &web::Document) -> anyhow::Result<Self> {
        let view = Self {
            document: document.clone(),
            candle: dom::require_element(document, CANDLE_ID)?,
            wish_field: dom::require_element(document, WISH_FIELD_ID)?,
        };
        dom::set_text(document, CAPTION_ID, CAPTION_LIT);
        dom::set_text(document, HINT_ID, HINT_IDLE);
        _ = view.wish_field.class_list().add_1(HIDDEN_CLASS);
        Ok(view)
    }

    pub fn candle(&self) -> &web::Element {
        &self.candle
    }

    pub fn show_listening(&self) {
        _ = self.candle.class_list().add_1(LISTENING_CLASS);
        dom::set_text(&self.document, HINT_ID, HINT_LISTENING);
    }

    #[inline]
    pub fn begin_extinguish(&self) {
        _ = self.candle.class_list().add_1(EXTINGUISHING_CLASS);
        dom::set_text(&self.document, CAPTION_ID, CAPTION_FULFILLED);
    }

    /// Unmount the flame and the candle it sits on.
    pub fn remove_candle(&self) {
        if let Some(flame) = self.document.get_element_by_id(FLAME_ID) {
            flame.remove();
        }
        self.candle.remove();
    }

    /// Mount the wish labels and let their CSS transitions run.
    pub fn reveal_wishes(&self, labels: &[WishLabel]) {
        for label in labels {
            match self.build_label(label) {
                Ok(el) => {
                    _ = self.wish_field.append_child(&el);
                }
                Err(e) => log::warn!("[wishes] label {} skipped: {:?}", label.id, e),
            }
        }
        let cl = self.wish_field.class_list();
        _ = cl.remove_1(HIDDEN_CLASS);
        // Flush layout so the labels transition from their collapsed style.
        _ = self.wish_field.get_bounding_client_rect();
        _ = cl.add_1(REVEALED_CLASS);
    }

    fn build_label(&self, label: &WishLabel) -> Result<web::Element, wasm_bindgen::JsValue> {
        let el: web::HtmlElement = self.document.create_element("div")?.dyn_into()?;
        el.set_class_name(WISH_LABEL_CLASS);
        el.set_text_content(Some(label.text));
        let style = el.style();
        style.set_property("left", &format!("{:.2}%", label.position.x))?;
        style.set_property("top", &format!("{:.2}%", label.position.y))?;
        style.set_property("color", label.color)?;
        style.set_property("font-size", &format!("{:.2}rem", label.font_rem))?;
        style.set_property("--wish-rotate", &format!("{:.1}deg", label.rotation_deg))?;
        style.set_property("--wish-scale", &format!("{:.3}", label.scale))?;
        style.set_property("--wish-delay", &format!("{:.3}s", label.delay_sec))?;
        Ok(el.into())
    }
}
