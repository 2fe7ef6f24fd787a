use crate::core::{spawn_burst, BurstConfig, Particle};
use crate::dom;
use crate::frame;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

struct Inner {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    particles: RefCell<Vec<Particle>>,
    rng: RefCell<StdRng>,
    animating: Cell<bool>,
}

/// Full-viewport canvas that renders confetti bursts.
#[derive(Clone)]
pub struct ConfettiCanvas {
    inner: Rc<Inner>,
}

impl ConfettiCanvas {
    pub fn new(document: &web::Document, id: &str) -> anyhow::Result<Self> {
        let canvas: web::HtmlCanvasElement = dom::require_element(document, id)?
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow::anyhow!(format!("#{} is not a canvas: {:?}", id, e)))?;
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        Ok(Self {
            inner: Rc::new(Inner {
                canvas,
                ctx,
                particles: RefCell::new(Vec::new()),
                rng: RefCell::new(StdRng::from_entropy()),
                animating: Cell::new(false),
            }),
        })
    }

    /// Fire-and-forget burst.
    pub fn burst(&self, cfg: &BurstConfig) {
        let inner = &self.inner;
        inner
            .canvas
            .style()
            .set_property("z-index", &cfg.z_index.to_string())
            .ok();
        dom::sync_canvas_backing_size(&inner.canvas);
        let size = Vec2::new(inner.canvas.width() as f32, inner.canvas.height() as f32);
        let fresh = spawn_burst(cfg, size, &mut *inner.rng.borrow_mut());
        inner.particles.borrow_mut().extend(fresh);

        if !inner.animating.replace(true) {
            let inner = self.inner.clone();
            frame::start_loop(move || {
                let alive = inner.draw_frame();
                if !alive {
                    inner.animating.set(false);
                }
                alive
            });
        }
    }
}

impl Inner {
    fn draw_frame(&self) -> bool {
        let w = self.canvas.width() as f64;
        let h = self.canvas.height() as f64;
        self.ctx.clear_rect(0.0, 0.0, w, h);

        let mut particles = self.particles.borrow_mut();
        let mut rng = self.rng.borrow_mut();
        particles.retain_mut(|p| {
            let alive = p.step(&mut *rng);
            self.ctx.set_global_alpha(p.alpha().max(0.0) as f64);
            self.ctx.set_fill_style_str(p.color);
            self.ctx.begin_path();
            let [a, b, c, d] = p.quad();
            self.ctx.move_to(a.x as f64, a.y as f64);
            self.ctx.line_to(b.x as f64, b.y as f64);
            self.ctx.line_to(c.x as f64, c.y as f64);
            self.ctx.line_to(d.x as f64, d.y as f64);
            self.ctx.close_path();
            self.ctx.fill();
            alive
        });
        self.ctx.set_global_alpha(1.0);
        if particles.is_empty() {
            self.ctx.clear_rect(0.0, 0.0, w, h);
            log::debug!("[confetti] idle");
            return false;
        }
        true
    }
}
