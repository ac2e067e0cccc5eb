use std::f64::consts::TAU;

use orrery_engine::{FrameData, Renderer, Color, SphereInstance, VectorVertex};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

use crate::app::dom_error;

/// How far the highlight sits from the sphere centre, as a fraction of radius.
const HIGHLIGHT_OFFSET: f64 = 0.45;

/// Full-viewport `<canvas>` painted through the 2D context.
pub struct Canvas2dRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl Canvas2dRenderer {
    /// Create a canvas, append it to `document.body` and size it to `width x height`.
    pub fn mount(document: &Document, width: u32, height: u32) -> Result<Self, JsValue> {
        let canvas = document
            .create_element("canvas")?
            .dyn_into::<HtmlCanvasElement>()?;
        canvas.style().set_property("display", "block")?;

        let body = document
            .body()
            .ok_or_else(|| dom_error("document has no body"))?;
        body.append_child(&canvas)?;

        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| dom_error("2d canvas context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let mut renderer = Self { canvas, ctx };
        renderer.resize(width, height);
        Ok(renderer)
    }

    fn paint(&self, frame: &FrameData) -> Result<(), JsValue> {
        let w = self.canvas.width() as f64;
        let h = self.canvas.height() as f64;

        self.ctx.set_fill_style_str(&css_color(frame.clear_color));
        self.ctx.fill_rect(0.0, 0.0, w, h);

        self.paint_triangles(frame.vector_vertices);

        for sphere in frame.spheres {
            self.paint_sphere(sphere)?;
        }
        Ok(())
    }

    /// Fill triangle-list vertices, one path per run of same-colored triangles.
    fn paint_triangles(&self, vertices: &[VectorVertex]) {
        let mut run_start = 0;
        while run_start + 3 <= vertices.len() {
            let color = vertices[run_start].color();
            let mut run_end = run_start;
            self.ctx.begin_path();
            while run_end + 3 <= vertices.len() && vertices[run_end].color() == color {
                let tri = &vertices[run_end..run_end + 3];
                self.ctx.move_to(tri[0].x as f64, tri[0].y as f64);
                self.ctx.line_to(tri[1].x as f64, tri[1].y as f64);
                self.ctx.line_to(tri[2].x as f64, tri[2].y as f64);
                self.ctx.close_path();
                run_end += 3;
            }
            self.ctx.set_fill_style_str(&css_rgba(color.r, color.g, color.b, color.a));
            self.ctx.fill();
            run_start = run_end;
        }
    }

    fn paint_sphere(&self, s: &SphereInstance) -> Result<(), JsValue> {
        let (x, y, r) = (s.x as f64, s.y as f64, s.radius as f64);
        if r <= 0.0 {
            return Ok(());
        }

        let lit = css_rgba(s.lit_r, s.lit_g, s.lit_b, 1.0);
        if s.is_flat() {
            self.ctx.set_fill_style_str(&lit);
        } else {
            let hx = x + s.light_dx as f64 * r * HIGHLIGHT_OFFSET;
            let hy = y + s.light_dy as f64 * r * HIGHLIGHT_OFFSET;
            let gradient = self.ctx.create_radial_gradient(hx, hy, 0.0, x, y, r)?;
            gradient.add_color_stop(0.0, &lit)?;
            gradient.add_color_stop(1.0, &css_rgba(s.shade_r, s.shade_g, s.shade_b, 1.0))?;
            self.ctx.set_fill_style_canvas_gradient(&gradient);
        }

        self.ctx.begin_path();
        self.ctx.arc(x, y, r, 0.0, TAU)?;
        self.ctx.fill();
        Ok(())
    }
}

impl Renderer for Canvas2dRenderer {
    fn backend(&self) -> &'static str {
        "canvas2d"
    }

    fn draw(&mut self, frame: &FrameData) {
        if let Err(err) = self.paint(frame) {
            log::error!("canvas2d: draw failed: {err:?}");
        }
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }
}

fn css_color(c: Color) -> String {
    css_rgba(c.r, c.g, c.b, 1.0)
}

/// CSS `rgba()` string from 0..1 components, clamped.
fn css_rgba(r: f32, g: f32, b: f32, a: f32) -> String {
    let byte = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!("rgba({},{},{},{})", byte(r), byte(g), byte(b), a.clamp(0.0, 1.0))
}
