//! Canvas 2D backend for the browser build

use web_sys::CanvasRenderingContext2d;

use super::shapes::{Primitive, TextSize, build_frame, colors, css_rgba as css};
use super::{FrameView, Renderer};
use crate::assets::AssetCatalog;

/// Draws the primitive list onto a 2D canvas context
pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    /// Canvas pixels per world unit
    scale: f64,
}

impl CanvasRenderer {
    pub fn new(ctx: CanvasRenderingContext2d, scale: f64) -> Self {
        Self { ctx, scale }
    }

    fn draw_primitive(&self, prim: &Primitive) {
        let ctx = &self.ctx;
        match prim {
            Primitive::Fill { rect, color } => {
                ctx.set_fill_style_str(&css(*color));
                ctx.fill_rect(rect.x as f64, rect.y as f64, rect.w as f64, rect.h as f64);
            }
            Primitive::Outline { rect, color, width } => {
                ctx.set_stroke_style_str(&css(*color));
                ctx.set_line_width(*width as f64);
                ctx.stroke_rect(rect.x as f64, rect.y as f64, rect.w as f64, rect.h as f64);
            }
            Primitive::Line {
                from,
                to,
                color,
                width,
            } => {
                ctx.set_stroke_style_str(&css(*color));
                ctx.set_line_width(*width as f64);
                ctx.begin_path();
                ctx.move_to(from.x as f64, from.y as f64);
                ctx.line_to(to.x as f64, to.y as f64);
                ctx.stroke();
            }
            Primitive::Text {
                text,
                center,
                size,
                shadow,
                backdrop,
            } => {
                let (font, height) = match size {
                    TextSize::Large => ("bold 40px Arial", 40.0),
                    TextSize::Small => ("20px Arial", 20.0),
                };
                ctx.set_font(font);
                ctx.set_text_align("center");
                ctx.set_text_baseline("middle");
                let (x, y) = (center.x as f64, center.y as f64);

                if *backdrop {
                    let width = ctx.measure_text(text).map(|m| m.width()).unwrap_or(0.0);
                    ctx.set_fill_style_str(&css(colors::OUTLINE));
                    ctx.fill_rect(x - width / 2.0 - 10.0, y - height / 2.0 - 5.0, width + 20.0, height + 10.0);
                }
                if *shadow {
                    ctx.set_fill_style_str(&css(colors::OUTLINE));
                    ctx.fill_text(text, x + 2.0, y + 2.0).ok();
                }
                ctx.set_fill_style_str(&css(colors::TEXT));
                ctx.fill_text(text, x, y).ok();
            }
            // The web build ships no image files, so the catalog never
            // yields sprites here
            Primitive::Image { .. } => {}
        }
    }
}

impl Renderer for CanvasRenderer {
    fn draw(&mut self, view: &FrameView, assets: &AssetCatalog) {
        let prims = build_frame(view, assets);
        self.ctx.save();
        self.ctx.scale(self.scale, self.scale).ok();
        for prim in &prims {
            self.draw_primitive(prim);
        }
        self.ctx.restore();
    }
}
