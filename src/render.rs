use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;
use crate::engine::ProfileEngine;

#[wasm_bindgen]
impl ProfileEngine {
    /// Paint the current starfield onto the mounted 2D context. The
    /// previous frame is not cleared; a low-alpha fill over it produces the
    /// motion-blur trail. Call after `tick` each frame.
    pub fn render_starfield(&mut self, ctx: &CanvasRenderingContext2d) {
        let w = self.starfield.width;
        let h = self.starfield.height;

        if !self.base_coat_painted {
            ctx.set_fill_style_str("#0a0a0f");
            ctx.fill_rect(0.0, 0.0, w, h);
            self.base_coat_painted = true;
        }

        ctx.set_fill_style_str(&format!("rgba(10, 10, 15, {})", self.config.trail_alpha));
        ctx.fill_rect(0.0, 0.0, w, h);

        for p in &self.starfield.particles {
            let star = match self.starfield.project(p) {
                Some(s) => s,
                None => continue,
            };

            // Soft glow: three stops fading from white through pale blue to
            // transparent.
            if let Ok(gradient) =
                ctx.create_radial_gradient(star.x, star.y, 0.0, star.x, star.y, star.radius * 3.0)
            {
                let _ = gradient.add_color_stop(0.0, &format!("rgba(255, 255, 255, {})", star.opacity));
                let _ = gradient.add_color_stop(0.3, &format!("rgba(200, 220, 255, {})", star.opacity * 0.5));
                let _ = gradient.add_color_stop(1.0, "rgba(100, 150, 255, 0)");
                ctx.begin_path();
                let _ = ctx.arc(star.x, star.y, star.radius * 3.0, 0.0, std::f64::consts::PI * 2.0);
                ctx.set_fill_style_canvas_gradient(&gradient);
                ctx.fill();
            }

            // Solid core.
            ctx.begin_path();
            let _ = ctx.arc(star.x, star.y, star.radius, 0.0, std::f64::consts::PI * 2.0);
            ctx.set_fill_style_str(&format!("rgba(255, 255, 255, {})", star.opacity));
            ctx.fill();
        }
    }
}
