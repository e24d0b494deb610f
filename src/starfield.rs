use std::f64::consts::PI;

/// Deterministic LCG so the field is reproducible under test. Same
/// generator the old canvas backgrounds used.
pub struct Lcg {
    seed: f64,
}

impl Lcg {
    pub fn new(seed: u32) -> Lcg {
        Lcg { seed: seed as f64 }
    }

    /// Uniform in [0, 1).
    pub fn next(&mut self) -> f64 {
        self.seed = (self.seed * 1103515245.0 + 12345.0) % 2147483648.0;
        self.seed / 2147483648.0
    }
}

/// A point star flying toward the viewer. `z` is the simulated depth,
/// decremented each frame; the rest are fixed per-particle attributes drawn
/// once at spawn.
#[derive(Clone, Debug)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub size: f64,
    pub speed: f64,
    pub opacity: f64,
    pub twinkle_speed: f64,
    pub twinkle_phase: f64,
    pub current_opacity: f64,
}

impl Particle {
    fn spawn(rng: &mut Lcg, width: f64, height: f64) -> Particle {
        let opacity = rng.next() * 0.5 + 0.3;
        Particle {
            x: rng.next() * width,
            y: rng.next() * height,
            z: rng.next() * width,
            size: rng.next() * 2.0 + 0.5,
            speed: rng.next() * 0.5 + 0.2,
            opacity,
            twinkle_speed: rng.next() * 0.02 + 0.01,
            twinkle_phase: rng.next() * PI * 2.0,
            current_opacity: opacity,
        }
    }
}

/// A star's screen-space footprint after perspective projection. `None`
/// from [`StarField::project`] means the star falls outside the surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectedStar {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub opacity: f64,
}

/// The 2D starfield simulation. Pure state + math; painting happens in
/// `render.rs` against whatever context the page mounted.
pub struct StarField {
    pub width: f64,
    pub height: f64,
    pub particles: Vec<Particle>,
    density: f64,
    rng: Lcg,
}

impl StarField {
    pub fn new(width: f64, height: f64, density: f64, seed: u32) -> StarField {
        let mut field = StarField {
            width,
            height,
            particles: Vec::new(),
            density: if density > 0.0 { density } else { 3000.0 },
            rng: Lcg::new(seed),
        };
        field.repopulate();
        field
    }

    /// Surface resized: regenerate the whole population for the new layout.
    /// Old particles are not carried over.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.repopulate();
    }

    fn repopulate(&mut self) {
        let count = ((self.width * self.height) / self.density).floor().max(0.0) as usize;
        self.particles.clear();
        for _ in 0..count {
            self.particles.push(Particle::spawn(&mut self.rng, self.width, self.height));
        }
    }

    /// One frame of simulation: depth advance, recycle at the near plane,
    /// twinkle phase advance.
    pub fn step(&mut self) {
        let (w, h) = (self.width, self.height);
        for p in &mut self.particles {
            p.z -= p.speed * 2.0;
            if p.z <= 0.0 {
                p.z = w;
                p.x = self.rng.next() * w;
                p.y = self.rng.next() * h;
            }
            p.twinkle_phase += p.twinkle_speed;
            p.current_opacity = p.opacity * (0.7 + 0.3 * p.twinkle_phase.sin());
        }
    }

    /// Perspective-project one particle onto the surface. Skips stars whose
    /// center lands outside the visible rectangle.
    pub fn project(&self, p: &Particle) -> Option<ProjectedStar> {
        let scale = self.width / p.z;
        let x2d = (p.x - self.width / 2.0) * scale + self.width / 2.0;
        let y2d = (p.y - self.height / 2.0) * scale + self.height / 2.0;
        if x2d < 0.0 || x2d > self.width || y2d < 0.0 || y2d > self.height {
            return None;
        }
        Some(ProjectedStar {
            x: x2d,
            y: y2d,
            radius: p.size * scale * 0.5,
            opacity: p.current_opacity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn population_matches_area_over_density() {
        let field = StarField::new(800.0, 600.0, 3000.0, 7);
        assert_eq!(field.particles.len(), 160);
        for p in &field.particles {
            assert!(p.z > 0.0 && p.z <= 800.0, "initial depth {} out of range", p.z);
        }
    }

    #[test]
    fn resize_regenerates_population() {
        let mut field = StarField::new(800.0, 600.0, 3000.0, 7);
        field.resize(300.0, 200.0);
        assert_eq!(field.particles.len(), 20);
        for p in &field.particles {
            assert!(p.x <= 300.0 && p.y <= 200.0);
        }
    }

    #[test]
    fn recycle_fires_exactly_at_near_plane() {
        let mut field = StarField::new(400.0, 300.0, 3000.0, 7);
        field.particles[0].z = 0.05;
        field.particles[0].speed = 1.0;
        field.step();
        let p = &field.particles[0];
        assert_eq!(p.z, 400.0);
        assert!(p.x >= 0.0 && p.x <= 400.0);
        assert!(p.y >= 0.0 && p.y <= 300.0);
    }

    #[test]
    fn depth_never_stays_at_or_below_zero() {
        let mut field = StarField::new(400.0, 300.0, 3000.0, 42);
        for _ in 0..5000 {
            field.step();
            for p in &field.particles {
                assert!(p.z > 0.0);
            }
        }
    }

    #[test]
    fn twinkle_stays_within_base_opacity_band() {
        let mut field = StarField::new(400.0, 300.0, 3000.0, 3);
        for _ in 0..200 {
            field.step();
            for p in &field.particles {
                assert!(p.current_opacity >= p.opacity * 0.4 - 1e-9);
                assert!(p.current_opacity <= p.opacity * 1.0 + 1e-9);
            }
        }
    }

    #[test]
    fn projection_skips_offscreen_stars() {
        let field = StarField::new(400.0, 300.0, 3000.0, 7);
        let mut p = field.particles[0].clone();
        // Far from center at shallow depth projects way off the surface.
        p.x = 399.0;
        p.y = 1.0;
        p.z = 1.0;
        assert_eq!(field.project(&p), None);
    }

    #[test]
    fn projection_centers_and_scales() {
        let field = StarField::new(400.0, 300.0, 3000.0, 7);
        let mut p = field.particles[0].clone();
        p.x = 200.0;
        p.y = 150.0;
        p.z = 200.0;
        p.size = 1.0;
        let proj = field.project(&p).unwrap();
        assert_eq!((proj.x, proj.y), (200.0, 150.0));
        assert_eq!(proj.radius, 1.0); // scale 2.0 * size 1.0 * 0.5
    }
}
