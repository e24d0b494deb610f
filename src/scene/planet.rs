use std::f64::consts::PI;
use serde::Serialize;
use super::lerp;
use crate::inputs::FrameInputs;

/// Earth's axial tilt, 23.5 degrees in radians.
pub const AXIAL_TILT: f64 = 23.5 / 360.0 * 2.0 * PI;

/// Cloud-shadow texture drift per frame. The original tuned this against a
/// 60 fps frame estimate, so it stays a per-frame constant rather than a
/// delta-scaled rate.
const UV_DRIFT_PER_FRAME: f64 = (0.016 * 0.02) / (2.0 * PI);

/// How far the planet travels horizontally over the full scroll range.
const SCROLL_TRAVEL_X: f64 = 1.2;

/// Fresnel uniforms for one additive back-face atmosphere shell.
#[derive(Serialize, Clone, Copy, Debug)]
pub struct AtmosphereShell {
    pub scale: f64,
    pub opacity: f64,
    pub pow_factor: f64,
    pub multiplier: f64,
}

pub const ATMOSPHERE_SHELLS: [AtmosphereShell; 2] = [
    AtmosphereShell { scale: 1.12, opacity: 0.6, pow_factor: 4.1, multiplier: 9.5 },
    AtmosphereShell { scale: 1.2, opacity: 0.2, pow_factor: 2.0, multiplier: 3.0 },
];

#[derive(Serialize, Clone, Debug)]
pub struct PlanetFrame {
    /// Self-rotation of the planet mesh.
    pub spin_y: f64,
    /// Self-rotation of the cloud shell, slightly faster than the surface.
    pub clouds_spin_y: f64,
    /// Smoothed pointer-follow rotation of the whole group, plus tilt.
    pub group_rotation: [f64; 3],
    pub group_position: [f64; 3],
    pub scale: f64,
    /// Horizontal offset of the cloud-shadow texture, wrapped to [0, 1).
    pub cloud_uv_offset: f64,
    pub atmosphere: [AtmosphereShell; 2],
}

/// The smoothed members survive across frames; everything else in
/// [`PlanetFrame`] is a closed-form function of the inputs.
pub struct PlanetState {
    rot_x: f64,
    rot_y: f64,
    pos_x: f64,
    pos_y: f64,
    uv_offset: f64,
}

impl PlanetState {
    pub fn new() -> PlanetState {
        PlanetState { rot_x: 0.0, rot_y: 0.0, pos_x: 0.0, pos_y: 0.0, uv_offset: 0.0 }
    }

    pub fn advance(&mut self, inputs: &FrameInputs) -> PlanetFrame {
        // Pointer axes are swapped on purpose: horizontal pointer motion
        // tips the planet, vertical motion turns it.
        let target_x = inputs.pointer_x * 0.1;
        let target_y = -(inputs.pointer_y * 0.1);
        self.rot_x = lerp(self.rot_x, target_x, 0.05);
        self.rot_y = lerp(self.rot_y, target_y, 0.05);

        self.pos_y = lerp(self.pos_y, -(inputs.scroll_y * 0.002), 0.1);
        self.pos_x = lerp(self.pos_x, ease_in_out(inputs.scroll_progress) * SCROLL_TRAVEL_X, 0.08);

        self.uv_offset = (self.uv_offset + UV_DRIFT_PER_FRAME).fract();

        let float_y = (inputs.elapsed * 0.5).sin() * 0.15;
        let breathe = 1.0 + 0.02 * (inputs.elapsed * 0.8).sin();

        PlanetFrame {
            spin_y: inputs.elapsed * 0.05,
            clouds_spin_y: inputs.elapsed * 0.07,
            group_rotation: [self.rot_x, self.rot_y, AXIAL_TILT],
            group_position: [self.pos_x, self.pos_y + float_y, 0.0],
            scale: breathe,
            cloud_uv_offset: self.uv_offset,
            atmosphere: ATMOSPHERE_SHELLS,
        }
    }
}

/// Cubic ease-in-out over [0, 1].
pub fn ease_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs_at(elapsed: f64) -> FrameInputs {
        FrameInputs { elapsed, delta: 0.016, ..Default::default() }
    }

    #[test]
    fn spin_is_proportional_to_elapsed() {
        let mut planet = PlanetState::new();
        let frame = planet.advance(&inputs_at(10.0));
        assert!((frame.spin_y - 0.5).abs() < 1e-12);
        assert!((frame.clouds_spin_y - 0.7).abs() < 1e-12);
    }

    #[test]
    fn group_rotation_approaches_pointer_target() {
        let mut planet = PlanetState::new();
        let inputs = FrameInputs { pointer_x: 1.0, pointer_y: -1.0, ..Default::default() };
        let mut last = 0.0;
        for _ in 0..300 {
            last = planet.advance(&inputs).group_rotation[0];
        }
        assert!((last - 0.1).abs() < 1e-4);
        assert_eq!(planet.advance(&inputs).group_rotation[2], AXIAL_TILT);
    }

    #[test]
    fn uv_offset_wraps_below_one() {
        let mut planet = PlanetState::new();
        let inputs = inputs_at(0.0);
        for _ in 0..100_000 {
            let frame = planet.advance(&inputs);
            assert!(frame.cloud_uv_offset >= 0.0 && frame.cloud_uv_offset < 1.0);
        }
    }

    #[test]
    fn ease_is_monotonic_with_fixed_endpoints() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(1.0), 1.0);
        assert_eq!(ease_in_out(0.5), 0.5);
        let mut prev = 0.0;
        for i in 1..=100 {
            let v = ease_in_out(i as f64 / 100.0);
            assert!(v >= prev);
            prev = v;
        }
    }

    #[test]
    fn scroll_moves_planet_down() {
        let mut planet = PlanetState::new();
        let inputs = FrameInputs { scroll_y: 500.0, scroll_progress: 0.5, ..Default::default() };
        let mut y = 0.0;
        for _ in 0..300 {
            y = planet.advance(&inputs).group_position[1];
        }
        // Smoothed toward -scroll_y * 0.002 = -1.0, plus the float wobble.
        assert!(y < -0.8);
    }
}
