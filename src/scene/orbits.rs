use std::f64::consts::PI;
use serde::Serialize;
use crate::inputs::FrameInputs;

/// Position of an orbiting body this frame. Orbits are evaluated directly
/// from elapsed time, never smoothed, so a dropped frame cannot drift them.
#[derive(Serialize, Clone, Copy, Debug)]
pub struct OrbitFrame {
    pub position: [f64; 3],
    /// Navigation light, blinking on a wall-clock interval. Always true for
    /// bodies without one.
    pub light_on: bool,
}

/// A circular or elliptical orbit in the planet's equatorial plane.
pub struct OrbitSpec {
    pub center: [f64; 3],
    pub radius_x: f64,
    pub radius_z: f64,
    pub height: f64,
    /// Radians per second.
    pub angular_speed: f64,
    pub phase: f64,
    /// Nav-light blink period in wall-clock milliseconds; 0 means no light.
    pub blink_ms: f64,
}

impl OrbitSpec {
    pub fn position_at(&self, elapsed: f64, now_ms: f64) -> OrbitFrame {
        let angle = elapsed * self.angular_speed + self.phase;
        OrbitFrame {
            position: [
                self.center[0] + self.radius_x * angle.cos(),
                self.center[1] + self.height,
                self.center[2] + self.radius_z * angle.sin(),
            ],
            light_on: self.blink_ms <= 0.0 || ((now_ms / self.blink_ms) as i64) % 2 == 0,
        }
    }
}

pub const MOON: OrbitSpec = OrbitSpec {
    center: [0.0, 0.0, 0.0],
    radius_x: 4.5,
    radius_z: 4.5,
    height: 0.6,
    angular_speed: 0.12,
    phase: 0.0,
    blink_ms: 0.0,
};

pub const SATELLITES: [OrbitSpec; 2] = [
    OrbitSpec {
        center: [0.0, 0.0, 0.0],
        radius_x: 2.8,
        radius_z: 3.4,
        height: 0.9,
        angular_speed: 0.55,
        phase: 0.0,
        blink_ms: 500.0,
    },
    OrbitSpec {
        center: [0.0, 0.0, 0.0],
        radius_x: 3.2,
        radius_z: 2.6,
        height: -0.7,
        angular_speed: 0.4,
        phase: PI,
        blink_ms: 500.0,
    },
];

#[derive(Serialize, Clone, Copy, Debug)]
pub struct RingFrame {
    pub rotation_z: f64,
    pub tilt: f64,
    pub radius: f64,
    pub color: &'static str,
}

/// Decorative torus rings around the planet, spinning at fixed rates.
pub struct RingSpec {
    pub radius: f64,
    pub speed: f64,
    pub tilt: f64,
    pub color: &'static str,
}

impl RingSpec {
    pub fn frame_at(&self, elapsed: f64) -> RingFrame {
        RingFrame {
            rotation_z: elapsed * self.speed,
            tilt: self.tilt,
            radius: self.radius,
            color: self.color,
        }
    }
}

pub const RINGS: [RingSpec; 2] = [
    RingSpec { radius: 3.0, speed: 0.1, tilt: PI / 4.0, color: "#a3e635" },
    RingSpec { radius: 3.5, speed: -0.08, tilt: -PI / 3.0, color: "#22d3ee" },
];

#[derive(Serialize, Clone, Copy, Debug)]
pub struct AccentFrame {
    pub rotation: [f64; 3],
    pub position: [f64; 3],
    pub color: &'static str,
}

/// Small wireframe octahedra floating off to the side, nudged by the
/// pointer and bobbing on a sine.
pub struct AccentSpec {
    pub anchor: [f64; 3],
    pub color: &'static str,
}

impl AccentSpec {
    pub fn frame_at(&self, inputs: &FrameInputs) -> AccentFrame {
        AccentFrame {
            rotation: [inputs.elapsed * 0.3, inputs.elapsed * 0.2, 0.0],
            position: [
                self.anchor[0] + inputs.pointer_x * 0.5,
                self.anchor[1] + inputs.pointer_y * 0.5 + inputs.elapsed.sin() * 0.3,
                self.anchor[2],
            ],
            color: self.color,
        }
    }
}

pub const ACCENTS: [AccentSpec; 3] = [
    AccentSpec { anchor: [4.0, 2.0, -3.0], color: "#a3e635" },
    AccentSpec { anchor: [5.0, -2.0, -2.0], color: "#22d3ee" },
    AccentSpec { anchor: [3.0, 3.0, -4.0], color: "#a855f7" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circular_orbit_keeps_its_radius() {
        for step in 0..100 {
            let frame = MOON.position_at(step as f64 * 0.31, 0.0);
            let [x, y, z] = frame.position;
            let r = (x * x + z * z).sqrt();
            assert!((r - 4.5).abs() < 1e-9);
            assert_eq!(y, 0.6);
        }
    }

    #[test]
    fn elliptical_orbit_stays_within_semi_axes() {
        for step in 0..500 {
            let frame = SATELLITES[0].position_at(step as f64 * 0.13, 0.0);
            let [x, _, z] = frame.position;
            assert!(x.abs() <= 2.8 + 1e-9);
            assert!(z.abs() <= 3.4 + 1e-9);
        }
    }

    #[test]
    fn nav_light_blinks_on_wall_clock_half_second() {
        let sat = &SATELLITES[0];
        assert!(sat.position_at(0.0, 0.0).light_on);
        assert!(sat.position_at(0.0, 499.0).light_on);
        assert!(!sat.position_at(0.0, 500.0).light_on);
        assert!(sat.position_at(0.0, 1000.0).light_on);
        // Independent of the animation clock.
        assert!(!sat.position_at(123.4, 700.0).light_on);
    }

    #[test]
    fn moon_has_no_blink() {
        assert!(MOON.position_at(0.0, 750.0).light_on);
    }

    #[test]
    fn opposite_phases_put_satellites_apart() {
        let a = SATELLITES[0].position_at(0.0, 0.0).position;
        let b = SATELLITES[1].position_at(0.0, 0.0).position;
        assert!(a[0] > 0.0 && b[0] < 0.0);
    }

    #[test]
    fn accents_follow_pointer() {
        let inputs = FrameInputs { pointer_x: 1.0, pointer_y: 0.0, ..Default::default() };
        let frame = ACCENTS[0].frame_at(&inputs);
        assert_eq!(frame.position[0], 4.5);
    }
}
