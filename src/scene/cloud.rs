use std::f64::consts::PI;
use serde::Serialize;
use crate::inputs::FrameInputs;
use crate::starfield::Lcg;

const COUNT: usize = 300;

const PALETTE: [[f64; 3]; 4] = [
    [0.639, 0.902, 0.208], // #a3e635
    [0.133, 0.827, 0.933], // #22d3ee
    [0.659, 0.333, 0.969], // #a855f7
    [1.0, 1.0, 1.0],
];

/// One point of the ambient particle cloud. Spawned once on a spherical
/// shell around the planet and never moved individually; the whole cloud
/// rotates as a unit.
#[derive(Serialize, Clone, Copy, Debug)]
pub struct CloudPoint {
    pub position: [f64; 3],
    pub color: [f64; 3],
    pub size: f64,
}

#[derive(Serialize, Clone, Copy, Debug)]
pub struct CloudFrame {
    pub rotation: [f64; 3],
    pub position_y: f64,
    pub scale: f64,
}

pub struct CloudState {
    pub points: Vec<CloudPoint>,
}

impl CloudState {
    pub fn new(rng: &mut Lcg) -> CloudState {
        let mut points = Vec::with_capacity(COUNT);
        for _ in 0..COUNT {
            let radius = 5.0 + rng.next() * 15.0;
            let theta = rng.next() * PI * 2.0;
            let phi = rng.next() * PI;
            points.push(CloudPoint {
                position: [
                    radius * phi.sin() * theta.cos(),
                    radius * phi.sin() * theta.sin(),
                    radius * phi.cos() - 5.0,
                ],
                color: PALETTE[(rng.next() * PALETTE.len() as f64) as usize % PALETTE.len()],
                size: rng.next() * 0.1 + 0.02,
            });
        }
        CloudState { points }
    }

    pub fn advance(&mut self, inputs: &FrameInputs) -> CloudFrame {
        CloudFrame {
            rotation: [
                inputs.pointer_y * 0.1,
                inputs.elapsed * 0.02 + inputs.pointer_x * 0.1,
                0.0,
            ],
            position_y: -inputs.scroll_y * 0.002,
            scale: 1.0 + 0.05 * (inputs.elapsed * 1.5).sin(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_spawn_on_the_shell() {
        let mut rng = Lcg::new(11);
        let cloud = CloudState::new(&mut rng);
        assert_eq!(cloud.points.len(), COUNT);
        for p in &cloud.points {
            let [x, y, z] = p.position;
            // Undo the -5 recentering on z before measuring the radius.
            let r = (x * x + y * y + (z + 5.0) * (z + 5.0)).sqrt();
            assert!((5.0 - 1e-9..=20.0 + 1e-9).contains(&r), "radius {} off shell", r);
            assert!(p.size >= 0.02 && p.size <= 0.12);
        }
    }

    #[test]
    fn rotation_tracks_clock_and_pointer() {
        let mut rng = Lcg::new(11);
        let mut cloud = CloudState::new(&mut rng);
        let inputs = FrameInputs { elapsed: 10.0, pointer_x: 0.5, pointer_y: -0.5, ..Default::default() };
        let frame = cloud.advance(&inputs);
        assert!((frame.rotation[1] - (0.2 + 0.05)).abs() < 1e-12);
        assert!((frame.rotation[0] + 0.05).abs() < 1e-12);
    }

    #[test]
    fn pulse_stays_within_five_percent() {
        let mut rng = Lcg::new(11);
        let mut cloud = CloudState::new(&mut rng);
        for step in 0..1000 {
            let inputs = FrameInputs { elapsed: step as f64 * 0.01, ..Default::default() };
            let frame = cloud.advance(&inputs);
            assert!(frame.scale >= 0.95 && frame.scale <= 1.05);
        }
    }
}
