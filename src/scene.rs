use serde::Serialize;
use crate::inputs::FrameInputs;
use crate::starfield::Lcg;

pub mod planet;
pub mod orbits;
pub mod comet;
pub mod cloud;

use planet::{PlanetState, PlanetFrame};
use orbits::{OrbitFrame, RingFrame, AccentFrame, MOON, SATELLITES, RINGS, ACCENTS};
use comet::{CometState, CometFrame};
use cloud::{CloudState, CloudFrame};

/// Exponential smoothing toward a target, `t` fraction per frame. The only
/// place cross-frame state enters the transform math.
pub fn lerp(current: f64, target: f64, t: f64) -> f64 {
    current + (target - current) * t
}

/// One frame's worth of transforms for every object in the planet scene.
/// Serialized to the host, which applies it to its retained scene graph.
/// Everything in here is derived; nothing is read back.
#[derive(Serialize, Clone, Debug)]
pub struct SceneFrame {
    pub planet: PlanetFrame,
    pub moon: OrbitFrame,
    pub satellites: Vec<OrbitFrame>,
    pub rings: Vec<RingFrame>,
    pub accents: Vec<AccentFrame>,
    pub comet: CometFrame,
    pub cloud: CloudFrame,
}

/// Retained state for the 3D scene: the smoothed planet transforms, the
/// comet's drift and the particle cloud's fixed point set. All per-frame
/// output is recomputed in [`SceneState::advance`].
pub struct SceneState {
    pub planet: PlanetState,
    pub comet: CometState,
    pub cloud: CloudState,
}

impl SceneState {
    pub fn new(seed: u32) -> SceneState {
        let mut rng = Lcg::new(seed);
        SceneState {
            planet: PlanetState::new(),
            cloud: CloudState::new(&mut rng),
            comet: CometState::new(rng),
        }
    }

    pub fn advance(&mut self, inputs: &FrameInputs) -> SceneFrame {
        SceneFrame {
            planet: self.planet.advance(inputs),
            moon: MOON.position_at(inputs.elapsed, inputs.now_ms),
            satellites: SATELLITES
                .iter()
                .map(|s| s.position_at(inputs.elapsed, inputs.now_ms))
                .collect(),
            rings: RINGS.iter().map(|r| r.frame_at(inputs.elapsed)).collect(),
            accents: ACCENTS.iter().map(|a| a.frame_at(inputs)).collect(),
            comet: self.comet.advance(inputs.delta),
            cloud: self.cloud.advance(inputs),
        }
    }
}
