use serde::Serialize;
use crate::starfield::Lcg;

/// The comet leaves the scene on the -x side and respawns past the +x side
/// after a short randomized pause.
const EXIT_X: f64 = -14.0;
const SPAWN_X: f64 = 14.0;
const DRIFT: [f64; 3] = [-3.2, -0.6, 0.0];
const TRAIL_LENGTH: f64 = 2.4;
const TRAIL_WIDTH: f64 = 0.08;

#[derive(Serialize, Clone, Copy, Debug)]
pub struct CometFrame {
    pub position: [f64; 3],
    /// Unit vector pointing from the head back along the trail.
    pub trail_direction: [f64; 3],
    pub trail_length: f64,
    pub trail_width: f64,
    /// False while waiting out a respawn delay.
    pub visible: bool,
}

pub struct CometState {
    position: [f64; 3],
    /// Seconds left before the next spawn; zero while flying.
    delay: f64,
    rng: Lcg,
}

impl CometState {
    pub fn new(mut rng: Lcg) -> CometState {
        let position = spawn_position(&mut rng);
        CometState { position, delay: 0.0, rng }
    }

    pub fn advance(&mut self, delta: f64) -> CometFrame {
        if self.delay > 0.0 {
            self.delay -= delta;
            if self.delay <= 0.0 {
                self.position = spawn_position(&mut self.rng);
            }
            return CometFrame {
                position: self.position,
                trail_direction: trail_direction(),
                trail_length: TRAIL_LENGTH,
                trail_width: TRAIL_WIDTH,
                visible: false,
            };
        }

        for i in 0..3 {
            self.position[i] += DRIFT[i] * delta;
        }
        if self.position[0] < EXIT_X {
            self.delay = 0.5 + self.rng.next() * 2.5;
        }

        CometFrame {
            position: self.position,
            trail_direction: trail_direction(),
            trail_length: TRAIL_LENGTH,
            trail_width: TRAIL_WIDTH,
            visible: self.delay <= 0.0,
        }
    }
}

fn spawn_position(rng: &mut Lcg) -> [f64; 3] {
    [
        SPAWN_X + rng.next() * 6.0,
        2.0 + rng.next() * 4.0,
        -6.0 + rng.next() * 4.0,
    ]
}

fn trail_direction() -> [f64; 3] {
    let len = (DRIFT[0] * DRIFT[0] + DRIFT[1] * DRIFT[1] + DRIFT[2] * DRIFT[2]).sqrt();
    [-DRIFT[0] / len, -DRIFT[1] / len, -DRIFT[2] / len]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_until_exit(comet: &mut CometState) -> CometFrame {
        for _ in 0..10_000 {
            let frame = comet.advance(1.0 / 60.0);
            if !frame.visible {
                return frame;
            }
        }
        panic!("comet never left the bounding range");
    }

    #[test]
    fn comet_drifts_left_and_down() {
        let mut comet = CometState::new(Lcg::new(9));
        let before = comet.advance(1.0 / 60.0).position;
        let after = comet.advance(1.0 / 60.0).position;
        assert!(after[0] < before[0]);
        assert!(after[1] < before[1]);
    }

    #[test]
    fn exit_triggers_delay_then_respawn_far_right() {
        let mut comet = CometState::new(Lcg::new(9));
        let exit_frame = run_until_exit(&mut comet);
        assert!(exit_frame.position[0] < EXIT_X);

        // Wait out the delay; the head must come back past the spawn line.
        for _ in 0..10_000 {
            let frame = comet.advance(1.0 / 60.0);
            if frame.visible {
                assert!(frame.position[0] > SPAWN_X - 1.0);
                return;
            }
        }
        panic!("comet never respawned");
    }

    #[test]
    fn trail_points_back_along_the_drift() {
        let dir = trail_direction();
        assert!(dir[0] > 0.0);
        assert!(dir[1] > 0.0);
        let len = (dir[0] * dir[0] + dir[1] * dir[1] + dir[2] * dir[2]).sqrt();
        assert!((len - 1.0).abs() < 1e-12);
    }
}
