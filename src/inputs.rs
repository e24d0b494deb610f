use serde::{Serialize, Deserialize};

/// Ambient signals sampled by the host once per animation frame. Everything
/// the update code needs is in here, so the whole simulation can be driven
/// from a test without a window or a canvas.
#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
#[serde(default)]
pub struct FrameInputs {
    pub width: f64,
    pub height: f64,
    /// Pointer mapped to [-1, 1], x right-positive, y up-positive.
    pub pointer_x: f64,
    pub pointer_y: f64,
    /// Raw vertical scroll offset in pixels.
    pub scroll_y: f64,
    /// scroll_y / max scrollable range, clamped to [0, 1].
    pub scroll_progress: f64,
    /// Seconds since the engine was constructed.
    pub elapsed: f64,
    /// Seconds since the previous frame.
    pub delta: f64,
    /// Wall-clock milliseconds, for effects tied to real time (nav light).
    pub now_ms: f64,
}

impl Default for FrameInputs {
    fn default() -> FrameInputs {
        FrameInputs {
            width: 0.0,
            height: 0.0,
            pointer_x: 0.0,
            pointer_y: 0.0,
            scroll_y: 0.0,
            scroll_progress: 0.0,
            elapsed: 0.0,
            delta: 0.0,
            now_ms: 0.0,
        }
    }
}

/// Map client-space pointer coordinates to [-1, 1]. The y axis flips so up
/// is positive, matching the scene's coordinate system.
pub fn pointer_from_client(client_x: f64, client_y: f64, width: f64, height: f64) -> (f64, f64) {
    if width <= 0.0 || height <= 0.0 {
        return (0.0, 0.0);
    }
    let x = (client_x / width) * 2.0 - 1.0;
    let y = -(client_y / height) * 2.0 + 1.0;
    (x.clamp(-1.0, 1.0), y.clamp(-1.0, 1.0))
}

/// Normalize a scroll offset against the maximum scrollable range. A page
/// with no overflow reports zero progress.
pub fn scroll_progress(scroll_y: f64, scroll_range: f64) -> f64 {
    if scroll_range <= 0.0 {
        return 0.0;
    }
    (scroll_y / scroll_range).clamp(0.0, 1.0)
}
