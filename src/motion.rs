//! Motion resolution: movement intent to camera displacement.

use cgmath::{InnerSpace, Vector3};
use mint;

use input::{Intent, TimerDuration};

/// How far the camera may travel in one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Timestep {
    /// Scale movement by the frame time, so speed is in units per second
    /// regardless of the frame rate.
    Delta,
    /// Move by a fixed fraction of the speed every frame, ignoring frame time.
    Fixed(TimerDuration),
}

impl Default for Timestep {
    fn default() -> Self {
        Timestep::Delta
    }
}

impl Timestep {
    /// Seconds worth of movement to apply for a frame lasting `delta`.
    pub fn step(
        &self,
        delta: TimerDuration,
    ) -> TimerDuration {
        match *self {
            Timestep::Delta => delta.max(0.0),
            Timestep::Fixed(step) => step.max(0.0),
        }
    }
}

/// Projects `forward` onto the ground plane and normalizes it.
///
/// Returns `None` for vertical or degenerate directions.
pub fn flatten<V>(forward: V) -> Option<mint::Vector3<f32>>
where
    V: Into<mint::Vector3<f32>>,
{
    let forward = Vector3::from(forward.into());
    let flat = Vector3::new(forward.x, 0.0, forward.z);
    if flat.magnitude2() > 1e-12 {
        Some(flat.normalize().into())
    } else {
        None
    }
}

/// Computes the displacement of the camera for one frame.
///
/// `forward` is the viewing direction; only its horizontal part matters.
/// `distance` is the travel at full intent, i.e. speed times the frame step.
///
/// The result never has a vertical component. It is zero when the intent is
/// at rest or the camera looks straight up or down. The intent is only read.
pub fn resolve<V>(
    intent: &Intent,
    forward: V,
    distance: f32,
) -> mint::Vector3<f32>
where
    V: Into<mint::Vector3<f32>>,
{
    let zero = Vector3::new(0.0, 0.0, 0.0);
    let dir = intent.direction();
    if (dir.x == 0.0 && dir.y == 0.0) || !distance.is_finite() {
        return zero.into();
    }

    let flat = match flatten(forward) {
        Some(flat) => Vector3::from(flat),
        None => return zero.into(),
    };
    let right = flat.cross(Vector3::unit_y());

    let offset = (flat * dir.y + right * dir.x) * distance;
    Vector3::new(offset.x, 0.0, offset.z).into()
}
