//! Virtual on-screen joystick.

use mint;

use input::intent::Stick;

/// Default knob travel in pixels.
pub const RADIUS: f32 = 40.0;
/// Default drag distance in pixels below which the stick stays at rest.
pub const DEAD_ZONE: f32 = 10.0;

/// Converts drags on the joystick area into [`Stick`](struct.Stick.html) deflections.
///
/// The drag is measured from the point where it started. Its length is
/// clamped to the radius, so dragging far outside the joystick keeps the
/// direction but not the distance.
#[derive(Clone, Debug)]
pub struct Joystick {
    radius: f32,
    dead_zone: f32,
    analog: bool,
    anchor: Option<mint::Point2<f32>>,
    indicator: mint::Vector2<f32>,
}

impl Default for Joystick {
    fn default() -> Self {
        Joystick::new(RADIUS, DEAD_ZONE)
    }
}

impl Joystick {
    /// Create a joystick with the given radius and dead zone, in pixels.
    ///
    /// The dead zone is clamped to the radius.
    pub fn new(
        radius: f32,
        dead_zone: f32,
    ) -> Self {
        let radius = radius.max(0.0);
        Joystick {
            radius,
            dead_zone: dead_zone.max(0.0).min(radius),
            analog: false,
            anchor: None,
            indicator: [0.0, 0.0].into(),
        }
    }

    /// Whether the deflection strength should follow the drag distance.
    ///
    /// When disabled (the default), any drag past the dead zone moves at full
    /// speed.
    pub fn set_analog(
        &mut self,
        analog: bool,
    ) -> &mut Self {
        self.analog = analog;
        self
    }

    /// Knob travel in pixels.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Dead zone in pixels.
    pub fn dead_zone(&self) -> f32 {
        self.dead_zone
    }

    /// Returns `true` while a drag is in progress.
    pub fn is_pressed(&self) -> bool {
        self.anchor.is_some()
    }

    /// Offset of the knob from the joystick centre, in pixels.
    ///
    /// Only meant for drawing the knob; it never feeds into movement.
    pub fn indicator(&self) -> mint::Vector2<f32> {
        self.indicator
    }

    /// Start a drag at `point`.
    pub fn press<P>(
        &mut self,
        point: P,
    ) where
        P: Into<mint::Point2<f32>>,
    {
        self.anchor = Some(point.into());
    }

    /// Continue the drag. Returns `None` if no drag is in progress.
    pub fn drag<P>(
        &mut self,
        point: P,
    ) -> Option<Stick>
    where
        P: Into<mint::Point2<f32>>,
    {
        let anchor = self.anchor?;
        let point = point.into();
        let dx = point.x - anchor.x;
        let dy = point.y - anchor.y;
        if !(dx.is_finite() && dy.is_finite()) {
            self.indicator = [0.0, 0.0].into();
            return Some(Stick::IDLE);
        }

        let distance = (dx * dx + dy * dy).sqrt().min(self.radius);
        let angle = dy.atan2(dx);
        let (sin, cos) = angle.sin_cos();
        self.indicator = [cos * distance, sin * distance].into();

        if distance < self.dead_zone || distance == 0.0 {
            return Some(Stick::IDLE);
        }
        let magnitude = if self.analog {
            (distance / self.radius).min(1.0)
        } else {
            1.0
        };
        // screen y grows downwards, dragging up means forward
        Some(Stick {
            lateral: cos,
            forward: -sin,
            magnitude,
        })
    }

    /// Finish the drag, putting the knob back to the centre.
    pub fn release(&mut self) -> Stick {
        self.anchor = None;
        self.indicator = [0.0, 0.0].into();
        Stick::IDLE
    }
}
