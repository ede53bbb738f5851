//! Directional intent shared between the input handlers and the frame loop.

use cgmath::{InnerSpace, Vector2};
use mint;

/// Which kind of movement input a session uses.
///
/// Picked once at startup, see [`Platform::mode`](../../platform/enum.Platform.html#method.mode).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Continuous on-screen joystick, used on touch devices.
    Joystick,
    /// Press-and-hold directional buttons.
    Buttons,
}

/// One of the four directional buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Away from the viewer.
    Forward,
    /// Toward the viewer.
    Back,
    /// Strafe left.
    Left,
    /// Strafe right.
    Right,
}

impl Direction {
    /// Flag corresponding to this direction.
    pub fn flag(self) -> Buttons {
        match self {
            Direction::Forward => Buttons::FORWARD,
            Direction::Back => Buttons::BACK,
            Direction::Left => Buttons::LEFT,
            Direction::Right => Buttons::RIGHT,
        }
    }
}

bitflags! {
    /// Set of directional buttons currently held down.
    #[derive(Default)]
    pub struct Buttons: u8 {
        /// See [`Direction::Forward`](enum.Direction.html#variant.Forward).
        const FORWARD = 0b0001;
        /// See [`Direction::Back`](enum.Direction.html#variant.Back).
        const BACK = 0b0010;
        /// See [`Direction::Left`](enum.Direction.html#variant.Left).
        const LEFT = 0b0100;
        /// See [`Direction::Right`](enum.Direction.html#variant.Right).
        const RIGHT = 0b1000;
    }
}

impl Buttons {
    fn axis(&self, pos: Buttons, neg: Buttons) -> f32 {
        match (self.contains(pos), self.contains(neg)) {
            (true, false) => 1.0,
            (false, true) => -1.0,
            _ => 0.0,
        }
    }
}

/// Joystick deflection in input space.
///
/// `lateral` is positive to the right, `forward` is positive away from the
/// viewer. The pair is either zero or a unit vector; `magnitude` carries the
/// deflection strength in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stick {
    /// Sideways component.
    pub lateral: f32,
    /// Forward component.
    pub forward: f32,
    /// Deflection strength.
    pub magnitude: f32,
}

impl Stick {
    /// Stick at rest.
    pub const IDLE: Stick = Stick {
        lateral: 0.0,
        forward: 0.0,
        magnitude: 0.0,
    };
}

impl Default for Stick {
    fn default() -> Self {
        Stick::IDLE
    }
}

/// Directional desire of the user, persisting across frames until new input
/// changes it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Intent {
    /// Joystick driven movement.
    Vector(Stick),
    /// Button driven movement.
    Discrete(Buttons),
}

impl Intent {
    /// Create an idle intent for the given mode.
    pub fn new(mode: Mode) -> Self {
        match mode {
            Mode::Joystick => Intent::Vector(Stick::IDLE),
            Mode::Buttons => Intent::Discrete(Buttons::empty()),
        }
    }

    /// The mode this intent belongs to.
    pub fn mode(&self) -> Mode {
        match *self {
            Intent::Vector(_) => Mode::Joystick,
            Intent::Discrete(_) => Mode::Buttons,
        }
    }

    /// Returns `true` if the intent is in its initial state.
    pub fn is_idle(&self) -> bool {
        *self == Intent::new(self.mode())
    }

    /// Direction of travel as `(lateral, forward)`, never longer than `1.0`.
    ///
    /// Joystick intent keeps its magnitude, so a partial deflection yields a
    /// shorter vector. Button intent is normalized, so diagonals are as fast as
    /// a single axis and opposing buttons cancel out.
    pub fn direction(&self) -> mint::Vector2<f32> {
        let dir = match *self {
            Intent::Vector(stick) => {
                let v = Vector2::new(stick.lateral, stick.forward);
                if stick.magnitude <= 0.0 || v.magnitude2() == 0.0 {
                    Vector2::new(0.0, 0.0)
                } else {
                    v.normalize() * stick.magnitude.min(1.0)
                }
            }
            Intent::Discrete(buttons) => {
                let v = Vector2::new(
                    buttons.axis(Buttons::RIGHT, Buttons::LEFT),
                    buttons.axis(Buttons::FORWARD, Buttons::BACK),
                );
                if v.magnitude2() == 0.0 {
                    v
                } else {
                    v.normalize()
                }
            }
        };
        dir.into()
    }
}
