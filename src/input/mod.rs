//! Input capture: pointer look, virtual joystick, directional buttons and
//! movement keys.
//!
//! Handlers here only ever touch the [`Intent`](enum.Intent.html) and the
//! look angles of a [`LookControl`](../controls/trait.LookControl.html);
//! the camera itself is moved by the [`Viewer`](../struct.Viewer.html) once
//! per frame.

use mint;

use controls::LookControl;

mod timer;
pub mod intent;
pub mod joystick;
pub mod keyboard;

pub use self::intent::{Buttons, Direction, Intent, Mode, Stick};
pub use self::joystick::Joystick;
pub use self::keyboard::{Key, Keys};
pub use self::timer::{Clock, FixedClock, Timer};

/// Time in seconds.
pub type TimerDuration = f32;

/// Default factor applied to vertical pointer travel.
pub const VERTICAL_DAMPING: f32 = 0.2;

/// Raw user event, as delivered by the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Event {
    /// Pointer pressed on the viewport.
    PointerDown(mint::Point2<f32>),
    /// Pointer travel since the previous move, in pixels.
    PointerMove(mint::Vector2<f32>),
    /// Pointer released.
    PointerUp,
    /// Touch started on the joystick, in pixels.
    JoystickDown(mint::Point2<f32>),
    /// Touch moved while holding the joystick, in pixels.
    JoystickMove(mint::Point2<f32>),
    /// Touch released from the joystick.
    JoystickUp,
    /// Directional button pressed.
    ButtonPress(Direction),
    /// Directional button released.
    ButtonRelease(Direction),
    /// Movement key pressed. Auto-repeat may deliver it again while held.
    KeyDown(Key),
    /// Movement key released.
    KeyUp(Key),
}

impl Event {
    /// Returns `true` if the host must suppress its native handling
    /// (scrolling, text selection, context menus) for this event.
    pub fn suppresses_default(&self) -> bool {
        match *self {
            Event::JoystickDown(_) |
            Event::JoystickMove(_) |
            Event::JoystickUp |
            Event::ButtonPress(_) |
            Event::ButtonRelease(_) |
            Event::KeyDown(_) |
            Event::KeyUp(_) => true,
            Event::PointerDown(_) | Event::PointerMove(_) | Event::PointerUp => false,
        }
    }
}

/// Collects user input into a movement [`Intent`](enum.Intent.html) and
/// forwards look drags to a [`LookControl`](../controls/trait.LookControl.html).
///
/// Pointer look, joystick and buttons are independent channels; only the
/// channel matching the [`Mode`](enum.Mode.html) given at creation feeds the
/// intent, events of the other one are ignored.
#[derive(Clone, Debug)]
pub struct Input {
    intent: Intent,
    joystick: Joystick,
    drag_origin: Option<mint::Point2<f32>>,
    keys: Keys,
    vertical_damping: f32,
}

impl Input {
    /// Create idle input for the given mode.
    pub fn new(mode: Mode) -> Self {
        Input {
            intent: Intent::new(mode),
            joystick: Joystick::default(),
            drag_origin: None,
            keys: Keys::empty(),
            vertical_damping: VERTICAL_DAMPING,
        }
    }

    /// Replace the joystick geometry.
    pub fn set_joystick(
        &mut self,
        joystick: Joystick,
    ) -> &mut Self {
        self.joystick = joystick;
        self
    }

    /// Sets the factor applied to vertical pointer travel.
    pub fn set_vertical_damping(
        &mut self,
        damping: f32,
    ) -> &mut Self {
        self.vertical_damping = damping;
        self
    }

    /// Active movement mode.
    pub fn mode(&self) -> Mode {
        self.intent.mode()
    }

    /// Current movement intent.
    pub fn intent(&self) -> &Intent {
        &self.intent
    }

    /// See [`Joystick`](struct.Joystick.html).
    pub fn joystick(&self) -> &Joystick {
        &self.joystick
    }

    /// Movement keys currently held.
    pub fn keys(&self) -> Keys {
        self.keys
    }

    /// Returns `true` while a look drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.drag_origin.is_some()
    }

    /// Returns `true` if nothing is held and the intent is at rest.
    pub fn is_idle(&self) -> bool {
        !self.is_dragging() && !self.joystick.is_pressed() && self.intent.is_idle()
    }

    /// Begin a look drag.
    pub fn pointer_down<P>(
        &mut self,
        point: P,
    ) where
        P: Into<mint::Point2<f32>>,
    {
        self.drag_origin = Some(point.into());
    }

    /// Turn the view by `movement` pixels if a look drag is in progress.
    ///
    /// Vertical travel is damped and the resulting pitch is clamped to the
    /// limit of `look`.
    pub fn pointer_move<V, L>(
        &mut self,
        movement: V,
        look: &mut L,
    ) where
        V: Into<mint::Vector2<f32>>,
        L: LookControl + ?Sized,
    {
        if !self.is_dragging() {
            return;
        }
        let movement = movement.into();
        if !(movement.x.is_finite() && movement.y.is_finite()) {
            return;
        }
        let speed = look.look_speed();
        let yaw = look.yaw() + movement.x * speed;
        let pitch = look.pitch() - movement.y * speed * self.vertical_damping;
        let limit = look.pitch_limit();
        look.set_yaw(yaw);
        look.set_pitch(pitch.max(-limit).min(limit));
    }

    /// End the look drag.
    pub fn pointer_up(&mut self) {
        self.drag_origin = None;
    }

    /// Start a joystick drag.
    pub fn joystick_down<P>(
        &mut self,
        point: P,
    ) where
        P: Into<mint::Point2<f32>>,
    {
        if self.mode() != Mode::Joystick {
            debug!("Ignoring joystick press in {:?} mode", self.mode());
            return;
        }
        self.joystick.press(point);
    }

    /// Continue the joystick drag.
    pub fn joystick_move<P>(
        &mut self,
        point: P,
    ) where
        P: Into<mint::Point2<f32>>,
    {
        if let Some(stick) = self.joystick.drag(point) {
            self.intent = Intent::Vector(stick);
        }
    }

    /// Release the joystick, stopping joystick movement.
    pub fn joystick_up(&mut self) {
        if self.mode() != Mode::Joystick {
            return;
        }
        self.intent = Intent::Vector(self.joystick.release());
    }

    /// Hold a directional button. Pressing a held button again has no effect.
    pub fn button_press(
        &mut self,
        direction: Direction,
    ) {
        match self.intent {
            Intent::Discrete(ref mut buttons) => buttons.insert(direction.flag()),
            Intent::Vector(_) => debug!("Ignoring {:?} button in joystick mode", direction),
        }
    }

    /// Release a directional button.
    pub fn button_release(
        &mut self,
        direction: Direction,
    ) {
        if let Intent::Discrete(ref mut buttons) = self.intent {
            buttons.remove(direction.flag());
        }
    }

    /// Hold a movement key, pressing the button it is bound to.
    pub fn key_down(
        &mut self,
        key: Key,
    ) {
        if self.mode() != Mode::Buttons {
            debug!("Ignoring {:?} key in {:?} mode", key, self.mode());
            return;
        }
        self.keys.insert(key.flag());
        self.button_press(key.direction());
    }

    /// Release a movement key. Its button stays held while another key bound
    /// to the same direction is down.
    pub fn key_up(
        &mut self,
        key: Key,
    ) {
        if !self.keys.contains(key.flag()) {
            return;
        }
        self.keys.remove(key.flag());
        let direction = key.direction();
        if !self.keys.holds(direction) {
            self.button_release(direction);
        }
    }

    /// Route a raw event to the matching handler.
    pub fn handle<L>(
        &mut self,
        event: Event,
        look: &mut L,
    ) where
        L: LookControl + ?Sized,
    {
        match event {
            Event::PointerDown(point) => self.pointer_down(point),
            Event::PointerMove(movement) => self.pointer_move(movement, look),
            Event::PointerUp => self.pointer_up(),
            Event::JoystickDown(point) => self.joystick_down(point),
            Event::JoystickMove(point) => self.joystick_move(point),
            Event::JoystickUp => self.joystick_up(),
            Event::ButtonPress(direction) => self.button_press(direction),
            Event::ButtonRelease(direction) => self.button_release(direction),
            Event::KeyDown(key) => self.key_down(key),
            Event::KeyUp(key) => self.key_up(key),
        }
    }
}
