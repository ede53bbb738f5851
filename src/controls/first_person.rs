use cgmath::{Deg, InnerSpace, Quaternion, Rotation3, Vector3};
use mint;

use camera::Pose;
use input::TimerDuration;

/// Default pitch limit in degrees.
pub const PITCH_LIMIT: f32 = 85.0;

/// Orientation half of a first person camera.
///
/// Implementors own the look angles. The viewer feeds pointer drags into
/// them and calls [`update`](trait.LookControl.html#tymethod.update) exactly
/// once per frame, after movement has been applied.
///
/// Angles are in degrees. A yaw of `-90` looks down `-Z`, growing yaw turns
/// right; positive pitch looks up.
pub trait LookControl {
    /// Degrees of rotation per pixel of pointer travel.
    fn look_speed(&self) -> f32;
    /// Sets the look sensitivity.
    fn set_look_speed(&mut self, speed: f32);
    /// Movement speed in world units per second.
    fn movement_speed(&self) -> f32;
    /// Sets the movement speed.
    fn set_movement_speed(&mut self, speed: f32);
    /// Whether the controller's own pointer handling may change pitch.
    fn look_vertical(&self) -> bool;
    /// Enables or disables vertical look of the controller's own pointer handling.
    fn set_look_vertical(&mut self, value: bool);
    /// Horizontal look angle.
    fn yaw(&self) -> f32;
    /// Sets the horizontal look angle.
    fn set_yaw(&mut self, yaw: f32);
    /// Vertical look angle.
    fn pitch(&self) -> f32;
    /// Sets the vertical look angle.
    fn set_pitch(&mut self, pitch: f32);
    /// Largest pitch angle in degrees, both up and down.
    fn pitch_limit(&self) -> f32;
    /// Sets the pitch limit. Values are taken by magnitude and capped at 90.
    fn set_pitch_limit(&mut self, limit: f32);
    /// Integrates the look angles into the pose orientation.
    fn update(&mut self, pose: &mut Pose, delta: TimerDuration);
}

/// Direction of view for the given yaw and pitch, in degrees.
pub fn look_direction(
    yaw: f32,
    pitch: f32,
) -> mint::Vector3<f32> {
    let (sin_yaw, cos_yaw) = yaw.to_radians().sin_cos();
    let (sin_pitch, cos_pitch) = pitch.to_radians().sin_cos();
    [cos_pitch * cos_yaw, sin_pitch, cos_pitch * sin_yaw].into()
}

/// Controls for first person camera.
///
/// Only handles orientation; movement is resolved by the viewer. Optionally it
/// can also turn toward the pointer while it hovers away from the viewport
/// centre, see [`hover`](struct.FirstPerson.html#method.hover).
#[derive(Clone, Debug)]
pub struct FirstPerson {
    yaw: f32,
    pitch: f32,
    pitch_limit: f32,
    move_speed: f32,
    look_speed: f32,
    vertical_look: bool,
    active_look: bool,
    pointer: mint::Vector2<f32>,
}

/// Constructs custom [`FirstPerson`](struct.FirstPerson.html) controls.
#[derive(Clone, Debug)]
pub struct Builder {
    yaw: f32,
    pitch: f32,
    pitch_limit: f32,
    move_speed: f32,
    look_speed: f32,
    vertical_look: bool,
    active_look: bool,
}

impl Default for Builder {
    fn default() -> Self {
        Builder::new()
    }
}

impl Builder {
    /// Create new `Builder` with default parameters.
    pub fn new() -> Self {
        Builder {
            yaw: -90.0,
            pitch: 0.0,
            pitch_limit: PITCH_LIMIT,
            move_speed: 2.5,
            look_speed: 0.125,
            vertical_look: false,
            active_look: false,
        }
    }

    /// Set the initial yaw angle in degrees.
    ///
    /// Default is -90.0, looking down `-Z`.
    pub fn yaw(
        &mut self,
        yaw: f32,
    ) -> &mut Self {
        self.yaw = yaw;
        self
    }

    /// Set the initial pitch angle in degrees.
    ///
    /// Defaults to 0.0.
    pub fn pitch(
        &mut self,
        pitch: f32,
    ) -> &mut Self {
        self.pitch = pitch;
        self
    }

    /// Set the initial yaw and pitch from a viewing direction.
    ///
    /// Zero vectors are ignored.
    pub fn looking_along<V>(
        &mut self,
        direction: V,
    ) -> &mut Self
    where
        V: Into<mint::Vector3<f32>>,
    {
        let dir = Vector3::from(direction.into());
        if dir.magnitude2() > 0.0 {
            let dir = dir.normalize();
            self.yaw = dir.z.atan2(dir.x).to_degrees();
            self.pitch = dir.y.asin().to_degrees();
        }
        self
    }

    /// Setup the largest pitch angle in degrees, both up and down.
    ///
    /// Defaults to 85.0.
    pub fn pitch_limit(
        &mut self,
        limit: f32,
    ) -> &mut Self {
        self.pitch_limit = limit.abs().min(90.0);
        self
    }

    /// Setup the movement speed in world units per second.
    ///
    /// Defaults to 2.5 world units per second.
    pub fn move_speed(
        &mut self,
        speed: f32,
    ) -> &mut Self {
        self.move_speed = speed;
        self
    }

    /// Setup pointer sensitivity in degrees per pixel.
    ///
    /// Defaults to 0.125
    pub fn look_speed(
        &mut self,
        speed: f32,
    ) -> &mut Self {
        self.look_speed = speed;
        self
    }

    /// Setup whether hover look can adjust pitch.
    ///
    /// Defaults to false.
    pub fn vertical_look(
        &mut self,
        value: bool,
    ) -> &mut Self {
        self.vertical_look = value;
        self
    }

    /// Setup whether the camera turns toward a hovering pointer.
    ///
    /// Defaults to false, unlike classic first person controls that turn
    /// on hover out of the box: the viewer already turns the camera on
    /// drags, and both together would apply the same pointer twice.
    pub fn active_look(
        &mut self,
        value: bool,
    ) -> &mut Self {
        self.active_look = value;
        self
    }

    /// Finalize builder and create new `FirstPerson` controls.
    pub fn build(&mut self) -> FirstPerson {
        FirstPerson {
            yaw: self.yaw,
            pitch: self.pitch.max(-self.pitch_limit).min(self.pitch_limit),
            pitch_limit: self.pitch_limit,
            move_speed: self.move_speed,
            look_speed: self.look_speed,
            vertical_look: self.vertical_look,
            active_look: self.active_look,
            pointer: [0.0, 0.0].into(),
        }
    }
}

impl Default for FirstPerson {
    fn default() -> Self {
        Builder::new().build()
    }
}

impl FirstPerson {
    /// Create a `Builder`.
    pub fn builder() -> Builder {
        Builder::new()
    }

    /// Specifies whether the camera turns toward a hovering pointer.
    pub fn set_active_look(
        &mut self,
        value: bool,
    ) -> &mut Self {
        self.active_look = value;
        self
    }

    /// Records the pointer offset from the viewport centre, in pixels.
    ///
    /// Only used while active look is enabled.
    pub fn hover<V>(
        &mut self,
        offset: V,
    ) where
        V: Into<mint::Vector2<f32>>,
    {
        self.pointer = offset.into();
    }

    /// Current view direction.
    pub fn direction(&self) -> mint::Vector3<f32> {
        look_direction(self.yaw, self.pitch)
    }
}

impl LookControl for FirstPerson {
    fn look_speed(&self) -> f32 {
        self.look_speed
    }

    fn set_look_speed(
        &mut self,
        speed: f32,
    ) {
        self.look_speed = speed;
    }

    fn movement_speed(&self) -> f32 {
        self.move_speed
    }

    fn set_movement_speed(
        &mut self,
        speed: f32,
    ) {
        self.move_speed = speed;
    }

    fn look_vertical(&self) -> bool {
        self.vertical_look
    }

    fn set_look_vertical(
        &mut self,
        value: bool,
    ) {
        self.vertical_look = value;
    }

    fn yaw(&self) -> f32 {
        self.yaw
    }

    fn set_yaw(
        &mut self,
        yaw: f32,
    ) {
        self.yaw = yaw;
    }

    fn pitch(&self) -> f32 {
        self.pitch
    }

    fn set_pitch(
        &mut self,
        pitch: f32,
    ) {
        self.pitch = pitch;
    }

    fn pitch_limit(&self) -> f32 {
        self.pitch_limit
    }

    fn set_pitch_limit(
        &mut self,
        limit: f32,
    ) {
        self.pitch_limit = limit.abs().min(90.0);
    }

    /// Applies hover look if enabled, clamps the pitch and writes the
    /// resulting orientation into `pose`. Position is left untouched.
    fn update(
        &mut self,
        pose: &mut Pose,
        delta: TimerDuration,
    ) {
        if self.active_look {
            let dlook = delta * self.look_speed;
            self.yaw += dlook * self.pointer.x;
            if self.vertical_look {
                self.pitch -= dlook * self.pointer.y;
            }
        }
        self.pitch = self.pitch.max(-self.pitch_limit).min(self.pitch_limit);

        let yrot = Quaternion::from_angle_y(Deg(-(self.yaw + 90.0)));
        let xrot = Quaternion::from_angle_x(Deg(self.pitch));
        pose.orientation = (yrot * xrot).into();
    }
}
