//! Primitives for creating and driving a [`Viewer`](struct.Viewer.html).

use std::path::Path;
use std::sync::mpsc;

use mint;

use camera::{Camera, Perspective, Pose};
use controls::LookControl;
use error::Error;
use input::{Clock, Event, Input, Joystick, Timer};
use input::joystick::{DEAD_ZONE, RADIUS};
use motion::{self, Timestep};
use platform::{Platform, RenderSettings};
use scene::{self, Loaded, Loader, Model};

/// Default height of the eye above the ground.
pub const EYE_HEIGHT: f32 = 1.5;

/// Renderer and scene owner the viewer draws through.
pub trait Backend {
    /// Type of the models the backend can hold.
    type Model: Model;

    /// Called once when the frame loop starts.
    fn start(
        &mut self,
        _settings: RenderSettings,
    ) {
    }

    /// Insert an already centered model into the scene.
    fn add_model(
        &mut self,
        model: Self::Model,
    );

    /// Resize the output surface.
    fn resize(
        &mut self,
        _width: u32,
        _height: u32,
    ) {
    }

    /// Draw the scene as seen by `camera`.
    fn render(
        &mut self,
        camera: &Camera,
    ) -> Result<(), Error>;
}

/// Frame loop state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum State {
    /// Frame loop not started yet.
    Idle,
    /// Frame loop running; there is no way back.
    Running,
}

/// Counters kept by the frame loop.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    /// Ticks executed.
    pub frames: u64,
    /// Ticks whose rendering failed.
    pub failed_frames: u64,
    /// Models added to the scene.
    pub models: u64,
}

/// First person scene viewer.
///
/// Owns the frame clock, the input state, the look controls and the camera.
/// Input events can arrive at any time between frames through
/// [`handle`](struct.Viewer.html#method.handle); they are observed by the next
/// [`tick`](struct.Viewer.html#method.tick).
pub struct Viewer<L, B, C = Timer>
where
    B: Backend,
{
    state: State,
    platform: Platform,
    input: Input,
    look: L,
    backend: B,
    clock: C,
    camera: Camera,
    eye_height: f32,
    timestep: Timestep,
    loaded_tx: mpsc::Sender<Loaded<B::Model>>,
    loaded_rx: mpsc::Receiver<Loaded<B::Model>>,
    stats: Stats,
}

/// Builder for creating new [`Viewer`](struct.Viewer.html) with desired parameters.
#[derive(Clone, Debug)]
pub struct Builder {
    platform: Platform,
    position: mint::Point3<f32>,
    eye_height: f32,
    timestep: Timestep,
    projection: Perspective,
    viewport: Option<(u32, u32)>,
    joystick: Joystick,
    analog_joystick: bool,
    vertical_damping: f32,
    pitch_limit: Option<f32>,
}

impl Builder {
    /// Create new `Builder` with standard parameters for `platform`.
    pub fn new(platform: Platform) -> Self {
        Builder {
            platform,
            position: [0.0, EYE_HEIGHT, 3.0].into(),
            eye_height: EYE_HEIGHT,
            timestep: Timestep::Delta,
            projection: Perspective::default(),
            viewport: None,
            joystick: Joystick::new(RADIUS, DEAD_ZONE),
            analog_joystick: false,
            vertical_damping: ::input::VERTICAL_DAMPING,
            pitch_limit: None,
        }
    }

    /// Set the initial camera position. Its height is replaced by the eye height.
    ///
    /// Defaults to `(0, 1.5, 3)`.
    pub fn position<P>(
        &mut self,
        position: P,
    ) -> &mut Self
    where
        P: Into<mint::Point3<f32>>,
    {
        self.position = position.into();
        self
    }

    /// Set the fixed height of the camera. Defaults to 1.5.
    pub fn eye_height(
        &mut self,
        height: f32,
    ) -> &mut Self {
        self.eye_height = height;
        self
    }

    /// Set how movement scales with frame time. Defaults to `Timestep::Delta`.
    pub fn timestep(
        &mut self,
        timestep: Timestep,
    ) -> &mut Self {
        self.timestep = timestep;
        self
    }

    /// Set the perspective projection. Defaults to 75° vertical FOV, 0.1 to 1000 depth range.
    pub fn projection(
        &mut self,
        projection: Perspective,
    ) -> &mut Self {
        self.projection = projection;
        self
    }

    /// Set the initial viewport size in pixels.
    pub fn viewport(
        &mut self,
        width: u32,
        height: u32,
    ) -> &mut Self {
        self.viewport = Some((width, height));
        self
    }

    /// Set the joystick radius and dead zone in pixels. Defaults to 40 and 10.
    pub fn joystick(
        &mut self,
        radius: f32,
        dead_zone: f32,
    ) -> &mut Self {
        self.joystick = Joystick::new(radius, dead_zone);
        self
    }

    /// Whether joystick speed follows the drag distance. Defaults to `false`.
    pub fn analog_joystick(
        &mut self,
        analog: bool,
    ) -> &mut Self {
        self.analog_joystick = analog;
        self
    }

    /// Set the factor applied to vertical drag look. Defaults to 0.2.
    pub fn vertical_damping(
        &mut self,
        damping: f32,
    ) -> &mut Self {
        self.vertical_damping = damping;
        self
    }

    /// Override the pitch limit of the look controls, in degrees.
    ///
    /// Applies to drag look and to the per-frame update alike. Left alone,
    /// the look controls keep their own limit (85 for `FirstPerson`).
    pub fn pitch_limit(
        &mut self,
        limit: f32,
    ) -> &mut Self {
        self.pitch_limit = Some(limit);
        self
    }

    /// Create new `Viewer` timed by the system clock.
    pub fn build<L, B>(
        &self,
        look: L,
        backend: B,
    ) -> Viewer<L, B>
    where
        L: LookControl,
        B: Backend,
    {
        self.build_with_clock(look, backend, Timer::new())
    }

    /// Create new `Viewer` timed by `clock`.
    pub fn build_with_clock<L, B, C>(
        &self,
        mut look: L,
        backend: B,
        clock: C,
    ) -> Viewer<L, B, C>
    where
        L: LookControl,
        B: Backend,
        C: Clock,
    {
        let mut joystick = self.joystick.clone();
        joystick.set_analog(self.analog_joystick);
        let mut input = Input::new(self.platform.mode());
        input
            .set_joystick(joystick)
            .set_vertical_damping(self.vertical_damping);
        if let Some(limit) = self.pitch_limit {
            look.set_pitch_limit(limit);
        }

        let mut pose = Pose::new(self.position);
        pose.position.y = self.eye_height;
        look.update(&mut pose, 0.0);
        let mut camera = Camera::new(pose, self.projection.clone());
        if let Some((width, height)) = self.viewport {
            camera.set_viewport(width, height);
        }

        let (loaded_tx, loaded_rx) = mpsc::channel();
        Viewer {
            state: State::Idle,
            platform: self.platform,
            input,
            look,
            backend,
            clock,
            camera,
            eye_height: self.eye_height,
            timestep: self.timestep,
            loaded_tx,
            loaded_rx,
            stats: Stats::default(),
        }
    }
}

impl<L, B, C> Viewer<L, B, C>
where
    L: LookControl,
    B: Backend,
    C: Clock,
{
    /// Current frame loop state.
    pub fn state(&self) -> State {
        self.state
    }

    /// Platform the viewer was built for.
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// See [`Input`](struct.Input.html).
    pub fn input(&self) -> &Input {
        &self.input
    }

    /// See [`LookControl`](trait.LookControl.html).
    pub fn look(&self) -> &L {
        &self.look
    }

    /// Mutable access to the look controls, e.g. to change their speeds.
    pub fn look_mut(&mut self) -> &mut L {
        &mut self.look
    }

    /// See [`Camera`](struct.Camera.html).
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// See [`Backend`](trait.Backend.html).
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Mutable access to the backend.
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Frame loop counters.
    pub fn stats(&self) -> Stats {
        self.stats
    }

    /// Enter the `Running` state. Starting twice has no effect.
    pub fn start(&mut self) {
        if self.state == State::Running {
            return;
        }
        let settings = self.platform.render_settings();
        info!(
            "Starting frame loop: {:?} platform, {:?} input, pixel ratio {}",
            self.platform,
            self.input.mode(),
            settings.pixel_ratio
        );
        self.backend.start(settings);
        self.state = State::Running;
    }

    /// Feed a user event. Returns `true` if the host should suppress its
    /// default handling of the event.
    pub fn handle(
        &mut self,
        event: Event,
    ) -> bool {
        self.input.handle(event, &mut self.look);
        event.suppresses_default()
    }

    /// Viewport resize. Only affects projection and the output surface.
    pub fn resize(
        &mut self,
        width: u32,
        height: u32,
    ) {
        if self.camera.set_viewport(width, height) {
            self.backend.resize(width, height);
        } else {
            warn!("Ignoring degenerate viewport {}x{}", width, height);
        }
    }

    /// Request a model from `loader`.
    ///
    /// Once loaded, the model is centered on the origin and added to the
    /// backend at the start of the next frame. Failures are logged and the
    /// viewer carries on without the model.
    pub fn load<P, Ld>(
        &self,
        loader: &mut Ld,
        path: P,
    ) where
        P: AsRef<Path>,
        Ld: Loader<Model = B::Model>,
    {
        loader.load(path.as_ref(), self.loaded_tx.clone());
    }

    fn process_loaded(&mut self) {
        while let Ok(Loaded { path, result }) = self.loaded_rx.try_recv() {
            match result {
                Ok(mut model) => {
                    match scene::center(&mut model) {
                        Some(offset) => debug!("Centering {} by {:?}", path.display(), offset),
                        None => warn!("{} has no bounds, leaving it in place", path.display()),
                    }
                    self.backend.add_model(model);
                    self.stats.models += 1;
                    info!("Loaded {}", path.display());
                }
                Err(err) => error!("Failed to load {}: {}", path.display(), err),
            }
        }
    }

    /// Run one frame: move the camera according to the current intent, let
    /// the look controls orient it and render.
    ///
    /// Does nothing unless the viewer is `Running`. A failed render is logged
    /// and counted, it never stops the loop.
    pub fn tick(&mut self) {
        if self.state != State::Running {
            return;
        }
        self.process_loaded();

        let delta = self.clock.delta();
        let distance = self.look.movement_speed() * self.timestep.step(delta);
        match self.camera.pose.forward_xz() {
            Some(forward) => {
                let offset = motion::resolve(self.input.intent(), forward, distance);
                self.camera.pose.translate(offset);
                trace!("Moved by {:?} in {}s", offset, delta);
            }
            None => trace!("Looking straight up or down, not moving"),
        }
        self.camera.pose.position.y = self.eye_height;

        self.look.update(&mut self.camera.pose, delta);
        // look controls may move the camera as well
        self.camera.pose.position.y = self.eye_height;

        self.stats.frames += 1;
        if let Err(err) = self.backend.render(&self.camera) {
            self.stats.failed_frames += 1;
            error!("Frame {} failed: {}", self.stats.frames, err);
        }
    }

    /// Start and keep ticking for as long as `pump` returns `true`.
    ///
    /// `pump` runs between frames; it is where the host delivers events and
    /// waits for the next display refresh. Returning `false` means teardown.
    pub fn run<F>(
        &mut self,
        mut pump: F,
    ) where
        F: FnMut(&mut Self) -> bool,
    {
        self.start();
        while pump(self) {
            self.tick();
        }
        info!(
            "Frame loop finished after {} frames ({} failed)",
            self.stats.frames,
            self.stats.failed_frames
        );
    }
}
