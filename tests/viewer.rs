extern crate env_logger;
extern crate three_walk;

use std::path::Path;
use std::sync::mpsc;

use three_walk::mint;
use three_walk::scene::Aabb;
use three_walk::viewer::Builder;
use three_walk::{Backend, Camera, Direction, Error, Event, FirstPerson, FixedClock, Key, Loaded,
                 Loader, LookControl, Model, Platform, RenderSettings, State, Timestep, Viewer};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[derive(Debug)]
struct Cloud(Vec<mint::Point3<f32>>);

impl Model for Cloud {
    fn bounds(&self) -> Option<Aabb> {
        Aabb::from_points(self.0.iter().cloned())
    }

    fn translate(
        &mut self,
        offset: mint::Vector3<f32>,
    ) {
        for p in &mut self.0 {
            p.x += offset.x;
            p.y += offset.y;
            p.z += offset.z;
        }
    }
}

/// Records every frame; optionally fails every n-th render.
#[derive(Default)]
struct Recorder {
    settings: Option<RenderSettings>,
    poses: Vec<mint::Point3<f32>>,
    models: Vec<Cloud>,
    sizes: Vec<(u32, u32)>,
    fail_every: Option<usize>,
    attempts: usize,
}

impl Backend for Recorder {
    type Model = Cloud;

    fn start(
        &mut self,
        settings: RenderSettings,
    ) {
        self.settings = Some(settings);
    }

    fn add_model(
        &mut self,
        model: Cloud,
    ) {
        self.models.push(model);
    }

    fn resize(
        &mut self,
        width: u32,
        height: u32,
    ) {
        self.sizes.push((width, height));
    }

    fn render(
        &mut self,
        camera: &Camera,
    ) -> Result<(), Error> {
        self.attempts += 1;
        if let Some(n) = self.fail_every {
            if self.attempts % n == 0 {
                return Err(Error::Render(format!("lost context on attempt {}", self.attempts)));
            }
        }
        self.poses.push(camera.pose.position);
        Ok(())
    }
}

/// Answers load requests from memory, synchronously.
struct Memory;

impl Loader for Memory {
    type Model = Cloud;

    fn load(
        &mut self,
        path: &Path,
        done: mpsc::Sender<Loaded<Cloud>>,
    ) {
        let result = if path.ends_with("room.glb") {
            Ok(Cloud(vec![[10.0, 0.0, -4.0].into(), [14.0, 3.0, 2.0].into()]))
        } else {
            Err(Error::asset_load(path, "no such bundle"))
        };
        let _ = done.send(Loaded {
            path: path.to_path_buf(),
            result,
        });
    }
}

fn viewer(
    platform: Platform,
    delta: f32,
) -> Viewer<FirstPerson, Recorder, FixedClock> {
    init_logging();
    let mut viewer = Builder::new(platform).build_with_clock(
        FirstPerson::default(),
        Recorder::default(),
        FixedClock::new(delta),
    );
    viewer.start();
    viewer
}

fn position(viewer: &Viewer<FirstPerson, Recorder, FixedClock>) -> [f32; 3] {
    let p = viewer.camera().pose.position;
    [p.x, p.y, p.z]
}

fn close(
    a: [f32; 3],
    b: [f32; 3],
) -> bool {
    a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < 1e-5)
}

#[test]
fn joystick_forward_moves_along_view() {
    let mut viewer = viewer(Platform::Touch, 0.1);
    assert_eq!(viewer.state(), State::Running);
    viewer.handle(Event::JoystickDown([100.0, 100.0].into()));
    viewer.handle(Event::JoystickMove([100.0, 40.0].into()));
    viewer.tick();
    assert!(close(position(&viewer), [0.0, 1.5, 2.75]), "{:?}", position(&viewer));

    // intent persists across frames until released
    viewer.tick();
    assert!(close(position(&viewer), [0.0, 1.5, 2.5]));
    viewer.handle(Event::JoystickUp);
    viewer.tick();
    assert!(close(position(&viewer), [0.0, 1.5, 2.5]));
    assert!(viewer.input().is_idle());
}

#[test]
fn joystick_dead_zone_does_not_move() {
    let mut viewer = viewer(Platform::Touch, 0.1);
    viewer.handle(Event::JoystickDown([100.0, 100.0].into()));
    viewer.handle(Event::JoystickMove([104.0, 97.0].into()));
    for _ in 0..10 {
        viewer.tick();
    }
    assert!(close(position(&viewer), [0.0, 1.5, 3.0]));
    let knob = viewer.input().joystick().indicator();
    assert!((knob.x - 4.0).abs() < 1e-4 && (knob.y + 3.0).abs() < 1e-4);
}

#[test]
fn opposing_buttons_stay_put() {
    let mut viewer = viewer(Platform::Desktop, 0.1);
    viewer.handle(Event::ButtonPress(Direction::Forward));
    viewer.handle(Event::ButtonPress(Direction::Back));
    for _ in 0..3 {
        viewer.tick();
    }
    assert!(close(position(&viewer), [0.0, 1.5, 3.0]));
}

#[test]
fn diagonal_buttons_move_at_single_axis_speed() {
    let mut viewer = viewer(Platform::Desktop, 1.0);
    viewer.handle(Event::ButtonPress(Direction::Forward));
    viewer.handle(Event::ButtonPress(Direction::Right));
    viewer.tick();
    let p = position(&viewer);
    let travelled = (p[0] * p[0] + (p[2] - 3.0) * (p[2] - 3.0)).sqrt();
    assert!((travelled - 2.5).abs() < 1e-4);
    assert!(p[0] > 0.0 && p[2] < 3.0);
}

#[test]
fn drag_look_steers_movement() {
    let mut viewer = viewer(Platform::Desktop, 0.1);
    viewer.handle(Event::PointerDown([400.0, 300.0].into()));
    // 720 px at 0.125 degrees per px turns right by 90 degrees
    viewer.handle(Event::PointerMove([720.0, 0.0].into()));
    viewer.handle(Event::PointerUp);
    assert!((viewer.look().yaw() - 0.0).abs() < 1e-4);

    // the first tick orients the camera, movement follows on the next
    viewer.tick();
    viewer.handle(Event::ButtonPress(Direction::Forward));
    viewer.tick();
    assert!(close(position(&viewer), [0.25, 1.5, 3.0]), "{:?}", position(&viewer));
}

#[test]
fn eye_height_holds_for_any_input() {
    let mut viewer = viewer(Platform::Desktop, 0.05);
    let events = [
        Event::PointerDown([0.0, 0.0].into()),
        Event::PointerMove([13.0, -900.0].into()),
        Event::ButtonPress(Direction::Forward),
        Event::PointerMove([-250.0, 4000.0].into()),
        Event::ButtonPress(Direction::Left),
        Event::ButtonRelease(Direction::Forward),
        Event::PointerMove([77.0, -33.0].into()),
        Event::ButtonPress(Direction::Back),
        Event::PointerUp,
    ];
    for event in events.iter() {
        viewer.handle(*event);
        viewer.tick();
        assert_eq!(viewer.camera().pose.position.y, 1.5);
        let pitch = viewer.look().pitch();
        assert!(pitch >= -85.0 && pitch <= 85.0);
    }
    assert!(viewer.backend().poses.iter().all(|p| p.y == 1.5));
}

#[test]
fn failed_frames_do_not_stop_the_loop() {
    init_logging();
    let mut recorder = Recorder::default();
    recorder.fail_every = Some(2);
    let mut viewer = Builder::new(Platform::Desktop).build_with_clock(
        FirstPerson::default(),
        recorder,
        FixedClock::new(0.1),
    );
    let mut frames = 0;
    viewer.run(|v| {
        if frames == 3 {
            v.handle(Event::ButtonPress(Direction::Back));
        }
        frames += 1;
        frames <= 10
    });
    let stats = viewer.stats();
    assert_eq!(stats.frames, 10);
    assert_eq!(stats.failed_frames, 5);
    assert_eq!(viewer.backend().attempts, 10);
    // movement kept going through the failures
    assert!(close(position(&viewer), [0.0, 1.5, 3.0 + 7.0 * 0.25]), "{:?}", position(&viewer));
}

#[test]
fn loaded_models_are_centered() {
    let mut viewer = viewer(Platform::Desktop, 0.1);
    let mut loader = Memory;
    viewer.load(&mut loader, "model/room.glb");
    viewer.load(&mut loader, "model/missing.glb");
    assert!(viewer.backend().models.is_empty());

    viewer.tick();
    let backend = viewer.backend();
    assert_eq!(backend.models.len(), 1);
    let center = backend.models[0].bounds().unwrap().center();
    assert_eq!(center, mint::Point3::from([0.0, 0.0, 0.0]));
    assert_eq!(viewer.stats().models, 1);
    assert_eq!(viewer.stats().failed_frames, 0);
    assert_eq!(backend.poses.len(), 1);
}

#[test]
fn resize_only_touches_projection() {
    let mut viewer = viewer(Platform::Touch, 0.1);
    viewer.resize(1280, 720);
    viewer.resize(0, 720);
    assert!((viewer.camera().aspect() - 1280.0 / 720.0).abs() < 1e-6);
    assert_eq!(viewer.backend().sizes, vec![(1280, 720)]);
    assert!(viewer.input().is_idle());
    assert_eq!(viewer.backend().settings, Some(Platform::Touch.render_settings()));
}

#[test]
fn fixed_timestep_ignores_frame_time() {
    init_logging();
    let mut viewer = Builder::new(Platform::Desktop)
        .timestep(Timestep::Fixed(0.05))
        .build_with_clock(FirstPerson::default(), Recorder::default(), FixedClock::new(0.5));
    viewer.look_mut().set_movement_speed(15.0);
    viewer.start();
    viewer.handle(Event::ButtonPress(Direction::Forward));
    viewer.tick();
    assert!(close(position(&viewer), [0.0, 1.5, 2.25]));
}

#[test]
fn suppressed_events_are_reported() {
    let mut viewer = viewer(Platform::Desktop, 0.1);
    assert!(viewer.handle(Event::ButtonPress(Direction::Left)));
    assert!(!viewer.handle(Event::PointerDown([1.0, 1.0].into())));
}

#[test]
fn pitch_limit_survives_the_frame() {
    init_logging();
    let mut viewer = Builder::new(Platform::Desktop)
        .pitch_limit(89.0)
        .build_with_clock(FirstPerson::default(), Recorder::default(), FixedClock::new(0.1));
    viewer.start();
    viewer.handle(Event::PointerDown([0.0, 0.0].into()));
    viewer.handle(Event::PointerMove([0.0, -1.0e5].into()));
    assert_eq!(viewer.look().pitch(), 89.0);
    viewer.tick();
    assert_eq!(viewer.look().pitch(), 89.0);
    assert_eq!(viewer.look().pitch_limit(), 89.0);
}

#[test]
fn keyboard_walks_on_desktop() {
    let mut viewer = viewer(Platform::Desktop, 0.1);
    // held key auto-repeats between frames
    for _ in 0..3 {
        assert!(viewer.handle(Event::KeyDown(Key::W)));
    }
    viewer.tick();
    assert!(close(position(&viewer), [0.0, 1.5, 2.75]), "{:?}", position(&viewer));

    viewer.handle(Event::KeyUp(Key::W));
    viewer.handle(Event::KeyDown(Key::Right));
    viewer.tick();
    assert!(close(position(&viewer), [0.25, 1.5, 2.75]), "{:?}", position(&viewer));

    viewer.handle(Event::KeyUp(Key::Right));
    viewer.tick();
    assert!(close(position(&viewer), [0.25, 1.5, 2.75]));
    assert!(viewer.input().is_idle());
}
