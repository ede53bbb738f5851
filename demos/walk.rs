extern crate env_logger;
#[macro_use]
extern crate log;
extern crate three_walk;

use std::env;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::mpsc;

use three_walk::mint;
use three_walk::scene::Aabb;
use three_walk::viewer::Builder;
use three_walk::{Backend, Camera, Error, Event, FirstPerson, Key, Loaded, Loader, Model,
                 Platform, RenderSettings};

struct Points(Vec<mint::Point3<f32>>);

impl Model for Points {
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

/// Reads the vertex positions of a Wavefront OBJ file.
struct ObjVertices;

impl ObjVertices {
    fn parse(path: &Path) -> Result<Points, Error> {
        let file = BufReader::new(File::open(path)?);
        let mut points = Vec::new();
        for line in file.lines() {
            let line = line?;
            let mut words = line.split_whitespace();
            if words.next() != Some("v") {
                continue;
            }
            let coords = words
                .take(3)
                .map(|w| w.parse::<f32>())
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| Error::asset_load(path, e))?;
            if coords.len() != 3 {
                return Err(Error::asset_load(path, format!("bad vertex `{}`", line)));
            }
            points.push([coords[0], coords[1], coords[2]].into());
        }
        Ok(Points(points))
    }
}

impl Loader for ObjVertices {
    type Model = Points;

    fn load(
        &mut self,
        path: &Path,
        done: mpsc::Sender<Loaded<Points>>,
    ) {
        let _ = done.send(Loaded {
            path: path.to_path_buf(),
            result: ObjVertices::parse(path),
        });
    }
}

/// Logs where the camera is instead of drawing.
#[derive(Default)]
struct Headless {
    vertices: usize,
}

impl Backend for Headless {
    type Model = Points;

    fn start(
        &mut self,
        settings: RenderSettings,
    ) {
        info!("Rendering at pixel ratio {}, antialias {}", settings.pixel_ratio, settings.antialias);
    }

    fn add_model(
        &mut self,
        model: Points,
    ) {
        self.vertices += model.0.len();
    }

    fn render(
        &mut self,
        camera: &Camera,
    ) -> Result<(), Error> {
        let p = camera.pose.position;
        let f = camera.pose.forward();
        info!(
            "eye ({:.2}, {:.2}, {:.2}) looking ({:.2}, {:.2}, {:.2}), {} vertices",
            p.x, p.y, p.z, f.x, f.y, f.z, self.vertices
        );
        Ok(())
    }
}

fn main() {
    env_logger::init();

    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| concat!(env!("CARGO_MANIFEST_DIR"), "/demos/room.obj").to_string());
    let agent = env::var("USER_AGENT").unwrap_or_else(|_| "Mozilla/5.0 (X11; Linux x86_64)".to_string());
    let platform = Platform::detect(&agent);

    let mut viewer = Builder::new(platform)
        .viewport(1280, 720)
        .build(FirstPerson::default(), Headless::default());
    viewer.load(&mut ObjVertices, &path);

    // a second of scripted input at 60 frames per second
    let mut frame = 0;
    viewer.run(|v| {
        match (frame, platform.mode()) {
            (0, _) => {
                v.handle(Event::PointerDown([640.0, 360.0].into()));
            }
            (1..=10, _) => {
                v.handle(Event::PointerMove([12.0, -4.0].into()));
            }
            (11, _) => {
                v.handle(Event::PointerUp);
            }
            (12, three_walk::Mode::Buttons) => {
                v.handle(Event::KeyDown(Key::W));
            }
            (12, three_walk::Mode::Joystick) => {
                v.handle(Event::JoystickDown([80.0, 640.0].into()));
                v.handle(Event::JoystickMove([80.0, 600.0].into()));
            }
            (40, three_walk::Mode::Buttons) => {
                v.handle(Event::KeyUp(Key::W));
            }
            (40, three_walk::Mode::Joystick) => {
                v.handle(Event::JoystickUp);
            }
            _ => {}
        }
        frame += 1;
        ::std::thread::sleep(::std::time::Duration::from_millis(16));
        frame <= 60
    });

    let stats = viewer.stats();
    println!(
        "{} frames, {} failed, {} models loaded",
        stats.frames, stats.failed_frames, stats.models
    );
}
