#![warn(missing_docs)]
//! First person walk-through controls for three-style scene viewers.
//!
//! The [`Viewer`](struct.Viewer.html) merges three input channels into one
//! camera update per frame:
//!
//! * pointer drags turn the view,
//! * on touch devices a virtual [`Joystick`](struct.Joystick.html) moves the camera,
//! * elsewhere press-and-hold directional buttons and the `WASD` or arrow
//!   keys do.
//!
//! Rendering, the scene graph and model parsing live behind the
//! [`Backend`](trait.Backend.html) and [`Loader`](trait.Loader.html) traits.
//!
//! ```rust,no_run
//! extern crate three_walk;
//!
//! use three_walk::{Camera, Direction, Error, Event, FirstPerson, Platform};
//! use three_walk::scene::{Aabb, Model};
//! use three_walk::viewer::{Backend, Builder};
//!
//! struct Empty;
//!
//! impl Model for Empty {
//!     fn bounds(&self) -> Option<Aabb> { None }
//!     fn translate(&mut self, _offset: three_walk::mint::Vector3<f32>) {}
//! }
//!
//! struct Print;
//!
//! impl Backend for Print {
//!     type Model = Empty;
//!     fn add_model(&mut self, _model: Empty) {}
//!     fn render(&mut self, camera: &Camera) -> Result<(), Error> {
//!         println!("{:?}", camera.pose.position);
//!         Ok(())
//!     }
//! }
//!
//! # fn main() {
//! let platform = Platform::detect("Mozilla/5.0 (X11; Linux x86_64)");
//! let mut viewer = Builder::new(platform).build(FirstPerson::default(), Print);
//! viewer.handle(Event::ButtonPress(Direction::Forward));
//! let mut frames = 0;
//! viewer.run(|_| {
//!     frames += 1;
//!     frames <= 60
//! });
//! # }
//! ```

#[macro_use]
extern crate bitflags;
extern crate cgmath;
#[macro_use]
extern crate log;
pub extern crate mint;
#[macro_use]
extern crate quick_error;

pub mod camera;
pub mod controls;
mod error;
pub mod input;
pub mod motion;
pub mod platform;
pub mod scene;
pub mod viewer;

pub use camera::{Camera, Perspective, Pose, Projection};
pub use controls::{FirstPerson, LookControl};
pub use error::Error;
pub use input::{Buttons, Clock, Direction, Event, FixedClock, Input, Intent, Joystick, Key,
                Keys, Mode, Stick, Timer, TimerDuration};
pub use motion::{resolve, Timestep};
pub use platform::{Platform, RenderSettings};
pub use scene::{Aabb, Loaded, Loader, Model};
pub use viewer::{Backend, State, Stats, Viewer};
