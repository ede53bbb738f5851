//! Camera pose and projection.

use cgmath::{perspective as cgmath_perspective, Deg, InnerSpace, Matrix4, Point3, Quaternion,
             Vector3};
use mint;

use motion;

/// Default vertical field of view in degrees.
pub const FOV_Y: f32 = 75.0;

/// Generic trait for different graphics projections.
pub trait Projection {
    /// Represents projection as projection matrix.
    fn get_matrix(&self, aspect: f32) -> mint::ColumnMatrix4<f32>;
}

/// Perspective projection parameters.
/// See [`Perspective projection`](https://en.wikipedia.org/wiki/3D_projection#Perspective_projection).
#[derive(Clone, Debug, PartialEq)]
pub struct Perspective {
    /// Vertical field of view in degrees.
    /// Note: the horizontal FOV is computed based on the aspect.
    pub fov_y: f32,
    /// Distance to the near clipping plane.
    pub near: f32,
    /// Distance to the far clipping plane.
    pub far: f32,
}

impl Default for Perspective {
    fn default() -> Self {
        Perspective {
            fov_y: FOV_Y,
            near: 0.1,
            far: 1000.0,
        }
    }
}

impl Projection for Perspective {
    fn get_matrix(&self, aspect: f32) -> mint::ColumnMatrix4<f32> {
        let m: [[f32; 4]; 4];
        m = cgmath_perspective(Deg(self.fov_y),
                               aspect, self.near, self.far
                               ).into();
        m.into()
    }
}

/// Position and orientation of the camera.
///
/// With the identity orientation the camera looks down `-Z` with `+Y` up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    /// Eye position in world space.
    pub position: mint::Point3<f32>,
    /// Rotation from view space to world space.
    pub orientation: mint::Quaternion<f32>,
}

impl Pose {
    /// Create a pose at `position` with the identity orientation.
    pub fn new<P>(position: P) -> Self
    where
        P: Into<mint::Point3<f32>>,
    {
        Pose {
            position: position.into(),
            orientation: Quaternion::new(1.0, 0.0, 0.0, 0.0).into(),
        }
    }

    /// Unit vector the camera is looking along.
    pub fn forward(&self) -> mint::Vector3<f32> {
        let rot = Quaternion::from(self.orientation);
        (rot * -Vector3::unit_z()).normalize().into()
    }

    /// Viewing direction projected onto the ground plane and normalized.
    ///
    /// Returns `None` when looking straight up or down.
    pub fn forward_xz(&self) -> Option<mint::Vector3<f32>> {
        motion::flatten(self.forward())
    }

    /// Move by `offset`, componentwise.
    pub fn translate<V>(
        &mut self,
        offset: V,
    ) where
        V: Into<mint::Vector3<f32>>,
    {
        let p = Point3::from(self.position) + Vector3::from(offset.into());
        self.position = p.into();
    }

    /// World to view space transform.
    pub fn view_matrix(&self) -> mint::ColumnMatrix4<f32> {
        let rot = Quaternion::from(self.orientation).conjugate();
        let disp = -Vector3::from([self.position.x, self.position.y, self.position.z]);
        (Matrix4::from(rot) * Matrix4::from_translation(disp)).into()
    }
}

/// Camera with a pose, a projection and the viewport aspect ratio.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera<P = Perspective> {
    /// Where the camera is and where it looks.
    pub pose: Pose,
    /// See [`Projection`](trait.Projection.html).
    pub projection: P,
    aspect: f32,
}

impl<P: Projection> Camera<P> {
    /// Create a new camera with a square viewport.
    pub fn new(
        pose: Pose,
        projection: P,
    ) -> Self {
        Camera {
            pose,
            projection,
            aspect: 1.0,
        }
    }

    /// Viewport width divided by height.
    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// Update the aspect ratio from the viewport size in pixels.
    ///
    /// Degenerate sizes are ignored and `false` is returned.
    pub fn set_viewport(
        &mut self,
        width: u32,
        height: u32,
    ) -> bool {
        if width == 0 || height == 0 {
            return false;
        }
        self.aspect = width as f32 / height as f32;
        true
    }

    /// Projection matrix for the current aspect ratio.
    pub fn projection_matrix(&self) -> mint::ColumnMatrix4<f32> {
        self.projection.get_matrix(self.aspect)
    }

    /// Combined view and projection matrix.
    pub fn matrix(&self) -> mint::ColumnMatrix4<f32> {
        let proj = Matrix4::from(self.projection_matrix());
        let view = Matrix4::from(self.pose.view_matrix());
        (proj * view).into()
    }
}
