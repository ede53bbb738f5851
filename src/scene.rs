//! Models loaded into the scene and their placement.

use std::path::{Path, PathBuf};
use std::sync::mpsc;

use cgmath::{EuclideanSpace, Point3};
use mint;

use error::Error;

/// Axis aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    /// Corner with the smallest coordinates.
    pub min: mint::Point3<f32>,
    /// Corner with the largest coordinates.
    pub max: mint::Point3<f32>,
}

impl Aabb {
    /// Smallest box containing all `points`, or `None` if there are none.
    pub fn from_points<I, P>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = P>,
        P: Into<mint::Point3<f32>>,
    {
        let mut points = points.into_iter().map(Into::into);
        let first = points.next()?;
        let mut aabb = Aabb { min: first, max: first };
        for p in points {
            aabb = aabb.union(&Aabb { min: p, max: p });
        }
        Some(aabb)
    }

    /// Smallest box containing both boxes.
    pub fn union(
        &self,
        other: &Aabb,
    ) -> Aabb {
        Aabb {
            min: [
                self.min.x.min(other.min.x),
                self.min.y.min(other.min.y),
                self.min.z.min(other.min.z),
            ].into(),
            max: [
                self.max.x.max(other.max.x),
                self.max.y.max(other.max.y),
                self.max.z.max(other.max.z),
            ].into(),
        }
    }

    /// Centre of the box.
    pub fn center(&self) -> mint::Point3<f32> {
        Point3::centroid(&[Point3::from(self.min), Point3::from(self.max)]).into()
    }
}

/// Scene subtree produced by a [`Loader`](trait.Loader.html).
pub trait Model {
    /// World space bounds, `None` if the model has no geometry.
    fn bounds(&self) -> Option<Aabb>;
    /// Move the whole model by `offset`.
    fn translate(&mut self, offset: mint::Vector3<f32>);
}

/// Outcome of a load request.
#[derive(Debug)]
pub struct Loaded<M> {
    /// Requested path.
    pub path: PathBuf,
    /// The model, or the reason it could not be loaded.
    pub result: Result<M, Error>,
}

/// Fetches and parses model bundles.
///
/// Loading may finish at any later point, on any thread: the result is
/// sent through `done` and picked up by the viewer on its next frame.
pub trait Loader {
    /// Type of the produced models.
    type Model: Model;

    /// Start loading `path`.
    fn load(
        &mut self,
        path: &Path,
        done: mpsc::Sender<Loaded<Self::Model>>,
    );
}

/// Moves `model` so that the centre of its bounds lands on the origin.
///
/// Returns the applied offset, or `None` if the model has no bounds.
pub fn center<M>(model: &mut M) -> Option<mint::Vector3<f32>>
where
    M: Model + ?Sized,
{
    let center = Point3::from(model.bounds()?.center());
    let offset: mint::Vector3<f32> = (-center.to_vec()).into();
    model.translate(offset);
    Some(offset)
}

#[cfg(test)]
mod tests {
    use super::*;

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

    #[test]
    fn bounds_of_points() {
        let aabb = Aabb::from_points(vec![[1.0, -2.0, 0.5], [-3.0, 4.0, 0.0], [0.0, 0.0, 2.0]])
            .unwrap();
        assert_eq!(aabb.min, mint::Point3::from([-3.0, -2.0, 0.0]));
        assert_eq!(aabb.max, mint::Point3::from([1.0, 4.0, 2.0]));
        assert_eq!(aabb.center(), mint::Point3::from([-1.0, 1.0, 1.0]));
        assert_eq!(Aabb::from_points(Vec::<[f32; 3]>::new()), None);
    }

    #[test]
    fn centering_moves_bounds_to_origin() {
        let mut cloud = Cloud(vec![
            [2.0, 0.0, 4.0].into(),
            [6.0, 3.0, 8.0].into(),
        ]);
        let offset = center(&mut cloud).unwrap();
        assert_eq!(offset, mint::Vector3::from([-4.0, -1.5, -6.0]));
        assert_eq!(cloud.bounds().unwrap().center(), mint::Point3::from([0.0, 0.0, 0.0]));
    }

    #[test]
    fn empty_model_is_left_alone() {
        let mut cloud = Cloud(Vec::new());
        assert_eq!(center(&mut cloud), None);
    }
}
