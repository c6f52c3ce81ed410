use std::f32::consts::TAU;

use keel_core::math::{Vec2, EPSILON};

/// A planar polygon: ordered vertices plus independent axis scales.
///
/// Vertices are stored in shape-local coordinates; `scale_x` and
/// `scale_y` record the intended world extents so a unit-extent vertex
/// set can describe shapes of any size.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shape2d {
    vertices: Vec<Vec2>,
    scale_x: f32,
    scale_y: f32,
}

impl Shape2d {
    /// Creates a shape from ordered vertices and axis scales.
    pub fn new(vertices: Vec<Vec2>, scale_x: f32, scale_y: f32) -> Self {
        Self {
            vertices,
            scale_x,
            scale_y,
        }
    }

    /// A unit rectangle (vertex extents `±0.5`) scaled by `width` and
    /// `height`.
    pub fn rectangle(width: f32, height: f32) -> Self {
        Self::new(
            vec![
                Vec2::new(-0.5, -0.5),
                Vec2::new(0.5, -0.5),
                Vec2::new(0.5, 0.5),
                Vec2::new(-0.5, 0.5),
            ],
            width,
            height,
        )
    }

    /// An ellipse approximated by `resolution` vertices, optionally
    /// rotated by `rotation` radians.
    pub fn ellipse(width: f32, height: f32, rotation: f32, resolution: u32) -> Self {
        let vertices = (0..resolution)
            .map(|i| {
                let angle = (i as f32) / (resolution as f32) * TAU + rotation;
                Vec2::new(angle.cos() * width, angle.sin() * height)
            })
            .collect();
        Self::new(vertices, width, height)
    }

    /// The shape's vertices.
    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    /// Intended world extent along X.
    pub const fn scale_x(&self) -> f32 {
        self.scale_x
    }

    /// Intended world extent along Y.
    pub const fn scale_y(&self) -> f32 {
        self.scale_y
    }

    /// Polygon area via the shoelace formula.
    ///
    /// Vertices are taken in order, with the polygon closed between the
    /// last vertex and the first. Winding does not matter; a shape with
    /// fewer than three vertices has zero area.
    pub fn area(&self) -> f32 {
        let signed: f32 = self
            .vertices
            .iter()
            .zip(self.vertices.iter().cycle().skip(1))
            .map(|(a, b)| a.x() * b.y() - b.x() * a.y())
            .sum();
        signed.abs() / 2.0
    }

    /// The vertex centroid; the origin for an empty shape.
    pub fn center(&self) -> Vec2 {
        if self.vertices.is_empty() {
            return Vec2::ZERO;
        }
        let sum = self
            .vertices
            .iter()
            .fold(Vec2::ZERO, |acc, v| acc.add(v));
        sum.scale(1.0 / (self.vertices.len() as f32))
    }

    /// Translates the vertices so the centroid sits at the origin.
    pub fn recenter(mut self) -> Self {
        let center = self.center();
        for vertex in &mut self.vertices {
            *vertex = vertex.sub(&center);
        }
        self
    }

    /// Rescales the vertices to fit a 0.5 × 0.5 box centred on the
    /// bounding-box centre.
    ///
    /// An axis whose extent is ≤ `EPSILON` is translated to the centre
    /// but not scaled, so a degenerate (flat) shape never divides by
    /// zero.
    pub fn normalize_extent(mut self) -> Self {
        if self.vertices.is_empty() {
            return self;
        }
        let (mut min_x, mut min_y) = (f32::INFINITY, f32::INFINITY);
        let (mut max_x, mut max_y) = (f32::NEG_INFINITY, f32::NEG_INFINITY);
        for v in &self.vertices {
            min_x = min_x.min(v.x());
            min_y = min_y.min(v.y());
            max_x = max_x.max(v.x());
            max_y = max_y.max(v.y());
        }

        let width = max_x - min_x;
        let height = max_y - min_y;
        let center_x = (min_x + max_x) / 2.0;
        let center_y = (min_y + max_y) / 2.0;
        let fit_x = if width > EPSILON { 0.5 / width } else { 1.0 };
        let fit_y = if height > EPSILON { 0.5 / height } else { 1.0 };

        for vertex in &mut self.vertices {
            *vertex = Vec2::new(
                (vertex.x() - center_x) * fit_x,
                (vertex.y() - center_y) * fit_y,
            );
        }
        self
    }
}
