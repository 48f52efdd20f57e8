use std::fmt;

/// Orthogonal anatomical plane selector understood by the slicing tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
#[cfg_attr(feature = "json", serde(rename_all = "lowercase"))]
pub enum Plane {
    X,
    Y,
    Z,
}

impl Plane {
    /// Returns the plane key ("x", "y" or "z")
    pub fn key(&self) -> &'static str {
        match self {
            Plane::X => "x",
            Plane::Y => "y",
            Plane::Z => "z",
        }
    }
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// All planes in slicing order
pub const ALL_PLANES: [Plane; 3] = [Plane::X, Plane::Y, Plane::Z];

/// Fixed slice index for each of the three planes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct SlicePositionMap {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl SlicePositionMap {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Returns the slice index for a plane
    pub fn get(&self, plane: Plane) -> i32 {
        match plane {
            Plane::X => self.x,
            Plane::Y => self.y,
            Plane::Z => self.z,
        }
    }

    /// Iterates `(plane, index)` pairs in x, y, z order
    pub fn iter(&self) -> impl Iterator<Item = (Plane, i32)> + '_ {
        ALL_PLANES.into_iter().map(move |plane| (plane, self.get(plane)))
    }
}

impl fmt::Display for SlicePositionMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x={} y={} z={}", self.x, self.y, self.z)
    }
}
