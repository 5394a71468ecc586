//! Geometric primitives shared by the kinematic facet.
//!
//! Follows the world engine's conventions: a left-handed, Z-up coordinate
//! frame with rotations expressed in degrees. Headings are always derived
//! from the current rotation rather than stored, so they can never go stale
//! relative to an orientation update.

use serde::{Deserialize, Serialize};

/// A 3D vector of `f32` components.
///
/// # Examples
///
/// ```
/// use simstate::Vector3D;
///
/// let v = Vector3D::new(3.0, 4.0, 0.0);
/// assert_eq!(v.length(), 5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector3D {
    /// X component.
    pub x: f32,
    /// Y component.
    pub y: f32,
    /// Z component.
    pub z: f32,
}

impl Vector3D {
    /// The zero vector.
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Creates a vector from its components.
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Returns the squared Euclidean length.
    #[must_use]
    pub fn squared_length(self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Returns the Euclidean length.
    #[must_use]
    pub fn length(self) -> f32 {
        self.squared_length().sqrt()
    }

    /// Returns the dot product with `other`.
    #[must_use]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Returns the unit vector pointing in the same direction, or the zero
    /// vector if this vector has (near-)zero length.
    #[must_use]
    pub fn unit(self) -> Self {
        let len = self.length();
        if len <= f32::EPSILON {
            return Self::ZERO;
        }
        Self::new(self.x / len, self.y / len, self.z / len)
    }
}

impl std::ops::Add for Vector3D {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl std::ops::Sub for Vector3D {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl std::ops::Mul<f32> for Vector3D {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

/// A point in world space.
///
/// Distinct from [`Vector3D`] so positions and displacements cannot be
/// confused at the type level, with cheap conversions where the math needs
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Location {
    /// X coordinate in meters.
    pub x: f32,
    /// Y coordinate in meters.
    pub y: f32,
    /// Z coordinate in meters.
    pub z: f32,
}

impl Location {
    /// Creates a location from world coordinates.
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Returns the Euclidean distance to `other`.
    #[must_use]
    pub fn distance(self, other: Self) -> f32 {
        (Vector3D::from(other) - Vector3D::from(self)).length()
    }
}

impl From<Location> for Vector3D {
    fn from(loc: Location) -> Self {
        Self::new(loc.x, loc.y, loc.z)
    }
}

impl From<Vector3D> for Location {
    fn from(v: Vector3D) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

/// An orientation in degrees (pitch, yaw, roll).
///
/// # Examples
///
/// ```
/// use simstate::Rotation;
///
/// // Facing straight down +X.
/// let fwd = Rotation::default().forward_vector();
/// assert!((fwd.x - 1.0).abs() < 1e-6);
/// assert!(fwd.y.abs() < 1e-6);
/// assert!(fwd.z.abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rotation {
    /// Rotation about the Y axis, degrees.
    pub pitch: f32,
    /// Rotation about the Z axis, degrees.
    pub yaw: f32,
    /// Rotation about the X axis, degrees.
    pub roll: f32,
}

impl Rotation {
    /// Creates a rotation from pitch, yaw, and roll in degrees.
    #[must_use]
    pub const fn new(pitch: f32, yaw: f32, roll: f32) -> Self {
        Self { pitch, yaw, roll }
    }

    /// Returns the unit forward vector this orientation points along.
    ///
    /// Derived from pitch and yaw only; roll does not change the forward
    /// axis. Always recomputed from the current angles so it is consistent
    /// with the latest orientation update.
    #[must_use]
    pub fn forward_vector(self) -> Vector3D {
        let pitch = self.pitch.to_radians();
        let yaw = self.yaw.to_radians();
        let cos_pitch = pitch.cos();
        Vector3D::new(cos_pitch * yaw.cos(), cos_pitch * yaw.sin(), pitch.sin())
    }
}
