//! Cube coordinates for the hex grid.
//!
//! A cell is a triple `(x, y, z)` where the three axes sit 120 degrees apart
//! in the plane. Adding the same amount to every component does not move the
//! cell, so each coordinate is stored in normalized form: the median of the
//! three raw components is subtracted from all of them.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use hex2d::Coordinate;

const SQRT_3: f64 = 1.732_050_807_568_877_2;
const COS_120: f64 = -0.5;
const SIN_120: f64 = SQRT_3 / 2.0;
const COS_240: f64 = -0.5;
const SIN_240: f64 = -SQRT_3 / 2.0;

/// Subtracts the median of the three components from each of them.
fn normalize([x, y, z]: [i64; 3]) -> [i64; 3] {
    let mut sorted = [x, y, z];
    sorted.sort_unstable();
    let median = sorted[1];
    [x - median, y - median, z - median]
}

/// A position on the hex grid in normalized cube coordinates.
///
/// Two coordinates are equal when their raw triples differ by the same amount
/// in every component. Since normalization maps all such triples to one
/// representative, comparing and hashing the stored triple is exactly that
/// relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CubeCoordinate {
    loc: [i64; 3],
}

impl CubeCoordinate {
    /// Origin of the coordinate system.
    pub const ORIGIN: Self = Self { loc: [0, 0, 0] };

    /// Create a coordinate from a raw triple.
    pub fn new(x: i64, y: i64, z: i64) -> Self {
        Self {
            loc: normalize([x, y, z]),
        }
    }

    /// The normalized triple.
    pub const fn components(&self) -> [i64; 3] {
        self.loc
    }

    pub const fn x(&self) -> i64 {
        self.loc[0]
    }

    pub const fn y(&self) -> i64 {
        self.loc[1]
    }

    pub const fn z(&self) -> i64 {
        self.loc[2]
    }

    /// Replace the position with a new raw triple, normalizing it.
    pub fn set(&mut self, x: i64, y: i64, z: i64) {
        self.loc = normalize([x, y, z]);
    }

    /// Number of single steps needed to reach this cell from the origin.
    pub fn hex_distance(&self) -> u64 {
        self.loc.iter().map(|c| c.unsigned_abs()).sum()
    }

    /// Number of single steps between two cells.
    pub fn distance_to(&self, other: &Self) -> u64 {
        (*self - *other).hex_distance()
    }

    /// Projects the cell onto the plane.
    ///
    /// The x axis points right and the y and z axes are rotated 120 and 240
    /// degrees from it, so neighboring cells are exactly one unit apart.
    pub fn to_cartesian(&self) -> (f64, f64) {
        let [x, y, z] = self.loc.map(|c| c as f64);
        (
            x + y * COS_120 + z * COS_240,
            y * SIN_120 + z * SIN_240,
        )
    }

    /// The cell whose center is nearest to the point `(x, y)` of the plane.
    pub fn from_cartesian(x: f64, y: f64) -> Self {
        // Solve the projection for a triple with z = 0, then let hex2d round
        // the fractional axial position to a lattice point.
        let b = y / SIN_120;
        let a = x + b / 2.0;
        Coordinate::<i64>::nearest(a - b, b).into()
    }
}

impl fmt::Display for CubeCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z] = self.loc;
        write!(f, "({x}, {y}, {z})")
    }
}

impl From<[i64; 3]> for CubeCoordinate {
    fn from([x, y, z]: [i64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<(i64, i64, i64)> for CubeCoordinate {
    fn from((x, y, z): (i64, i64, i64)) -> Self {
        Self::new(x, y, z)
    }
}

/// Converts to hex2d's sum-zero cube form, where the unit steps along our x, y
/// and z axes become hex2d's `(1, 0, -1)`, `(-1, 1, 0)` and `(0, -1, 1)`.
impl From<CubeCoordinate> for Coordinate<i64> {
    fn from(c: CubeCoordinate) -> Self {
        let [x, y, z] = c.loc;
        Coordinate::new(x - y, y - z)
    }
}

impl From<Coordinate<i64>> for CubeCoordinate {
    fn from(c: Coordinate<i64>) -> Self {
        Self::new(c.x + c.y, c.y, 0)
    }
}

impl Add for CubeCoordinate {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        let [a, b, c] = self.loc;
        let [x, y, z] = other.loc;
        Self::new(a + x, b + y, c + z)
    }
}

impl Sub for CubeCoordinate {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        let [a, b, c] = self.loc;
        let [x, y, z] = other.loc;
        Self::new(a - x, b - y, c - z)
    }
}

impl Neg for CubeCoordinate {
    type Output = Self;

    fn neg(self) -> Self {
        let [x, y, z] = self.loc;
        Self::new(-x, -y, -z)
    }
}

impl Mul<i64> for CubeCoordinate {
    type Output = Self;

    fn mul(self, k: i64) -> Self {
        let [x, y, z] = self.loc;
        Self::new(k * x, k * y, k * z)
    }
}

impl Mul<CubeCoordinate> for i64 {
    type Output = CubeCoordinate;

    fn mul(self, c: CubeCoordinate) -> CubeCoordinate {
        c * self
    }
}
