//! Move letters and the Sierpinski walk generator.
//!
//! Each of the six letters `d w z a x e` names a unit step on the grid. A walk
//! is a sequence of letters replayed from left to right. The fractal walk of
//! depth `n + 1` is built from the walk `s` of depth `n` as
//! `rotate_clockwise(s) + s + rotate_counterclockwise(s)`, which traces a
//! Sierpinski triangle when replayed.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::game::CubeCoordinate;

/// One of the six unit steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// `d`: +x
    D,
    /// `w`: +y
    W,
    /// `z`: +z
    Z,
    /// `a`: -x
    A,
    /// `x`: -y
    X,
    /// `e`: -z
    E,
}

impl Direction {
    /// All directions, going around the hexagon starting from `d`.
    pub const ALL: [Self; 6] = [Self::D, Self::E, Self::W, Self::A, Self::Z, Self::X];

    pub const fn letter(self) -> char {
        match self {
            Self::D => 'd',
            Self::W => 'w',
            Self::Z => 'z',
            Self::A => 'a',
            Self::X => 'x',
            Self::E => 'e',
        }
    }

    /// Parses a lowercase move letter.
    pub const fn from_letter(c: char) -> Option<Self> {
        match c {
            'd' => Some(Self::D),
            'w' => Some(Self::W),
            'z' => Some(Self::Z),
            'a' => Some(Self::A),
            'x' => Some(Self::X),
            'e' => Some(Self::E),
            _ => None,
        }
    }

    /// The step as a raw `(dx, dy, dz)` delta.
    pub const fn delta(self) -> (i64, i64, i64) {
        match self {
            Self::D => (1, 0, 0),
            Self::W => (0, 1, 0),
            Self::Z => (0, 0, 1),
            Self::A => (-1, 0, 0),
            Self::X => (0, -1, 0),
            Self::E => (0, 0, -1),
        }
    }

    pub fn offset(self) -> CubeCoordinate {
        self.delta().into()
    }

    /// Letter substitution used by [`rotate_clockwise`].
    pub const fn clockwise(self) -> Self {
        match self {
            Self::D => Self::E,
            Self::E => Self::W,
            Self::W => Self::A,
            Self::A => Self::Z,
            Self::Z => Self::X,
            Self::X => Self::D,
        }
    }

    /// Letter substitution used by [`rotate_counterclockwise`]; inverse of
    /// [`Direction::clockwise`].
    pub const fn counterclockwise(self) -> Self {
        match self {
            Self::D => Self::X,
            Self::E => Self::D,
            Self::W => Self::E,
            Self::A => Self::W,
            Self::Z => Self::A,
            Self::X => Self::Z,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A sequence of moves.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Walk(Vec<Direction>);

impl Walk {
    pub fn new(steps: Vec<Direction>) -> Self {
        Self(steps)
    }

    pub fn steps(&self) -> &[Direction] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Direction> + '_ {
        self.0.iter().copied()
    }

    /// Reverses the walk and turns every step with [`Direction::clockwise`].
    pub fn rotate_clockwise(&self) -> Self {
        Self(self.0.iter().rev().map(|d| d.clockwise()).collect())
    }

    /// Reverses the walk and turns every step with [`Direction::counterclockwise`].
    pub fn rotate_counterclockwise(&self) -> Self {
        Self(self.0.iter().rev().map(|d| d.counterclockwise()).collect())
    }

    /// The cell reached by replaying the walk from the origin.
    pub fn endpoint(&self) -> CubeCoordinate {
        self.iter()
            .fold(CubeCoordinate::ORIGIN, |pos, d| pos + d.offset())
    }
}

impl fmt::Display for Walk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|d| write!(f, "{d}"))
    }
}

impl FromStr for Walk {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        s.chars()
            .map(|c| Direction::from_letter(c).ok_or(Error::UnknownMove(c)))
            .collect::<Result<Vec<_>>>()
            .map(Self)
    }
}

impl From<Vec<Direction>> for Walk {
    fn from(steps: Vec<Direction>) -> Self {
        Self(steps)
    }
}

impl<'a> IntoIterator for &'a Walk {
    type Item = Direction;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Direction>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter().copied()
    }
}

/// [`Walk::rotate_clockwise`] on a string of move letters.
pub fn rotate_clockwise(seq: &str) -> Result<String> {
    Ok(seq.parse::<Walk>()?.rotate_clockwise().to_string())
}

/// [`Walk::rotate_counterclockwise`] on a string of move letters.
pub fn rotate_counterclockwise(seq: &str) -> Result<String> {
    Ok(seq.parse::<Walk>()?.rotate_counterclockwise().to_string())
}

/// Builds the Sierpinski walk of the given depth.
///
/// Depth 1 is the single step `d`; every further level triples the length,
/// so the walk has `3^(depth - 1)` steps.
pub fn sierpinski(depth: u32) -> Result<Walk> {
    if depth < 1 {
        return Err(Error::InvalidWalkDepth(depth));
    }

    let mut walk = Walk(vec![Direction::D]);
    for _ in 1..depth {
        let mut next = walk.rotate_clockwise();
        next.0.extend_from_slice(&walk.0);
        next.0.extend(walk.rotate_counterclockwise().0);
        walk = next;
    }
    Ok(walk)
}

/// [`sierpinski`] rendered as a string of move letters.
pub fn generate_fractal_walk(depth: u32) -> Result<String> {
    sierpinski(depth).map(|walk| walk.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn letters_round_trip() {
        for d in Direction::ALL {
            assert_eq!(Direction::from_letter(d.letter()), Some(d));
        }
        assert_eq!(Direction::from_letter('s'), None);
        assert_eq!(Direction::from_letter('D'), None);
    }

    #[test]
    fn opposite_letters_cancel() {
        let walk: Walk = "dawxze".parse().unwrap();
        assert_eq!(walk.endpoint(), CubeCoordinate::ORIGIN);
    }

    #[test]
    fn every_step_has_unit_length() {
        for d in Direction::ALL {
            assert_eq!(d.offset().hex_distance(), 1);
        }
    }

    #[test]
    fn clockwise_turns_by_one_sixth() {
        // ALL walks once around the hexagon, so clockwise steps to the next entry.
        for (i, d) in Direction::ALL.into_iter().enumerate() {
            assert_eq!(d.clockwise(), Direction::ALL[(i + 1) % 6]);
        }
    }

    #[test]
    fn string_rotation() {
        assert_eq!(rotate_clockwise("d").unwrap(), "e");
        assert_eq!(rotate_counterclockwise("d").unwrap(), "x");
        assert_eq!(rotate_clockwise("dw").unwrap(), "ae");
        assert_eq!(rotate_clockwise("").unwrap(), "");
    }

    #[test]
    fn string_rotation_rejects_unknown_letters() {
        assert!(matches!(rotate_clockwise("dq"), Err(Error::UnknownMove('q'))));
        assert!(matches!(
            rotate_counterclockwise("D"),
            Err(Error::UnknownMove('D'))
        ));
    }

    #[test]
    fn first_depths() {
        assert_eq!(generate_fractal_walk(1).unwrap(), "d");
        assert_eq!(generate_fractal_walk(2).unwrap(), "edx");
        assert_eq!(generate_fractal_walk(3).unwrap(), "dewedxzxd");
    }

    #[test]
    fn depth_zero_is_rejected() {
        assert!(matches!(sierpinski(0), Err(Error::InvalidWalkDepth(0))));
        assert!(matches!(
            generate_fractal_walk(0),
            Err(Error::InvalidWalkDepth(0))
        ));
    }

    #[test]
    fn length_triples() {
        for depth in 1..=7 {
            assert_eq!(sierpinski(depth).unwrap().len(), 3usize.pow(depth - 1));
        }
    }

    fn walk_strategy() -> impl Strategy<Value = Walk> {
        prop::collection::vec(prop::sample::select(Direction::ALL.to_vec()), 0..64).prop_map(Walk::new)
    }

    proptest! {
        #[test]
        fn rotations_are_inverse(walk in walk_strategy()) {
            prop_assert_eq!(&walk.rotate_counterclockwise().rotate_clockwise(), &walk);
            prop_assert_eq!(&walk.rotate_clockwise().rotate_counterclockwise(), &walk);
        }

        #[test]
        fn display_parses_back(walk in walk_strategy()) {
            prop_assert_eq!(walk.to_string().parse::<Walk>().unwrap(), walk);
        }
    }
}
