use std::fmt;

use crate::game::CubeCoordinate;

/// A discovered cell of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    loc: CubeCoordinate,
}

impl Tile {
    pub fn new(x: i64, y: i64, z: i64) -> Self {
        Self {
            loc: CubeCoordinate::new(x, y, z),
        }
    }

    pub const fn coordinate(&self) -> CubeCoordinate {
        self.loc
    }

    /// True if the two tiles share an edge. A tile is not adjacent to itself.
    pub fn adjacent(&self, other: &Self) -> bool {
        self.loc.distance_to(&other.loc) == 1
    }
}

impl From<CubeCoordinate> for Tile {
    fn from(loc: CubeCoordinate) -> Self {
        Self { loc }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tile{}", self.loc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Direction;
    use proptest::prelude::*;

    #[test]
    fn six_neighbors() {
        let origin = Tile::new(0, 0, 0);
        for d in Direction::ALL {
            assert!(origin.adjacent(&d.offset().into()));
        }
    }

    #[test]
    fn neighbor_across_the_normalization_boundary() {
        // Raw difference is (1, 0, 1) but the cells touch.
        assert!(Tile::new(1, 0, 0).adjacent(&Tile::new(0, 0, -1)));
    }

    #[test]
    fn not_adjacent() {
        assert!(!Tile::new(0, 0, 0).adjacent(&Tile::new(2, 0, 0)));
        assert!(!Tile::new(0, 0, 0).adjacent(&Tile::new(1, -1, 0)));
    }

    #[test]
    fn equality_follows_normalized_coordinate() {
        assert_eq!(Tile::new(1, 1, 1), Tile::new(0, 0, 0));
        assert_eq!(Tile::new(2, 1, 1), Tile::from(CubeCoordinate::new(1, 0, 0)));
        assert_ne!(Tile::new(1, 0, 0), Tile::new(0, 1, 0));
    }

    proptest! {
        #[test]
        fn adjacency_is_symmetric(
            a in prop::array::uniform3(-5i64..5),
            b in prop::array::uniform3(-5i64..5),
        ) {
            let a = Tile::from(CubeCoordinate::from(a));
            let b = Tile::from(CubeCoordinate::from(b));
            prop_assert_eq!(a.adjacent(&b), b.adjacent(&a));
        }

        #[test]
        fn never_adjacent_to_itself(a in prop::array::uniform3(-50i64..50)) {
            let a = Tile::from(CubeCoordinate::from(a));
            prop_assert!(!a.adjacent(&a));
        }
    }
}
