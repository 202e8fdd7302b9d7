use std::fmt;

use tracing::trace;

use crate::game::{CubeCoordinate, Direction, Tile};

/// The token moving over the board. Starts on the origin.
#[derive(Debug, Clone, Default)]
pub struct Player {
    loc: CubeCoordinate,
}

impl Player {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn position(&self) -> CubeCoordinate {
        self.loc
    }

    /// Moves the player by a raw delta. Returns the player so moves can be chained.
    pub fn move_by(&mut self, dx: i64, dy: i64, dz: i64) -> &mut Self {
        self.loc = self.loc + CubeCoordinate::new(dx, dy, dz);
        trace!(position = %self.loc, "player moved");
        self
    }

    pub fn step(&mut self, direction: Direction) -> &mut Self {
        let (dx, dy, dz) = direction.delta();
        self.move_by(dx, dy, dz)
    }

    pub fn is_on(&self, tile: &Tile) -> bool {
        self.loc == tile.coordinate()
    }

    pub fn is_at(&self, loc: &CubeCoordinate) -> bool {
        self.loc == *loc
    }

    /// Steps between the player and the origin.
    pub fn hex_distance(&self) -> u64 {
        self.loc.hex_distance()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player{}", self.loc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_origin() {
        let player = Player::new();
        assert!(player.is_at(&CubeCoordinate::ORIGIN));
        assert!(player.is_on(&Tile::new(0, 0, 0)));
        assert_eq!(player.hex_distance(), 0);
    }

    #[test]
    fn chained_moves() {
        let mut player = Player::new();
        player.move_by(1, 0, 0).move_by(1, 0, 0).move_by(0, 0, -1);
        assert!(player.is_at(&CubeCoordinate::new(2, 0, -1)));
        assert_eq!(player.hex_distance(), 3);
    }

    #[test]
    fn zero_delta_stays_put() {
        let mut player = Player::new();
        player.step(Direction::W).move_by(0, 0, 0);
        assert!(player.is_on(&Tile::new(0, 1, 0)));
    }

    #[test]
    fn uniform_delta_stays_put() {
        let mut player = Player::new();
        player.move_by(3, 3, 3);
        assert!(player.is_at(&CubeCoordinate::ORIGIN));
    }
}
