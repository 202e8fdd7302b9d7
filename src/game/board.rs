//! The board: the player plus every tile it has uncovered so far.

use std::collections::HashSet;
use std::fmt;

use tracing::debug;

use crate::error::{Error, Result};
use crate::game::{CubeCoordinate, Direction, Player, Tile, Walk};

/// Discovered tiles and the player walking over them.
///
/// The origin tile is always present and tiles are never removed.
#[derive(Debug, Clone)]
pub struct Board {
    tiles: HashSet<Tile>,
    player: Player,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self::with_tiles([])
    }

    /// Creates a board that has already discovered `tiles`, plus the origin.
    pub fn with_tiles(tiles: impl IntoIterator<Item = Tile>) -> Self {
        let mut tiles: HashSet<Tile> = tiles.into_iter().collect();
        tiles.insert(CubeCoordinate::ORIGIN.into());
        Self {
            tiles,
            player: Player::new(),
        }
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Moves the player by a raw delta and discovers the tile it lands on.
    pub fn move_by(&mut self, dx: i64, dy: i64, dz: i64) -> &mut Self {
        self.player.move_by(dx, dy, dz);
        let tile = Tile::from(self.player.position());
        if self.tiles.insert(tile) {
            debug!(%tile, discovered = self.tiles.len(), "discovered tile");
        }
        self
    }

    pub fn apply(&mut self, direction: Direction) -> &mut Self {
        let (dx, dy, dz) = direction.delta();
        self.move_by(dx, dy, dz)
    }

    /// Applies every step of `walk` in order.
    pub fn replay(&mut self, walk: &Walk) -> &mut Self {
        for direction in walk {
            self.apply(direction);
        }
        self
    }

    pub fn contains(&self, tile: &Tile) -> bool {
        self.tiles.contains(tile)
    }

    /// The discovered tile at `loc`.
    pub fn lookup(&self, loc: &CubeCoordinate) -> Result<&Tile> {
        self.tiles
            .get(&Tile::from(*loc))
            .ok_or(Error::TileNotFound(*loc))
    }

    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// Where the player is drawn.
    pub fn player_point(&self) -> (f64, f64) {
        self.player.position().to_cartesian()
    }

    /// Where every discovered tile is drawn.
    pub fn tile_points(&self) -> Vec<(f64, f64)> {
        self.tiles
            .iter()
            .map(|tile| tile.coordinate().to_cartesian())
            .collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} on {} tiles", self.player, self.tiles.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::sierpinski;

    #[test]
    fn origin_is_always_discovered() {
        assert!(Board::new().contains(&Tile::new(0, 0, 0)));
        assert_eq!(Board::new().tile_count(), 1);

        let board = Board::with_tiles([Tile::new(3, 0, 0), Tile::new(1, 1, 1)]);
        assert!(board.contains(&Tile::new(0, 0, 0)));
        assert!(board.contains(&Tile::new(3, 0, 0)));
        assert_eq!(board.tile_count(), 2);
    }

    #[test]
    fn boards_do_not_share_tiles() {
        let mut first = Board::new();
        first.move_by(1, 0, 0);
        let second = Board::new();
        assert_eq!(second.tile_count(), 1);
        assert!(!second.contains(&Tile::new(1, 0, 0)));
    }

    #[test]
    fn moves_discover_tiles() {
        let mut board = Board::new();
        board.move_by(1, 0, 0).move_by(1, 0, 0).move_by(-1, 0, 0);

        assert_eq!(board.tile_count(), 3);
        assert!(board.contains(&Tile::new(2, 0, 0)));
        assert!(board.player().is_at(&CubeCoordinate::new(1, 0, 0)));
    }

    #[test]
    fn zero_move_discovers_nothing() {
        let mut board = Board::new();
        board.move_by(0, 0, 0);
        assert_eq!(board.tile_count(), 1);
    }

    #[test]
    fn lookup() {
        let mut board = Board::new();
        board.apply(Direction::W);

        let loc = CubeCoordinate::new(1, 2, 1);
        assert_eq!(board.lookup(&loc).unwrap(), &Tile::new(0, 1, 0));
        assert!(matches!(
            board.lookup(&CubeCoordinate::new(5, 0, 0)),
            Err(Error::TileNotFound(c)) if c == CubeCoordinate::new(5, 0, 0)
        ));
    }

    #[test]
    fn replaying_a_walk_matches_its_endpoint() {
        let walk = sierpinski(4).unwrap();
        let mut board = Board::new();
        board.replay(&walk);
        assert!(board.player().is_at(&walk.endpoint()));
        assert!(board.tile_count() <= walk.len() + 1);
    }

    #[test]
    fn cartesian_points() {
        let mut board = Board::new();
        board.apply(Direction::D);

        let (x, y) = board.player_point();
        assert!((x - 1.0).abs() < 1e-9 && y.abs() < 1e-9);

        let points = board.tile_points();
        assert_eq!(points.len(), 2);
        assert!(points.iter().any(|&(x, y)| x.abs() < 1e-9 && y.abs() < 1e-9));
    }
}
