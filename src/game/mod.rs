//! The hex grid model: coordinates, tiles, the player, the board and walks.

mod board;
mod coord;
mod player;
mod tile;
mod walk;

use std::time::Duration;

pub use board::Board;
pub use coord::CubeCoordinate;
pub use player::Player;
pub use tile::Tile;
pub use walk::{
    generate_fractal_walk, rotate_clockwise, rotate_counterclockwise, sierpinski, Direction, Walk,
};

/// Deepest Sierpinski walk the front ends offer (3^9 steps).
pub const MAX_WALK_DEPTH: u32 = 10;

/// Pause between automated steps.
pub const DEFAULT_STEP_DELAY: Duration = Duration::from_millis(250);

/// Maps typed input to a move delta.
///
/// A single move letter (either case) gives its unit step; anything else is the
/// zero delta.
pub fn keymap(input: &str) -> (i64, i64, i64) {
    let mut chars = input.chars().flat_map(char::to_lowercase);
    match (chars.next(), chars.next()) {
        (Some(c), None) => Direction::from_letter(c).map_or((0, 0, 0), Direction::delta),
        _ => (0, 0, 0),
    }
}
