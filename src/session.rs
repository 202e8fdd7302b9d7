//! Drives a [`Board`] from a front end: interactive play and automated walks.
//!
//! A front end only has to draw [`Frame`]s, show short messages and clear the
//! previous frame. Everything else (reading input, pacing, choosing moves)
//! happens here.

use std::io::BufRead;
use std::thread;
use std::time::Duration;

use rand::Rng;
use tracing::info;

use crate::error::Result;
use crate::game::{self, keymap, Board, Direction, Walk, DEFAULT_STEP_DELAY};

/// Settings shared by every session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Pause after each automated step.
    pub delay: Duration,
    /// Clear the previous frame before drawing the next one.
    pub clear_frames: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            delay: DEFAULT_STEP_DELAY,
            clear_frames: true,
        }
    }
}

/// A snapshot of the board, ready to be drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Centers of all discovered tiles.
    pub tiles: Vec<(f64, f64)>,
    pub player: (f64, f64),
    /// Player distance from the origin.
    pub distance: u64,
    /// `(done, total)` while replaying a walk.
    pub progress: Option<(usize, usize)>,
}

impl Frame {
    pub fn capture(board: &Board) -> Self {
        Self {
            tiles: board.tile_points(),
            player: board.player_point(),
            distance: board.player().hex_distance(),
            progress: None,
        }
    }

    pub fn with_progress(mut self, done: usize, total: usize) -> Self {
        self.progress = Some((done, total));
        self
    }
}

/// Somewhere frames can be shown.
pub trait Frontend {
    fn render(&mut self, frame: &Frame) -> Result<()>;

    fn message(&mut self, text: &str) -> Result<()>;

    /// Removes the last rendered frame.
    fn clear(&mut self) -> Result<()>;
}

fn is_exit(line: &str) -> bool {
    let line = line.trim();
    line.eq_ignore_ascii_case("exit") || line.eq_ignore_ascii_case("quit")
}

/// Reads one move per line from `input` until `exit`, `quit` or end of input.
pub fn play(
    board: &mut Board,
    input: impl BufRead,
    frontend: &mut impl Frontend,
    config: &SessionConfig,
) -> Result<()> {
    let mut lines = input.lines();
    loop {
        frontend.render(&Frame::capture(board))?;
        frontend.message("Move with the hexagon around the 's' key:")?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        if is_exit(&line) {
            break;
        }
        let (dx, dy, dz) = keymap(line.trim());
        board.move_by(dx, dy, dz);
        if config.clear_frames {
            frontend.clear()?;
        }
    }

    if config.clear_frames {
        frontend.clear()?;
    }
    frontend.render(&Frame::capture(board))?;
    frontend.message("Successfully exited game")?;
    info!(distance = board.player().hex_distance(), tiles = board.tile_count(), "game over");
    Ok(())
}

/// Replays `walk` one step at a time, drawing a frame before every step.
pub fn animate(
    board: &mut Board,
    walk: &Walk,
    frontend: &mut impl Frontend,
    config: &SessionConfig,
) -> Result<()> {
    let total = walk.len();
    for (done, direction) in walk.iter().enumerate() {
        frontend.render(&Frame::capture(board).with_progress(done, total))?;
        board.apply(direction);
        thread::sleep(config.delay);
        if config.clear_frames {
            frontend.clear()?;
        }
    }
    frontend.render(&Frame::capture(board).with_progress(total, total))
}

/// Animated Sierpinski walk of the given depth.
pub fn sierpinski_walk(
    board: &mut Board,
    depth: u32,
    frontend: &mut impl Frontend,
    config: &SessionConfig,
) -> Result<()> {
    let walk = game::sierpinski(depth)?;
    animate(board, &walk, frontend, config)?;
    info!(depth, steps = walk.len(), tiles = board.tile_count(), "sierpinski walk done");
    Ok(())
}

/// Sierpinski walk of the given depth, drawn once at the end.
pub fn sierpinski(board: &mut Board, depth: u32, frontend: &mut impl Frontend) -> Result<()> {
    let walk = game::sierpinski(depth)?;
    board.replay(&walk);
    info!(depth, steps = walk.len(), tiles = board.tile_count(), "sierpinski walk done");
    frontend.render(&Frame::capture(board).with_progress(walk.len(), walk.len()))
}

/// Draws `steps` uniformly random directions from `rng`.
pub fn random_directions(steps: usize, rng: &mut impl Rng) -> Walk {
    (0..steps)
        .map(|_| Direction::ALL[rng.gen_range(0..Direction::ALL.len())])
        .collect::<Vec<_>>()
        .into()
}

/// Animated walk of `steps` random moves.
pub fn random_walk(
    board: &mut Board,
    steps: usize,
    rng: &mut impl Rng,
    frontend: &mut impl Frontend,
    config: &SessionConfig,
) -> Result<()> {
    let walk = random_directions(steps, rng);
    animate(board, &walk, frontend, config)?;

    let distance = board.player().hex_distance();
    info!(steps, distance, tiles = board.tile_count(), "random walk done");
    frontend.message(&format!("Agent has moved {distance} hexes away from origin."))
}
