//! Command line configuration for the terminal front end.

use std::time::Duration;

use clap::{Parser, Subcommand};

use crate::game::{DEFAULT_STEP_DELAY, MAX_WALK_DEPTH};
use crate::session::SessionConfig;

#[derive(Debug, Parser)]
#[command(name = "hex-walk")]
#[command(about = "Walk a player over a hex grid")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Pause between automated steps, in milliseconds
    #[arg(long, global = true, default_value_t = DEFAULT_STEP_DELAY.as_millis() as u64)]
    pub delay_ms: u64,

    /// Keep earlier frames on screen instead of clearing them
    #[arg(long, global = true)]
    pub no_clear: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Move the player by typing d, w, z, a, x or e; `exit` or `quit` to stop
    Play,

    /// Trace a Sierpinski walk
    Sierpinski {
        /// Recursion depth; the walk has 3^(depth - 1) steps
        #[arg(short, long, default_value_t = 4, value_parser = clap::value_parser!(u32).range(1..=MAX_WALK_DEPTH as i64))]
        depth: u32,

        /// Draw every step instead of only the result
        #[arg(long)]
        animate: bool,
    },

    /// Walk in uniformly random directions
    Random {
        #[arg(short, long, default_value_t = 50)]
        steps: usize,

        /// Seed for a reproducible walk
        #[arg(long)]
        seed: Option<u64>,
    },
}

impl Cli {
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            delay: Duration::from_millis(self.delay_ms),
            clear_frames: !self.no_clear,
        }
    }
}
