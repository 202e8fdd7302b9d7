//! A player token walking over a hex grid addressed by cube coordinates.
//!
//! The [`game`] module holds the model: coordinates, tiles, the player, the
//! board of discovered tiles and the Sierpinski walk generator. [`session`]
//! drives a board from a front end; [`terminal`] is the text front end used by
//! the `main` binary, and the `viewer` binary draws the board with egui.

pub mod config;
pub mod error;
pub mod game;
pub mod session;
pub mod terminal;

pub use error::{Error, Result};
