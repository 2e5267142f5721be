//! Dino Blast - terminal endless runner library
//!
//! Exposes the game logic for testing, the simulator, and the binary.

pub mod app;
pub mod build_info;
pub mod constants;
pub mod input;
pub mod runner;
pub mod simulator;
pub mod ui;
