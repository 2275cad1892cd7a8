//! Pythia CLI library - exposes modules for testing

pub mod commands;
pub mod display;
pub mod game;
pub mod paths;
pub mod prompt;
