//! Library entry for appshelf exposing the screen, state and workers for the binary and
//! integration tests.

pub mod app;
pub mod args;
pub mod catalog;
pub mod config;
pub mod events;
pub mod install;
pub mod logic;
pub mod state;
pub mod status;
pub mod ui;
pub mod util;
