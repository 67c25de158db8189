//! Battleships asset library.
//!
//! This crate exposes the game's resource registry, loading screen, asset
//! catalog, and SDK seam for use in integration tests and as a reusable
//! library.

pub mod catalog;
pub mod config;
pub mod error;
pub mod loadingscreen;
pub mod raylibsdk;
pub mod resources;
pub mod sdk;
