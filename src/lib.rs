//! Jumping ghost library crate.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

// The SDL shell needs a window and is excluded from coverage.
#[cfg_attr(coverage_nightly, coverage(off))]
pub mod app;
#[cfg_attr(coverage_nightly, coverage(off))]
pub mod platform;

pub mod clock;
pub mod config;
pub mod constants;
pub mod draw;
pub mod error;
pub mod events;
pub mod formatter;
pub mod game;
pub mod ghost;
pub mod sparkle;
pub mod systems;
