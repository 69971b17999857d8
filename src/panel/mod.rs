//! Control panel communication module
//!
//! All requests to the remote management panel go through [`PanelClient`].
//! The panel is query-parameter authenticated: every request carries the
//! shared `apikey` alongside its operation parameters. Failures at this
//! boundary are tagged as [`ApiError`] values rather than aborting the run;
//! callers decide whether a failed call ends the run, skips a daemon, or is
//! simply stepped over.

pub mod client;

pub use client::{ApiError, Daemon, Instance, PanelClient};
