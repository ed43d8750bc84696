//! Background Tasks Module
//!
//! Periodic maintenance work that runs alongside request handling.
//!
//! # Tasks
//! - Sweep: removes expired cache entries and elapsed rate-limit windows

mod sweeper;

pub use sweeper::{spawn_sweeper, Sweep};
