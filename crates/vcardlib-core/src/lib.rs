//! Shared configuration, logging bootstrap and constants for the vCard codec.

pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
