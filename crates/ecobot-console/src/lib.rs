#![forbid(unsafe_code)]

//! EcoBot fleet console: an interactive terminal front end for monitoring
//! and directing a small fleet of autonomous cleaning robots.
//!
//! All data is in-memory and seeded from a hardcoded sample catalog; the
//! backend calls the original product would make are simulated with short
//! background delays.

pub mod app;
pub mod chrome;
pub mod cli;
pub mod model;
pub mod screens;
pub mod theme;
