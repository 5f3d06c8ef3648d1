#![forbid(unsafe_code)]

//! Domain model: entities, the seed catalog, collections, and pure
//! derived-value helpers. Everything in here is UI-free and fully
//! deterministic so it can be tested without a terminal.

pub mod activity;
pub mod entities;
pub mod sample;
pub mod stats;
pub mod store;
