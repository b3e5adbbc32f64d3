//! Thermoloop controller library.
//!
//! Exposes the pure-logic modules (classifier, filter, extrema, mapping,
//! loop driver) plus the host adapters, for integration testing and for
//! the `thermoloop` runner binary.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod control;
pub mod drivers;
pub mod error;
pub mod scheduler;
