//! Sleep counter library.
//!
//! Counts presence-radar detections on a handheld device, with LED
//! feedback and a single status screen.  The domain core lives in [`app`]
//! and reaches the host only through port traits; [`adapters`],
//! [`drivers`] and [`sensors`] supply the implementations.

#![deny(unused_must_use)]

pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod pins;
pub mod power;

pub mod adapters;
pub mod drivers;
pub mod sensors;
