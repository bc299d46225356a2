//! # RangeKit Core
//!
//! Core types, constants, and utilities for RangeKit.
//! Provides the geometry primitives, canvas limits, and error types shared
//! by the editor and storage crates.

pub mod constants;
pub mod error;
pub mod geometry;

pub use error::{ChartError, Error, Result};
pub use geometry::{CanvasSize, Point, Rect};
