//! Reference-sequence workloads.
//!
//! # Components
//! - [`SequenceGenerator`] - Anything that can produce a reference sequence
//! - [`SkewedGenerator`] - The hot/cold generator used by experiments

mod generator;

pub use generator::{distinct_pages, SequenceGenerator, SkewedGenerator};
