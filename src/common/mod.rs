//! Common types and utilities shared across evictsim.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Configuration constants and [`SimulationConfig`]
//! - Error types
//! - Identifiers ([`PageId`])

pub mod config;
mod page_id;

pub use crate::error::{Error, Result};
pub use config::{SequenceLayout, SimulationConfig};
pub use page_id::{pages, PageId};
