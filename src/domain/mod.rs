//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (polarity, IDs, timestamps, errors)
//! - `criteria` - Criteria registry and the default hosting criteria
//! - `analysis` - Pure scoring pipelines (SAW, WP, comparison)
//! - `session` - Per-caller working state

pub mod analysis;
pub mod criteria;
pub mod foundation;
pub mod session;
