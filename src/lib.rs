//! Hosting Ranker - Multi-criteria ranking of hosting plans
//!
//! This crate ranks a fixed set of alternatives against weighted benefit and
//! cost criteria with two methods, Simple Additive Weighting and Weighted
//! Product, and reports where the two methods agree.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
