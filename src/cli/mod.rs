//! CLI infrastructure for the search benchmark
//!
//! This module provides the command-line interface for running timed
//! benchmark trials and for solving individual positions with both engines.

pub mod commands;
pub mod output;
