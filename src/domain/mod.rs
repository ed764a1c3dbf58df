//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (ids, timestamps, errors, state machine trait)
//! - `industry` - Industry categories and keyword-based inference
//! - `report` - Report model and deterministic synthesis
//! - `forms` - Quick form and wizard controllers

pub mod foundation;
pub mod forms;
pub mod industry;
pub mod report;
