//! Functional programming utilities for the outcome workspace
//!
//! These are the building blocks for reasoning about [`crate::Result::map`]:
//! mapping `identity` changes nothing, and mapping `f` then `g` equals mapping
//! `compose(g, f)`.

pub mod composition;

pub use composition::{compose, identity};
