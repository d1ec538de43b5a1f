//! # man2rst
//!
//! Converts troff man pages into restructured text.
//!
//! See the [`man2rst`] module for the conversion pipeline.

pub mod man2rst;
