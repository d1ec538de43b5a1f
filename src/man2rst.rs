//! Man page to restructured text conversion
//!
//! The conversion is a pipeline of three passes over the lines of a man page:
//!
//! 1. macro rewrite (`.TH`, `.SH`, `.B`, `.I`, `.IP`, `.PP`, comments)
//! 2. trailing emphasis marker cleanup
//! 3. `.RS`/`.RE` indentation
//!
//! Start with [`loader::DocumentLoader`] or the statics in
//! [`transforms::standard`].

pub mod config;
pub mod document;
pub mod loader;
pub mod macros;
pub mod transforms;
