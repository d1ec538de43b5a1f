//! Individual conversion stages
//!
//! Each pass of the man → rst conversion is a stage implementing `Runnable`.
//! They run in this order:
//!
//! 1. [`MacroRewrite`]: per-line macro translation
//! 2. [`MarkerCleanup`]: joins trailing emphasis markers with the next line
//! 3. [`Indentation`]: `.RS`/`.RE` nesting turned into padding

pub mod indentation;
pub mod marker_cleanup;
pub mod rewrite;

pub use indentation::Indentation;
pub use marker_cleanup::MarkerCleanup;
pub use rewrite::MacroRewrite;
