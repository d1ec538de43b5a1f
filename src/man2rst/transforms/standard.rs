//! Standard transform definitions
//!
//! Pre-built pipelines for the default configuration live here as
//! `once_cell::sync::Lazy` statics. Use [`pipeline`] when the configuration
//! comes from a file or the command line.

use crate::man2rst::config::ConvertConfig;
use crate::man2rst::document::Document;
use crate::man2rst::transforms::stages::{Indentation, MacroRewrite, MarkerCleanup};
use crate::man2rst::transforms::Transform;
use once_cell::sync::Lazy;

/// Type alias for a pipeline ending in the converted document
pub type DocumentTransform = Transform<String, Document>;

/// Type alias for a pipeline ending in rst text
pub type RstTransform = Transform<String, String>;

/// Build the three-pass conversion for `config`: String → Document
///
/// 1. Split into lines
/// 2. Macro rewrite
/// 3. Trailing marker cleanup
/// 4. `.RS`/`.RE` indentation
pub fn pipeline(config: &ConvertConfig) -> DocumentTransform {
    Transform::from_fn(|source: String| Ok(Document::from_source(&source)))
        .then(MacroRewrite::new(config))
        .then(MarkerCleanup::new())
        .then(Indentation::new(config))
}

/// Conversion with default settings: String → Document
pub static MAN_TO_DOCUMENT: Lazy<DocumentTransform> =
    Lazy::new(|| pipeline(&ConvertConfig::default()));

/// Conversion with default settings, rendered: String → String
///
/// # Example
///
/// ```rust,ignore
/// let rst = MAN_TO_RST.run(".B bold\n".to_string()).unwrap();
/// assert_eq!(rst, "**bold** ");
/// ```
pub static MAN_TO_RST: Lazy<RstTransform> = Lazy::new(|| {
    Transform::from_fn(Ok)
        .then_transform(&*MAN_TO_DOCUMENT)
        .then(Transform::from_fn(|doc: Document| Ok(doc.render())))
});
