//! Transform pipeline infrastructure
//!
//! Conversion is expressed as a chain of stages. Each stage implements
//! [`Runnable`], and [`Transform`] glues stages together so that the output of
//! one becomes the input of the next:
//!
//! ```rust,ignore
//! let pipeline = Transform::from_fn(|s: String| Ok(Document::from_source(&s)))
//!     .then(MacroRewrite::new(&config))   // Document → Document
//!     .then(MarkerCleanup::new())         // Document → Document
//!     .then(Indentation::new(&config));   // Document → Document
//! ```
//!
//! The compiler checks that neighbouring stages agree on their types.
//! Common pipelines live in [`standard`] as `once_cell::sync::Lazy` statics.
//!
//! # Module Organization
//!
//! - [`stages`]: the three conversion passes
//! - [`standard`]: pre-built pipelines

pub mod stages;
pub mod standard;

use std::fmt;

/// Error that can occur during transformation
#[derive(Debug, Clone, PartialEq)]
pub enum TransformError {
    /// Stage failed with specific error
    StageFailed { stage: String, message: String },
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformError::StageFailed { stage, message } => {
                write!(f, "Stage '{}' failed: {}", stage, message)
            }
        }
    }
}

impl std::error::Error for TransformError {}

/// Trait for anything that can transform an input to an output
///
/// Implemented by the individual conversion passes; [`Transform`] composes them.
pub trait Runnable<I, O> {
    /// Execute this transformation on the input
    fn run(&self, input: I) -> Result<O, TransformError>;
}

/// A composable transformation pipeline from `I` to `O`
pub struct Transform<I, O> {
    run_fn: Box<dyn Fn(I) -> Result<O, TransformError> + Send + Sync>,
}

impl<I, O> Transform<I, O> {
    /// Create a transform from a function
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(I) -> Result<O, TransformError> + Send + Sync + 'static,
    {
        Transform {
            run_fn: Box::new(f),
        }
    }

    /// Append a stage, returning a transform with the stage's output type
    pub fn then<O2, S>(self, stage: S) -> Transform<I, O2>
    where
        S: Runnable<O, O2> + Send + Sync + 'static,
        I: 'static,
        O: 'static,
        O2: 'static,
    {
        let prev_run = self.run_fn;
        Transform {
            run_fn: Box::new(move |input| {
                let intermediate = prev_run(input)?;
                stage.run(intermediate)
            }),
        }
    }

    /// Chain a pre-built static transform after this one
    pub fn then_transform<O2>(self, next: &'static Transform<O, O2>) -> Transform<I, O2>
    where
        I: 'static,
        O: 'static,
        O2: 'static,
    {
        let prev_run = self.run_fn;
        Transform {
            run_fn: Box::new(move |input| {
                let intermediate = prev_run(input)?;
                next.run(intermediate)
            }),
        }
    }

    /// Execute this transform on the given input
    pub fn run(&self, input: I) -> Result<O, TransformError> {
        (self.run_fn)(input)
    }
}

// Transforms can themselves be used as stages
impl<I, O> Runnable<I, O> for Transform<I, O>
where
    I: 'static,
    O: 'static,
{
    fn run(&self, input: I) -> Result<O, TransformError> {
        Transform::run(self, input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use once_cell::sync::Lazy;

    struct Exclaim;
    impl Runnable<String, String> for Exclaim {
        fn run(&self, input: String) -> Result<String, TransformError> {
            Ok(format!("{}!", input))
        }
    }

    struct CountChars;
    impl Runnable<String, usize> for CountChars {
        fn run(&self, input: String) -> Result<usize, TransformError> {
            Ok(input.chars().count())
        }
    }

    struct RejectEmpty;
    impl Runnable<String, String> for RejectEmpty {
        fn run(&self, input: String) -> Result<String, TransformError> {
            if input.is_empty() {
                return Err(TransformError::StageFailed {
                    stage: "RejectEmpty".to_string(),
                    message: "empty input".to_string(),
                });
            }
            Ok(input)
        }
    }

    static UPPERCASE: Lazy<Transform<String, String>> =
        Lazy::new(|| Transform::from_fn(|s: String| Ok(s.to_uppercase())));

    #[test]
    fn test_transform_from_fn() {
        let transform = Transform::from_fn(|s: String| Ok(s.len()));
        assert_eq!(transform.run("abc".to_string()).unwrap(), 3);
    }

    #[test]
    fn test_stages_run_in_order() {
        let transform = Transform::from_fn(Ok).then(Exclaim).then(Exclaim);
        assert_eq!(transform.run("hi".to_string()).unwrap(), "hi!!");
    }

    #[test]
    fn test_type_changing_stage() {
        let transform = Transform::from_fn(Ok).then(Exclaim).then(CountChars);
        assert_eq!(transform.run("hi".to_string()).unwrap(), 3);
    }

    #[test]
    fn test_then_transform_uses_static() {
        let transform = Transform::from_fn(Ok).then(Exclaim).then_transform(&*UPPERCASE);
        assert_eq!(transform.run("hi".to_string()).unwrap(), "HI!");
    }

    #[test]
    fn test_error_stops_pipeline() {
        let transform = Transform::from_fn(Ok).then(RejectEmpty).then(Exclaim);
        let err = transform.run(String::new()).unwrap_err();
        assert_eq!(
            err,
            TransformError::StageFailed {
                stage: "RejectEmpty".to_string(),
                message: "empty input".to_string(),
            }
        );
    }

    #[test]
    fn test_error_display() {
        let stage_err = TransformError::StageFailed {
            stage: "Indentation".to_string(),
            message: "unbalanced .RE".to_string(),
        };
        assert_eq!(
            format!("{}", stage_err),
            "Stage 'Indentation' failed: unbalanced .RE"
        );
    }
}
