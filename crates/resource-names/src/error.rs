use thiserror::Error;

/// Errors produced while matching, binding, or rendering resource names.
///
/// All errors are terminal for the call that produced them; the library never
/// retries or recovers internally. How to surface them (bad request, not
/// found, log-and-drop) is the calling application's decision.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The resource name's segment count does not match the pattern's.
    #[error("resource name has {found} segments, pattern expects {expected}")]
    SegmentCountMismatch { expected: usize, found: usize },

    /// A constant pattern segment did not match the resource name.
    #[error("segment {index} is `{found}`, pattern expects constant `{expected}`")]
    ConstantMismatch {
        index: usize,
        expected: String,
        found: String,
    },

    /// The record passed to a dynamic bind or render is not a structured
    /// value. Statically typed [`Bindable`](crate::Bindable) records cannot
    /// produce this; it is only observable through the [`Value`](crate::Value)
    /// adapter.
    #[error("resource must be a structured value")]
    NotAStruct,

    /// No value could be resolved for a variable segment during rendering.
    #[error("resource is missing variable segment `{0}`")]
    MissingVariable(String),
}
