use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Contract violations detected by an [`Optional`](crate::Optional) operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// a required value or callback was absent
    #[error("{0} must not be absent")]
    NullPointer(&'static str),

    #[error("No value present")]
    NoSuchElement,

    /// the `flat_map_checked` mapper returned something other than the
    /// expected `Optional<U>`
    #[error("flat_map callback must return {expected}")]
    FlatMapContractViolation { expected: &'static str },
}
