//! A container holding either exactly one value or nothing.
//!
//! [`Optional`] is an immutable two-variant enum. Transformations consume the
//! receiver and hand back either the receiver itself or a new container, so
//! there is never an in-place state change.
//!
//! ```
//! use optional::Optional;
//!
//! let len = Optional::of("something").map(str::len);
//! assert_eq!(len.get(), Ok(9));
//! assert_eq!(Optional::<&str>::empty().or_else("fallback"), "fallback");
//! ```
#![forbid(unsafe_code)]

mod checked;
pub mod error;
mod macros;
mod nullable;

pub use error::{Error, Result};
pub use nullable::Nullable;

use std::any::Any;
use std::fmt;

/// Either a held value or nothing.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Optional<T> {
    Present(T),
    Absent,
}

impl<T> Default for Optional<T> {
    #[inline]
    fn default() -> Self {
        Self::Absent
    }
}

impl<T> Optional<T> {
    pub const EMPTY: Self = Self::Absent;

    #[inline]
    pub const fn empty() -> Self {
        Self::Absent
    }

    #[inline]
    pub const fn of(value: T) -> Self {
        Self::Present(value)
    }

    /// Wraps a possibly-absent value, failing if it is the absent marker.
    pub fn of_checked<N>(value: N) -> Result<Self>
    where
        N: Nullable<Value = T>,
    {
        match value.into_value() {
            Some(v) => Ok(Self::of(v)),
            None => {
                tracing::debug!(op = "of_checked", "absent value passed where a value is required");
                Err(Error::NullPointer("value"))
            }
        }
    }

    /// `empty()` for the absent marker, `of(value)` otherwise.
    #[inline]
    pub fn of_nullable<N>(value: N) -> Self
    where
        N: Nullable<Value = T>,
    {
        match value.into_value() {
            Some(v) => Self::of(v),
            None => Self::empty(),
        }
    }

    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        !self.is_present()
    }

    /// Gets the held value.
    ///
    /// # Errors
    ///
    /// [`Error::NoSuchElement`] if nothing is held.
    #[inline]
    pub fn get(self) -> Result<T> {
        match self {
            Self::Present(v) => Ok(v),
            Self::Absent => Err(Error::NoSuchElement),
        }
    }

    #[inline]
    pub fn get_ref(&self) -> Result<&T> {
        self.as_ref().get()
    }

    #[inline]
    pub const fn as_ref(&self) -> Optional<&T> {
        match self {
            Self::Present(v) => Optional::Present(v),
            Self::Absent => Optional::Absent,
        }
    }

    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Present(v) => Some(v),
            Self::Absent => None,
        }
    }

    #[inline]
    pub fn if_present<F: FnOnce(&T)>(&self, f: F) {
        if let Self::Present(v) = self {
            f(v)
        }
    }

    /// Runs exactly one of the two callbacks.
    #[inline]
    pub fn if_present_or_else<F, E>(&self, on_present: F, on_absent: E)
    where
        F: FnOnce(&T),
        E: FnOnce(),
    {
        match self {
            Self::Present(v) => on_present(v),
            Self::Absent => on_absent(),
        }
    }

    /// Keeps the value only if `predicate` holds for it. `predicate` is not
    /// called when nothing is held.
    pub fn filter<P: FnOnce(&T) -> bool>(self, predicate: P) -> Self {
        let keep = match &self {
            Self::Present(v) => predicate(v),
            Self::Absent => false,
        };

        if keep {
            self
        } else {
            Self::empty()
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, mapper: F) -> Optional<U> {
        match self {
            Self::Present(v) => Optional::of(mapper(v)),
            Self::Absent => Optional::empty(),
        }
    }

    /// Like [`map`](Self::map), but a mapper returning the absent marker
    /// yields an empty container instead of wrapping it.
    pub fn map_nullable<N, F>(self, mapper: F) -> Optional<N::Value>
    where
        N: Nullable,
        F: FnOnce(T) -> N,
    {
        match self {
            Self::Present(v) => Optional::of_nullable(mapper(v)),
            Self::Absent => Optional::empty(),
        }
    }

    pub fn flat_map<U, F: FnOnce(T) -> Optional<U>>(self, mapper: F) -> Optional<U> {
        match self {
            Self::Present(v) => mapper(v),
            Self::Absent => Optional::empty(),
        }
    }

    /// Returns `self` if a value is held, otherwise whatever `supplier` gives.
    pub fn or<F: FnOnce() -> Self>(self, supplier: F) -> Self {
        match self {
            Self::Present(_) => self,
            Self::Absent => supplier(),
        }
    }

    #[inline]
    pub fn or_else(self, other: T) -> T {
        match self {
            Self::Present(v) => v,
            Self::Absent => other,
        }
    }

    #[inline]
    pub fn or_else_get<F: FnOnce() -> T>(self, supplier: F) -> T {
        match self {
            Self::Present(v) => v,
            Self::Absent => supplier(),
        }
    }

    /// Returns the held value, or hands `error` back untouched.
    #[inline]
    pub fn or_else_throw<E>(self, error: E) -> std::result::Result<T, E> {
        match self {
            Self::Present(v) => Ok(v),
            Self::Absent => Err(error),
        }
    }

    #[inline]
    pub fn or_else_throw_with<E, F: FnOnce() -> E>(self, error: F) -> std::result::Result<T, E> {
        match self {
            Self::Present(v) => Ok(v),
            Self::Absent => Err(error()),
        }
    }
}

impl<T: PartialEq> Optional<T> {
    #[inline]
    pub fn equals(&self, other: &Self) -> bool {
        self == other
    }
}

impl<T: PartialEq + 'static> Optional<T> {
    /// Compares against a value of unknown type. Anything that is not an
    /// `Optional<T>` of this very `T` is unequal, empty ones included.
    pub fn dyn_equals(&self, other: &dyn Any) -> bool {
        other
            .downcast_ref::<Self>()
            .map_or(false, |other| self == other)
    }
}

impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present(v) => write!(f, "Optional[{v}]"),
            Self::Absent => f.write_str("Optional.empty"),
        }
    }
}
