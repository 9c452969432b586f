//! Variants of the transformations for callers whose callbacks may be unset and
//! whose flat-map results arrive type-erased, e.g. tables of handlers filled in
//! by a scripting bridge.
//!
//! The unset check happens before the variant is looked at, so an empty
//! receiver still rejects a missing callback.

use std::any::{type_name, Any};

use crate::{Error, Nullable, Optional, Result};

fn require<F>(callback: Option<F>, what: &'static str, op: &'static str) -> Result<F> {
    callback.ok_or_else(|| {
        tracing::debug!(op, what, "callback is unset");
        Error::NullPointer(what)
    })
}

impl<T> Optional<T> {
    pub fn filter_checked<P>(self, predicate: Option<P>) -> Result<Self>
    where
        P: FnOnce(&T) -> bool,
    {
        let predicate = require(predicate, "predicate", "filter_checked")?;
        Ok(self.filter(predicate))
    }

    pub fn map_checked<N, F>(self, mapper: Option<F>) -> Result<Optional<N::Value>>
    where
        N: Nullable,
        F: FnOnce(T) -> N,
    {
        let mapper = require(mapper, "mapper", "map_checked")?;
        Ok(self.map_nullable(mapper))
    }

    /// `flat_map` for a mapper returning a boxed value of unknown type.
    ///
    /// # Errors
    ///
    /// [`Error::NullPointer`] if `mapper` is unset, and
    /// [`Error::FlatMapContractViolation`] if the mapper returns anything
    /// other than an `Optional<U>`.
    pub fn flat_map_checked<U, F>(self, mapper: Option<F>) -> Result<Optional<U>>
    where
        U: 'static,
        F: FnOnce(T) -> Box<dyn Any>,
    {
        let mapper = require(mapper, "mapper", "flat_map_checked")?;
        let v = match self {
            Self::Present(v) => v,
            Self::Absent => return Ok(Optional::empty()),
        };

        match mapper(v).downcast::<Optional<U>>() {
            Ok(result) => Ok(*result),
            Err(_) => {
                let expected = type_name::<Optional<U>>();
                tracing::debug!(op = "flat_map_checked", expected, "mapper broke its contract");
                Err(Error::FlatMapContractViolation { expected })
            }
        }
    }
}
