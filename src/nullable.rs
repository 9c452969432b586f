use crate::Optional;

/// A type that may carry an absent marker.
///
/// This is the only place the marker is visible. Everything crossing into an
/// [`Optional`] goes through [`Nullable::into_value`], which strips it, so a
/// `Present` can never hold one.
pub trait Nullable {
    type Value;

    fn is_absent(&self) -> bool;

    fn into_value(self) -> Option<Self::Value>;
}

impl<T> Nullable for Option<T> {
    type Value = T;

    #[inline]
    fn is_absent(&self) -> bool {
        self.is_none()
    }

    #[inline]
    fn into_value(self) -> Option<T> {
        self
    }
}

impl<T> Nullable for Optional<T> {
    type Value = T;

    #[inline]
    fn is_absent(&self) -> bool {
        !self.is_present()
    }

    #[inline]
    fn into_value(self) -> Option<T> {
        self.into_option()
    }
}

impl<T> From<Option<T>> for Optional<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        Optional::of_nullable(value)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    #[inline]
    fn from(value: Optional<T>) -> Self {
        value.into_option()
    }
}
