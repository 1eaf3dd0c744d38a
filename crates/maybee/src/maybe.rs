//! The `Maybe<T>` container: construction, access, equality and rendering.

use core::fmt;
use core::hash::{Hash, Hasher};

use crate::error::MaybeError;
use crate::nullable::Nullable;

/// A value of type `T` that either exists or is empty.
///
/// Instances are immutable; every operation that "changes" a maybe returns a
/// new one. Two maybes are equal when both are empty, or both exist and hold
/// equal values.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Maybe<T>(Option<T>);

impl<T> Maybe<T> {
    /// A maybe holding `value`.
    ///
    /// `value` is taken as is, even when it is itself a null marker such as
    /// `None` or `serde_json::Value::Null`. Use [`try_is`](Self::try_is) to
    /// reject those. The nullable encoding refuses to write such a maybe,
    /// since it would read back as empty.
    #[inline]
    pub const fn is(value: T) -> Self { Maybe(Some(value)) }

    /// The empty maybe.
    #[inline]
    pub const fn empty() -> Self { Maybe(None) }

    /// Builds an existing maybe from a nullable carrier, failing fast on the
    /// null marker.
    pub fn try_is<N>(value: N) -> Result<Self, MaybeError>
    where
        N: Nullable<Value = T>,
    {
        value.into_value().map(Maybe::is).ok_or(MaybeError::NullValue)
    }

    /// Empty for the null marker, existing otherwise.
    pub fn from_nullable<N>(value: N) -> Self
    where
        N: Nullable<Value = T>,
    {
        Maybe(value.into_value())
    }

    #[inline]
    pub const fn exists(&self) -> bool { self.0.is_some() }

    #[inline]
    pub const fn is_empty(&self) -> bool { self.0.is_none() }

    /// The contained value, or [`MaybeError::Empty`].
    pub fn it(&self) -> Result<&T, MaybeError> {
        self.0.as_ref().ok_or(MaybeError::Empty)
    }

    /// Owned form of [`it`](Self::it).
    pub fn into_it(self) -> Result<T, MaybeError> {
        self.0.ok_or(MaybeError::Empty)
    }

    pub fn it_or_default(self) -> T
    where
        T: Default,
    {
        self.0.unwrap_or_default()
    }

    pub fn it_or(self, fallback: T) -> T {
        self.0.unwrap_or(fallback)
    }

    /// The contained value, or the error built by `error`.
    ///
    /// `error` is only called when the maybe is empty.
    pub fn it_or_throw<E, F>(self, error: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        self.0.ok_or_else(error)
    }

    #[deprecated(note = "builds the error even when unused; prefer `it_or_throw` with a closure")]
    pub fn it_or_throw_error<E>(self, error: E) -> Result<T, E> {
        self.0.ok_or(error)
    }

    /// A slice of length one (exists) or zero (empty).
    pub fn as_list(&self) -> &[T] {
        match &self.0 {
            Some(value) => core::slice::from_ref(value),
            None => &[],
        }
    }

    /// The value, or `None` for an empty maybe.
    #[inline]
    pub fn as_nullable(self) -> Option<T> { self.0 }

    /// Borrows the contained value without consuming the maybe.
    pub fn by_ref(&self) -> Maybe<&T> { Maybe(self.0.as_ref()) }

    pub fn iter(&self) -> core::slice::Iter<'_, T> { self.as_list().iter() }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self { Maybe::empty() }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self { Maybe(value) }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self { value.0 }
}

impl<T: Hash> Hash for Maybe<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.exists().hash(state);
        if let Some(value) = &self.0 {
            value.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Maybe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(value) => f.debug_tuple("Is").field(value).finish(),
            None => f.write_str("Empty"),
        }
    }
}

/// `[value]` when the value exists, `[]` otherwise.
impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(value) => write!(f, "[{value}]"),
            None => f.write_str("[]"),
        }
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter { self.0.into_iter() }
}

impl<'a, T> IntoIterator for &'a Maybe<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}
