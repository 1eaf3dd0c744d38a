//! Turning an expected failure into an empty `Maybe`.
//!
//! ```
//! use maybee::Maybe;
//!
//! let parsed = Maybe::attempt(|| "12".parse::<i32>()).catch_if(|_| true);
//! assert_eq!(parsed, Ok(Maybe::is(12)));
//! ```

use core::marker::PhantomData;
use std::error::Error as StdError;

use crate::maybe::Maybe;

/// A pending producer created by [`Maybe::attempt`].
///
/// Nothing runs until one of the `catch_*` methods names which error is
/// expected.
#[must_use = "the producer only runs when a catch method is called"]
pub struct Attempt<T, E, F> {
    producer: F,
    _marker: PhantomData<fn() -> Result<T, E>>,
}

impl<T> Maybe<T> {
    pub fn attempt<E, F>(producer: F) -> Attempt<T, E, F>
    where
        F: FnOnce() -> Result<T, E>,
    {
        Attempt { producer, _marker: PhantomData }
    }
}

impl<T, E, F> Attempt<T, E, F>
where
    F: FnOnce() -> Result<T, E>,
{
    /// Runs the producer. Errors for which `expected` returns true become an
    /// empty maybe; every other error is returned unchanged.
    pub fn catch_if<P>(self, expected: P) -> Result<Maybe<T>, E>
    where
        P: FnOnce(&E) -> bool,
    {
        match (self.producer)() {
            Ok(value) => Ok(Maybe::is(value)),
            Err(err) if expected(&err) => Ok(Maybe::empty()),
            Err(err) => Err(err),
        }
    }

    /// Runs the producer and absorbs only errors of concrete type `K`.
    ///
    /// The producer's error must be type-erased (`anyhow::Error` or a boxed
    /// `dyn Error`) so it can be downcast. For a concrete error type such as
    /// `ParseIntError`, use [`catch_if`](Self::catch_if) instead:
    ///
    /// ```compile_fail
    /// use std::num::ParseIntError;
    /// use maybee::Maybe;
    ///
    /// let _ = Maybe::attempt(|| "x".parse::<i32>()).catch_expecting::<ParseIntError>();
    /// ```
    ///
    /// ```
    /// use std::num::ParseIntError;
    /// use maybee::Maybe;
    ///
    /// let parsed = Maybe::attempt(|| -> anyhow::Result<i32> { Ok("x".parse::<i32>()?) })
    ///     .catch_expecting::<ParseIntError>();
    /// assert!(matches!(parsed, Ok(m) if m.is_empty()));
    /// ```
    pub fn catch_expecting<K>(self) -> Result<Maybe<T>, E>
    where
        E: ErrorKind,
        K: StdError + Send + Sync + 'static,
    {
        self.catch_if(|err| {
            let matched = err.is_kind::<K>();
            if matched {
                log::debug!("absorbed expected {} into an empty maybe", core::any::type_name::<K>());
            }
            matched
        })
    }
}

/// Type-erased errors that can be asked about their concrete kind.
pub trait ErrorKind {
    fn is_kind<K: StdError + Send + Sync + 'static>(&self) -> bool;
}

impl ErrorKind for anyhow::Error {
    fn is_kind<K: StdError + Send + Sync + 'static>(&self) -> bool { self.is::<K>() }
}

impl ErrorKind for Box<dyn StdError + Send + Sync> {
    fn is_kind<K: StdError + Send + Sync + 'static>(&self) -> bool { (**self).is::<K>() }
}

impl ErrorKind for Box<dyn StdError> {
    fn is_kind<K: StdError + Send + Sync + 'static>(&self) -> bool { (**self).is::<K>() }
}
