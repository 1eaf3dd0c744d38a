//! Mapping, chaining and casting on `Maybe`.

use core::any::{type_name, Any};

use crate::error::MaybeError;
use crate::maybe::Maybe;

impl<T> Maybe<T> {
    /// Monadic bind: calls `f` with the value if it exists, otherwise stays empty.
    pub fn select_many<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self.as_nullable() {
            Some(value) => f(value),
            None => Maybe::empty(),
        }
    }

    /// Maps the value while keeping the exists/empty state. `f` is not called
    /// on an empty maybe.
    pub fn select<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        self.select_many(|value| Maybe::is(f(value)))
    }

    /// Erases the value type, the counterpart of [`cast`](Maybe::cast).
    pub fn into_any(self) -> Maybe<Box<dyn Any>>
    where
        T: Any,
    {
        self.select(|value| Box::new(value) as Box<dyn Any>)
    }
}

macro_rules! impl_cast {
    ($($erased:ty),+) => {$(
        impl Maybe<Box<$erased>> {
            /// Reinterprets the erased value as `U`.
            ///
            /// An empty maybe stays empty; an existing value of another type is a
            /// [`MaybeError::TypeMismatch`].
            pub fn cast<U: Any>(self) -> Result<Maybe<U>, MaybeError> {
                match self.as_nullable() {
                    None => Ok(Maybe::empty()),
                    Some(value) => value
                        .downcast::<U>()
                        .map(|value| Maybe::is(*value))
                        .map_err(|_| MaybeError::TypeMismatch { expected: type_name::<U>() }),
                }
            }
        }
    )+};
}

impl_cast!(dyn Any, dyn Any + Send);

impl Maybe<String> {
    /// The string, or `""` when empty.
    pub fn it_or_empty(self) -> String { self.it_or_default() }
}

impl<'a> Maybe<&'a str> {
    pub fn it_or_empty(self) -> &'a str { self.it_or("") }
}
