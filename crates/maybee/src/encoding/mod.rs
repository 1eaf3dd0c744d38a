//! Serde encodings for `Maybe`.
//!
//! Two strategies exist, [`AsNullable`] (`42` / `null`) and [`AsArray`]
//! (`[42]` / `[]`). `Maybe<T>`'s own `Serialize`/`Deserialize` impls pick one
//! from the [`SerializationFormat`] active on the current thread, which is
//! `Nullable` unless a pipeline installed another one with
//! [`SerializationFormat::scope`].

mod array;
mod format;
mod nullable;

pub use array::AsArray;
pub use format::{Formatted, FormattedSeed, SerializationFormat};
pub use nullable::AsNullable;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::maybe::Maybe;

/// Capability shared by every presence-tagged container the encoders accept.
///
/// Encoders never look at concrete types: they read presence and the inner
/// value through this trait, and rebuild through `from_presence`.
pub trait PresenceTagged: Sized {
    type Inner;

    fn exists(&self) -> bool;

    fn inner(&self) -> Option<&Self::Inner>;

    fn from_presence(value: Option<Self::Inner>) -> Self;
}

impl<T> PresenceTagged for Maybe<T> {
    type Inner = T;

    #[inline]
    fn exists(&self) -> bool { Maybe::exists(self) }

    #[inline]
    fn inner(&self) -> Option<&T> { self.it().ok() }

    #[inline]
    fn from_presence(value: Option<T>) -> Self { Maybe::from(value) }
}

/// A stateless policy for writing and reading presence on the wire.
pub trait MaybeEncoding {
    const FORMAT: SerializationFormat;

    fn encode<M, S>(maybe: &M, serializer: S) -> Result<S::Ok, S::Error>
    where
        M: PresenceTagged,
        M::Inner: Serialize,
        S: Serializer;

    fn decode<'de, M, D>(deserializer: D) -> Result<M, D::Error>
    where
        M: PresenceTagged,
        M::Inner: Deserialize<'de>,
        D: Deserializer<'de>;
}

impl<T: Serialize> Serialize for Maybe<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        SerializationFormat::active().encode(self, serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Maybe<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        SerializationFormat::active().decode(deserializer)
    }
}
