use core::cell::Cell;
use core::fmt;
use core::marker::PhantomData;
use core::str::FromStr;

use serde::de::DeserializeSeed;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{AsArray, AsNullable, MaybeEncoding, PresenceTagged};
use crate::error::ParseFormatError;

/// How `Maybe` values are represented on the wire.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SerializationFormat {
    /// The value when it exists, `null` when empty.
    #[default]
    #[serde(alias = "null")]
    Nullable,
    /// A sequence of length one (exists) or zero (empty).
    #[serde(alias = "list")]
    Array,
}

thread_local! {
    static ACTIVE: Cell<SerializationFormat> = const { Cell::new(SerializationFormat::Nullable) };
}

/// Restores the previously active format on drop, including during unwinding.
struct ScopeGuard {
    previous: SerializationFormat,
}

impl ScopeGuard {
    fn install(format: SerializationFormat) -> Self {
        let previous = ACTIVE.with(|active| active.replace(format));
        ScopeGuard { previous }
    }
}

impl Drop for ScopeGuard {
    fn drop(&mut self) {
        ACTIVE.with(|active| active.set(self.previous));
    }
}

impl SerializationFormat {
    /// The format `Maybe`'s serde impls use on this thread right now.
    pub fn active() -> Self { ACTIVE.with(Cell::get) }

    /// Runs `f` with `self` as the active format on this thread.
    ///
    /// Scopes nest; the outer format is back in place once `f` returns.
    pub fn scope<R>(self, f: impl FnOnce() -> R) -> R {
        let _guard = ScopeGuard::install(self);
        f()
    }

    pub fn encode<M, S>(self, maybe: &M, serializer: S) -> Result<S::Ok, S::Error>
    where
        M: PresenceTagged,
        M::Inner: Serialize,
        S: Serializer,
    {
        match self {
            SerializationFormat::Nullable => AsNullable::encode(maybe, serializer),
            SerializationFormat::Array => AsArray::encode(maybe, serializer),
        }
    }

    pub fn decode<'de, M, D>(self, deserializer: D) -> Result<M, D::Error>
    where
        M: PresenceTagged,
        M::Inner: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        match self {
            SerializationFormat::Nullable => AsNullable::decode(deserializer),
            SerializationFormat::Array => AsArray::decode(deserializer),
        }
    }

    /// Attaches this format to `value` for any serde serializer.
    pub fn wrap<T: ?Sized>(self, value: &T) -> Formatted<'_, T> {
        Formatted { format: self, value }
    }

    /// A seed that deserializes `T` with this format active.
    pub fn seed<T>(self) -> FormattedSeed<T> {
        FormattedSeed { format: self, _marker: PhantomData }
    }
}

impl fmt::Display for SerializationFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SerializationFormat::Nullable => "nullable",
            SerializationFormat::Array => "array",
        })
    }
}

impl FromStr for SerializationFormat {
    type Err = ParseFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nullable" | "null" => Ok(SerializationFormat::Nullable),
            "array" | "list" => Ok(SerializationFormat::Array),
            _ => Err(ParseFormatError(s.to_owned())),
        }
    }
}

/// A value serialized with a fixed [`SerializationFormat`].
#[derive(Debug)]
pub struct Formatted<'a, T: ?Sized> {
    format: SerializationFormat,
    value: &'a T,
}

impl<T: ?Sized + Serialize> Serialize for Formatted<'_, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.format.scope(|| self.value.serialize(serializer))
    }
}

pub struct FormattedSeed<T> {
    format: SerializationFormat,
    _marker: PhantomData<fn() -> T>,
}

impl<'de, T: Deserialize<'de>> DeserializeSeed<'de> for FormattedSeed<T> {
    type Value = T;

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<T, D::Error> {
        self.format.scope(|| T::deserialize(deserializer))
    }
}
