use core::fmt::Display;

use serde::ser::{self, Impossible};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{MaybeEncoding, PresenceTagged, SerializationFormat};

/// Writes the value itself when it exists and the null marker otherwise.
///
/// On the wire this is indistinguishable from a plain optional field. A value
/// that itself encodes as the null marker (`Maybe<Option<_>>` holding `None`,
/// `Maybe<serde_json::Value>` holding `Null`, `Maybe<()>`, or a maybe of an
/// empty maybe) would read back as empty, so encoding it is an error.
#[derive(Clone, Copy, Debug, Default)]
pub struct AsNullable;

impl MaybeEncoding for AsNullable {
    const FORMAT: SerializationFormat = SerializationFormat::Nullable;

    fn encode<M, S>(maybe: &M, serializer: S) -> Result<S::Ok, S::Error>
    where
        M: PresenceTagged,
        M::Inner: Serialize,
        S: Serializer,
    {
        match maybe.inner() {
            Some(value) if encodes_as_null(value) => {
                log::debug!("rejecting existing maybe whose value encodes as null");
                Err(<S::Error as ser::Error>::custom(
                    "an existing maybe holds a value that encodes as null; use the array format",
                ))
            }
            Some(value) => serializer.serialize_some(value),
            None => serializer.serialize_none(),
        }
    }

    fn decode<'de, M, D>(deserializer: D) -> Result<M, D::Error>
    where
        M: PresenceTagged,
        M::Inner: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        // Always read through Option so `null` is absence for every inner type
        // and `0` / `false` stay present.
        let value = Option::<M::Inner>::deserialize(deserializer)?;
        Ok(M::from_presence(value))
    }
}

/// True when `value` serializes as `none`, `unit` or a unit struct, looking
/// through `Some` and newtype wrappers.
fn encodes_as_null<T: ?Sized + Serialize>(value: &T) -> bool {
    value.serialize(NullCheck).unwrap_or(false)
}

/// Raised for every compound shape, which is never null.
#[derive(Debug, thiserror::Error)]
#[error("value is not the null marker")]
struct NotNull;

impl ser::Error for NotNull {
    fn custom<T: Display>(_msg: T) -> Self { NotNull }
}

struct NullCheck;

macro_rules! never_null {
    ($($method:ident($ty:ty)),* $(,)?) => {
        $(fn $method(self, _v: $ty) -> Result<bool, NotNull> { Ok(false) })*
    };
}

impl Serializer for NullCheck {
    type Ok = bool;
    type Error = NotNull;
    type SerializeSeq = Impossible<bool, NotNull>;
    type SerializeTuple = Impossible<bool, NotNull>;
    type SerializeTupleStruct = Impossible<bool, NotNull>;
    type SerializeTupleVariant = Impossible<bool, NotNull>;
    type SerializeMap = Impossible<bool, NotNull>;
    type SerializeStruct = Impossible<bool, NotNull>;
    type SerializeStructVariant = Impossible<bool, NotNull>;

    never_null! {
        serialize_bool(bool),
        serialize_i8(i8),
        serialize_i16(i16),
        serialize_i32(i32),
        serialize_i64(i64),
        serialize_i128(i128),
        serialize_u8(u8),
        serialize_u16(u16),
        serialize_u32(u32),
        serialize_u64(u64),
        serialize_u128(u128),
        serialize_f32(f32),
        serialize_f64(f64),
        serialize_char(char),
        serialize_str(&str),
        serialize_bytes(&[u8]),
    }

    fn serialize_none(self) -> Result<bool, NotNull> { Ok(true) }

    fn serialize_some<T: ?Sized + Serialize>(self, value: &T) -> Result<bool, NotNull> {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<bool, NotNull> { Ok(true) }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<bool, NotNull> { Ok(true) }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _index: u32,
        _variant: &'static str,
    ) -> Result<bool, NotNull> {
        Ok(false)
    }

    fn serialize_newtype_struct<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<bool, NotNull> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        _index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<bool, NotNull> {
        Ok(false)
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq, NotNull> { Err(NotNull) }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple, NotNull> { Err(NotNull) }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct, NotNull> {
        Err(NotNull)
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant, NotNull> {
        Err(NotNull)
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap, NotNull> { Err(NotNull) }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Self::SerializeStruct, NotNull> {
        Err(NotNull)
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant, NotNull> {
        Err(NotNull)
    }
}
