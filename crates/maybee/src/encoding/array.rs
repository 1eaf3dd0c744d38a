use core::fmt;
use core::marker::PhantomData;

use serde::de::{Error as _, IgnoredAny, SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{MaybeEncoding, PresenceTagged, SerializationFormat};

/// Writes a sequence holding the value when it exists, or an empty sequence.
///
/// This is the legacy, self-describing format: nested maybes survive a round
/// trip (`[[]]` vs `[]`). Sequences longer than one element are rejected on
/// decode.
#[derive(Clone, Copy, Debug, Default)]
pub struct AsArray;

impl MaybeEncoding for AsArray {
    const FORMAT: SerializationFormat = SerializationFormat::Array;

    fn encode<M, S>(maybe: &M, serializer: S) -> Result<S::Ok, S::Error>
    where
        M: PresenceTagged,
        M::Inner: Serialize,
        S: Serializer,
    {
        let len = usize::from(maybe.exists());
        let mut seq = serializer.serialize_seq(Some(len))?;
        if let Some(value) = maybe.inner() {
            seq.serialize_element(value)?;
        }
        seq.end()
    }

    fn decode<'de, M, D>(deserializer: D) -> Result<M, D::Error>
    where
        M: PresenceTagged,
        M::Inner: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(SingletonVisitor(PhantomData))
    }
}

struct SingletonVisitor<M>(PhantomData<M>);

impl<'de, M> Visitor<'de> for SingletonVisitor<M>
where
    M: PresenceTagged,
    M::Inner: Deserialize<'de>,
{
    type Value = M;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a sequence of zero or one element")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let first = seq.next_element::<M::Inner>()?;
        if first.is_some() {
            let mut len = 1;
            while seq.next_element::<IgnoredAny>()?.is_some() {
                len += 1;
            }
            if len > 1 {
                log::debug!("rejecting maybe sequence of {len} elements");
                return Err(A::Error::invalid_length(len, &self));
            }
        }
        Ok(M::from_presence(first))
    }
}
