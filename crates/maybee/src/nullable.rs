//! Types that carry their own in-band "null" representation.

/// A carrier whose value may be the null marker.
///
/// This is the bridge used by [`Maybe::from_nullable`](crate::Maybe::from_nullable)
/// and [`Maybe::try_is`](crate::Maybe::try_is): `Option<T>` works for any `T`,
/// so value-like and reference-like payloads go through the same door.
pub trait Nullable {
    type Value;

    /// `None` when `self` is the null marker.
    fn into_value(self) -> Option<Self::Value>;
}

impl<T> Nullable for Option<T> {
    type Value = T;

    #[inline]
    fn into_value(self) -> Option<T> { self }
}

impl Nullable for serde_json::Value {
    type Value = serde_json::Value;

    #[inline]
    fn into_value(self) -> Option<serde_json::Value> {
        match self {
            serde_json::Value::Null => None,
            other => Some(other),
        }
    }
}
