//! Typed identifiers
//!
//! The backend keys every entity by a numeric id. `TypedId` wraps the raw
//! `u64` with a phantom marker so a dish id cannot be passed where a
//! menu-item id is expected. Ids travel over the wire as plain JSON numbers.

use std::{
    cmp::Ordering,
    fmt::{Debug, Display, Formatter, Result as FmtResult},
    hash::{Hash, Hasher},
    marker::PhantomData,
    num::ParseIntError,
    str::FromStr,
};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A numeric identifier tagged with the entity type it refers to.
pub struct TypedId<T>(u64, PhantomData<T>);

impl<T> TypedId<T> {
    /// Wrap a raw backend id.
    pub const fn from_raw(id: u64) -> Self {
        Self(id, PhantomData)
    }

    /// Unwrap back to the raw backend id.
    #[must_use]
    pub const fn into_raw(self) -> u64 {
        self.0
    }
}

impl<T> Clone for TypedId<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for TypedId<T> {}

impl<T> Debug for TypedId<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Debug::fmt(&self.0, f)
    }
}

impl<T> Display for TypedId<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

impl<T> PartialEq for TypedId<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for TypedId<T> {}

impl<T> Hash for TypedId<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<T> PartialOrd for TypedId<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for TypedId<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl<T> From<u64> for TypedId<T> {
    fn from(value: u64) -> Self {
        Self::from_raw(value)
    }
}

impl<T> From<TypedId<T>> for u64 {
    fn from(value: TypedId<T>) -> Self {
        value.into_raw()
    }
}

impl<T> FromStr for TypedId<T> {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>().map(Self::from_raw)
    }
}

impl<T> Serialize for TypedId<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.0)
    }
}

impl<'de, T> Deserialize<'de> for TypedId<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        u64::deserialize(deserializer).map(Self::from_raw)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    struct Marker;

    #[test]
    fn round_trips_raw_value() {
        let id = TypedId::<Marker>::from_raw(42);

        assert_eq!(id.into_raw(), 42);
    }

    #[test]
    fn parses_from_str() -> TestResult {
        let id: TypedId<Marker> = "17".parse()?;

        assert_eq!(id, TypedId::from_raw(17));

        Ok(())
    }

    #[test]
    fn rejects_non_numeric_input() {
        let result = "abc".parse::<TypedId<Marker>>();

        assert!(result.is_err(), "expected parse failure for non-numeric id");
    }

    #[test]
    fn serializes_as_plain_number() -> TestResult {
        let id = TypedId::<Marker>::from_raw(7);

        assert_eq!(serde_json::to_string(&id)?, "7");

        Ok(())
    }

    #[test]
    fn deserializes_from_plain_number() -> TestResult {
        let id: TypedId<Marker> = serde_json::from_str("99")?;

        assert_eq!(id.into_raw(), 99);

        Ok(())
    }
}
