//! Type-safe product identifiers.

use serde::{Deserialize, Serialize};

/// Identifier of a catalog product.
///
/// Serialized as a bare JSON number so that persisted carts read as
/// `[1, 5, 12]`.
///
/// ```rust
/// # use atelier_core::ProductId;
/// let id = ProductId::new(5);
/// assert_eq!(id.as_i32(), 5);
/// assert_eq!(serde_json::to_string(&id).unwrap(), "5");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ProductId(i32);

impl ProductId {
    /// Create a new ID from an i32 value.
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Get the underlying i32 value.
    #[must_use]
    pub const fn as_i32(&self) -> i32 {
        self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl core::str::FromStr for ProductId {
    type Err = core::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

impl From<i32> for ProductId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl From<ProductId> for i32 {
    fn from(id: ProductId) -> Self {
        id.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_from_path_segment() {
        assert_eq!("12".parse::<ProductId>().unwrap(), ProductId::new(12));
        assert_eq!(" 7 ".parse::<ProductId>().unwrap(), ProductId::new(7));
        assert!("abc".parse::<ProductId>().is_err());
    }

    #[test]
    fn test_list_serializes_as_numbers() {
        let ids = vec![ProductId::new(1), ProductId::new(3)];
        assert_eq!(serde_json::to_string(&ids).unwrap(), "[1,3]");
    }
}
