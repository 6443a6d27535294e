use serde::{Deserialize, Serialize};

/// Catalog-wide product identifier.
/// Serialized as a bare integer so cart contents stay a plain JSON array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(i64);

impl ProductId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_expose_inner_value() {
        assert_eq!(ProductId::new(42).value(), 42);
    }

    #[test]
    fn should_display_as_integer() {
        assert_eq!(ProductId::from(7).to_string(), "7");
    }

    #[test]
    fn should_order_by_numeric_value() {
        assert!(ProductId::new(2) < ProductId::new(10));
    }
}
