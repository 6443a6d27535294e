use serde::{Deserialize, Serialize};

use super::errors::CartError;
use crate::domain::product::value_objects::ProductId;

/// Ordered product references stored in one cart-detail record.
///
/// A product added twice appears twice; order is insertion order. The stored
/// form is a JSON array of integers, e.g. `[1,2,1]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartContents(Vec<ProductId>);

impl CartContents {
    pub fn new(ids: Vec<ProductId>) -> Self {
        Self(ids)
    }

    /// Parses the stored text form. Blank text is read as an empty list.
    pub fn decode(raw: &str) -> Result<Self, CartError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(raw).map_err(|_| CartError::MalformedContents)
    }

    pub fn encode(&self) -> String {
        // A list of integers always serializes.
        serde_json::to_string(&self.0).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn push(&mut self, id: ProductId) {
        self.0.push(id);
    }

    /// Removes the first occurrence of `id`. Returns `false` if it was not present.
    pub fn remove_first(&mut self, id: ProductId) -> bool {
        match self.0.iter().position(|item| *item == id) {
            Some(index) => {
                self.0.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.0.contains(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProductId> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<ProductId> {
        self.0
    }
}

impl FromIterator<ProductId> for CartContents {
    fn from_iter<I: IntoIterator<Item = ProductId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ids(values: &[i64]) -> Vec<ProductId> {
        values.iter().copied().map(ProductId::new).collect()
    }

    #[test]
    fn should_keep_order_and_duplicates_through_encode_and_decode() {
        let contents = CartContents::new(ids(&[4, 4, 9]));

        let decoded = CartContents::decode(&contents.encode()).unwrap();

        assert_eq!(decoded.into_inner(), ids(&[4, 4, 9]));
    }

    #[test]
    fn should_encode_as_json_array_of_integers() {
        let contents = CartContents::new(ids(&[1, 2, 1]));
        assert_eq!(contents.encode(), "[1,2,1]");
    }

    #[test]
    fn should_decode_stored_text_with_whitespace() {
        let contents = CartContents::decode("[3, 5 ,3]").unwrap();
        assert_eq!(contents.into_inner(), ids(&[3, 5, 3]));
    }

    #[test]
    fn should_decode_blank_text_as_empty() {
        assert!(CartContents::decode("").unwrap().is_empty());
        assert!(CartContents::decode("[]").unwrap().is_empty());
    }

    #[test]
    fn should_reject_malformed_text() {
        let result = CartContents::decode("[1, \"two\"]");
        assert!(matches!(result, Err(CartError::MalformedContents)));

        let result = CartContents::decode("not json");
        assert!(matches!(result, Err(CartError::MalformedContents)));
    }

    #[test]
    fn should_remove_only_first_occurrence() {
        let mut contents = CartContents::new(ids(&[7, 8, 7]));

        assert!(contents.remove_first(ProductId::new(7)));
        assert_eq!(contents.clone().into_inner(), ids(&[8, 7]));
        assert!(contents.contains(ProductId::new(7)));
    }

    #[test]
    fn should_report_missing_item_on_remove() {
        let mut contents = CartContents::new(ids(&[1]));

        assert!(!contents.remove_first(ProductId::new(2)));
        assert_eq!(contents.len(), 1);
    }

    #[test]
    fn should_append_at_the_end() {
        let mut contents = CartContents::default();
        contents.push(ProductId::new(5));
        contents.push(ProductId::new(5));

        assert_eq!(contents.encode(), "[5,5]");
    }

    proptest! {
        #[test]
        fn should_round_trip_any_id_sequence(values in proptest::collection::vec(any::<i64>(), 0..32)) {
            let contents: CartContents = values.iter().copied().map(ProductId::new).collect();
            let decoded = CartContents::decode(&contents.encode()).unwrap();
            prop_assert_eq!(decoded, contents);
        }
    }
}
