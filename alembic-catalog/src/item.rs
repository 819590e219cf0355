use serde::{Deserialize, Serialize};

/// Identifier assigned by the catalog source (unique within one fetch).
pub type ItemId = String;

/// Placeholder for a missing value in the list table.
pub const EMPTY_CELL: &str = "Empty";

/// A single catalog record (a potion).
///
/// Every descriptive field is optional: the source omits or nulls them freely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: Option<String>,
    pub effect: Option<String>,
    pub difficulty: Option<String>,
    pub characteristics: Option<String>,
    /// Image URL.
    pub image: Option<String>,
    pub inventors: Option<String>,
    pub ingredients: Option<String>,
    pub side_effects: Option<String>,
    /// Preparation time.
    pub time: Option<String>,
    /// External reference link.
    pub wiki: Option<String>,
}

impl Item {
    /// Creates an item with only an id and a name.
    pub fn named(id: impl Into<ItemId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// The name, if present and non-empty.
    pub fn name(&self) -> Option<&str> {
        present(&self.name)
    }

    /// Table cell text for the list view columns.
    pub fn cell(field: &Option<String>) -> &str {
        present(field).unwrap_or(EMPTY_CELL)
    }
}

/// Empty strings count as missing, same as absent values.
pub(crate) fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_name_is_missing() {
        let mut item = Item::named("a", "");
        assert_eq!(item.name(), None);

        item.name = Some("Wit-Sharpening Potion".to_string());
        assert_eq!(item.name(), Some("Wit-Sharpening Potion"));
    }

    #[test]
    fn cell_falls_back_to_placeholder() {
        let item = Item::named("a", "Felix Felicis");
        assert_eq!(Item::cell(&item.name), "Felix Felicis");
        assert_eq!(Item::cell(&item.effect), EMPTY_CELL);
        assert_eq!(Item::cell(&Some(String::new())), EMPTY_CELL);
    }
}
