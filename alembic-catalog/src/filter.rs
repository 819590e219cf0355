//! Filter engine.
//!
//! Narrows the item list by a case-insensitive name search plus exact matches
//! on difficulty and characteristics. One linear pass, original order kept,
//! no ranking.

use serde::{Deserialize, Serialize};

use crate::item::{present, Item};

/// Difficulty values offered in the dropdown regardless of fetched data.
pub const DIFFICULTY_PRESETS: &[&str] = &[
    "Beginner",
    "Beginner to Ordinary Wizarding Level",
    "Advanced",
    "Beginner to Moderate",
    "Moderate",
    "Ordinary Wizarding Level",
    "Moderate to advanced",
];

/// Characteristic values offered in the dropdown regardless of fetched data.
pub const CHARACTERISTIC_PRESETS: &[&str] = &["Pink in colour", "Green in colour"];

/// Exact-match filter on one field.
///
/// `All` matches every item. `Only("null")` is a literal category like any other.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldFilter {
    #[default]
    All,
    Only(String),
}

impl FieldFilter {
    /// Dropdown label.
    pub fn label(&self) -> &str {
        match self {
            FieldFilter::All => "All",
            FieldFilter::Only(value) => value.as_str(),
        }
    }

    pub fn matches(&self, field: &Option<String>) -> bool {
        match self {
            FieldFilter::All => true,
            FieldFilter::Only(value) => field.as_deref() == Some(value.as_str()),
        }
    }
}

impl From<Option<String>> for FieldFilter {
    fn from(value: Option<String>) -> Self {
        value.map_or(FieldFilter::All, FieldFilter::Only)
    }
}

/// The (search text, difficulty, characteristic) tuple.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub search: String,
    pub difficulty: FieldFilter,
    pub characteristic: FieldFilter,
}

impl FilterCriteria {
    /// Checks one item against every predicate.
    ///
    /// Items without a name never match.
    pub fn matches(&self, item: &Item) -> bool {
        let Some(name) = item.name() else {
            return false;
        };

        name.to_lowercase().contains(&self.search.to_lowercase())
            && self.difficulty.matches(&item.difficulty)
            && self.characteristic.matches(&item.characteristics)
    }
}

/// Returns the items matching `criteria`, in their original order.
pub fn filter_items<'a>(items: &'a [Item], criteria: &FilterCriteria) -> Vec<&'a Item> {
    items.iter().filter(|item| criteria.matches(item)).collect()
}

/// Dropdown options for the difficulty filter.
pub fn difficulty_options(items: &[Item]) -> Vec<FieldFilter> {
    options(DIFFICULTY_PRESETS, items.iter().map(|i| &i.difficulty))
}

/// Dropdown options for the characteristic filter.
pub fn characteristic_options(items: &[Item]) -> Vec<FieldFilter> {
    options(
        CHARACTERISTIC_PRESETS,
        items.iter().map(|i| &i.characteristics),
    )
}

/// `All`, then the presets, then unseen values from the data in first-seen order.
fn options<'a>(
    presets: &[&str],
    values: impl Iterator<Item = &'a Option<String>>,
) -> Vec<FieldFilter> {
    let mut seen: Vec<&str> = presets.to_vec();
    for value in values.filter_map(present) {
        if !seen.contains(&value) {
            seen.push(value);
        }
    }

    std::iter::once(FieldFilter::All)
        .chain(seen.into_iter().map(|v| FieldFilter::Only(v.to_string())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn potion(id: &str, name: &str, difficulty: &str, characteristics: &str) -> Item {
        Item {
            difficulty: Some(difficulty.to_string()),
            characteristics: Some(characteristics.to_string()),
            ..Item::named(id, name)
        }
    }

    fn sample() -> Vec<Item> {
        vec![
            potion("1", "Amortentia", "Advanced", "Pink in colour"),
            potion("2", "Polyjuice Potion", "Advanced", "Mud-like"),
            potion("3", "Cure for Boils", "Beginner", "Pink in colour"),
            potion("4", "Pepperup Potion", "Moderate", "Green in colour"),
        ]
    }

    #[test]
    fn default_criteria_keeps_everything_in_order() {
        let items = sample();
        let filtered = filter_items(&items, &FilterCriteria::default());
        let ids: Vec<&str> = filtered.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3", "4"]);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let items = sample();
        for term in ["POTION", "potion", "Potion", "tion", "o"] {
            let criteria = FilterCriteria {
                search: term.to_string(),
                ..Default::default()
            };
            let filtered = filter_items(&items, &criteria);
            assert!(!filtered.is_empty());
            for item in filtered {
                let name = item.name().unwrap().to_lowercase();
                assert!(name.contains(&term.to_lowercase()), "{name} vs {term}");
            }
        }
    }

    #[test]
    fn exact_difficulty_and_characteristic() {
        let items = sample();
        let criteria = FilterCriteria {
            search: String::new(),
            difficulty: FieldFilter::Only("Advanced".to_string()),
            characteristic: FieldFilter::Only("Pink in colour".to_string()),
        };
        let filtered = filter_items(&items, &criteria);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "1");

        // Not a substring match
        let criteria = FilterCriteria {
            difficulty: FieldFilter::Only("Advance".to_string()),
            ..Default::default()
        };
        assert!(filter_items(&items, &criteria).is_empty());
    }

    #[test]
    fn unnamed_items_are_dropped() {
        let mut items = sample();
        items.push(Item {
            id: "5".to_string(),
            ..Default::default()
        });
        items.push(Item::named("6", ""));

        let filtered = filter_items(&items, &FilterCriteria::default());
        assert_eq!(filtered.len(), 4);
        assert!(!FilterCriteria::default().matches(&items[4]));
    }

    #[test]
    fn literal_null_category_is_not_match_all() {
        let mut items = sample();
        items[2].difficulty = Some("null".to_string());

        let criteria = FilterCriteria {
            difficulty: FieldFilter::Only("null".to_string()),
            ..Default::default()
        };
        let filtered = filter_items(&items, &criteria);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "3");
    }

    #[test]
    fn options_start_with_all_then_presets_then_data() {
        let items = sample();
        let options = characteristic_options(&items);
        assert_eq!(options[0], FieldFilter::All);
        assert_eq!(options[1].label(), "Pink in colour");
        assert_eq!(options[2].label(), "Green in colour");
        assert_eq!(options[3].label(), "Mud-like");
        assert_eq!(options.len(), 4);

        let options = difficulty_options(&[]);
        assert_eq!(options.len(), DIFFICULTY_PRESETS.len() + 1);
        assert_eq!(options[0].label(), "All");
    }
}
