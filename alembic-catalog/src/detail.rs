use crate::item::{present, Item};

/// Placeholder for a missing value in the detail view.
pub const NOT_SPECIFIED: &str = "Not specified";

/// One labelled row of the detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailField<'a> {
    pub label: &'static str,
    pub value: &'a str,
}

/// Modal state: either closed or showing one selected item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DetailView {
    #[default]
    Closed,
    Open(Item),
}

impl DetailView {
    pub fn open(&mut self, item: Item) {
        *self = DetailView::Open(item);
    }

    pub fn close(&mut self) {
        *self = DetailView::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, DetailView::Open(_))
    }

    pub fn selected(&self) -> Option<&Item> {
        match self {
            DetailView::Open(item) => Some(item),
            DetailView::Closed => None,
        }
    }

    /// Modal title: the item's name.
    pub fn title(&self) -> Option<&str> {
        self.selected()
            .map(|item| item.name().unwrap_or(NOT_SPECIFIED))
    }

    /// Labelled rows for the selected item, missing values replaced by [`NOT_SPECIFIED`].
    ///
    /// Empty when closed.
    pub fn fields(&self) -> Vec<DetailField<'_>> {
        let Some(item) = self.selected() else {
            return Vec::new();
        };

        [
            ("Effect", &item.effect),
            ("Difficulty", &item.difficulty),
            ("Characteristic", &item.characteristics),
            ("Inventor", &item.inventors),
            ("Ingredients", &item.ingredients),
            ("Side Effects", &item.side_effects),
            ("Time to Make", &item.time),
            ("Wiki", &item.wiki),
        ]
        .into_iter()
        .map(|(label, value)| DetailField {
            label,
            value: present(value).unwrap_or(NOT_SPECIFIED),
        })
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_item() -> Item {
        Item {
            id: "p1".to_string(),
            name: Some("Draught of Living Death".to_string()),
            effect: Some("Puts the drinker into a deathlike sleep".to_string()),
            difficulty: Some("Advanced".to_string()),
            characteristics: Some("Clear like water".to_string()),
            image: Some("https://example.org/dold.png".to_string()),
            inventors: Some("Unknown".to_string()),
            ingredients: Some("Powdered root of asphodel".to_string()),
            side_effects: Some("Death if overdosed".to_string()),
            time: Some("1 hour".to_string()),
            wiki: Some("https://harrypotter.fandom.com/wiki/Draught_of_Living_Death".to_string()),
        }
    }

    #[test]
    fn starts_closed() {
        let view = DetailView::default();
        assert!(!view.is_open());
        assert!(view.selected().is_none());
        assert!(view.title().is_none());
        assert!(view.fields().is_empty());
    }

    #[test]
    fn open_then_close() {
        let mut view = DetailView::default();
        view.open(full_item());
        assert!(view.is_open());
        assert_eq!(view.title(), Some("Draught of Living Death"));

        view.close();
        assert_eq!(view, DetailView::Closed);
    }

    #[test]
    fn reopening_replaces_selection() {
        let mut view = DetailView::default();
        view.open(full_item());
        view.open(Item::named("p2", "Wolfsbane Potion"));
        assert_eq!(view.selected().map(|i| i.id.as_str()), Some("p2"));
    }

    #[test]
    fn missing_side_effects_only_affects_that_row() {
        let mut item = full_item();
        item.side_effects = None;

        let mut view = DetailView::default();
        view.open(item);
        let fields = view.fields();
        assert_eq!(fields.len(), 8);

        for field in &fields {
            if field.label == "Side Effects" {
                assert_eq!(field.value, NOT_SPECIFIED);
            } else {
                assert_ne!(field.value, NOT_SPECIFIED, "{}", field.label);
            }
        }
    }

    #[test]
    fn empty_string_counts_as_missing() {
        let mut item = full_item();
        item.wiki = Some(String::new());

        let mut view = DetailView::default();
        view.open(item);
        let wiki = view.fields().into_iter().find(|f| f.label == "Wiki").unwrap();
        assert_eq!(wiki.value, NOT_SPECIFIED);
    }
}
