use alembic_catalog::Item;
use serde::Deserialize;
use serde_json::Value;

use crate::error::PotterDbError;

/// One `data[]` entry as served by the API.
#[derive(Debug, Deserialize)]
struct Record {
    id: String,
    attributes: Attributes,
}

/// Potion attributes; anything else the API sends (slug, image credits...) is ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Attributes {
    name: Option<String>,
    effect: Option<String>,
    difficulty: Option<String>,
    characteristics: Option<String>,
    image: Option<String>,
    inventors: Option<String>,
    ingredients: Option<String>,
    side_effects: Option<String>,
    time: Option<String>,
    wiki: Option<String>,
}

impl From<Record> for Item {
    fn from(record: Record) -> Self {
        let a = record.attributes;
        Item {
            id: record.id,
            name: a.name,
            effect: a.effect,
            difficulty: a.difficulty,
            characteristics: a.characteristics,
            image: a.image,
            inventors: a.inventors,
            ingredients: a.ingredients,
            side_effects: a.side_effects,
            time: a.time,
            wiki: a.wiki,
        }
    }
}

/// Flattens a `{ data: [{ id, attributes }] }` body into items, in source order.
///
/// A body whose `data` is not an array is rejected as a whole, as is any
/// record that fails to decode.
pub fn normalize_potions(body: &Value) -> Result<Vec<Item>, PotterDbError> {
    let data = body
        .get("data")
        .and_then(Value::as_array)
        .ok_or(PotterDbError::UnexpectedShape("expected an array under `data`"))?;

    data.iter()
        .map(|record| -> Result<Item, PotterDbError> {
            Ok(Record::deserialize(record)?.into())
        })
        .collect()
}
