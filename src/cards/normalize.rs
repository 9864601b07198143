//! Card record normalization.
//!
//! Card sources spell fields differently (`domain`/`Domain`,
//! `recall_cost`/`recallCost`...). Each field has a fixed pair of accepted
//! keys, tried in order, applied once when a source is loaded. Unrecognized
//! keys are ignored.

use rustc_hash::FxHashSet;
use serde_json::{Map, Value};

use crate::core::error::{BuilderError, Result};

use super::definition::Card;

/// Domain assigned to records that declare none.
pub const UNKNOWN_DOMAIN: &str = "Unknown";

/// Normalized card field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CardField {
    Name,
    Domain,
    Level,
    Type,
    RecallCost,
    Description,
}

/// Accepted key spellings per field, preferred spelling first.
pub const FIELD_SYNONYMS: [(CardField, [&str; 2]); 6] = [
    (CardField::Name, ["name", "Name"]),
    (CardField::Domain, ["domain", "Domain"]),
    (CardField::Level, ["level", "Level"]),
    (CardField::Type, ["type", "Type"]),
    (CardField::RecallCost, ["recall_cost", "recallCost"]),
    (CardField::Description, ["description", "text"]),
];

fn keys_for(field: CardField) -> [&'static str; 2] {
    FIELD_SYNONYMS
        .iter()
        .find(|(f, _)| *f == field)
        .map(|(_, keys)| *keys)
        .unwrap_or(["", ""])
}

/// First usable value under any accepted spelling of `field`.
///
/// Nulls and blank strings count as absent.
fn lookup(record: &Map<String, Value>, field: CardField) -> Option<&Value> {
    keys_for(field)
        .into_iter()
        .filter_map(|key| record.get(key))
        .find(|v| match v {
            Value::Null => false,
            Value::String(s) => !s.trim().is_empty(),
            _ => true,
        })
}

fn as_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn as_integer(value: Option<&Value>) -> Option<i64> {
    match value? {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Normalize one raw record.
///
/// Returns `None` for non-objects and records without a name.
#[must_use]
pub fn normalize_record(value: &Value) -> Option<Card> {
    let record = value.as_object()?;
    let name = as_text(lookup(record, CardField::Name))?;

    let level = as_integer(lookup(record, CardField::Level))
        .map(|n| n.clamp(1, i64::from(u32::MAX)) as u32)
        .unwrap_or(1);

    Some(Card {
        name,
        domain: as_text(lookup(record, CardField::Domain))
            .unwrap_or_else(|| UNKNOWN_DOMAIN.to_string()),
        level,
        card_type: as_text(lookup(record, CardField::Type)).unwrap_or_default(),
        recall_cost: as_integer(lookup(record, CardField::RecallCost)),
        description: as_text(lookup(record, CardField::Description)).unwrap_or_default(),
    })
}

/// Normalize a whole card source document.
///
/// Accepts a bare array or an object with a `cards` array. Records that
/// cannot be normalized are skipped, as are repeats of an earlier name.
pub fn normalize_document(document: &Value) -> Result<Vec<Card>> {
    let records = match document {
        Value::Array(records) => records,
        Value::Object(obj) => obj
            .get("cards")
            .and_then(Value::as_array)
            .ok_or(BuilderError::NoCardList)?,
        _ => return Err(BuilderError::NoCardList),
    };

    let mut seen = FxHashSet::default();
    let mut cards = Vec::with_capacity(records.len());
    for (i, record) in records.iter().enumerate() {
        match normalize_record(record) {
            Some(card) if seen.insert(card.name.clone()) => cards.push(card),
            Some(card) => tracing::debug!(name = %card.name, "skipping duplicate card"),
            None => tracing::debug!(index = i, "skipping card record without a name"),
        }
    }
    Ok(cards)
}
