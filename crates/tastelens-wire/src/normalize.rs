// Raw record normalization into the canonical Dish entity.
//
// The service speaks two field-name dialects for the same records: the feed
// endpoint renames `dish_name`/`img_url` to `food_name`/`image`, while the
// detail and recommendation endpoints keep the original column names. Both
// are accepted here so nothing downstream ever sees a raw field.

use serde_json::{Map, Value};
use tastelens_types::Dish;
use tracing::debug;

/// Normalize one raw record into a canonical `Dish`.
///
/// Returns `None` when neither name field resolves to a non-empty string;
/// the caller drops the record rather than propagating it malformed.
/// Pure and deterministic: no I/O, no side effects beyond a debug log.
pub fn normalize_dish(raw: &Value) -> Option<Dish> {
    let record = raw.as_object()?;

    let name = string_field(record, "dish_name").or_else(|| string_field(record, "food_name"))?;

    // The service routes dish lookups by name and feed records carry no
    // separate id column, so the name doubles as the identifier when
    // `food_id` is absent.
    let id = ident_field(record, "food_id").unwrap_or_else(|| name.clone());

    let mut dish = Dish::new(id, name).ok()?;
    dish.image_url = string_field(record, "img_url").or_else(|| string_field(record, "image"));
    dish.restaurant_name = string_field(record, "restaurant_name");
    dish.average_cost = numeric_field(record, "average_cost")
        .filter(|cost| *cost >= 0.0)
        .unwrap_or(0.0);
    dish.rating = numeric_field(record, "rating").unwrap_or(0.0);
    dish.diet_type = string_field(record, "diet_type");
    dish.cuisine = string_field(record, "cuisine");
    dish.calories = numeric_field(record, "calories");
    Some(dish)
}

/// Normalize a list of raw records, dropping the ones that fail.
///
/// One malformed record must not blank an entire view, so failures are
/// swallowed at the record level and only logged.
pub fn normalize_dishes(raws: &[Value]) -> Vec<Dish> {
    raws.iter()
        .filter_map(|raw| {
            let dish = normalize_dish(raw);
            if dish.is_none() {
                debug!(record = %raw, "dropping raw record with unresolvable identity");
            }
            dish
        })
        .collect()
}

fn string_field(record: &Map<String, Value>, key: &str) -> Option<String> {
    record
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Identifier: accepts a string or an integer id column.
fn ident_field(record: &Map<String, Value>, key: &str) -> Option<String> {
    match record.get(key)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Coerce number-or-numeric-string into f64. Anything else is absent,
/// never NaN.
fn numeric_field(record: &Map<String, Value>, key: &str) -> Option<f64> {
    match record.get(key)? {
        Value::Number(n) => n.as_f64().filter(|f| f.is_finite()),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    }
}
