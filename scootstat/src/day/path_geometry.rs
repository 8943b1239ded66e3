use geo::{Coord, LineString};
use serde_json::Value;

/// decodes a raw path field into a line. the field is either a list of `[lon, lat]`
/// positions or a mapping with a `coordinates` list, written as JSON or as a
/// Python literal (single quotes, tuples). returns None for anything unreadable
/// or with fewer than two positions.
pub fn decode_path(raw: &str) -> Option<LineString<f64>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    let value = serde_json::from_str::<Value>(raw)
        .or_else(|_| serde_json::from_str::<Value>(&python_literal_as_json(raw)))
        .ok()?;
    let positions = match &value {
        Value::Object(map) => map.get("coordinates")?,
        Value::Array(_) => &value,
        _ => return None,
    };
    let coords = positions
        .as_array()?
        .iter()
        .map(position)
        .collect::<Option<Vec<Coord<f64>>>>()?;
    if coords.len() < 2 {
        return None;
    }
    Some(LineString::new(coords))
}

fn position(value: &Value) -> Option<Coord<f64>> {
    let pair = value.as_array()?;
    let x = pair.first()?.as_f64()?;
    let y = pair.get(1)?.as_f64()?;
    if x.is_finite() && y.is_finite() {
        Some(Coord { x, y })
    } else {
        None
    }
}

fn python_literal_as_json(raw: &str) -> String {
    raw.replace('\'', "\"")
        .replace('(', "[")
        .replace(')', "]")
        .replace("None", "null")
        .replace("True", "true")
        .replace("False", "false")
}
