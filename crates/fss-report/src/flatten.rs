//! Flattening nested results into dotted-path rows.

use serde::Serialize;
use fss_model::format_number;
use serde_json::Value;

/// Deepest key path the walk descends to. An object found at this depth is
/// emitted as its JSON text instead of being expanded.
pub const MAX_FLATTEN_DEPTH: usize = 8;

/// Separator between path segments.
pub const PATH_SEPARATOR: char = '.';

/// Single-level view of a result: `(dotted path, formatted value)` pairs in
/// source order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct FlattenedRow {
    entries: Vec<(String, String)>,
}

impl FlattenedRow {
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Value stored under a dotted path.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&str> {
        self.iter()
            .find(|(key, _)| *key == path)
            .map(|(_, value)| value)
    }
}

/// Flatten a result object.
///
/// Objects are walked in insertion order and their keys joined with `.`.
/// Every non-object value ends the walk: numbers become two-decimal text,
/// strings are kept verbatim, arrays are emitted as their JSON text. Empty
/// objects produce no column. A root that is not an object yields an empty
/// row.
#[must_use]
pub fn flatten(value: &Value) -> FlattenedRow {
    let mut row = FlattenedRow::default();
    if let Value::Object(map) = value {
        for (key, child) in map {
            walk(key.clone(), child, 1, &mut row.entries);
        }
    }
    row
}

fn walk(path: String, value: &Value, depth: usize, out: &mut Vec<(String, String)>) {
    match value {
        Value::Object(map) if depth < MAX_FLATTEN_DEPTH => {
            for (key, child) in map {
                walk(format!("{path}{PATH_SEPARATOR}{key}"), child, depth + 1, out);
            }
        }
        _ => out.push((path, format_scalar(value))),
    }
}

/// Text form of a leaf value.
#[must_use]
pub fn format_scalar(value: &Value) -> String {
    match value {
        Value::Number(number) => number
            .as_f64()
            .map_or_else(|| number.to_string(), format_fixed),
        Value::String(text) => text.clone(),
        Value::Bool(flag) => flag.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Magnitudes from here up print in exponent form.
const EXPONENT_CUTOFF: f64 = 1e21;

/// Two-decimal fixed formatting in the `toFixed(2)` manner. Exact ties round
/// away from zero, magnitudes of `1e21` and above print as `1e+21`, and
/// negative zero prints as `0.00`.
#[must_use]
pub fn format_fixed(value: f64) -> String {
    if !value.is_finite() {
        return format_number(value);
    }
    let sign = if value < 0.0 { "-" } else { "" };
    let magnitude = value.abs();
    if magnitude >= EXPONENT_CUTOFF {
        let exponent = format!("{magnitude:e}").replacen('e', "e+", 1);
        return format!("{sign}{exponent}");
    }
    let digits = if is_hundredth_tie(magnitude) {
        round_tie_up(&format!("{magnitude:.3}"))
    } else {
        format!("{magnitude:.2}")
    };
    format!("{sign}{digits}")
}

/// A binary value sits exactly halfway between two hundredths only when its
/// fraction is an odd number of eighths.
fn is_hundredth_tie(magnitude: f64) -> bool {
    let eighths = magnitude.fract() * 8.0;
    eighths.fract() == 0.0 && eighths % 2.0 == 1.0
}

/// Drop the last digit of an exact three-decimal string and carry one into
/// the hundredths.
fn round_tie_up(exact: &str) -> String {
    let mut digits: Vec<char> = exact.chars().collect();
    digits.pop();
    let mut carry = true;
    for digit in digits.iter_mut().rev() {
        match *digit {
            _ if !carry => break,
            '.' => {}
            '9' => *digit = '0',
            other => {
                *digit = char::from(other as u8 + 1);
                carry = false;
            }
        }
    }
    let mut rounded: String = digits.into_iter().collect();
    if carry {
        rounded.insert(0, '1');
    }
    rounded
}

/// Resolve a dotted path in a nested value.
#[must_use]
pub fn lookup<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    path.split(PATH_SEPARATOR)
        .try_fold(value, |node, segment| node.get(segment))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_flatten_nested_object() {
        let row = flatten(&json!({"a": {"b": 1.5}, "c": 2}));
        assert_eq!(row.keys().collect::<Vec<_>>(), vec!["a.b", "c"]);
        assert_eq!(row.values().collect::<Vec<_>>(), vec!["1.50", "2.00"]);
    }

    #[test]
    fn test_flatten_keeps_source_order() {
        let value: Value =
            serde_json::from_str(r#"{"zeta": 1, "alpha": {"y": 2, "b": 3}, "mid": 4}"#).unwrap();
        let row = flatten(&value);
        assert_eq!(
            row.keys().collect::<Vec<_>>(),
            vec!["zeta", "alpha.y", "alpha.b", "mid"]
        );
    }

    #[test]
    fn test_arrays_are_opaque() {
        let row = flatten(&json!({"filas": [1, 2, {"x": 3}], "nome": "corte"}));
        assert_eq!(row.get("filas"), Some(r#"[1,2,{"x":3}]"#));
        assert_eq!(row.get("nome"), Some("corte"));
        assert_eq!(row.len(), 2);
    }

    #[test]
    fn test_other_scalars() {
        let row = flatten(&json!({"ok": true, "missing": null, "n": -0.0}));
        assert_eq!(row.get("ok"), Some("true"));
        assert_eq!(row.get("missing"), Some("null"));
        assert_eq!(row.get("n"), Some("0.00"));
    }

    #[test]
    fn test_empty_objects_produce_no_column() {
        let row = flatten(&json!({"a": {}, "b": 1}));
        assert_eq!(row.keys().collect::<Vec<_>>(), vec!["b"]);
    }

    #[test]
    fn test_non_object_root() {
        assert!(flatten(&json!([1, 2])).is_empty());
        assert!(flatten(&json!(3)).is_empty());
    }

    #[test]
    fn test_depth_is_bounded() {
        let mut value = json!(1);
        for key in ["j", "i", "h", "g", "f", "e", "d", "c", "b", "a"] {
            value = json!({ key: value });
        }
        let row = flatten(&value);
        assert_eq!(row.len(), 1);
        let (key, text) = row.iter().next().unwrap();
        assert_eq!(key, "a.b.c.d.e.f.g.h");
        assert_eq!(text, r#"{"i":{"j":1}}"#);
    }

    #[test]
    fn test_fixed_ties_round_up() {
        assert_eq!(format_fixed(0.125), "0.13");
        assert_eq!(format_fixed(12.625), "12.63");
        assert_eq!(format_fixed(1.125), "1.13");
        assert_eq!(format_fixed(0.375), "0.38");
        assert_eq!(format_fixed(9.995), "9.99");
        assert_eq!(format_fixed(99.875), "99.88");
        assert_eq!(format_fixed(-0.125), "-0.13");
        assert_eq!(format_fixed(0.25), "0.25");
        assert_eq!(format_fixed(1.005), "1.00");
    }

    #[test]
    fn test_fixed_carry_across_the_point() {
        assert_eq!(round_tie_up("9.995"), "10.00");
        assert_eq!(round_tie_up("0.125"), "0.13");
    }

    #[test]
    fn test_fixed_edges() {
        assert_eq!(format_fixed(-0.0), "0.00");
        assert_eq!(format_fixed(-0.001), "-0.00");
        assert_eq!(format_fixed(2.0), "2.00");
        assert_eq!(format_fixed(1e21), "1e+21");
        assert_eq!(format_fixed(1.5e21), "1.5e+21");
        assert_eq!(format_fixed(-2e22), "-2e+22");
        assert_eq!(format_fixed(1e20), "100000000000000000000.00");
        assert_eq!(format_fixed(f64::NAN), "NaN");
        assert_eq!(format_fixed(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn test_flatten_rounds_ties_up() {
        let row = flatten(&json!({"tempo": 12.625}));
        assert_eq!(row.get("tempo"), Some("12.63"));
    }

    #[test]
    fn test_lookup() {
        let value = json!({"a": {"b": {"c": 4}}});
        assert_eq!(lookup(&value, "a.b.c"), Some(&json!(4)));
        assert_eq!(lookup(&value, "a.x"), None);
    }
}
