use serde_json::{Number, Value};

/// Every finite f64 has an exact decimal expansion within 1074 places, so
/// rounding to more places than this never changes a value.
const MAX_DECIMALS: usize = 1100;

/// Round a single float to `decimals` places.
///
/// The exact binary value is formatted to `decimals` digits and parsed back,
/// so ties are broken half-to-even on the exact value (`0.125` -> `0.12`).
pub fn round_f64(x: f64, decimals: usize) -> f64 {
    if !x.is_finite() {
        return x;
    }
    if decimals >= MAX_DECIMALS {
        return x;
    }
    format!("{:.*}", decimals, x).parse().unwrap_or(x)
}

/// Recursively round every float leaf of a coordinate tree.
///
/// Arrays are walked depth-first; floats are rounded; integers, strings,
/// booleans, nulls and objects are returned as-is.
pub fn round_coords(value: Value, decimals: usize) -> Value {
    match value {
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|v| round_coords(v, decimals))
                .collect(),
        ),
        Value::Number(n) => Value::Number(round_number(n, decimals)),
        other => other,
    }
}

fn round_number(n: Number, decimals: usize) -> Number {
    if !n.is_f64() {
        return n;
    }
    n.as_f64()
        .and_then(|f| Number::from_f64(round_f64(f, decimals)))
        .unwrap_or(n)
}

#[cfg(test)]
mod tests {
    use super::{round_coords, round_f64};
    use serde_json::{json, Value};

    fn leaves(v: &Value, out: &mut Vec<Value>) {
        match v {
            Value::Array(items) => items.iter().for_each(|i| leaves(i, out)),
            other => out.push(other.clone()),
        }
    }

    #[test]
    fn rounds_nested_polygon() {
        let coords = json!([[[-122.4194155, 37.7749295], [-122.41, 37.77], [-122.4194155, 37.7749295]]]);
        let rounded = round_coords(coords, 3);
        assert_eq!(
            json!([[[-122.419, 37.775], [-122.41, 37.77], [-122.419, 37.775]]]),
            rounded
        );
    }

    #[test]
    fn rounds_multipolygon_depth() {
        let coords = json!([[[[1.23456, 2.34567], [3.45678, 4.56789]]], [[[5.5, 6.66666]]]]);
        let rounded = round_coords(coords, 2);
        assert_eq!(json!([[[[1.23, 2.35], [3.46, 4.57]]], [[[5.5, 6.67]]]]), rounded);
    }

    #[test]
    fn integers_and_other_leaves_pass_through() {
        let coords = json!([[1, 2], [null, "x"], [true, 3.14159]]);
        let rounded = round_coords(coords, 1);
        assert_eq!(json!([[1, 2], [null, "x"], [true, 3.1]]), rounded);
        assert!(rounded[0][0].is_u64());
    }

    #[test]
    fn rounding_is_idempotent() {
        let coords = json!([[[-97.123456789, 32.987654321], [-97.5555555, 32.4444444]]]);
        for d in 0..12 {
            let once = round_coords(coords.clone(), d);
            let twice = round_coords(once.clone(), d);
            assert_eq!(once, twice, "decimals {}", d);
        }
    }

    #[test]
    fn zero_decimals_drops_fractions() {
        let coords = json!([[-97.7, 32.2], [-97.49, 32.51]]);
        let mut out = Vec::new();
        leaves(&round_coords(coords, 0), &mut out);
        for leaf in out {
            let f = leaf.as_f64().unwrap();
            assert_eq!(0.0, f.fract(), "{} has a fractional part", f);
        }
    }

    #[test]
    fn large_precision_preserves_values() {
        let coords = json!([[-97.123456, 32.654321], [0.1, -0.2]]);
        assert_eq!(coords.clone(), round_coords(coords, 10));
    }

    #[test]
    fn huge_precision_leaves_values_unchanged() {
        assert_eq!(-97.123456, round_f64(-97.123456, 200_000_000));
        assert_eq!(-97.123456, round_f64(-97.123456, 70_000));
        assert_eq!(5e-324, round_f64(5e-324, 70_000));
        assert_eq!(5e-324, round_f64(5e-324, 1099));
        let coords = json!([[-97.123456, 32.654321]]);
        assert_eq!(coords.clone(), round_coords(coords, usize::MAX));
    }

    #[test]
    fn round_f64_basics() {
        assert_eq!(-98.0, round_f64(-97.6, 0));
        assert_eq!(1.5, round_f64(1.49999, 2));
    }
}
