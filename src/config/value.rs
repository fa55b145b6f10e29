//! Typed access to raw TOML tables.

use serde::de::DeserializeOwned;

/// Read `key` from `table` as `T`, or return `default`.
///
/// The value is read as-is first. If that fails it is coerced: numbers and
/// booleans to strings, numeric strings to numbers, `"true"`/`"false"` to
/// booleans and whole floats to integers. A missing key, or a value no
/// coercion fits (including out-of-range numbers), yields `default`.
///
/// # Examples
/// ```
/// use cs2_menu_text::config::get_or_default;
///
/// let table: toml::Table = toml::from_str("Size = 35\nFont = \"Arial\"").unwrap();
/// assert_eq!(get_or_default(&table, "Size", 0i64), 35);
/// assert_eq!(get_or_default(&table, "Size", 0.0f64), 35.0);
/// assert_eq!(get_or_default(&table, "Size", String::new()), "35");
/// assert_eq!(get_or_default(&table, "Font", 10i64), 10);
/// assert_eq!(get_or_default(&table, "Missing", true), true);
/// ```
pub fn get_or_default<T: DeserializeOwned>(table: &toml::Table, key: &str, default: T) -> T {
    let Some(value) = table.get(key) else {
        return default;
    };

    let err = match value.clone().try_into::<T>() {
        Ok(converted) => return converted,
        Err(err) => err,
    };

    for candidate in coercions(value) {
        if let Ok(converted) = candidate.try_into::<T>() {
            return converted;
        }
    }

    log::debug!("Setting '{}' has unexpected type, using default: {}", key, err);
    default
}

/// Alternative readings of `value`, tried in order.
fn coercions(value: &toml::Value) -> Vec<toml::Value> {
    use toml::Value;

    match value {
        Value::String(text) => {
            let text = text.trim();
            let mut candidates = Vec::new();
            if let Ok(int) = text.parse::<i64>() {
                candidates.push(Value::Integer(int));
            }
            if let Ok(float) = text.parse::<f64>() {
                candidates.push(Value::Float(float));
                if let Some(int) = whole_float(float) {
                    candidates.push(Value::Integer(int));
                }
            }
            if text.eq_ignore_ascii_case("true") {
                candidates.push(Value::Boolean(true));
            } else if text.eq_ignore_ascii_case("false") {
                candidates.push(Value::Boolean(false));
            }
            candidates
        }
        Value::Integer(int) => vec![Value::String(int.to_string())],
        Value::Float(float) => {
            let mut candidates = Vec::new();
            if let Some(int) = whole_float(*float) {
                candidates.push(Value::Integer(int));
            }
            candidates.push(Value::String(float.to_string()));
            candidates
        }
        Value::Boolean(flag) => vec![Value::String(flag.to_string())],
        _ => Vec::new(),
    }
}

fn whole_float(float: f64) -> Option<i64> {
    let in_range = float >= i64::MIN as f64 && float < i64::MAX as f64;
    (float.fract() == 0.0 && in_range).then_some(float as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(content: &str) -> toml::Table {
        toml::from_str(content).unwrap()
    }

    #[test]
    fn test_get_or_default_string() {
        let t = table("Name = \"Menu\"");
        assert_eq!(get_or_default(&t, "Name", String::from("x")), "Menu");
    }

    #[test]
    fn test_get_or_default_bool_mismatch() {
        let t = table("Freeze = \"yes\"");
        assert!(!get_or_default(&t, "Freeze", false));
    }

    #[test]
    fn test_get_or_default_int_out_of_range() {
        let t = table("Size = 300");
        assert_eq!(get_or_default(&t, "Size", 7u8), 7);
    }

    #[test]
    fn test_get_or_default_array() {
        let t = table("Cmds = [\"css_menu\", \"menu\"]");
        assert_eq!(
            get_or_default(&t, "Cmds", Vec::<String>::new()),
            vec!["css_menu".to_string(), "menu".to_string()]
        );
    }

    // ========================================
    // Coercion
    // ========================================

    #[test]
    fn test_get_or_default_numeric_string_to_int() {
        let t = table("Size = \"35\"");
        assert_eq!(get_or_default(&t, "Size", 0i64), 35);
        assert_eq!(get_or_default(&t, "Size", 0u8), 35);
    }

    #[test]
    fn test_get_or_default_numeric_string_to_float() {
        let t = table("Scale = \"0.25\"");
        assert_eq!(get_or_default(&t, "Scale", 1.0f64), 0.25);
    }

    #[test]
    fn test_get_or_default_int_to_string() {
        let t = table("W = 35");
        assert_eq!(get_or_default(&t, "W", String::new()), "35");
    }

    #[test]
    fn test_get_or_default_float_to_string() {
        let t = table("F = 0.5");
        assert_eq!(get_or_default(&t, "F", String::new()), "0.5");
    }

    #[test]
    fn test_get_or_default_bool_to_string() {
        let t = table("B = true");
        assert_eq!(get_or_default(&t, "B", String::new()), "true");
    }

    #[test]
    fn test_get_or_default_whole_float_to_int() {
        let t = table("F = 3.0");
        assert_eq!(get_or_default(&t, "F", 0i64), 3);
    }

    #[test]
    fn test_get_or_default_fractional_float_to_int_uses_default() {
        let t = table("F = 3.5");
        assert_eq!(get_or_default(&t, "F", 9i64), 9);
    }

    #[test]
    fn test_get_or_default_string_to_bool() {
        let t = table("On = \"true\"\nOff = \"False\"");
        assert!(get_or_default(&t, "On", false));
        assert!(!get_or_default(&t, "Off", true));
    }

    #[test]
    fn test_get_or_default_coerced_overflow_uses_default() {
        let t = table("Size = \"300\"");
        assert_eq!(get_or_default(&t, "Size", 7u8), 7);
    }

    #[test]
    fn test_get_or_default_key_is_case_sensitive() {
        let t = table("Size = 3");
        assert_eq!(get_or_default(&t, "size", 1i64), 1);
    }
}
