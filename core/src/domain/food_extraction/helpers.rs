use serde_json::Value;

use crate::domain::food_extraction::catalog::is_known_food;

/// Parse sanitized provider text as a JSON array of strings.
///
/// Lenient by policy: malformed JSON, a non-array top-level value, and
/// non-string array entries all degrade to "no foods found" instead of an
/// error. A confused model reply must not fail the request.
pub fn parse_food_list(text: &str) -> Vec<String> {
    let parsed: Value = match serde_json::from_str(text) {
        Ok(value) => value,
        Err(e) => {
            tracing::debug!("LLM response is not valid JSON: {}", e);
            return Vec::new();
        }
    };

    match parsed {
        Value::Array(values) => values
            .into_iter()
            .filter_map(|value| match value {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => {
            tracing::debug!("LLM response is valid JSON but not an array");
            Vec::new()
        }
    }
}

/// Keep only exact catalog matches, preserving the model's order and
/// duplicates.
pub fn filter_known_foods(candidates: Vec<String>) -> Vec<String> {
    candidates
        .into_iter()
        .filter(|name| is_known_food(name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_array() {
        let foods = parse_food_list(r#"["Tomate", "Manzana"]"#);
        assert_eq!(foods, vec!["Tomate", "Manzana"]);
    }

    #[test]
    fn test_parse_refusal_text_returns_empty() {
        let foods = parse_food_list("Lo siento, no puedo ayudar con eso.");
        assert!(foods.is_empty());
    }

    #[test]
    fn test_parse_non_array_json_returns_empty() {
        assert!(parse_food_list(r#"{"foods": ["Tomate"]}"#).is_empty());
        assert!(parse_food_list(r#""Tomate""#).is_empty());
        assert!(parse_food_list("42").is_empty());
    }

    #[test]
    fn test_parse_skips_non_string_entries() {
        let foods = parse_food_list(r#"["Tomate", 3, null, "Manzana"]"#);
        assert_eq!(foods, vec!["Tomate", "Manzana"]);
    }

    #[test]
    fn test_filter_drops_unknown_entries() {
        let foods = filter_known_foods(vec![
            "Tomate".to_string(),
            "Unicornio asado".to_string(),
        ]);
        assert_eq!(foods, vec!["Tomate"]);
    }

    #[test]
    fn test_filter_is_case_sensitive() {
        let foods = filter_known_foods(vec!["tomate".to_string(), "Tomate".to_string()]);
        assert_eq!(foods, vec!["Tomate"]);
    }

    #[test]
    fn test_filter_preserves_order_and_duplicates() {
        let foods = filter_known_foods(vec![
            "Manzana".to_string(),
            "Tomate".to_string(),
            "Manzana".to_string(),
        ]);
        assert_eq!(foods, vec!["Manzana", "Tomate", "Manzana"]);
    }

    #[test]
    fn test_filter_output_is_subset_of_catalog() {
        let mixed = vec![
            "Tomate".to_string(),
            "tomate".to_string(),
            "Pizza".to_string(),
            "Arroz blanco".to_string(),
            "".to_string(),
        ];
        for food in filter_known_foods(mixed) {
            assert!(is_known_food(&food));
        }
    }
}
