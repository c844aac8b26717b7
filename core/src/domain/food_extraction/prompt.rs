use crate::domain::food_extraction::catalog::FOOD_CATALOG;

/// Build the instruction text sent to the completion provider.
///
/// The catalog is rendered as a quoted JSON array so the model can copy
/// entries verbatim; the caller's text is embedded untouched. Total
/// function, cannot fail.
pub fn build_extraction_prompt(text: &str) -> String {
    let catalog = serde_json::json!(FOOD_CATALOG).to_string();

    format!(
        "You are a food identification assistant. This is the list of known foods:\n\
         {catalog}\n\n\
         Identify which foods from the list are mentioned in the text below. \
         Respond with ONLY a JSON array of strings. No markdown, no code fences, \
         no explanations. Each string must match an entry of the list exactly, \
         including accents and capitalization. If no listed food is mentioned, \
         respond with [].\n\n\
         Text: {text}"
    )
}
