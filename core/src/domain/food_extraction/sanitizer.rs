//! Cleanup of markdown wrapping that completion providers add around
//! structured output.
//!
//! Three pure transformations composed in a fixed order. Each one is a
//! no-op when its marker is absent, so the worst case is an unchanged
//! string that fails to parse downstream.

/// Drop an opening code fence line (possibly carrying a language tag,
/// e.g. ```` ```json ````). Expects already-trimmed input.
fn strip_opening_fence(text: &str) -> &str {
    if !text.starts_with("```") {
        return text;
    }
    match text.find('\n') {
        Some(idx) => &text[idx + 1..],
        // The whole text is the fence line.
        None => "",
    }
}

/// Drop a closing code fence line. Expects already-trimmed input.
fn strip_closing_fence(text: &str) -> &str {
    if !text.ends_with("```") {
        return text;
    }
    match text.rfind('\n') {
        Some(idx) => &text[..idx],
        None => text,
    }
}

/// Drop a bare language-tag token left on its own first line after fence
/// removal (some models emit "json" and the array on separate lines).
fn strip_language_tag(text: &str) -> &str {
    match text.split_once('\n') {
        Some((first, rest)) if first.trim() == "json" => rest,
        None if text.trim() == "json" => "",
        _ => text,
    }
}

/// Strip conversational/markdown wrapping from a raw provider response.
///
/// Idempotent. The result is *expected* to be a bare JSON array literal
/// but is still untrusted; parsing decides.
pub fn sanitize_response(raw: &str) -> String {
    let text = raw.trim();
    let text = strip_opening_fence(text);
    let text = strip_closing_fence(text);
    let text = strip_language_tag(text);
    text.trim().to_string()
}
