// ============================================================================
// Identifier composition — joins a prefix and a fragment with dedup at the seam
// ============================================================================

pub const SEPARATOR: char = '.';

/// Compose `fragment` onto `prefix`, producing a dot-joined identifier.
///
/// Only the final segment of `prefix` is checked for overlap:
/// - `compose("login.button", "button")` → `"login.button"`
/// - `compose("login.form", "form.field")` → `"login.form.field"`
/// - `compose("login", "button")` → `"login.button"`
///
/// Fragments are taken verbatim. Stray dots are not normalized.
pub fn compose(prefix: &str, fragment: &str) -> String {
    if fragment.is_empty() {
        return prefix.to_string();
    }

    if prefix.is_empty() {
        return fragment.to_string();
    }

    let last = last_segment(prefix);

    if fragment == last {
        return prefix.to_string();
    }

    let fragment = fragment
        .strip_prefix(last)
        .and_then(|rest| rest.strip_prefix(SEPARATOR))
        .unwrap_or(fragment);

    format!("{}{}{}", prefix, SEPARATOR, fragment)
}

/// The substring after the final dot, or the whole input when it has none.
pub fn last_segment(prefix: &str) -> &str {
    match prefix.rfind(SEPARATOR) {
        Some(idx) => &prefix[idx + SEPARATOR.len_utf8()..],
        None => prefix,
    }
}

/// Split an identifier into its dot-delimited segments, empty ones included.
pub fn segments(id: &str) -> impl Iterator<Item = &str> {
    id.split(SEPARATOR)
}

/// True when stray dots left an empty segment (`"a..b"`, `".a"`, `"a."`).
pub fn has_empty_segment(id: &str) -> bool {
    segments(id).any(str::is_empty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_fragment_keeps_prefix() {
        assert_eq!(compose("login", ""), "login");
        assert_eq!(compose("", ""), "");
    }

    #[test]
    fn empty_prefix_returns_fragment() {
        assert_eq!(compose("", "button"), "button");
        assert_eq!(compose("", "form.field"), "form.field");
    }

    #[test]
    fn last_segment_handles_dotless_and_dotted() {
        assert_eq!(last_segment("login"), "login");
        assert_eq!(last_segment("app.settings.account"), "account");
        assert_eq!(last_segment("trailing."), "");
    }

    #[test]
    fn partial_segment_match_is_not_deduplicated() {
        // "form" is a prefix of "formal" but not followed by a dot
        assert_eq!(compose("login.form", "formal"), "login.form.formal");
        assert_eq!(compose("login.form", "formfield.x"), "login.form.formfield.x");
    }

    #[test]
    fn only_the_final_segment_is_inspected() {
        assert_eq!(compose("login.form", "login"), "login.form.login");
    }

    #[test]
    fn dotted_fragments_pass_through_verbatim() {
        assert_eq!(compose("login", ".."), "login...");
        assert_eq!(compose("login", ".field"), "login..field");
    }

    #[test]
    fn segments_keep_empty_tokens() {
        let parts: Vec<_> = segments("a..b.c.").collect();
        assert_eq!(parts, vec!["a", "", "b", "c", ""]);
        assert_eq!(segments("login").count(), 1);
    }

    #[test]
    fn empty_segments_are_detected() {
        assert!(has_empty_segment("a..b"));
        assert!(has_empty_segment(".a"));
        assert!(has_empty_segment("a."));
        assert!(!has_empty_segment("login.form.email"));
    }
}
