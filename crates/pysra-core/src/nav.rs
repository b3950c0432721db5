//! In-page anchor navigation.
//!
//! Anchors whose `href` starts with `#` are intercepted and the target is
//! scrolled into view smoothly. The lookup happens in the document, so this
//! module only decides which hrefs qualify and builds the script that runs
//! there.

/// Returns the selector for an in-page anchor, or `None` if the href is not
/// one (external link, empty, or a bare `#`).
pub fn anchor_selector(href: &str) -> Option<&str> {
    let href = href.trim();
    if href.starts_with('#') && href.len() > 1 {
        Some(href)
    } else {
        None
    }
}

/// Whether a click on this href should be intercepted.
///
/// A bare `#` is still intercepted; it just has nothing to scroll to.
pub fn is_in_page(href: &str) -> bool {
    href.trim().starts_with('#')
}

/// Script that smoothly scrolls the element matching `selector` to the top
/// of the viewport. Missing targets and invalid selectors do nothing.
///
/// The script returns `true` when it scrolled and `false` otherwise.
pub fn scroll_into_view_script(selector: &str) -> String {
    // serde_json gives a correctly escaped JS string literal
    let literal = serde_json::Value::String(selector.to_string()).to_string();
    format!(
        "try {{ const target = document.querySelector({literal}); \
         if (target) {{ target.scrollIntoView({{ behavior: 'smooth', block: 'start' }}); return true; }} }} \
         catch (_) {{}} \
         return false;"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selects_in_page_anchors() {
        assert_eq!(anchor_selector("#games"), Some("#games"));
        assert_eq!(anchor_selector("  #heatmap "), Some("#heatmap"));
        assert_eq!(anchor_selector("#"), None);
        assert_eq!(anchor_selector("/dashboard"), None);
        assert_eq!(anchor_selector("https://example.com/#x"), None);
    }

    #[test]
    fn bare_hash_is_intercepted() {
        assert!(is_in_page("#"));
        assert!(!is_in_page("/games"));
    }

    #[test]
    fn script_escapes_selector() {
        let script = scroll_into_view_script("#a\"b");
        assert!(script.contains(r##"document.querySelector("#a\"b")"##));
        assert!(script.contains("behavior: 'smooth', block: 'start'"));
        assert!(script.contains("if (target)"));
    }

    #[test]
    fn script_reports_whether_it_scrolled() {
        let script = scroll_into_view_script("#activity");
        assert!(script.contains("return true;"));
        assert!(script.trim_end().ends_with("return false;"));
    }
}
