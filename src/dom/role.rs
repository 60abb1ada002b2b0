//! Role resolution and the interactivity policy.
//!
//! An explicit `role` attribute always wins; otherwise the role is inferred
//! from the tag (and, for `input`, its `type`).

use super::raw::RawElement;

/// ARIA roles that mark an element as interactive.
const INTERACTIVE_ROLES: [&str; 16] = [
    "button",
    "link",
    "textbox",
    "checkbox",
    "radio",
    "combobox",
    "listbox",
    "menuitem",
    "menuitemcheckbox",
    "menuitemradio",
    "option",
    "switch",
    "tab",
    "searchbox",
    "slider",
    "spinbutton",
];

/// HTML tags that are interactive by default.
const INTERACTIVE_TAGS: [&str; 7] = [
    "a", "button", "input", "select", "textarea", "details", "summary",
];

/// Tags that participate in keyboard focus unless disabled.
const FOCUSABLE_TAGS: [&str; 5] = ["a", "button", "input", "select", "textarea"];

/// Resolve the semantic role of an element.
pub fn resolve_role(el: &RawElement) -> String {
    if let Some(explicit) = el.attr("role").filter(|r| !r.is_empty()) {
        return explicit.to_string();
    }

    let implicit = match el.tag.as_str() {
        "a" => {
            if el.attr("href").is_some() {
                "link"
            } else {
                "generic"
            }
        }
        "button" => "button",
        "input" => input_role(el.attr("type").unwrap_or("text")),
        "select" => "combobox",
        "textarea" => "textbox",
        "img" => "img",
        "nav" => "navigation",
        "main" => "main",
        "header" => "banner",
        "footer" => "contentinfo",
        "aside" => "complementary",
        "article" => "article",
        "section" => "region",
        "form" => "form",
        "table" => "table",
        "ul" | "ol" => "list",
        "li" => "listitem",
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => "heading",
        _ => "generic",
    };
    implicit.to_string()
}

fn input_role(input_type: &str) -> &'static str {
    match input_type {
        "button" | "submit" | "reset" => "button",
        "checkbox" => "checkbox",
        "radio" => "radio",
        "search" => "searchbox",
        "number" => "spinbutton",
        "range" => "slider",
        // text, password, email, url, tel, and anything unrecognized
        _ => "textbox",
    }
}

/// Whether an element counts as interactive given its resolved role.
pub fn is_interactive(el: &RawElement, role: &str) -> bool {
    if INTERACTIVE_TAGS.contains(&el.tag.as_str()) {
        return true;
    }
    if INTERACTIVE_ROLES.contains(&role) {
        return true;
    }
    // Click-handler attribute, explicit tabindex (any value), or editable
    // content also make an element actionable.
    if el.attr("onclick").is_some() {
        return true;
    }
    if el.attr("tabindex").is_some() {
        return true;
    }
    el.is_content_editable()
}

/// Whether an element can receive keyboard focus.
pub fn is_focusable(el: &RawElement) -> bool {
    if let Some(tabindex) = el.attr("tabindex") {
        if tabindex.parse::<i32>().map(|i| i >= 0).unwrap_or(false) {
            return true;
        }
    }
    if FOCUSABLE_TAGS.contains(&el.tag.as_str()) {
        return !el.disabled.unwrap_or(false);
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_role_wins() {
        let el = RawElement::new("div").with_attr("role", "tab");
        assert_eq!(resolve_role(&el), "tab");
    }

    #[test]
    fn test_anchor_role_depends_on_href() {
        let link = RawElement::new("a").with_attr("href", "/home");
        let anchor = RawElement::new("a");
        assert_eq!(resolve_role(&link), "link");
        assert_eq!(resolve_role(&anchor), "generic");
    }

    #[test]
    fn test_input_roles() {
        for (ty, role) in [
            ("submit", "button"),
            ("checkbox", "checkbox"),
            ("radio", "radio"),
            ("search", "searchbox"),
            ("number", "spinbutton"),
            ("range", "slider"),
            ("password", "textbox"),
            ("color", "textbox"),
        ] {
            let el = RawElement::new("input").with_attr("type", ty);
            assert_eq!(resolve_role(&el), role, "input type {}", ty);
        }
        // Missing type behaves as text.
        assert_eq!(resolve_role(&RawElement::new("input")), "textbox");
    }

    #[test]
    fn test_landmark_roles() {
        for (tag, role) in [
            ("nav", "navigation"),
            ("header", "banner"),
            ("footer", "contentinfo"),
            ("aside", "complementary"),
            ("section", "region"),
            ("ul", "list"),
            ("li", "listitem"),
            ("h3", "heading"),
            ("div", "generic"),
        ] {
            assert_eq!(resolve_role(&RawElement::new(tag)), role, "tag {}", tag);
        }
    }

    #[test]
    fn test_interactive_by_tag_and_role() {
        let button = RawElement::new("button");
        assert!(is_interactive(&button, &resolve_role(&button)));

        let menuitem = RawElement::new("div").with_attr("role", "menuitem");
        assert!(is_interactive(&menuitem, "menuitem"));

        let plain = RawElement::new("div");
        assert!(!is_interactive(&plain, "generic"));
    }

    #[test]
    fn test_interactive_by_handler_tabindex_editable() {
        let onclick = RawElement::new("div").with_attr("onclick", "go()");
        assert!(is_interactive(&onclick, "generic"));

        // Any tabindex value counts, including negative ones.
        let tabbed = RawElement::new("div").with_attr("tabindex", "-1");
        assert!(is_interactive(&tabbed, "generic"));

        let editable = RawElement::new("div").with_attr("contenteditable", "");
        assert!(is_interactive(&editable, "generic"));

        let opted_out = RawElement::new("div").with_attr("contenteditable", "false");
        assert!(!is_interactive(&opted_out, "generic"));
    }

    #[test]
    fn test_focusable() {
        assert!(is_focusable(&RawElement::new("button")));
        assert!(is_focusable(&RawElement::new("div").with_attr("tabindex", "0")));
        assert!(!is_focusable(&RawElement::new("div").with_attr("tabindex", "-1")));
        assert!(!is_focusable(&RawElement::new("div")));

        let mut disabled = RawElement::new("input");
        disabled.disabled = Some(true);
        assert!(!is_focusable(&disabled));
    }
}
