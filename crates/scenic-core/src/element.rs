//! UI element types and selector matching.
//!
//! This module defines the data structures representing the element tree a
//! driver reports for the current screen, along with the glob-style selector
//! matching and tree search helpers used by the default driver methods.

use serde::{Deserialize, Serialize};

/// The kind of a UI element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElementKind {
    /// One navigable unit of the application's interface.
    Screen,
    /// A read-only text display element.
    Label,
    /// An editable text element.
    TextField,
    /// A pressable element.
    Button,
}

/// A node in the element tree of the current screen.
///
/// Elements form a tree via the `children` field. The `text` field holds the
/// user-visible content: a label's displayed string, a text field's current
/// contents, or a button's caption.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiElement {
    /// Stable identifier used to address the element from scenarios.
    #[serde(default)]
    pub id: Option<String>,

    /// The user-visible text content, if any.
    #[serde(default)]
    pub text: Option<String>,

    /// The kind of element.
    #[serde(default)]
    pub kind: Option<ElementKind>,

    /// Child elements nested within this element.
    #[serde(default)]
    pub children: Vec<UiElement>,
}

impl UiElement {
    /// Creates an element with an id, text, and kind, and no children.
    pub fn new(
        id: impl Into<String>,
        text: impl Into<String>,
        kind: ElementKind,
    ) -> Self {
        Self {
            id: Some(id.into()),
            text: Some(text.into()),
            kind: Some(kind),
            children: Vec::new(),
        }
    }

    /// Adds children to this element, builder-style.
    pub fn with_children(mut self, children: Vec<UiElement>) -> Self {
        self.children = children;
        self
    }
}

/// Returns true if the pattern contains glob wildcard characters (`*` or `?`).
fn has_wildcard(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Matches a string against a glob pattern with `*` (any chars) and `?` (single char).
///
/// When the pattern has no wildcards, falls back to exact equality.
pub fn glob_match(pattern: &str, text: &str) -> bool {
    if !has_wildcard(pattern) {
        return pattern == text;
    }

    let pat: Vec<char> = pattern.chars().collect();
    let txt: Vec<char> = text.chars().collect();
    let (plen, tlen) = (pat.len(), txt.len());

    // dp[i][j] = pattern[..i] matches text[..j]
    let mut dp = vec![vec![false; tlen + 1]; plen + 1];
    dp[0][0] = true;

    // Leading *'s can match empty text
    for i in 1..=plen {
        if pat[i - 1] == '*' {
            dp[i][0] = dp[i - 1][0];
        }
    }

    for i in 1..=plen {
        for j in 1..=tlen {
            if pat[i - 1] == '*' {
                // * matches zero chars (dp[i-1][j]) or one more char (dp[i][j-1])
                dp[i][j] = dp[i - 1][j] || dp[i][j - 1];
            } else if pat[i - 1] == '?' || pat[i - 1] == txt[j - 1] {
                dp[i][j] = dp[i - 1][j - 1];
            }
        }
    }

    dp[plen][tlen]
}

/// Recursively searches an element tree for an element whose id matches.
///
/// Supports glob wildcard patterns (`*` and `?`) in the selector.
pub fn search_by_id(elements: &[UiElement], selector: &str) -> Option<UiElement> {
    for element in elements {
        if element
            .id
            .as_deref()
            .is_some_and(|id| glob_match(selector, id))
        {
            return Some(element.clone());
        }
        if let Some(found) = search_by_id(&element.children, selector) {
            return Some(found);
        }
    }
    None
}

/// Recursively searches an element tree for an element whose text matches.
///
/// Supports glob wildcard patterns (`*` and `?`) in the selector.
pub fn search_by_text(elements: &[UiElement], selector: &str) -> Option<UiElement> {
    for element in elements {
        if element
            .text
            .as_deref()
            .is_some_and(|t| glob_match(selector, t))
        {
            return Some(element.clone());
        }
        if let Some(found) = search_by_text(&element.children, selector) {
            return Some(found);
        }
    }
    None
}

/// Flattens an element tree into a list of addressable elements.
///
/// Recursively traverses the tree and collects all elements that carry an id
/// or text. Elements with neither are purely structural and excluded.
pub fn flatten_elements(elements: &[UiElement]) -> Vec<UiElement> {
    let mut result = Vec::new();
    collect_elements(elements, &mut result);
    result
}

fn collect_elements(elements: &[UiElement], result: &mut Vec<UiElement>) {
    for element in elements {
        if element.id.is_some() || element.text.is_some() {
            result.push(element.clone());
        }
        collect_elements(&element.children, result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_screen() -> Vec<UiElement> {
        vec![UiElement::new("main-screen", "", ElementKind::Screen).with_children(vec![
            UiElement::new("user-input", "", ElementKind::TextField),
            UiElement::new("change-text-button", "Change Text", ElementKind::Button),
            UiElement {
                id: None,
                text: None,
                kind: None,
                children: vec![UiElement::new(
                    "message-label",
                    "Hello World!",
                    ElementKind::Label,
                )],
            },
        ])]
    }

    #[test]
    fn test_glob_match_exact() {
        assert!(glob_match("hello", "hello"));
        assert!(!glob_match("hello", "world"));
    }

    #[test]
    fn test_glob_match_star() {
        assert!(glob_match("change-*", "change-text-button"));
        assert!(glob_match("*-label", "message-label"));
        assert!(glob_match("Chan*", "Chan"));
        assert!(!glob_match("change-*", "open-screen-button"));
    }

    #[test]
    fn test_glob_match_question_mark() {
        assert!(glob_match("tab-?", "tab-1"));
        assert!(!glob_match("tab-?", "tab-12"));
    }

    #[test]
    fn test_search_by_id_finds_nested() {
        let tree = sample_screen();
        let found = search_by_id(&tree, "message-label");
        assert!(found.is_some());
        assert_eq!(found.unwrap().text.as_deref(), Some("Hello World!"));

        assert!(search_by_id(&tree, "nonexistent").is_none());
    }

    #[test]
    fn test_search_by_id_glob() {
        let tree = sample_screen();
        let found = search_by_id(&tree, "*-button");
        assert!(found.is_some());
        assert_eq!(found.unwrap().id.as_deref(), Some("change-text-button"));
    }

    #[test]
    fn test_search_by_text() {
        let tree = sample_screen();
        let found = search_by_text(&tree, "Change Text");
        assert!(found.is_some());
        assert_eq!(found.unwrap().id.as_deref(), Some("change-text-button"));

        assert!(search_by_text(&tree, "Missing").is_none());
    }

    #[test]
    fn test_flatten_excludes_structural_nodes() {
        let tree = sample_screen();
        let flat = flatten_elements(&tree);
        // The anonymous container is excluded; its labeled child is kept.
        let ids: Vec<_> = flat.iter().filter_map(|e| e.id.as_deref()).collect();
        assert_eq!(
            ids,
            vec![
                "main-screen",
                "user-input",
                "change-text-button",
                "message-label"
            ]
        );
    }

    #[test]
    fn test_flatten_empty() {
        let flat = flatten_elements(&[]);
        assert!(flat.is_empty());
    }

    #[test]
    fn test_element_serde_round_trip() {
        let element = UiElement::new("user-input", "abc", ElementKind::TextField);
        let json = serde_json::to_string(&element).unwrap();
        let back: UiElement = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id.as_deref(), Some("user-input"));
        assert_eq!(back.kind, Some(ElementKind::TextField));
    }
}
