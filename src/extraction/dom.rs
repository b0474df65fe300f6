//! Generic queries over the parsed document tree.
//!
//! `scraper` owns the tree; everything here works on borrowed node handles
//! and allocates only the result containers.

use ego_tree::NodeRef;
use scraper::Node;

/// Initial capacity for match lists and traversal stacks.
const INITIAL_CAPACITY: usize = 8;

/// Collect every element in `root`'s subtree whose tag name equals `name`.
///
/// Depth-first pre-order over an explicit stack, so pathologically nested
/// markup cannot overflow the call stack. `root` itself is included when it
/// matches, and a match never prunes its descendants: nested same-tag
/// elements are all reported. Comparison is exact and case-sensitive
/// (html5ever lowercases element names during parsing). Zero matches returns
/// an empty vector, not an error.
pub fn find_tags<'a>(root: NodeRef<'a, Node>, name: &str) -> Vec<NodeRef<'a, Node>> {
    let mut matches = Vec::with_capacity(INITIAL_CAPACITY);
    let mut stack = Vec::with_capacity(INITIAL_CAPACITY);
    stack.push(root);

    while let Some(node) = stack.pop() {
        if let Some(element) = node.value().as_element() {
            if element.name() == name {
                matches.push(node);
            }
        }
        // Reversed so the leftmost child is popped first (document order).
        for child in node.children().rev() {
            stack.push(child);
        }
    }

    matches
}

/// Look up an attribute on `node`, scanning in document order.
///
/// Returns the first matching attribute's value. `None` for text nodes and
/// for elements without the attribute: absent is not the same as empty.
pub fn get_attribute<'a>(node: NodeRef<'a, Node>, attribute: &str) -> Option<&'a str> {
    let element = node.value().as_element()?;
    element
        .attrs()
        .find(|(name, _)| *name == attribute)
        .map(|(_, value)| value)
}

/// The verbatim payload of `node`'s first child, if that child is text.
///
/// No trimming: surrounding whitespace from the source markup is preserved.
pub fn leading_text<'a>(node: NodeRef<'a, Node>) -> Option<&'a str> {
    let first = node.first_child()?;
    first.value().as_text().map(|text| &**text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    #[test]
    fn test_find_tags_preorder() {
        let doc = Html::parse_document(
            r#"<div id="a"><p id="b"></p><div id="c"><div id="d"></div></div></div>"#,
        );
        let divs = find_tags(doc.tree.root(), "div");
        let ids: Vec<_> = divs
            .iter()
            .map(|n| get_attribute(*n, "id").unwrap())
            .collect();
        assert_eq!(ids, ["a", "c", "d"]);
    }

    #[test]
    fn test_find_tags_includes_matching_root_and_nested() {
        let doc = Html::parse_document(
            r#"<table id="outer"><tr><td><table id="inner"></table></td></tr></table>"#,
        );
        let outer = find_tags(doc.tree.root(), "table")[0];
        // A search rooted at the outer table reports it and its nested twin.
        let tables = find_tags(outer, "table");
        assert_eq!(tables.len(), 2);
        assert_eq!(get_attribute(tables[0], "id"), Some("outer"));
        assert_eq!(get_attribute(tables[1], "id"), Some("inner"));
    }

    #[test]
    fn test_find_tags_no_match_is_empty() {
        let doc = Html::parse_document("<p>hello</p>");
        assert!(find_tags(doc.tree.root(), "table").is_empty());
    }

    #[test]
    fn test_find_tags_is_case_sensitive() {
        let doc = Html::parse_document("<p>hello</p>");
        // html5ever lowercases tag names, so an uppercase query never matches.
        assert!(find_tags(doc.tree.root(), "P").is_empty());
        assert_eq!(find_tags(doc.tree.root(), "p").len(), 1);
    }

    #[test]
    fn test_get_attribute_match_and_absent() {
        let doc = Html::parse_document(r#"<form id="f1" class="x"></form>"#);
        let form = find_tags(doc.tree.root(), "form")[0];
        assert_eq!(get_attribute(form, "id"), Some("f1"));
        assert_eq!(get_attribute(form, "class"), Some("x"));
        assert_eq!(get_attribute(form, "name"), None);
    }

    #[test]
    fn test_get_attribute_on_text_node_is_none() {
        let doc = Html::parse_document("<p>hello</p>");
        let p = find_tags(doc.tree.root(), "p")[0];
        let text = p.first_child().unwrap();
        assert_eq!(get_attribute(text, "id"), None);
    }

    #[test]
    fn test_leading_text_is_verbatim() {
        let doc =
            Html::parse_document("<table><tr><td> Application Status </td></tr></table>");
        let td = find_tags(doc.tree.root(), "td")[0];
        assert_eq!(leading_text(td), Some(" Application Status "));
    }

    #[test]
    fn test_leading_text_rejects_element_child() {
        let doc = Html::parse_document("<table><tr><td><b>bold</b></td></tr></table>");
        let td = find_tags(doc.tree.root(), "td")[0];
        assert_eq!(leading_text(td), None);
    }

    #[test]
    fn test_leading_text_rejects_empty_cell() {
        let doc = Html::parse_document("<table><tr><td></td></tr></table>");
        let td = find_tags(doc.tree.root(), "td")[0];
        assert_eq!(leading_text(td), None);
    }
}
