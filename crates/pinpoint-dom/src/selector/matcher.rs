use super::ast::*;
use crate::document::Document;
use crate::node::{ElementData, NodeId, NodeKind};

/// Whether `node` matches any selector in `list`.
pub fn matches(doc: &Document, node: NodeId, list: &SelectorList) -> bool {
    list.selectors
        .iter()
        .any(|selector| matches_parts(doc, node, &selector.parts))
}

// Right-to-left with backtracking: each combinator tries every viable
// candidate on its left before giving up.
fn matches_parts(doc: &Document, node: NodeId, parts: &[SelectorPart]) -> bool {
    let Some((last, rest)) = parts.split_last() else {
        return false;
    };
    if !matches_compound(doc, node, &last.compound) {
        return false;
    }

    match last.combinator {
        None => rest.is_empty(),
        Some(Combinator::Child) => {
            parent_element(doc, node).is_some_and(|parent| matches_parts(doc, parent, rest))
        }
        Some(Combinator::Descendant) => {
            let mut cursor = parent_element(doc, node);
            while let Some(ancestor) = cursor {
                if matches_parts(doc, ancestor, rest) {
                    return true;
                }
                cursor = parent_element(doc, ancestor);
            }
            false
        }
        Some(Combinator::Adjacent) => doc
            .previous_element_sibling(node)
            .is_some_and(|sibling| matches_parts(doc, sibling, rest)),
        Some(Combinator::Sibling) => {
            let mut cursor = doc.previous_element_sibling(node);
            while let Some(sibling) = cursor {
                if matches_parts(doc, sibling, rest) {
                    return true;
                }
                cursor = doc.previous_element_sibling(sibling);
            }
            false
        }
    }
}

fn parent_element(doc: &Document, node: NodeId) -> Option<NodeId> {
    doc.parent(node).filter(|parent| doc.is_element(*parent))
}

fn matches_compound(doc: &Document, node: NodeId, compound: &Compound) -> bool {
    let Some(element) = doc.element(node) else {
        return false;
    };

    if let Some(tag) = &compound.tag
        && !element.tag_name.eq_ignore_ascii_case(tag)
    {
        return false;
    }

    compound
        .conditions
        .iter()
        .all(|condition| matches_condition(doc, node, element, condition))
}

fn matches_condition(
    doc: &Document,
    node: NodeId,
    element: &ElementData,
    condition: &Condition,
) -> bool {
    match condition {
        Condition::Id(id) => element.attribute("id") == Some(id.as_str()),
        Condition::Class(class_name) => element.has_class(class_name),
        Condition::Attribute(attr) => matches_attribute(element, attr),
        Condition::Pseudo(pseudo) => matches_pseudo(doc, node, element, pseudo),
    }
}

fn matches_attribute(element: &ElementData, attr: &AttributeCondition) -> bool {
    let Some(actual) = element.attribute(&attr.name) else {
        return false;
    };
    let Some((op, expected)) = &attr.matcher else {
        return true;
    };

    let (actual, expected) = if attr.case_insensitive {
        (actual.to_lowercase(), expected.to_lowercase())
    } else {
        (actual.to_string(), expected.clone())
    };

    match op {
        AttrOp::Equals => actual == expected,
        AttrOp::Includes => {
            !expected.is_empty()
                && !expected.contains(char::is_whitespace)
                && actual.split_whitespace().any(|token| token == expected)
        }
        AttrOp::DashMatch => actual == expected || actual.starts_with(&format!("{}-", expected)),
        AttrOp::Prefix => !expected.is_empty() && actual.starts_with(&expected),
        AttrOp::Suffix => !expected.is_empty() && actual.ends_with(&expected),
        AttrOp::Substring => !expected.is_empty() && actual.contains(&expected),
    }
}

fn matches_pseudo(doc: &Document, node: NodeId, element: &ElementData, pseudo: &PseudoClass) -> bool {
    match pseudo {
        PseudoClass::Nth(kind, nth) => nth.matches(position(doc, node, element, *kind)),
        PseudoClass::FirstChild => position(doc, node, element, NthKind::Child) == 1,
        PseudoClass::LastChild => position(doc, node, element, NthKind::LastChild) == 1,
        PseudoClass::OnlyChild => {
            position(doc, node, element, NthKind::Child) == 1
                && position(doc, node, element, NthKind::LastChild) == 1
        }
        PseudoClass::FirstOfType => position(doc, node, element, NthKind::OfType) == 1,
        PseudoClass::LastOfType => position(doc, node, element, NthKind::LastOfType) == 1,
        PseudoClass::OnlyOfType => {
            position(doc, node, element, NthKind::OfType) == 1
                && position(doc, node, element, NthKind::LastOfType) == 1
        }
        PseudoClass::Root => doc.parent(node) == Some(doc.root()),
        PseudoClass::Empty => doc.children(node).iter().all(|child| {
            match doc.node(*child).map(|n| n.kind()) {
                Some(NodeKind::Text(text)) => text.is_empty(),
                Some(NodeKind::Comment(_)) => true,
                _ => false,
            }
        }),
        PseudoClass::Not(compound) => !matches_compound(doc, node, compound),
    }
}

/// 1-based position among element siblings, counted from the start or the
/// end and optionally restricted to the same tag name.
fn position(doc: &Document, node: NodeId, element: &ElementData, kind: NthKind) -> i64 {
    let step = |n: NodeId| match kind {
        NthKind::OfType | NthKind::Child => doc.previous_element_sibling(n),
        NthKind::LastOfType | NthKind::LastChild => doc.next_element_sibling(n),
    };
    let same_type_only = matches!(kind, NthKind::OfType | NthKind::LastOfType);

    let mut count = 1;
    let mut cursor = step(node);
    while let Some(sibling) = cursor {
        let counts = !same_type_only
            || doc
                .element(sibling)
                .is_some_and(|s| s.tag_name == element.tag_name);
        if counts {
            count += 1;
        }
        cursor = step(sibling);
    }
    count
}
