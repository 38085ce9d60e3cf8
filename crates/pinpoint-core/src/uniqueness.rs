//! Uniqueness resolution.
//!
//! A candidate selector is only useful to a page object if it matches exactly
//! one element. When several elements share the candidate, the target is
//! pinned down with a `:nth-of-type(N)` qualifier, where N is the target's
//! position among same-tag siblings under its own parent.

use crate::css;
use pinpoint_common::DocumentQuery;

pub struct UniquenessResolver;

impl UniquenessResolver {
    /// Return a selector that matches only `node`, or `None` when the
    /// candidate cannot be made unique.
    ///
    /// A candidate that does not match its own target (zero matches, or a
    /// selector the document rejects) is reported as not applicable rather
    /// than returned broken.
    pub fn resolve<D: DocumentQuery>(doc: &D, node: D::Node, candidate: &str) -> Option<String> {
        let matches = Self::query(doc, candidate)?;

        if !matches.contains(&node) {
            tracing::warn!(
                "Candidate '{}' does not match its target ({} matches); skipping",
                candidate,
                matches.len()
            );
            return None;
        }

        if matches.len() == 1 {
            return Some(candidate.to_string());
        }

        let qualified = css::nth_of_type(candidate, Self::nth_of_type_position(doc, node));
        tracing::debug!(
            "Candidate '{}' matches {} elements; trying '{}'",
            candidate,
            matches.len(),
            qualified
        );

        if Self::is_unique(doc, node, &qualified) {
            Some(qualified)
        } else {
            tracing::debug!("'{}' is still ambiguous", qualified);
            None
        }
    }

    /// Whether `selector` matches exactly `node` and nothing else.
    pub fn is_unique<D: DocumentQuery>(doc: &D, node: D::Node, selector: &str) -> bool {
        Self::query(doc, selector).is_some_and(|matches| matches == [node])
    }

    /// 1-based position of `node` among element siblings with the same tag.
    pub fn nth_of_type_position<D: DocumentQuery>(doc: &D, node: D::Node) -> usize {
        let tag = doc.tag_name(node);
        let mut position = 1;
        let mut cursor = doc.previous_element_sibling(node);
        while let Some(sibling) = cursor {
            if doc.tag_name(sibling) == tag {
                position += 1;
            }
            cursor = doc.previous_element_sibling(sibling);
        }
        position
    }

    /// Whether any other element sibling shares the tag of `node`.
    pub fn has_same_type_siblings<D: DocumentQuery>(doc: &D, node: D::Node) -> bool {
        let tag = doc.tag_name(node);
        let before = std::iter::successors(doc.previous_element_sibling(node), |n| {
            doc.previous_element_sibling(*n)
        });
        let after = std::iter::successors(doc.next_element_sibling(node), |n| {
            doc.next_element_sibling(*n)
        });
        before.chain(after).any(|sibling| doc.tag_name(sibling) == tag)
    }

    fn query<D: DocumentQuery>(doc: &D, selector: &str) -> Option<Vec<D::Node>> {
        match doc.query_selector_all(selector) {
            Ok(matches) => Some(matches),
            Err(e) => {
                tracing::warn!("Query for '{}' failed: {}", selector, e);
                None
            }
        }
    }
}
