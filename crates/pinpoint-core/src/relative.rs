//! Child-path selectors anchored on an ancestor with an id.

use crate::css;
use crate::uniqueness::UniquenessResolver;
use pinpoint_common::DocumentQuery;

#[derive(Debug, Clone, Default)]
pub struct RelativeSelectorBuilder {
    max_depth: Option<usize>,
}

impl RelativeSelectorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop looking for an anchor after `max_depth` ancestors.
    pub fn with_max_depth(max_depth: Option<usize>) -> Self {
        Self { max_depth }
    }

    /// Build `anchor > seg > ... > target` for `node`.
    ///
    /// Returns `None` for an absent or detached node, and when no ancestor
    /// carrying a usable id exists within reach.
    pub fn build<D: DocumentQuery>(&self, doc: &D, node: Option<D::Node>) -> Option<String> {
        let node = node?;
        if !doc.is_connected(node) {
            tracing::debug!("Relative: {:?} is detached", node);
            return None;
        }

        let mut segments = vec![Self::segment(doc, node)];
        let mut cursor = doc.parent_element(node);
        let mut depth = 0;

        while let Some(ancestor) = cursor {
            if self.max_depth.is_some_and(|max| depth >= max) {
                tracing::debug!("Relative: gave up after {} ancestors", depth);
                return None;
            }
            depth += 1;

            if let Some(anchor) = Self::anchor(doc, ancestor) {
                segments.push(anchor);
                segments.reverse();
                return Some(segments.join(" > "));
            }

            tracing::trace!("Relative: {:?} has no usable id", ancestor);
            segments.push(Self::segment(doc, ancestor));
            cursor = doc.parent_element(ancestor);
        }

        tracing::debug!("Relative: no ancestor with an id above {:?}", node);
        None
    }

    fn anchor<D: DocumentQuery>(doc: &D, ancestor: D::Node) -> Option<String> {
        let id = doc.non_empty_attribute(ancestor, "id")?;
        let candidate = css::attribute_equals(&doc.tag_name(ancestor), "id", &id);
        UniquenessResolver::resolve(doc, ancestor, &candidate)
    }

    fn segment<D: DocumentQuery>(doc: &D, node: D::Node) -> String {
        let tag = css::escape_ident(&doc.tag_name(node));
        if UniquenessResolver::has_same_type_siblings(doc, node) {
            css::nth_of_type(&tag, UniquenessResolver::nth_of_type_position(doc, node))
        } else {
            tag
        }
    }
}
