//! Deep clone with id regeneration.
//!
//! Paste, duplicate and template insertion all place a copy of an existing
//! subtree into the live forest. Every node of the copy gets a new id so the
//! forest-wide uniqueness invariant still holds after insertion.

use crate::component::Component;
use crate::id_generator::generate_id;
use crate::visitor::{walk_component_mut, VisitorMut};

/// Deep clone of `node` where the node and every descendant get a new id
pub fn clone_with_fresh_ids(node: &Component) -> Component {
    clone_with_ids(node, &mut generate_id)
}

/// Same as [`clone_with_fresh_ids`] with a caller-provided id source
pub fn clone_with_ids(node: &Component, next_id: &mut impl FnMut() -> String) -> Component {
    Component {
        id: next_id(),
        kind: node.kind.clone(),
        props: node.props.clone(),
        style: node.style.clone(),
        children: node
            .children
            .iter()
            .map(|child| clone_with_ids(child, next_id))
            .collect(),
        animation: node.animation.clone(),
    }
}

struct Reassign;

impl VisitorMut for Reassign {
    fn visit_component_mut(&mut self, component: &mut Component) {
        component.id = generate_id();
        walk_component_mut(self, component);
    }
}

/// Replace every id in an owned subtree in place
pub fn regenerate_ids(node: &mut Component) {
    Reassign.visit_component_mut(node);
}
