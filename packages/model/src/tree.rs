//! # Tree Operations
//!
//! Pure functions over a component forest. Every operation takes the forest
//! by reference and returns a new one; the input is never modified.
//!
//! The plain functions follow the editor contract: a missing target id is a
//! silent no-op and the returned forest equals the input. Each of them has a
//! `try_*` twin that reports the miss as a [`TreeError`] instead, so callers
//! can tell "the id vanished" apart from "nothing needed to change".

use crate::component::{Component, ComponentType, ComponentUpdate, Forest, Props, Style};
use crate::error::TreeError;
use crate::id_generator::generate_id;
use tracing::debug;

/// Create a fresh component with a new id, no children and no style
pub fn create_component(kind: ComponentType) -> Component {
    create_component_with_props(kind, Props::new())
}

pub fn create_component_with_props(kind: ComponentType, props: Props) -> Component {
    Component {
        id: generate_id(),
        kind,
        props,
        style: Style::new(),
        children: Vec::new(),
        animation: None,
    }
}

/// Depth-first pre-order search across all roots and descendants
pub fn find_component_by_id<'a>(forest: &'a [Component], id: &str) -> Option<&'a Component> {
    for component in forest {
        if component.id == id {
            return Some(component);
        }
        if let Some(found) = find_component_by_id(&component.children, id) {
            return Some(found);
        }
    }
    None
}

/// Mutable variant of [`find_component_by_id`], same visiting order
pub fn find_component_mut<'a>(forest: &'a mut [Component], id: &str) -> Option<&'a mut Component> {
    for component in forest.iter_mut() {
        if component.id == id {
            return Some(component);
        }
        if let Some(found) = find_component_mut(&mut component.children, id) {
            return Some(found);
        }
    }
    None
}

pub fn update_component(forest: &[Component], id: &str, update: &ComponentUpdate) -> Forest {
    try_update_component(forest, id, update).unwrap_or_else(|_| {
        debug!(id, "update target not found; forest unchanged");
        forest.to_vec()
    })
}

pub fn try_update_component(
    forest: &[Component],
    id: &str,
    update: &ComponentUpdate,
) -> Result<Forest, TreeError> {
    let mut next = forest.to_vec();
    let node = find_component_mut(&mut next, id)
        .ok_or_else(|| TreeError::NodeNotFound(id.to_string()))?;
    update.merge_into(node);
    Ok(next)
}

/// Remove the node and, implicitly, its whole subtree. Children are never hoisted.
pub fn delete_component(forest: &[Component], id: &str) -> Forest {
    try_delete_component(forest, id).unwrap_or_else(|_| {
        debug!(id, "delete target not found; forest unchanged");
        forest.to_vec()
    })
}

pub fn try_delete_component(forest: &[Component], id: &str) -> Result<Forest, TreeError> {
    let mut next = forest.to_vec();
    if remove_from(&mut next, id) {
        Ok(next)
    } else {
        Err(TreeError::NodeNotFound(id.to_string()))
    }
}

fn remove_from(list: &mut Vec<Component>, id: &str) -> bool {
    let before = list.len();
    list.retain(|component| component.id != id);
    let mut removed = list.len() != before;

    for component in list.iter_mut() {
        removed |= remove_from(&mut component.children, id);
    }

    removed
}

/// Append `new_component` to the roots (`parent_id == None`) or to the
/// children of `parent_id`.
///
/// An unknown parent drops the new component silently. Use
/// [`try_add_component`] when that must be reported.
pub fn add_component(forest: &[Component], parent_id: Option<&str>, new_component: Component) -> Forest {
    let mut next = forest.to_vec();
    match parent_id {
        None => next.push(new_component),
        Some(parent_id) => match find_component_mut(&mut next, parent_id) {
            Some(parent) => parent.children.push(new_component),
            None => {
                debug!(parent_id, "parent not found; new component dropped");
            }
        },
    }
    next
}

/// Checked variant of [`add_component`].
///
/// Besides a missing parent this also rejects leaf parents, since children
/// appended to a leaf would never render.
pub fn try_add_component(
    forest: &[Component],
    parent_id: Option<&str>,
    new_component: Component,
) -> Result<Forest, TreeError> {
    let mut next = forest.to_vec();
    match parent_id {
        None => next.push(new_component),
        Some(parent_id) => {
            let parent = find_component_mut(&mut next, parent_id)
                .ok_or_else(|| TreeError::ParentNotFound(parent_id.to_string()))?;
            if !parent.accepts_children() {
                return Err(TreeError::NotAContainer(parent.kind.to_string()));
            }
            parent.children.push(new_component);
        }
    }
    Ok(next)
}

/// Insert `node` directly after the sibling with `sibling_id`, at its depth
pub fn insert_after(forest: &[Component], sibling_id: &str, node: Component) -> Forest {
    try_insert_after(forest, sibling_id, node).unwrap_or_else(|_| {
        debug!(sibling_id, "sibling not found; forest unchanged");
        forest.to_vec()
    })
}

pub fn try_insert_after(
    forest: &[Component],
    sibling_id: &str,
    node: Component,
) -> Result<Forest, TreeError> {
    let mut next = forest.to_vec();
    match insert_after_in(&mut next, sibling_id, node) {
        None => Ok(next),
        Some(_) => Err(TreeError::NodeNotFound(sibling_id.to_string())),
    }
}

/// Returns the node back when the sibling was not found in this subtree
fn insert_after_in(list: &mut Vec<Component>, sibling_id: &str, node: Component) -> Option<Component> {
    if let Some(pos) = list.iter().position(|c| c.id == sibling_id) {
        list.insert(pos + 1, node);
        return None;
    }

    let mut node = node;
    for component in list.iter_mut() {
        match insert_after_in(&mut component.children, sibling_id, node) {
            None => return None,
            Some(back) => node = back,
        }
    }
    Some(node)
}
