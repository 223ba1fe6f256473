use crate::component::Component;
use std::collections::HashSet;

/// Visitor pattern for traversing a component forest immutably
///
/// The default implementation walks every node in pre-order. Override
/// `visit_component` to act on nodes; call [`walk_component`] from the
/// override to keep descending.
pub trait Visitor: Sized {
    fn visit_forest(&mut self, forest: &[Component]) {
        walk_forest(self, forest);
    }

    fn visit_component(&mut self, component: &Component) {
        walk_component(self, component);
    }
}

/// Mutable visitor, same traversal order as [`Visitor`]
pub trait VisitorMut: Sized {
    fn visit_forest_mut(&mut self, forest: &mut [Component]) {
        walk_forest_mut(self, forest);
    }

    fn visit_component_mut(&mut self, component: &mut Component) {
        walk_component_mut(self, component);
    }
}

pub fn walk_forest<V: Visitor>(visitor: &mut V, forest: &[Component]) {
    for component in forest {
        visitor.visit_component(component);
    }
}

pub fn walk_component<V: Visitor>(visitor: &mut V, component: &Component) {
    for child in &component.children {
        visitor.visit_component(child);
    }
}

pub fn walk_forest_mut<V: VisitorMut>(visitor: &mut V, forest: &mut [Component]) {
    for component in forest {
        visitor.visit_component_mut(component);
    }
}

pub fn walk_component_mut<V: VisitorMut>(visitor: &mut V, component: &mut Component) {
    for child in &mut component.children {
        visitor.visit_component_mut(child);
    }
}

/// Call `f` on every node, pre-order
pub fn walk<'a>(forest: &'a [Component], f: &mut impl FnMut(&'a Component)) {
    for component in forest {
        f(component);
        walk(&component.children, f);
    }
}

struct IdCollector {
    ids: Vec<String>,
}

impl Visitor for IdCollector {
    fn visit_component(&mut self, component: &Component) {
        self.ids.push(component.id.clone());
        walk_component(self, component);
    }
}

/// Every id in the forest, pre-order
pub fn collect_ids(forest: &[Component]) -> Vec<String> {
    let mut collector = IdCollector { ids: Vec::new() };
    collector.visit_forest(forest);
    collector.ids
}

pub fn count_nodes(forest: &[Component]) -> usize {
    forest.iter().map(|c| 1 + count_nodes(&c.children)).sum()
}

pub fn has_duplicate_ids(forest: &[Component]) -> bool {
    let mut seen = HashSet::new();
    collect_ids(forest).into_iter().any(|id| !seen.insert(id))
}

/// Id of the direct parent of `id`. `None` for roots and missing ids.
pub fn find_parent_id(forest: &[Component], id: &str) -> Option<String> {
    for component in forest {
        if component.children.iter().any(|c| c.id == id) {
            return Some(component.id.clone());
        }
        if let Some(parent) = find_parent_id(&component.children, id) {
            return Some(parent);
        }
    }
    None
}
