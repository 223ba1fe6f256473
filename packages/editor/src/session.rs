//! # Edit Session
//!
//! One editing context over a [`Project`]: the live forest of the current
//! page, its undo/redo history, the clipboard and the selected component.
//!
//! Every committed forest change is written back into the current page and
//! pushed onto history, so the project is always up to date and can be saved
//! at any time. Switching, adding or deleting pages starts a fresh history
//! for the page that becomes current.

use crate::clipboard::Clipboard;
use crate::commands::{CommandOutcome, EditorCommand};
use crate::errors::EditorError;
use crate::history::History;
use crate::shortcuts::{resolve, EditorAction};
use pagecraft_model::{
    clone_with_fresh_ids, collect_ids, create_component, find_component_by_id,
    instantiate_template, regenerate_ids, try_add_component, try_delete_component,
    try_insert_after, try_update_component, Component, ComponentUpdate, Forest, Project,
    ProjectError, TreeError,
};
use pagecraft_security::sanitize_props;
use std::collections::HashSet;
use tracing::{debug, warn};

#[derive(Debug)]
pub struct EditSession {
    project: Project,
    history: History<Forest>,
    clipboard: Clipboard,
    selected: Option<String>,
}

impl EditSession {
    /// Start editing the project's current page
    pub fn new(project: Project) -> Self {
        let history = History::new(project.current_components().to_vec());
        Self {
            project,
            history,
            clipboard: Clipboard::new(),
            selected: None,
        }
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn into_project(self) -> Project {
        self.project
    }

    /// Forest of the page being edited
    pub fn components(&self) -> &[Component] {
        self.project.current_components()
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn selected(&self) -> Option<&Component> {
        let id = self.selected.as_deref()?;
        find_component_by_id(self.components(), id)
    }

    pub fn history(&self) -> &History<Forest> {
        &self.history
    }

    pub fn clipboard(&self) -> &Clipboard {
        &self.clipboard
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn has_clipboard(&self) -> bool {
        self.clipboard.has_clipboard()
    }

    /// Apply one command to the session
    pub fn apply(&mut self, command: EditorCommand) -> Result<CommandOutcome, EditorError> {
        let name = command.name();
        debug!(command = name, "applying command");

        let result = self.dispatch(command);
        if let Err(error) = &result {
            warn!(command = name, %error, "command rejected");
        }
        result
    }

    /// Run a shortcut action against the current selection. Actions the
    /// session does not own come back as [`CommandOutcome::Delegated`].
    pub fn perform(&mut self, action: EditorAction) -> Result<CommandOutcome, EditorError> {
        let command = match action {
            EditorAction::Undo => EditorCommand::Undo,
            EditorAction::Redo => EditorCommand::Redo,
            EditorAction::Copy => EditorCommand::Copy {
                id: self.require_selection()?,
            },
            EditorAction::Paste => EditorCommand::Paste {
                parent_id: self
                    .selected()
                    .filter(|component| component.accepts_children())
                    .map(|component| component.id.clone()),
            },
            EditorAction::Duplicate => EditorCommand::Duplicate {
                id: self.require_selection()?,
            },
            EditorAction::Delete => EditorCommand::Delete {
                id: self.require_selection()?,
            },
            EditorAction::Deselect => EditorCommand::Select { id: None },
            EditorAction::SelectNext => EditorCommand::SelectNext,
            EditorAction::SelectPrevious => EditorCommand::SelectPrevious,
            EditorAction::SelectAll
            | EditorAction::TogglePreview
            | EditorAction::ShowShortcuts
            | EditorAction::Save
            | EditorAction::Export => {
                debug!(%action, "delegating action to host");
                return Ok(CommandOutcome::Delegated { action });
            }
        };
        self.apply(command)
    }

    /// Resolve a key chord and perform its action. `Ok(None)` for chords
    /// without a shortcut.
    pub fn handle_key(&mut self, chord: &str) -> Result<Option<CommandOutcome>, EditorError> {
        match resolve(chord) {
            Some(action) => self.perform(action).map(Some),
            None => Ok(None),
        }
    }

    fn dispatch(&mut self, command: EditorCommand) -> Result<CommandOutcome, EditorError> {
        match command {
            EditorCommand::Insert {
                parent_id,
                component,
            } => self.insert(parent_id.as_deref(), component),

            EditorCommand::InsertNew { parent_id, kind } => {
                self.insert(parent_id.as_deref(), create_component(kind))
            }

            EditorCommand::Update { id, update } => self.update(&id, update),

            EditorCommand::Delete { id } => {
                let next = try_delete_component(self.components(), &id)?;
                self.commit(next)?;
                Ok(CommandOutcome::Committed)
            }

            EditorCommand::Copy { id } => {
                let component = self.find(&id)?.clone();
                self.clipboard.copy(&component);
                Ok(CommandOutcome::Copied { id })
            }

            EditorCommand::Paste { parent_id } => {
                let component = self.clipboard.paste().ok_or(EditorError::ClipboardEmpty)?;
                self.insert(parent_id.as_deref(), component)
            }

            EditorCommand::Duplicate { id } => {
                let copy = clone_with_fresh_ids(self.find(&id)?);
                let copy_id = copy.id.clone();
                let next = try_insert_after(self.components(), &id, copy)?;
                self.commit(next)?;
                Ok(CommandOutcome::Inserted { id: copy_id })
            }

            EditorCommand::InsertTemplate {
                template_id,
                parent_id,
            } => {
                let component = instantiate_template(&template_id)
                    .ok_or(EditorError::TemplateNotFound(template_id))?;
                self.insert(parent_id.as_deref(), component)
            }

            EditorCommand::Undo => match self.history.undo() {
                Some(forest) => {
                    self.restore(forest)?;
                    Ok(CommandOutcome::Committed)
                }
                None => Ok(CommandOutcome::Unchanged),
            },

            EditorCommand::Redo => match self.history.redo() {
                Some(forest) => {
                    self.restore(forest)?;
                    Ok(CommandOutcome::Committed)
                }
                None => Ok(CommandOutcome::Unchanged),
            },

            EditorCommand::Select { id } => {
                if let Some(id) = &id {
                    self.find(id)?;
                }
                self.selected = id.clone();
                Ok(CommandOutcome::Selection { id })
            }

            EditorCommand::SelectNext => Ok(self.step_selection(true)),
            EditorCommand::SelectPrevious => Ok(self.step_selection(false)),

            EditorCommand::AddPage { name } => {
                let id = self.project.add_page(&name)?;
                self.reset_history();
                Ok(CommandOutcome::Page { id })
            }

            EditorCommand::DeletePage { id } => {
                self.project.delete_page(&id)?;
                self.reset_history();
                Ok(CommandOutcome::Page {
                    id: self.page_id()?,
                })
            }

            EditorCommand::RenamePage { id, name } => {
                self.project.rename_page(&id, &name)?;
                Ok(CommandOutcome::Page { id })
            }

            EditorCommand::SwitchPage { id } => {
                self.project.select_page(&id)?;
                self.reset_history();
                Ok(CommandOutcome::Page { id })
            }

            EditorCommand::UpdateSettings { settings } => {
                self.project.set_settings(settings);
                Ok(CommandOutcome::Settings)
            }
        }
    }

    fn insert(
        &mut self,
        parent_id: Option<&str>,
        component: Component,
    ) -> Result<CommandOutcome, EditorError> {
        let component = self.with_unique_ids(component);
        let id = component.id.clone();
        let next = try_add_component(self.components(), parent_id, component)?;
        self.commit(next)?;
        Ok(CommandOutcome::Inserted { id })
    }

    fn update(&mut self, id: &str, mut update: ComponentUpdate) -> Result<CommandOutcome, EditorError> {
        if update.is_empty() {
            self.find(id)?;
            return Ok(CommandOutcome::Unchanged);
        }
        if let Some(props) = &update.props {
            update.props = Some(sanitize_props(props));
        }
        if let Some(mut children) = update.children.take() {
            let replaced: HashSet<String> = collect_ids(&self.find(id)?.children).into_iter().collect();
            let taken: HashSet<String> = collect_ids(self.components())
                .into_iter()
                .filter(|existing| !replaced.contains(existing))
                .collect();
            reid_on_clash(&mut children, &taken);
            update.children = Some(children);
        }

        let next = try_update_component(self.components(), id, &update)?;
        self.commit(next)?;
        Ok(CommandOutcome::Committed)
    }

    /// Re-id `component` when any of its ids is already used on the page
    /// or repeats inside the subtree itself
    fn with_unique_ids(&self, component: Component) -> Component {
        let existing: HashSet<String> = collect_ids(self.components()).into_iter().collect();
        let mut nodes = [component];
        reid_on_clash(&mut nodes, &existing);
        let [component] = nodes;
        component
    }

    fn find(&self, id: &str) -> Result<&Component, EditorError> {
        find_component_by_id(self.components(), id)
            .ok_or_else(|| TreeError::NodeNotFound(id.to_string()).into())
    }

    fn require_selection(&self) -> Result<String, EditorError> {
        self.selected.clone().ok_or(EditorError::NothingSelected)
    }

    fn page_id(&self) -> Result<String, EditorError> {
        self.project
            .current_page()
            .map(|page| page.id.clone())
            .ok_or_else(|| ProjectError::PageNotFound(self.project.current_page_id.clone()).into())
    }

    /// Store `forest` into the current page and record it in history
    fn commit(&mut self, forest: Forest) -> Result<(), EditorError> {
        self.restore(forest.clone())?;
        self.history.push(forest);
        Ok(())
    }

    /// Store `forest` into the current page without touching history
    fn restore(&mut self, forest: Forest) -> Result<(), EditorError> {
        let page_id = self.page_id()?;
        self.project.set_page_components(&page_id, forest)?;

        let selection_gone = self
            .selected
            .as_deref()
            .is_some_and(|id| find_component_by_id(self.components(), id).is_none());
        if selection_gone {
            debug!(id = ?self.selected, "selected component is gone; clearing selection");
            self.selected = None;
        }
        Ok(())
    }

    fn reset_history(&mut self) {
        self.history.reset(self.components().to_vec());
        self.selected = None;
    }

    /// Move the selection through the page in pre-order, wrapping around
    fn step_selection(&mut self, forward: bool) -> CommandOutcome {
        let ids = collect_ids(self.components());
        let current = self
            .selected
            .as_ref()
            .and_then(|id| ids.iter().position(|candidate| candidate == id));

        let next = match (current, forward) {
            _ if ids.is_empty() => None,
            (None, true) => ids.first(),
            (None, false) => ids.last(),
            (Some(i), true) => ids.get((i + 1) % ids.len()),
            (Some(i), false) => ids.get((i + ids.len() - 1) % ids.len()),
        };

        self.selected = next.cloned();
        CommandOutcome::Selection {
            id: self.selected.clone(),
        }
    }
}

/// Regenerate every id in `nodes` when any of them is in `taken` or
/// repeats among the incoming subtrees
fn reid_on_clash(nodes: &mut [Component], taken: &HashSet<String>) {
    let mut seen = HashSet::new();
    let clash = collect_ids(nodes)
        .into_iter()
        .any(|id| taken.contains(&id) || !seen.insert(id));

    if clash {
        debug!(count = nodes.len(), "incoming ids collide; regenerating");
        nodes.iter_mut().for_each(regenerate_ids);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagecraft_model::{has_duplicate_ids, ComponentType, Props};
    use serde_json::json;

    fn session_with(forest: serde_json::Value) -> EditSession {
        let mut project = Project::new("Site");
        let page = project.current_page_id.clone();
        let forest: Forest = serde_json::from_value(forest).unwrap();
        project.set_page_components(&page, forest).unwrap();
        EditSession::new(project)
    }

    fn inserted_id(outcome: CommandOutcome) -> String {
        match outcome {
            CommandOutcome::Inserted { id } => id,
            other => panic!("expected insert, got {:?}", other),
        }
    }

    #[test]
    fn test_insert_new_commits_and_pushes_history() {
        let mut session = EditSession::new(Project::new("Site"));
        assert!(!session.can_undo());

        let id = inserted_id(
            session
                .apply(EditorCommand::InsertNew {
                    parent_id: None,
                    kind: ComponentType::Heading,
                })
                .unwrap(),
        );

        assert_eq!(session.components().len(), 1);
        assert_eq!(session.components()[0].id, id);
        assert!(session.can_undo());
        assert_eq!(session.history().len(), 2);
    }

    #[test]
    fn test_insert_under_leaf_is_rejected() {
        let mut session = session_with(json!([{ "id": "b", "type": "button" }]));
        let result = session.apply(EditorCommand::InsertNew {
            parent_id: Some("b".to_string()),
            kind: ComponentType::Text,
        });

        assert!(matches!(result, Err(EditorError::Tree(TreeError::NotAContainer(_)))));
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_insert_with_colliding_id_is_reassigned() {
        let mut session = session_with(json!([{ "id": "a", "type": "divider" }]));
        let component: Component =
            serde_json::from_value(json!({ "id": "a", "type": "divider" })).unwrap();

        let id = inserted_id(
            session
                .apply(EditorCommand::Insert {
                    parent_id: None,
                    component,
                })
                .unwrap(),
        );

        assert_ne!(id, "a");
        assert_eq!(session.components().len(), 2);
    }

    #[test]
    fn test_update_sanitizes_props() {
        let mut session = session_with(json!([{ "id": "l", "type": "link" }]));
        let mut props = Props::new();
        props.insert("href".to_string(), json!("javascript:alert(1)"));
        props.insert("text".to_string(), json!("<b>Docs</b>"));

        session
            .apply(EditorCommand::Update {
                id: "l".to_string(),
                update: ComponentUpdate::props(props),
            })
            .unwrap();

        let link = &session.components()[0];
        assert_eq!(link.props["href"], "#");
        assert_eq!(link.props["text"], "Docs");
    }

    #[test]
    fn test_empty_update_is_unchanged() {
        let mut session = session_with(json!([{ "id": "t", "type": "text" }]));
        let outcome = session
            .apply(EditorCommand::Update {
                id: "t".to_string(),
                update: ComponentUpdate::default(),
            })
            .unwrap();
        assert_eq!(outcome, CommandOutcome::Unchanged);
        assert!(!session.can_undo());
    }

    #[test]
    fn test_update_children_cannot_reuse_forest_ids() {
        let mut session = session_with(json!([
            { "id": "s", "type": "section" },
            { "id": "h", "type": "heading" }
        ]));
        let children: Forest = serde_json::from_value(json!([
            { "id": "h", "type": "heading" },
            { "id": "s", "type": "section" }
        ]))
        .unwrap();

        let outcome = session
            .apply(EditorCommand::Update {
                id: "s".to_string(),
                update: ComponentUpdate {
                    children: Some(children),
                    ..Default::default()
                },
            })
            .unwrap();

        assert_eq!(outcome, CommandOutcome::Committed);
        assert!(!has_duplicate_ids(session.components()));
        assert_eq!(collect_ids(session.components()).len(), 4);
        assert_eq!(session.components()[0].id, "s");
        assert_eq!(session.components()[1].id, "h");
        assert_eq!(session.components()[0].children[0].kind, ComponentType::Heading);
    }

    #[test]
    fn test_update_children_may_keep_their_own_ids() {
        let mut session = session_with(json!([
            {
                "id": "s",
                "type": "section",
                "children": [
                    { "id": "a", "type": "text" },
                    { "id": "b", "type": "text" }
                ]
            }
        ]));
        let reordered = vec![
            session.components()[0].children[1].clone(),
            session.components()[0].children[0].clone(),
        ];

        session
            .apply(EditorCommand::Update {
                id: "s".to_string(),
                update: ComponentUpdate {
                    children: Some(reordered),
                    ..Default::default()
                },
            })
            .unwrap();

        assert_eq!(collect_ids(session.components()), vec!["s", "b", "a"]);
    }

    #[test]
    fn test_failed_commit_leaves_history_alone() {
        let mut project = Project::new("Site");
        project.pages.clear();
        let mut session = EditSession::new(project);

        let result = session.apply(EditorCommand::InsertNew {
            parent_id: None,
            kind: ComponentType::Text,
        });

        assert!(matches!(result, Err(EditorError::Project(ProjectError::PageNotFound(_)))));
        assert_eq!(session.history().len(), 1);
        assert!(!session.can_undo());
    }

    #[test]
    fn test_missing_target_is_an_error() {
        let mut session = session_with(json!([]));
        let result = session.apply(EditorCommand::Delete {
            id: "ghost".to_string(),
        });
        assert!(matches!(result, Err(EditorError::Tree(TreeError::NodeNotFound(_)))));
    }

    #[test]
    fn test_delete_selected_clears_selection() {
        let mut session = session_with(json!([
            { "id": "s", "type": "section", "children": [{ "id": "h", "type": "heading" }] }
        ]));
        session
            .apply(EditorCommand::Select {
                id: Some("h".to_string()),
            })
            .unwrap();

        session
            .apply(EditorCommand::Delete { id: "s".to_string() })
            .unwrap();

        assert!(session.components().is_empty());
        assert_eq!(session.selected_id(), None);
    }

    #[test]
    fn test_undo_restores_selection_safety() {
        let mut session = session_with(json!([]));
        let id = inserted_id(
            session
                .apply(EditorCommand::InsertNew {
                    parent_id: None,
                    kind: ComponentType::Text,
                })
                .unwrap(),
        );
        session.apply(EditorCommand::Select { id: Some(id) }).unwrap();

        assert_eq!(session.apply(EditorCommand::Undo).unwrap(), CommandOutcome::Committed);
        assert!(session.components().is_empty());
        assert_eq!(session.selected_id(), None);
        assert_eq!(session.apply(EditorCommand::Undo).unwrap(), CommandOutcome::Unchanged);

        session.apply(EditorCommand::Redo).unwrap();
        assert_eq!(session.components().len(), 1);
    }

    #[test]
    fn test_duplicate_inserts_after_original() {
        let mut session = session_with(json!([
            { "id": "a", "type": "card", "children": [{ "id": "a1", "type": "text" }] },
            { "id": "b", "type": "divider" }
        ]));

        let copy = inserted_id(
            session
                .apply(EditorCommand::Duplicate { id: "a".to_string() })
                .unwrap(),
        );

        let ids: Vec<&str> = session.components().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["a", copy.as_str(), "b"]);
        assert_ne!(session.components()[1].children[0].id, "a1");
    }

    #[test]
    fn test_copy_and_paste_into_parent() {
        let mut session = session_with(json!([
            { "id": "f", "type": "form" },
            { "id": "i", "type": "input" }
        ]));

        assert!(matches!(
            session.apply(EditorCommand::Paste { parent_id: None }),
            Err(EditorError::ClipboardEmpty)
        ));

        session
            .apply(EditorCommand::Copy { id: "i".to_string() })
            .unwrap();
        assert!(session.has_clipboard());

        let pasted = inserted_id(
            session
                .apply(EditorCommand::Paste {
                    parent_id: Some("f".to_string()),
                })
                .unwrap(),
        );

        assert_ne!(pasted, "i");
        assert_eq!(session.components()[0].children[0].id, pasted);
    }

    #[test]
    fn test_insert_template() {
        let mut session = session_with(json!([]));
        session
            .apply(EditorCommand::InsertTemplate {
                template_id: "contact-form".to_string(),
                parent_id: None,
            })
            .unwrap();
        assert_eq!(session.components()[0].kind, ComponentType::Form);

        let missing = session.apply(EditorCommand::InsertTemplate {
            template_id: "nope".to_string(),
            parent_id: None,
        });
        assert!(matches!(missing, Err(EditorError::TemplateNotFound(_))));
    }

    #[test]
    fn test_select_next_and_previous_wrap() {
        let mut session = session_with(json!([
            { "id": "a", "type": "section", "children": [{ "id": "b", "type": "text" }] },
            { "id": "c", "type": "divider" }
        ]));

        let mut order = Vec::new();
        for _ in 0..4 {
            session.apply(EditorCommand::SelectNext).unwrap();
            order.push(session.selected_id().unwrap().to_string());
        }
        assert_eq!(order, vec!["a", "b", "c", "a"]);

        session.apply(EditorCommand::SelectPrevious).unwrap();
        assert_eq!(session.selected_id(), Some("c"));
    }

    #[test]
    fn test_select_on_empty_page() {
        let mut session = session_with(json!([]));
        assert_eq!(
            session.apply(EditorCommand::SelectNext).unwrap(),
            CommandOutcome::Selection { id: None }
        );
        assert!(session
            .apply(EditorCommand::Select {
                id: Some("x".to_string())
            })
            .is_err());
    }

    #[test]
    fn test_page_switch_resets_history() {
        let mut session = session_with(json!([{ "id": "h", "type": "heading" }]));
        session
            .apply(EditorCommand::Delete { id: "h".to_string() })
            .unwrap();
        assert!(session.can_undo());

        let CommandOutcome::Page { id: about } = session
            .apply(EditorCommand::AddPage {
                name: "About".to_string(),
            })
            .unwrap()
        else {
            panic!("expected page outcome");
        };

        assert!(!session.can_undo());
        assert_eq!(session.project().current_page_id, about);
        assert!(session.components().is_empty());

        let home = session.project().pages[0].id.clone();
        session
            .apply(EditorCommand::SwitchPage { id: home.clone() })
            .unwrap();
        assert!(!session.can_undo());

        let outcome = session
            .apply(EditorCommand::DeletePage { id: about })
            .unwrap();
        assert_eq!(outcome, CommandOutcome::Page { id: home });
    }

    #[test]
    fn test_perform_uses_selection() {
        let mut session = session_with(json!([{ "id": "t", "type": "text" }]));
        assert!(matches!(
            session.perform(EditorAction::Delete),
            Err(EditorError::NothingSelected)
        ));

        session.handle_key("Tab").unwrap();
        assert_eq!(session.selected_id(), Some("t"));

        session.handle_key("Ctrl+C").unwrap();
        session.handle_key("Ctrl+V").unwrap();
        assert_eq!(session.components().len(), 2);

        session.handle_key("Delete").unwrap();
        assert_eq!(session.components().len(), 1);
        assert_eq!(session.selected_id(), None);

        session.handle_key("Ctrl+Z").unwrap();
        assert_eq!(session.components().len(), 2);
    }

    #[test]
    fn test_host_actions_are_delegated() {
        let mut session = session_with(json!([]));
        assert_eq!(
            session.handle_key("Ctrl+S").unwrap(),
            Some(CommandOutcome::Delegated {
                action: EditorAction::Save
            })
        );
        assert_eq!(session.handle_key("Ctrl+Q").unwrap(), None);
    }
}
