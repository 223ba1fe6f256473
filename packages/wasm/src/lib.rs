//! Browser bindings. Everything crosses the boundary as JSON strings; each
//! binding wraps a plain Rust function returning `Result<String, String>`.

use pagecraft_compiler_html::{compile_page, CompileOptions as HtmlOptions};
use pagecraft_compiler_react::{compile_to_react, CompileOptions as ReactOptions};
use pagecraft_compiler_vue::{compile_to_vue, CompileOptions as VueOptions};
use pagecraft_editor::{EditSession, EditorCommand, SHORTCUTS};
use pagecraft_model::{templates, Forest, Project, Props};
use pagecraft_security::sanitize_props;
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

fn to_js(message: String) -> JsValue {
    JsValue::from_str(&message)
}

fn parse<T: serde::de::DeserializeOwned>(json: &str, what: &str) -> Result<T, String> {
    serde_json::from_str(json).map_err(|e| format!("Invalid {}: {}", what, e))
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("Serialization error: {}", e))
}

/// Undo/redo/clipboard flags the toolbar renders from
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorState<'a> {
    pub can_undo: bool,
    pub can_redo: bool,
    pub has_clipboard: bool,
    pub selected_id: Option<&'a str>,
}

/// JSON-in/JSON-out wrapper around an [`EditSession`]
#[wasm_bindgen]
#[derive(Debug)]
pub struct WasmEditor {
    session: EditSession,
}

impl WasmEditor {
    pub fn from_json(project_json: &str) -> Result<WasmEditor, String> {
        let project: Project = parse(project_json, "project")?;
        Ok(Self {
            session: EditSession::new(project),
        })
    }

    /// Apply a command, returning the outcome as JSON
    pub fn apply_json(&mut self, command_json: &str) -> Result<String, String> {
        let command: EditorCommand = parse(command_json, "command")?;
        let outcome = self.session.apply(command).map_err(|e| e.to_string())?;
        to_json(&outcome)
    }

    pub fn handle_key_json(&mut self, chord: &str) -> Result<Option<String>, String> {
        match self.session.handle_key(chord).map_err(|e| e.to_string())? {
            Some(outcome) => to_json(&outcome).map(Some),
            None => Ok(None),
        }
    }

    pub fn project_json(&self) -> Result<String, String> {
        to_json(self.session.project())
    }

    pub fn state_json(&self) -> Result<String, String> {
        to_json(&EditorState {
            can_undo: self.session.can_undo(),
            can_redo: self.session.can_redo(),
            has_clipboard: self.session.has_clipboard(),
            selected_id: self.session.selected_id(),
        })
    }
}

#[wasm_bindgen]
impl WasmEditor {
    #[wasm_bindgen(constructor)]
    pub fn new(project_json: &str) -> Result<WasmEditor, JsValue> {
        Self::from_json(project_json).map_err(to_js)
    }

    pub fn apply(&mut self, command_json: &str) -> Result<String, JsValue> {
        self.apply_json(command_json).map_err(to_js)
    }

    /// Outcome JSON, or `undefined` for a chord without a shortcut
    #[wasm_bindgen(js_name = handleKey)]
    pub fn handle_key(&mut self, chord: &str) -> Result<Option<String>, JsValue> {
        self.handle_key_json(chord).map_err(to_js)
    }

    pub fn project(&self) -> Result<String, JsValue> {
        self.project_json().map_err(to_js)
    }

    pub fn state(&self) -> Result<String, JsValue> {
        self.state_json().map_err(to_js)
    }

    #[wasm_bindgen(js_name = canUndo)]
    pub fn can_undo(&self) -> bool {
        self.session.can_undo()
    }

    #[wasm_bindgen(js_name = canRedo)]
    pub fn can_redo(&self) -> bool {
        self.session.can_redo()
    }

    #[wasm_bindgen(js_name = hasClipboard)]
    pub fn has_clipboard(&self) -> bool {
        self.session.has_clipboard()
    }
}

/// Standalone HTML for a page of a project (current page when `page_id` is absent)
pub fn export_html(project_json: &str, page_id: Option<&str>) -> Result<String, String> {
    let project: Project = parse(project_json, "project")?;
    compile_page(&project, page_id, HtmlOptions::default()).map_err(|e| e.to_string())
}

pub fn export_react(forest_json: &str) -> Result<String, String> {
    let forest: Forest = parse(forest_json, "component forest")?;
    Ok(compile_to_react(&forest, ReactOptions::default()))
}

pub fn export_vue(forest_json: &str) -> Result<String, String> {
    let forest: Forest = parse(forest_json, "component forest")?;
    Ok(compile_to_vue(&forest, VueOptions::default()))
}

pub fn sanitize_props_json(props_json: &str) -> Result<String, String> {
    let props: Props = parse(props_json, "props")?;
    to_json(&sanitize_props(&props))
}

pub fn templates_json() -> Result<String, String> {
    to_json(&templates())
}

pub fn shortcuts_json() -> Result<String, String> {
    to_json(SHORTCUTS)
}

#[wasm_bindgen(js_name = exportHtml)]
pub fn export_html_js(project_json: &str, page_id: Option<String>) -> Result<String, JsValue> {
    export_html(project_json, page_id.as_deref()).map_err(to_js)
}

#[wasm_bindgen(js_name = exportReact)]
pub fn export_react_js(forest_json: &str) -> Result<String, JsValue> {
    export_react(forest_json).map_err(to_js)
}

#[wasm_bindgen(js_name = exportVue)]
pub fn export_vue_js(forest_json: &str) -> Result<String, JsValue> {
    export_vue(forest_json).map_err(to_js)
}

#[wasm_bindgen(js_name = sanitizeProps)]
pub fn sanitize_props_js(props_json: &str) -> Result<String, JsValue> {
    sanitize_props_json(props_json).map_err(to_js)
}

#[wasm_bindgen(js_name = templates)]
pub fn templates_js() -> Result<String, JsValue> {
    templates_json().map_err(to_js)
}

#[wasm_bindgen(js_name = shortcuts)]
pub fn shortcuts_js() -> Result<String, JsValue> {
    shortcuts_json().map_err(to_js)
}
