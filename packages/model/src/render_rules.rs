//! Declarative per-type render rules.
//!
//! Every exporter and any canvas renderer maps a [`ComponentType`] to markup
//! through this table, so the tag names and default literals cannot drift
//! between output formats. The emitters only decide syntax and escaping.

use crate::component::{Component, ComponentType};
use std::borrow::Cow;

pub const DEFAULT_HEADING_TEXT: &str = "Heading";
pub const DEFAULT_TEXT: &str = "Text content";
pub const DEFAULT_BUTTON_TEXT: &str = "Button";
pub const DEFAULT_LINK_TEXT: &str = "Link";
pub const DEFAULT_LINK_HREF: &str = "#";
pub const DEFAULT_IMAGE_SRC: &str = "https://via.placeholder.com/400x300";
pub const DEFAULT_IMAGE_ALT: &str = "Image";
pub const DEFAULT_INPUT_TYPE: &str = "text";
pub const DEFAULT_PLACEHOLDER: &str = "Enter text...";

/// What goes inside (or onto) the element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Content {
    /// Element wraps the rendered children
    Children,
    /// Element wraps one text prop, with a fallback literal
    Text {
        prop: &'static str,
        default: &'static str,
    },
    /// Void `<img>` with `src` and `alt`
    Image,
    /// Wrapper holding an optional `<label>` and a form control
    Field { control: FieldControl },
    /// Anchor with sanitized `href` and text
    Link,
    /// Void element without attributes beyond style
    Void,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldControl {
    Input,
    Textarea,
}

impl FieldControl {
    pub fn tag(self) -> &'static str {
        match self {
            FieldControl::Input => "input",
            FieldControl::Textarea => "textarea",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRule {
    pub kind: ComponentType,
    pub tag: &'static str,
    pub class: Option<&'static str>,
    pub content: Content,
}

const fn wrapper(kind: ComponentType, tag: &'static str) -> RenderRule {
    RenderRule {
        kind,
        tag,
        class: None,
        content: Content::Children,
    }
}

const fn text(kind: ComponentType, tag: &'static str, default: &'static str) -> RenderRule {
    RenderRule {
        kind,
        tag,
        class: None,
        content: Content::Text {
            prop: "text",
            default,
        },
    }
}

pub static RENDER_RULES: [RenderRule; 15] = [
    wrapper(ComponentType::Container, "div"),
    wrapper(ComponentType::Section, "section"),
    text(ComponentType::Heading, "h1", DEFAULT_HEADING_TEXT),
    text(ComponentType::Text, "p", DEFAULT_TEXT),
    text(ComponentType::Button, "button", DEFAULT_BUTTON_TEXT),
    RenderRule {
        kind: ComponentType::Image,
        tag: "img",
        class: None,
        content: Content::Image,
    },
    RenderRule {
        kind: ComponentType::Input,
        tag: "div",
        class: None,
        content: Content::Field {
            control: FieldControl::Input,
        },
    },
    RenderRule {
        kind: ComponentType::Textarea,
        tag: "div",
        class: None,
        content: Content::Field {
            control: FieldControl::Textarea,
        },
    },
    wrapper(ComponentType::Form, "form"),
    RenderRule {
        kind: ComponentType::Card,
        tag: "div",
        class: Some("card"),
        content: Content::Children,
    },
    wrapper(ComponentType::Navigation, "nav"),
    wrapper(ComponentType::Header, "header"),
    wrapper(ComponentType::Footer, "footer"),
    RenderRule {
        kind: ComponentType::Link,
        tag: "a",
        class: None,
        content: Content::Link,
    },
    RenderRule {
        kind: ComponentType::Divider,
        tag: "hr",
        class: None,
        content: Content::Void,
    },
];

/// Rule for a type. `None` for [`ComponentType::Unknown`], which renders as nothing.
pub fn render_rule(kind: &ComponentType) -> Option<&'static RenderRule> {
    RENDER_RULES.iter().find(|rule| &rule.kind == kind)
}

impl RenderRule {
    /// Text for a [`Content::Text`] node, with its fallback applied
    pub fn text<'a>(&self, component: &'a Component) -> Cow<'a, str> {
        match self.content {
            Content::Text { prop, default } => component.prop_or(prop, default),
            Content::Link => component.prop_or("text", DEFAULT_LINK_TEXT),
            _ => Cow::Borrowed(""),
        }
    }
}

pub fn image_src(component: &Component) -> Cow<'_, str> {
    component.prop_or("src", DEFAULT_IMAGE_SRC)
}

pub fn image_alt(component: &Component) -> Cow<'_, str> {
    component.prop_or("alt", DEFAULT_IMAGE_ALT)
}

pub fn link_href(component: &Component) -> Cow<'_, str> {
    component.prop_or("href", DEFAULT_LINK_HREF)
}

pub fn input_type(component: &Component) -> Cow<'_, str> {
    component.prop_or("type", DEFAULT_INPUT_TYPE)
}

pub fn placeholder(component: &Component) -> Cow<'_, str> {
    component.prop_or("placeholder", DEFAULT_PLACEHOLDER)
}

/// Label text, only when non-empty
pub fn label(component: &Component) -> Option<Cow<'_, str>> {
    component.prop_text("label")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::{Props, Style};
    use serde_json::json;

    fn component(kind: ComponentType, props: serde_json::Value) -> Component {
        let props: Props = serde_json::from_value(props).unwrap();
        Component {
            id: "c".to_string(),
            kind,
            props,
            style: Style::new(),
            children: vec![],
            animation: None,
        }
    }

    #[test]
    fn test_every_known_type_has_a_rule() {
        for kind in ComponentType::ALL {
            let rule = render_rule(&kind).unwrap();
            assert_eq!(rule.kind, kind);
            assert_eq!(rule.content == Content::Children, kind.accepts_children());
        }
        assert!(render_rule(&ComponentType::Unknown("carousel".to_string())).is_none());
    }

    #[test]
    fn test_text_defaults() {
        let heading = component(ComponentType::Heading, json!({ "text": "" }));
        let rule = render_rule(&ComponentType::Heading).unwrap();
        assert_eq!(rule.text(&heading), "Heading");

        let link = component(ComponentType::Link, json!({}));
        assert_eq!(render_rule(&ComponentType::Link).unwrap().text(&link), "Link");
        assert_eq!(link_href(&link), "#");
    }

    #[test]
    fn test_field_defaults_and_label() {
        let input = component(ComponentType::Input, json!({ "label": "" }));
        assert_eq!(input_type(&input), "text");
        assert_eq!(placeholder(&input), "Enter text...");
        assert!(label(&input).is_none());

        let named = component(ComponentType::Input, json!({ "label": "Email", "type": "email" }));
        assert_eq!(label(&named).as_deref(), Some("Email"));
        assert_eq!(input_type(&named), "email");
    }

    #[test]
    fn test_card_has_class() {
        assert_eq!(render_rule(&ComponentType::Card).unwrap().class, Some("card"));
    }
}
