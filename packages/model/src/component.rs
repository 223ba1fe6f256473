use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::borrow::Cow;

/// Free-form component properties (`text`, `src`, `href`, custom fields...)
pub type Props = Map<String, Value>;

/// Inline style map keyed by camelCase CSS property names
pub type Style = Map<String, Value>;

/// The ordered root-level components of one page
pub type Forest = Vec<Component>;

/// Kind of a component node. Serialized as its type string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ComponentType {
    Container,
    Section,
    Heading,
    Text,
    Button,
    Image,
    Input,
    Textarea,
    Form,
    Card,
    Navigation,
    Header,
    Footer,
    Link,
    Divider,

    /// Any type string this build does not know about. Renders as nothing,
    /// and keeps the raw string so the node saves back unchanged.
    Unknown(String),
}

impl ComponentType {
    /// Every known type, in palette order
    pub const ALL: [ComponentType; 15] = [
        ComponentType::Container,
        ComponentType::Section,
        ComponentType::Heading,
        ComponentType::Text,
        ComponentType::Button,
        ComponentType::Image,
        ComponentType::Input,
        ComponentType::Textarea,
        ComponentType::Form,
        ComponentType::Card,
        ComponentType::Navigation,
        ComponentType::Header,
        ComponentType::Footer,
        ComponentType::Link,
        ComponentType::Divider,
    ];

    /// Container-shaped types are the only ones whose children are rendered
    pub fn accepts_children(&self) -> bool {
        matches!(
            self,
            ComponentType::Container
                | ComponentType::Section
                | ComponentType::Form
                | ComponentType::Card
                | ComponentType::Header
                | ComponentType::Navigation
                | ComponentType::Footer
        )
    }

    pub fn as_str(&self) -> &str {
        match self {
            ComponentType::Container => "container",
            ComponentType::Section => "section",
            ComponentType::Heading => "heading",
            ComponentType::Text => "text",
            ComponentType::Button => "button",
            ComponentType::Image => "image",
            ComponentType::Input => "input",
            ComponentType::Textarea => "textarea",
            ComponentType::Form => "form",
            ComponentType::Card => "card",
            ComponentType::Navigation => "navigation",
            ComponentType::Header => "header",
            ComponentType::Footer => "footer",
            ComponentType::Link => "link",
            ComponentType::Divider => "divider",
            ComponentType::Unknown(raw) => raw,
        }
    }
}

impl std::fmt::Display for ComponentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ComponentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ComponentType::ALL
            .iter()
            .find(|kind| kind.as_str() == s)
            .cloned()
            .ok_or_else(|| format!("Unknown component type: {}", s))
    }
}

impl Serialize for ComponentType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ComponentType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(raw.parse().unwrap_or(ComponentType::Unknown(raw)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AnimationType {
    FadeIn,
    FadeOut,
    SlideInLeft,
    SlideInRight,
    SlideInUp,
    SlideInDown,
    ZoomIn,
    ZoomOut,
    Bounce,
    Rotate,
    Pulse,
    Shake,
    None,
}

impl AnimationType {
    /// Name used for `@keyframes` and `animation-name`
    pub fn as_str(&self) -> &str {
        match self {
            AnimationType::FadeIn => "fadeIn",
            AnimationType::FadeOut => "fadeOut",
            AnimationType::SlideInLeft => "slideInLeft",
            AnimationType::SlideInRight => "slideInRight",
            AnimationType::SlideInUp => "slideInUp",
            AnimationType::SlideInDown => "slideInDown",
            AnimationType::ZoomIn => "zoomIn",
            AnimationType::ZoomOut => "zoomOut",
            AnimationType::Bounce => "bounce",
            AnimationType::Rotate => "rotate",
            AnimationType::Pulse => "pulse",
            AnimationType::Shake => "shake",
            AnimationType::None => "none",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AnimationTrigger {
    #[default]
    OnLoad,
    OnHover,
    OnClick,
    OnScroll,
}

/// Presentation-layer effect attached to a component. Descriptive only.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationConfig {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<AnimationType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger: Option<AnimationTrigger>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub easing: Option<String>,
}

/// One node of the component tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    pub id: String,

    #[serde(rename = "type")]
    pub kind: ComponentType,

    #[serde(default)]
    pub props: Props,

    #[serde(default)]
    pub style: Style,

    /// Only rendered for container-shaped types
    #[serde(default)]
    pub children: Vec<Component>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation: Option<AnimationConfig>,
}

impl Component {
    /// Read a prop as display text.
    ///
    /// Missing, empty, `null`, `false` and zero values count as absent, so
    /// callers can fall back to the per-type default literal.
    pub fn prop_text(&self, key: &str) -> Option<Cow<'_, str>> {
        match self.props.get(key)? {
            Value::String(s) if !s.is_empty() => Some(Cow::Borrowed(s.as_str())),
            Value::Number(n) if n.as_f64() != Some(0.0) => Some(Cow::Owned(n.to_string())),
            Value::Bool(true) => Some(Cow::Borrowed("true")),
            _ => None,
        }
    }

    /// Prop text or the given fallback
    pub fn prop_or<'a>(&'a self, key: &str, fallback: &'a str) -> Cow<'a, str> {
        self.prop_text(key).unwrap_or(Cow::Borrowed(fallback))
    }

    pub fn accepts_children(&self) -> bool {
        self.kind.accepts_children()
    }

    /// Children that a renderer should walk. Empty for leaf types.
    pub fn rendered_children(&self) -> &[Component] {
        if self.accepts_children() {
            &self.children
        } else {
            &[]
        }
    }

    pub fn has_style(&self) -> bool {
        !self.style.is_empty()
    }

    /// Builder-style helper used by templates and tests
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn with_children(mut self, children: Vec<Component>) -> Self {
        self.children = children;
        self
    }
}

/// Partial update merged into a component by `update_component`.
///
/// `props` are merged key by key; every other provided field replaces the
/// existing one wholesale.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentUpdate {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ComponentType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub props: Option<Props>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<Style>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Component>>,
    /// `Some(None)` removes the animation; in JSON that is an explicit `null`
    #[serde(
        default,
        deserialize_with = "explicit_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub animation: Option<Option<AnimationConfig>>,
}

/// A present field (even `null`) becomes `Some`, an absent one stays `None`
fn explicit_null<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl ComponentUpdate {
    pub fn props(props: Props) -> Self {
        Self {
            props: Some(props),
            ..Default::default()
        }
    }

    pub fn style(style: Style) -> Self {
        Self {
            style: Some(style),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.kind.is_none()
            && self.props.is_none()
            && self.style.is_none()
            && self.children.is_none()
            && self.animation.is_none()
    }

    /// Merge this update into `target` in place
    pub fn merge_into(&self, target: &mut Component) {
        if let Some(kind) = &self.kind {
            target.kind = kind.clone();
        }
        if let Some(props) = &self.props {
            for (key, value) in props {
                target.props.insert(key.clone(), value.clone());
            }
        }
        if let Some(style) = &self.style {
            target.style = style.clone();
        }
        if let Some(children) = &self.children {
            target.children = children.clone();
        }
        if let Some(animation) = &self.animation {
            target.animation = animation.clone();
        }
    }

    /// Merge this update into a copy of `component`
    pub fn apply_to(&self, component: &Component) -> Component {
        let mut updated = component.clone();
        self.merge_into(&mut updated);
        updated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn heading(text: Value) -> Component {
        let mut props = Props::new();
        props.insert("text".to_string(), text);
        Component {
            id: "h1".to_string(),
            kind: ComponentType::Heading,
            props,
            style: Style::new(),
            children: vec![],
            animation: None,
        }
    }

    #[test]
    fn test_component_json_shape() {
        let component = heading(json!("Hi"));
        let value = serde_json::to_value(&component).unwrap();

        assert_eq!(value["type"], "heading");
        assert_eq!(value["props"]["text"], "Hi");
        assert!(value.get("animation").is_none());
    }

    #[test]
    fn test_unknown_type_deserializes() {
        let component: Component =
            serde_json::from_value(json!({ "id": "x", "type": "carousel" })).unwrap();

        assert_eq!(component.kind, ComponentType::Unknown("carousel".to_string()));
        assert!(!component.accepts_children());
        assert!(component.children.is_empty());
        assert!(component.style.is_empty());
    }

    #[test]
    fn test_unknown_type_round_trips() {
        let input = json!({
            "id": "x",
            "type": "carousel",
            "props": { "slides": 3 },
            "style": {},
            "children": []
        });
        let component: Component = serde_json::from_value(input.clone()).unwrap();
        let output = serde_json::to_value(&component).unwrap();

        assert_eq!(output["type"], "carousel");
        assert_eq!(output, input);
    }

    #[test]
    fn test_prop_text_uses_falsy_semantics() {
        assert_eq!(heading(json!("Hi")).prop_text("text").as_deref(), Some("Hi"));
        assert_eq!(heading(json!("")).prop_text("text"), None);
        assert_eq!(heading(json!(0)).prop_text("text"), None);
        assert_eq!(heading(json!(null)).prop_text("text"), None);
        assert_eq!(heading(json!(false)).prop_text("text"), None);
        assert_eq!(heading(json!(42)).prop_text("text").as_deref(), Some("42"));
        assert_eq!(heading(json!("")).prop_or("text", "Heading"), "Heading");
    }

    #[test]
    fn test_leaf_types_never_render_children() {
        let mut leaf = heading(json!("Hi"));
        leaf.children.push(heading(json!("nested")));

        assert!(leaf.rendered_children().is_empty());
        assert_eq!(leaf.children.len(), 1);
    }

    #[test]
    fn test_update_merges_props_and_replaces_style() {
        let mut original = heading(json!("Hi"));
        original.props.insert("level".to_string(), json!(2));
        original.style.insert("color".to_string(), json!("red"));

        let mut props = Props::new();
        props.insert("text".to_string(), json!("X"));
        let mut style = Style::new();
        style.insert("fontSize".to_string(), json!("12px"));

        let update = ComponentUpdate {
            props: Some(props),
            style: Some(style),
            ..Default::default()
        };
        let updated = update.apply_to(&original);

        assert_eq!(updated.props["text"], "X");
        assert_eq!(updated.props["level"], 2);
        assert!(updated.style.get("color").is_none());
        assert_eq!(updated.style["fontSize"], "12px");
    }

    #[test]
    fn test_update_can_clear_animation() {
        let mut original = heading(json!("Hi"));
        original.animation = Some(AnimationConfig {
            kind: Some(AnimationType::FadeIn),
            ..Default::default()
        });

        let update = ComponentUpdate {
            animation: Some(None),
            ..Default::default()
        };

        assert!(update.apply_to(&original).animation.is_none());
    }

    #[test]
    fn test_update_json_null_versus_absent_animation() {
        let clear: ComponentUpdate = serde_json::from_value(json!({ "animation": null })).unwrap();
        assert_eq!(clear.animation, Some(None));

        let untouched: ComponentUpdate = serde_json::from_value(json!({ "props": {} })).unwrap();
        assert_eq!(untouched.animation, None);
    }

    #[test]
    fn test_component_type_from_str() {
        assert_eq!("card".parse::<ComponentType>(), Ok(ComponentType::Card));
        assert!("unknown".parse::<ComponentType>().is_err());
    }
}
