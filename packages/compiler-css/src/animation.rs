use pagecraft_model::{render_rule, AnimationConfig, AnimationTrigger, AnimationType, Component};
use pagecraft_security::sanitize_css;

const DEFAULT_DURATION: &str = "1s";
const DEFAULT_DELAY: &str = "0s";
const DEFAULT_EASING: &str = "ease";

/// `@keyframes` block for an animation type. Empty for `none`.
pub fn keyframes(kind: AnimationType) -> &'static str {
    match kind {
        AnimationType::FadeIn => {
            "@keyframes fadeIn {\n  from { opacity: 0; }\n  to { opacity: 1; }\n}"
        }
        AnimationType::FadeOut => {
            "@keyframes fadeOut {\n  from { opacity: 1; }\n  to { opacity: 0; }\n}"
        }
        AnimationType::SlideInLeft => {
            "@keyframes slideInLeft {\n  from { transform: translateX(-100%); opacity: 0; }\n  to { transform: translateX(0); opacity: 1; }\n}"
        }
        AnimationType::SlideInRight => {
            "@keyframes slideInRight {\n  from { transform: translateX(100%); opacity: 0; }\n  to { transform: translateX(0); opacity: 1; }\n}"
        }
        AnimationType::SlideInUp => {
            "@keyframes slideInUp {\n  from { transform: translateY(100%); opacity: 0; }\n  to { transform: translateY(0); opacity: 1; }\n}"
        }
        AnimationType::SlideInDown => {
            "@keyframes slideInDown {\n  from { transform: translateY(-100%); opacity: 0; }\n  to { transform: translateY(0); opacity: 1; }\n}"
        }
        AnimationType::ZoomIn => {
            "@keyframes zoomIn {\n  from { transform: scale(0); opacity: 0; }\n  to { transform: scale(1); opacity: 1; }\n}"
        }
        AnimationType::ZoomOut => {
            "@keyframes zoomOut {\n  from { transform: scale(1); opacity: 1; }\n  to { transform: scale(0); opacity: 0; }\n}"
        }
        AnimationType::Bounce => {
            "@keyframes bounce {\n  0%, 20%, 53%, 80%, 100% { transform: translateY(0); }\n  40%, 43% { transform: translateY(-30px); }\n  70% { transform: translateY(-15px); }\n  90% { transform: translateY(-4px); }\n}"
        }
        AnimationType::Rotate => {
            "@keyframes rotate {\n  from { transform: rotate(0deg); }\n  to { transform: rotate(360deg); }\n}"
        }
        AnimationType::Pulse => {
            "@keyframes pulse {\n  0%, 100% { transform: scale(1); }\n  50% { transform: scale(1.05); }\n}"
        }
        AnimationType::Shake => {
            "@keyframes shake {\n  0%, 100% { transform: translateX(0); }\n  10%, 30%, 50%, 70%, 90% { transform: translateX(-10px); }\n  20%, 40%, 60%, 80% { transform: translateX(10px); }\n}"
        }
        AnimationType::None => "",
    }
}

fn active_kind(config: &AnimationConfig) -> Option<AnimationType> {
    config.kind.filter(|kind| *kind != AnimationType::None)
}

/// `animation-*` declarations for a config, empty when it has no effect
pub fn animation_declarations(config: &AnimationConfig) -> Vec<(&'static str, String)> {
    let Some(kind) = active_kind(config) else {
        return Vec::new();
    };
    let or_default = |value: &Option<String>, default: &str| {
        value
            .as_deref()
            .map(sanitize_css)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| default.to_string())
    };

    vec![
        ("animation-name", kind.as_str().to_string()),
        ("animation-duration", or_default(&config.duration, DEFAULT_DURATION)),
        ("animation-delay", or_default(&config.delay, DEFAULT_DELAY)),
        ("animation-timing-function", or_default(&config.easing, DEFAULT_EASING)),
        ("animation-fill-mode", "both".to_string()),
    ]
}

/// Declarations in inline-style form: `animation-name: fadeIn; ...`
pub fn animation_inline(config: &AnimationConfig) -> String {
    animation_declarations(config)
        .iter()
        .map(|(property, value)| format!("{}: {};", property, value))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Utility class for an animation, prefixed by its trigger variant
pub fn animation_class_name(kind: AnimationType, trigger: AnimationTrigger) -> String {
    if kind == AnimationType::None {
        return String::new();
    }
    let prefix = match trigger {
        AnimationTrigger::OnHover => "hover:",
        AnimationTrigger::OnClick => "active:",
        AnimationTrigger::OnLoad | AnimationTrigger::OnScroll => "",
    };
    format!("{}animate-{}", prefix, kind.as_str())
}

/// Distinct animation types on nodes that actually render, first use first.
/// Children of leaf types and unknown types are skipped.
pub fn used_animations(forest: &[Component]) -> Vec<AnimationType> {
    let mut used = Vec::new();
    collect_animations(forest, &mut used);
    used
}

fn collect_animations(nodes: &[Component], used: &mut Vec<AnimationType>) {
    for component in nodes {
        if render_rule(&component.kind).is_none() {
            continue;
        }
        if let Some(kind) = component.animation.as_ref().and_then(active_kind) {
            if !used.contains(&kind) {
                used.push(kind);
            }
        }
        collect_animations(component.rendered_children(), used);
    }
}

/// Every `@keyframes` block the forest needs, blank-line separated
pub fn keyframes_for(forest: &[Component]) -> String {
    used_animations(forest)
        .into_iter()
        .map(keyframes)
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagecraft_model::{create_component, ComponentType};

    fn config(kind: AnimationType) -> AnimationConfig {
        AnimationConfig {
            kind: Some(kind),
            ..Default::default()
        }
    }

    #[test]
    fn test_declarations_use_defaults() {
        assert_eq!(
            animation_inline(&config(AnimationType::FadeIn)),
            "animation-name: fadeIn; animation-duration: 1s; animation-delay: 0s; \
             animation-timing-function: ease; animation-fill-mode: both;"
        );
    }

    #[test]
    fn test_declarations_honor_config() {
        let custom = AnimationConfig {
            kind: Some(AnimationType::Bounce),
            duration: Some("2s".to_string()),
            delay: Some("".to_string()),
            easing: Some("ease-in-out".to_string()),
            trigger: None,
        };
        let decls = animation_declarations(&custom);
        assert_eq!(decls[1], ("animation-duration", "2s".to_string()));
        assert_eq!(decls[2], ("animation-delay", "0s".to_string()));
        assert_eq!(decls[3], ("animation-timing-function", "ease-in-out".to_string()));
    }

    #[test]
    fn test_none_has_no_css() {
        assert!(animation_declarations(&config(AnimationType::None)).is_empty());
        assert!(animation_declarations(&AnimationConfig::default()).is_empty());
        assert_eq!(keyframes(AnimationType::None), "");
        assert_eq!(animation_class_name(AnimationType::None, AnimationTrigger::OnHover), "");
    }

    #[test]
    fn test_class_names() {
        assert_eq!(
            animation_class_name(AnimationType::Pulse, AnimationTrigger::OnHover),
            "hover:animate-pulse"
        );
        assert_eq!(
            animation_class_name(AnimationType::Shake, AnimationTrigger::OnClick),
            "active:animate-shake"
        );
        assert_eq!(
            animation_class_name(AnimationType::FadeIn, AnimationTrigger::OnLoad),
            "animate-fadeIn"
        );
    }

    #[test]
    fn test_keyframes_for_forest() {
        let mut a = create_component(ComponentType::Heading);
        a.animation = Some(config(AnimationType::FadeIn));
        let mut b = create_component(ComponentType::Text);
        b.animation = Some(config(AnimationType::FadeIn));
        let mut c = create_component(ComponentType::Section);
        c.animation = Some(config(AnimationType::ZoomIn));
        let c = c.with_children(vec![a, b]);

        assert_eq!(used_animations(&[c.clone()]), vec![AnimationType::ZoomIn, AnimationType::FadeIn]);
        let css = keyframes_for(&[c]);
        assert!(css.starts_with("@keyframes zoomIn"));
        assert_eq!(css.matches("@keyframes").count(), 2);
    }

    #[test]
    fn test_unrendered_nodes_add_no_keyframes() {
        let mut hidden = create_component(ComponentType::Text);
        hidden.animation = Some(config(AnimationType::Shake));
        let mut button = create_component(ComponentType::Button);
        button.animation = Some(config(AnimationType::Pulse));
        let button = button.with_children(vec![hidden]);

        let mut unknown: Component =
            serde_json::from_value(serde_json::json!({ "id": "u", "type": "carousel" })).unwrap();
        unknown.animation = Some(config(AnimationType::Bounce));

        assert_eq!(used_animations(&[button, unknown]), vec![AnimationType::Pulse]);
    }
}
