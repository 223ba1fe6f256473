//! CSS helpers shared by the exporters and the style editor.

mod animation;
mod style;

pub use animation::{
    animation_class_name, animation_declarations, animation_inline, keyframes, keyframes_for,
    used_animations,
};
pub use style::{
    camel_to_kebab, css_value, inline_style, kebab_to_camel, parse_css_text, style_to_css_text,
};
