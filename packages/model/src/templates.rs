//! Built-in template gallery.
//!
//! Template roots carry stable ids derived from the template id. They are
//! never inserted as-is: [`instantiate_template`] hands out a copy with fresh
//! ids every time.

use crate::component::{Component, ComponentType, Props, Style};
use crate::id_generator::IdGenerator;
use crate::instantiate::clone_with_fresh_ids;
use serde::Serialize;
use serde_json::{json, Value};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub component: Component,
}

struct Builder {
    ids: IdGenerator,
}

impl Builder {
    fn new(template_id: &str) -> Self {
        Self {
            ids: IdGenerator::from_seed(template_id),
        }
    }

    fn node(
        &mut self,
        kind: ComponentType,
        props: &[(&str, Value)],
        style: &[(&str, Value)],
        children: Vec<Component>,
    ) -> Component {
        Component {
            id: self.ids.new_id(),
            kind,
            props: to_map(props),
            style: to_map(style),
            children,
            animation: None,
        }
    }
}

fn to_map(entries: &[(&str, Value)]) -> Props {
    let mut map = Style::new();
    for (key, value) in entries {
        map.insert(key.to_string(), value.clone());
    }
    map
}

fn hero_section() -> Template {
    let mut b = Builder::new("hero-section");
    let component = b.node(
        ComponentType::Section,
        &[],
        &[
            ("padding", json!("80px 20px")),
            ("textAlign", json!("center")),
            ("background", json!("linear-gradient(135deg, #667eea 0%, #764ba2 100%)")),
            ("color", json!("#ffffff")),
        ],
        vec![],
    );
    let children = vec![
        b.node(
            ComponentType::Heading,
            &[("text", json!("Welcome to Our Platform"))],
            &[
                ("fontSize", json!("48px")),
                ("marginBottom", json!("20px")),
                ("fontWeight", json!("bold")),
            ],
            vec![],
        ),
        b.node(
            ComponentType::Text,
            &[(
                "text",
                json!("Build amazing websites without writing a single line of code. Start creating today!"),
            )],
            &[
                ("fontSize", json!("20px")),
                ("marginBottom", json!("30px")),
                ("opacity", json!(0.9)),
            ],
            vec![],
        ),
        b.node(
            ComponentType::Button,
            &[("text", json!("Get Started"))],
            &[("padding", json!("12px 32px")), ("fontSize", json!("18px"))],
            vec![],
        ),
    ];

    Template {
        id: "hero-section",
        name: "Hero Section",
        description: "A beautiful hero section with heading, text, and CTA button",
        category: "Sections",
        component: component.with_children(children),
    }
}

fn feature_card() -> Template {
    let mut b = Builder::new("card-template");
    let component = b.node(
        ComponentType::Card,
        &[],
        &[
            ("padding", json!("24px")),
            ("borderRadius", json!("8px")),
            ("boxShadow", json!("0 2px 8px rgba(0,0,0,0.1)")),
            ("backgroundColor", json!("#ffffff")),
            ("maxWidth", json!("300px")),
        ],
        vec![],
    );
    let children = vec![
        b.node(
            ComponentType::Image,
            &[
                ("src", json!("https://via.placeholder.com/300x200")),
                ("alt", json!("Feature image")),
            ],
            &[
                ("width", json!("100%")),
                ("borderRadius", json!("4px")),
                ("marginBottom", json!("16px")),
            ],
            vec![],
        ),
        b.node(
            ComponentType::Heading,
            &[("text", json!("Feature Title"))],
            &[("fontSize", json!("24px")), ("marginBottom", json!("12px"))],
            vec![],
        ),
        b.node(
            ComponentType::Text,
            &[(
                "text",
                json!("This is a description of the feature. It explains what makes this feature great."),
            )],
            &[("fontSize", json!("16px")), ("color", json!("#666666"))],
            vec![],
        ),
    ];

    Template {
        id: "card-template",
        name: "Feature Card",
        description: "A card component with image, heading, and text",
        category: "Cards",
        component: component.with_children(children),
    }
}

fn contact_form() -> Template {
    let mut b = Builder::new("contact-form");
    let component = b.node(
        ComponentType::Form,
        &[],
        &[
            ("padding", json!("32px")),
            ("borderRadius", json!("8px")),
            ("backgroundColor", json!("#f9fafb")),
            ("maxWidth", json!("500px")),
        ],
        vec![],
    );
    let field_gap = [("marginBottom", json!("16px"))];
    let children = vec![
        b.node(
            ComponentType::Heading,
            &[("text", json!("Contact Us"))],
            &[("fontSize", json!("32px")), ("marginBottom", json!("24px"))],
            vec![],
        ),
        b.node(
            ComponentType::Input,
            &[
                ("label", json!("Name")),
                ("placeholder", json!("Enter your name")),
                ("type", json!("text")),
            ],
            &field_gap,
            vec![],
        ),
        b.node(
            ComponentType::Input,
            &[
                ("label", json!("Email")),
                ("placeholder", json!("Enter your email")),
                ("type", json!("email")),
            ],
            &field_gap,
            vec![],
        ),
        b.node(
            ComponentType::Textarea,
            &[
                ("label", json!("Message")),
                ("placeholder", json!("Enter your message")),
            ],
            &[("marginBottom", json!("24px"))],
            vec![],
        ),
        b.node(
            ComponentType::Button,
            &[("text", json!("Send Message"))],
            &[],
            vec![],
        ),
    ];

    Template {
        id: "contact-form",
        name: "Contact Form",
        description: "A complete contact form with name, email, and message fields",
        category: "Forms",
        component: component.with_children(children),
    }
}

fn navigation_bar() -> Template {
    let mut b = Builder::new("navigation-bar");
    let component = b.node(
        ComponentType::Navigation,
        &[],
        &[
            ("padding", json!("16px 32px")),
            ("backgroundColor", json!("#ffffff")),
            ("borderBottom", json!("1px solid #e5e7eb")),
            ("display", json!("flex")),
            ("justifyContent", json!("space-between")),
            ("alignItems", json!("center")),
        ],
        vec![],
    );
    let logo = b.node(
        ComponentType::Text,
        &[("text", json!("Logo"))],
        &[("fontSize", json!("24px")), ("fontWeight", json!("bold"))],
        vec![],
    );
    let links_box = b.node(
        ComponentType::Container,
        &[],
        &[("display", json!("flex")), ("gap", json!("24px"))],
        vec![],
    );
    let links = ["Home", "About", "Contact"]
        .iter()
        .map(|label| {
            b.node(
                ComponentType::Link,
                &[("text", json!(label)), ("href", json!("#"))],
                &[],
                vec![],
            )
        })
        .collect();

    Template {
        id: "navigation-bar",
        name: "Navigation Bar",
        description: "A responsive navigation bar with logo and menu items",
        category: "Navigation",
        component: component.with_children(vec![logo, links_box.with_children(links)]),
    }
}

/// The whole gallery, in display order
pub fn templates() -> Vec<Template> {
    vec![hero_section(), feature_card(), contact_form(), navigation_bar()]
}

pub fn find_template(id: &str) -> Option<Template> {
    templates().into_iter().find(|t| t.id == id)
}

/// Fresh-id copy of a template root, ready for insertion into a forest
pub fn instantiate_template(id: &str) -> Option<Component> {
    find_template(id).map(|t| clone_with_fresh_ids(&t.component))
}

pub fn templates_by_category() -> BTreeMap<&'static str, Vec<Template>> {
    let mut groups: BTreeMap<&'static str, Vec<Template>> = BTreeMap::new();
    for template in templates() {
        groups.entry(template.category).or_default().push(template);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visitor::{collect_ids, count_nodes, has_duplicate_ids};

    #[test]
    fn test_gallery_ids() {
        let ids: Vec<&str> = templates().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!["hero-section", "card-template", "contact-form", "navigation-bar"]);
    }

    #[test]
    fn test_template_ids_are_unique_within_a_template() {
        for template in templates() {
            assert!(!has_duplicate_ids(&[template.component]));
        }
    }

    #[test]
    fn test_instantiate_gives_fresh_ids_every_time() {
        let first = instantiate_template("navigation-bar").unwrap();
        let second = instantiate_template("navigation-bar").unwrap();

        assert_eq!(count_nodes(&[first.clone()]), 6);
        let forest = vec![first, second];
        assert!(!has_duplicate_ids(&forest));
        assert!(collect_ids(&forest).iter().all(|id| !id.starts_with("navigation-bar")));
    }

    #[test]
    fn test_unknown_template() {
        assert!(instantiate_template("nope").is_none());
    }

    #[test]
    fn test_grouped_by_category() {
        let groups = templates_by_category();
        assert_eq!(groups.len(), 4);
        assert_eq!(groups["Forms"][0].name, "Contact Form");
    }

    #[test]
    fn test_contact_form_fields() {
        let form = find_template("contact-form").unwrap().component;
        assert_eq!(form.children.len(), 5);
        assert_eq!(form.children[2].props["type"], "email");
    }
}
