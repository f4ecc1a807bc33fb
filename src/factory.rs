//! Fresh nodes with per-kind defaults.

use crate::node::{Kind, Node, NodeId, Props, Style, StyleField};

/// A new node of `kind` with a random id and the kind's defaults.
pub fn create(kind: Kind) -> Node {
    create_with_id(kind, NodeId::generate())
}

/// Same as [`create`] with a caller-chosen id.
pub fn create_with_id(kind: Kind, id: NodeId) -> Node {
    Node {
        props: kind.default_props(),
        style: kind.default_style(),
        ..Node::new(id, kind)
    }
}

impl Kind {
    pub fn default_props(&self) -> Props {
        let pairs: &[(&str, &str)] = match self {
            Kind::Button => &[("text", "Button")],
            Kind::Input => &[("placeholder", "Enter text...")],
            Kind::Text => &[("text", "Text Element")],
            Kind::Image => &[
                ("src", "/placeholder.svg?height=100&width=100&text=Image"),
                ("alt", "Image"),
            ],
            Kind::Container | Kind::Card | Kind::Grid => &[],
        };
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    /// Shared padding/margin, overridden per kind.
    pub fn default_style(&self) -> Style {
        use StyleField::*;
        let overrides: &[(StyleField, &str)] = match self {
            Kind::Button => &[
                (BackgroundColor, "#3b82f6"),
                (Color, "#ffffff"),
                (Padding, "8px 16px"),
                (BorderRadius, "6px"),
                (Border, "none"),
                (Cursor, "pointer"),
            ],
            Kind::Input => &[
                (Border, "1px solid #d1d5db"),
                (BorderRadius, "6px"),
                (Padding, "8px 12px"),
                (Width, "200px"),
            ],
            Kind::Text => &[(FontSize, "16px")],
            Kind::Image => &[(Width, "100px"), (Height, "100px")],
            Kind::Container => &[
                (Border, "2px dashed #d1d5db"),
                (MinHeight, "100px"),
                (Width, "200px"),
                (Display, "flex"),
                (FlexDirection, "column"),
            ],
            Kind::Card => &[
                (BackgroundColor, "#ffffff"),
                (Border, "1px solid #e5e7eb"),
                (BorderRadius, "8px"),
                (Padding, "16px"),
                (MinHeight, "120px"),
                (Width, "250px"),
                (BoxShadow, "0 1px 3px 0 rgba(0, 0, 0, 0.1)"),
            ],
            Kind::Grid => &[
                (Display, "grid"),
                (GridTemplateColumns, "repeat(2, 1fr)"),
                (Gap, "16px"),
                (Border, "2px dashed #d1d5db"),
                (MinHeight, "200px"),
                (Width, "300px"),
                (Padding, "16px"),
            ],
        };

        let mut style = Style::default();
        style.set(Padding, "8px");
        style.set(Margin, "4px");
        for (field, value) in overrides {
            style.set(*field, *value);
        }
        style
    }
}
