use serde::{Deserialize, Serialize};

/// Visual style of a node. Every field is optional; an empty string counts as
/// unset.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Style {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_height: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_direction: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justify_content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_items: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_template_columns: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub box_shadow: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

/// Names every field of [`Style`], for generic editing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StyleField {
    Width,
    Height,
    MinHeight,
    BackgroundColor,
    Color,
    FontSize,
    FontWeight,
    Padding,
    Margin,
    BorderRadius,
    Border,
    TextAlign,
    Display,
    FlexDirection,
    JustifyContent,
    AlignItems,
    Gap,
    GridTemplateColumns,
    BoxShadow,
    Position,
    Top,
    Left,
    Right,
    Bottom,
    Cursor,
}

impl StyleField {
    pub const ALL: [StyleField; 25] = [
        StyleField::Width,
        StyleField::Height,
        StyleField::MinHeight,
        StyleField::BackgroundColor,
        StyleField::Color,
        StyleField::FontSize,
        StyleField::FontWeight,
        StyleField::Padding,
        StyleField::Margin,
        StyleField::BorderRadius,
        StyleField::Border,
        StyleField::TextAlign,
        StyleField::Display,
        StyleField::FlexDirection,
        StyleField::JustifyContent,
        StyleField::AlignItems,
        StyleField::Gap,
        StyleField::GridTemplateColumns,
        StyleField::BoxShadow,
        StyleField::Position,
        StyleField::Top,
        StyleField::Left,
        StyleField::Right,
        StyleField::Bottom,
        StyleField::Cursor,
    ];

    /// The camelCase key used in JSON and inline style objects.
    pub const fn key(&self) -> &'static str {
        match self {
            StyleField::Width => "width",
            StyleField::Height => "height",
            StyleField::MinHeight => "minHeight",
            StyleField::BackgroundColor => "backgroundColor",
            StyleField::Color => "color",
            StyleField::FontSize => "fontSize",
            StyleField::FontWeight => "fontWeight",
            StyleField::Padding => "padding",
            StyleField::Margin => "margin",
            StyleField::BorderRadius => "borderRadius",
            StyleField::Border => "border",
            StyleField::TextAlign => "textAlign",
            StyleField::Display => "display",
            StyleField::FlexDirection => "flexDirection",
            StyleField::JustifyContent => "justifyContent",
            StyleField::AlignItems => "alignItems",
            StyleField::Gap => "gap",
            StyleField::GridTemplateColumns => "gridTemplateColumns",
            StyleField::BoxShadow => "boxShadow",
            StyleField::Position => "position",
            StyleField::Top => "top",
            StyleField::Left => "left",
            StyleField::Right => "right",
            StyleField::Bottom => "bottom",
            StyleField::Cursor => "cursor",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            StyleField::Width => "Width",
            StyleField::Height => "Height",
            StyleField::MinHeight => "Min height",
            StyleField::BackgroundColor => "Background",
            StyleField::Color => "Text color",
            StyleField::FontSize => "Font size",
            StyleField::FontWeight => "Font weight",
            StyleField::Padding => "Padding",
            StyleField::Margin => "Margin",
            StyleField::BorderRadius => "Radius",
            StyleField::Border => "Border",
            StyleField::TextAlign => "Text align",
            StyleField::Display => "Display",
            StyleField::FlexDirection => "Direction",
            StyleField::JustifyContent => "Justify",
            StyleField::AlignItems => "Align items",
            StyleField::Gap => "Gap",
            StyleField::GridTemplateColumns => "Columns",
            StyleField::BoxShadow => "Shadow",
            StyleField::Position => "Position",
            StyleField::Top => "Top",
            StyleField::Left => "Left",
            StyleField::Right => "Right",
            StyleField::Bottom => "Bottom",
            StyleField::Cursor => "Cursor",
        }
    }

    /// Fixed choices for keyword fields, `None` for free-form ones.
    pub const fn choices(&self) -> Option<&'static [&'static str]> {
        match self {
            StyleField::TextAlign => Some(&["left", "center", "right", "justify"]),
            StyleField::Display => Some(&["block", "flex", "grid", "inline-block", "none"]),
            StyleField::FlexDirection => Some(&["row", "column"]),
            StyleField::JustifyContent => Some(&[
                "flex-start",
                "center",
                "flex-end",
                "space-between",
                "space-around",
            ]),
            StyleField::AlignItems => Some(&["flex-start", "center", "flex-end", "stretch"]),
            StyleField::Position => Some(&["relative", "absolute"]),
            _ => None,
        }
    }
}

impl Style {
    fn slot(&self, field: StyleField) -> &Option<String> {
        match field {
            StyleField::Width => &self.width,
            StyleField::Height => &self.height,
            StyleField::MinHeight => &self.min_height,
            StyleField::BackgroundColor => &self.background_color,
            StyleField::Color => &self.color,
            StyleField::FontSize => &self.font_size,
            StyleField::FontWeight => &self.font_weight,
            StyleField::Padding => &self.padding,
            StyleField::Margin => &self.margin,
            StyleField::BorderRadius => &self.border_radius,
            StyleField::Border => &self.border,
            StyleField::TextAlign => &self.text_align,
            StyleField::Display => &self.display,
            StyleField::FlexDirection => &self.flex_direction,
            StyleField::JustifyContent => &self.justify_content,
            StyleField::AlignItems => &self.align_items,
            StyleField::Gap => &self.gap,
            StyleField::GridTemplateColumns => &self.grid_template_columns,
            StyleField::BoxShadow => &self.box_shadow,
            StyleField::Position => &self.position,
            StyleField::Top => &self.top,
            StyleField::Left => &self.left,
            StyleField::Right => &self.right,
            StyleField::Bottom => &self.bottom,
            StyleField::Cursor => &self.cursor,
        }
    }

    fn slot_mut(&mut self, field: StyleField) -> &mut Option<String> {
        match field {
            StyleField::Width => &mut self.width,
            StyleField::Height => &mut self.height,
            StyleField::MinHeight => &mut self.min_height,
            StyleField::BackgroundColor => &mut self.background_color,
            StyleField::Color => &mut self.color,
            StyleField::FontSize => &mut self.font_size,
            StyleField::FontWeight => &mut self.font_weight,
            StyleField::Padding => &mut self.padding,
            StyleField::Margin => &mut self.margin,
            StyleField::BorderRadius => &mut self.border_radius,
            StyleField::Border => &mut self.border,
            StyleField::TextAlign => &mut self.text_align,
            StyleField::Display => &mut self.display,
            StyleField::FlexDirection => &mut self.flex_direction,
            StyleField::JustifyContent => &mut self.justify_content,
            StyleField::AlignItems => &mut self.align_items,
            StyleField::Gap => &mut self.gap,
            StyleField::GridTemplateColumns => &mut self.grid_template_columns,
            StyleField::BoxShadow => &mut self.box_shadow,
            StyleField::Position => &mut self.position,
            StyleField::Top => &mut self.top,
            StyleField::Left => &mut self.left,
            StyleField::Right => &mut self.right,
            StyleField::Bottom => &mut self.bottom,
            StyleField::Cursor => &mut self.cursor,
        }
    }

    /// The trimmed value of `field`, or `None` when unset or blank.
    pub fn get(&self, field: StyleField) -> Option<&str> {
        self.slot(field)
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
    }

    pub fn set(&mut self, field: StyleField, value: impl Into<String>) {
        *self.slot_mut(field) = Some(value.into());
    }

    pub fn clear(&mut self, field: StyleField) {
        *self.slot_mut(field) = None;
    }

    /// Copy every populated field of `patch` over `self`. A field patched with
    /// an empty string is cleared.
    pub fn merge(&mut self, patch: &Style) {
        for field in StyleField::ALL {
            match patch.slot(field) {
                Some(v) if v.trim().is_empty() => self.clear(field),
                Some(v) => self.set(field, v.clone()),
                None => {}
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        StyleField::ALL.iter().all(|f| self.get(*f).is_none())
    }
}
