//! Style record to utility class names.
//!
//! Best effort: every populated field yields at most one entry, values the
//! tables don't know are dropped without complaint.

use crate::node::{Style, StyleField};

/// Class entries for `style`, in a fixed field order.
pub fn translate(style: &Style) -> Vec<String> {
    use StyleField::*;

    let mut classes = Vec::new();
    let mut push = |entry: Option<String>| {
        if let Some(e) = entry {
            classes.push(e);
        }
    };

    // dimensions
    push(style.get(Width).and_then(|v| dimension("w", v)));
    push(style.get(Height).and_then(|v| dimension("h", v)));
    push(style.get(MinHeight).and_then(|v| arbitrary_px("min-h", v)));

    // colors
    push(style.get(BackgroundColor).and_then(|v| arbitrary_hex("bg", v)));
    push(style.get(Color).and_then(|v| arbitrary_hex("text", v)));

    // typography
    push(style.get(FontSize).and_then(|v| arbitrary_px("text", v)));
    push(style.get(FontWeight).and_then(font_weight));

    // spacing
    push(style.get(Padding).and_then(|v| arbitrary_px("p", v)));
    push(style.get(Margin).and_then(|v| arbitrary_px("m", v)));

    // border
    push(style.get(BorderRadius).and_then(|v| arbitrary_px("rounded", v)));
    push(style.get(Border).and_then(border));

    push(style.get(TextAlign).and_then(text_align));

    push(style.get(Display).and_then(display));

    // flex
    push(style.get(FlexDirection).and_then(flex_direction));
    push(style.get(JustifyContent).and_then(justify_content));
    push(style.get(AlignItems).and_then(align_items));

    push(style.get(Gap).and_then(|v| arbitrary_px("gap", v)));
    push(style.get(GridTemplateColumns).and_then(grid_columns));
    push(style.get(BoxShadow).map(|_| "shadow".to_string()));

    classes
}

/// [`translate`] joined into a `className` value.
pub fn class_names(style: &Style) -> String {
    translate(style).join(" ")
}

/// `10px`, `8px 16px`, `1.5px`.
fn is_px(value: &str) -> bool {
    let mut parts = value.split_whitespace().peekable();
    parts.peek().is_some()
        && parts.all(|p| {
            p.strip_suffix("px")
                .is_some_and(|n| !n.is_empty() && n.parse::<f32>().is_ok_and(f32::is_finite))
        })
}

fn arbitrary_px(prefix: &str, value: &str) -> Option<String> {
    is_px(value).then(|| bracket(prefix, value))
}

fn arbitrary_hex(prefix: &str, value: &str) -> Option<String> {
    (value.starts_with('#') && value.len() > 1 && !value.contains(char::is_whitespace))
        .then(|| bracket(prefix, value))
}

fn bracket(prefix: &str, value: &str) -> String {
    let inner = value.split_whitespace().collect::<Vec<_>>().join("_");
    format!("{prefix}-[{inner}]")
}

fn dimension(prefix: &str, value: &str) -> Option<String> {
    if value == "100%" {
        Some(format!("{prefix}-full"))
    } else {
        arbitrary_px(prefix, value)
    }
}

fn keyword(table: &[(&str, &str)], value: &str) -> Option<String> {
    table
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(value))
        .map(|(_, class)| class.to_string())
}

fn font_weight(value: &str) -> Option<String> {
    keyword(
        &[
            ("thin", "font-thin"),
            ("100", "font-thin"),
            ("extralight", "font-extralight"),
            ("200", "font-extralight"),
            ("light", "font-light"),
            ("300", "font-light"),
            ("normal", "font-normal"),
            ("400", "font-normal"),
            ("medium", "font-medium"),
            ("500", "font-medium"),
            ("semibold", "font-semibold"),
            ("600", "font-semibold"),
            ("bold", "font-bold"),
            ("700", "font-bold"),
            ("extrabold", "font-extrabold"),
            ("800", "font-extrabold"),
            ("black", "font-black"),
            ("900", "font-black"),
        ],
        value,
    )
}

fn border(value: &str) -> Option<String> {
    if value.contains("1px solid") {
        Some("border".into())
    } else if value.contains("2px dashed") {
        Some("border-2 border-dashed".into())
    } else {
        None
    }
}

fn text_align(value: &str) -> Option<String> {
    keyword(
        &[
            ("left", "text-left"),
            ("center", "text-center"),
            ("right", "text-right"),
            ("justify", "text-justify"),
        ],
        value,
    )
}

fn display(value: &str) -> Option<String> {
    keyword(
        &[
            ("flex", "flex"),
            ("grid", "grid"),
            ("block", "block"),
            ("inline-block", "inline-block"),
            ("none", "hidden"),
        ],
        value,
    )
}

fn flex_direction(value: &str) -> Option<String> {
    keyword(&[("row", "flex-row"), ("column", "flex-col")], value)
}

fn justify_content(value: &str) -> Option<String> {
    keyword(
        &[
            ("flex-start", "justify-start"),
            ("center", "justify-center"),
            ("flex-end", "justify-end"),
            ("space-between", "justify-between"),
            ("space-around", "justify-around"),
        ],
        value,
    )
}

fn align_items(value: &str) -> Option<String> {
    keyword(
        &[
            ("flex-start", "items-start"),
            ("center", "items-center"),
            ("flex-end", "items-end"),
            ("stretch", "items-stretch"),
        ],
        value,
    )
}

/// `repeat(3, 1fr)` -> `grid-cols-3`
fn grid_columns(value: &str) -> Option<String> {
    let compact: String = value.chars().filter(|c| !c.is_whitespace()).collect();
    let n: u8 = compact
        .strip_prefix("repeat(")?
        .strip_suffix(",1fr)")?
        .parse()
        .ok()?;
    (1..=12).contains(&n).then(|| format!("grid-cols-{n}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style(pairs: &[(StyleField, &str)]) -> Style {
        let mut s = Style::default();
        for (f, v) in pairs {
            s.set(*f, *v);
        }
        s
    }

    #[test]
    fn test_empty_style() {
        assert!(translate(&Style::default()).is_empty());
        assert_eq!(class_names(&Style::default()), "");
    }

    #[test]
    fn test_width_px() {
        assert_eq!(translate(&style(&[(StyleField::Width, "10px")])), ["w-[10px]"]);
    }

    #[test]
    fn test_width_unknown_unit_dropped() {
        assert!(translate(&style(&[(StyleField::Width, "50vh")])).is_empty());
        assert!(translate(&style(&[(StyleField::Width, "px")])).is_empty());
        assert!(translate(&style(&[(StyleField::Width, "auto")])).is_empty());
    }

    #[test]
    fn test_full_dimensions() {
        let s = style(&[(StyleField::Width, "100%"), (StyleField::Height, "100%")]);
        assert_eq!(translate(&s), ["w-full", "h-full"]);
    }

    #[test]
    fn test_multi_value_spacing() {
        let s = style(&[(StyleField::Padding, "8px 16px")]);
        assert_eq!(translate(&s), ["p-[8px_16px]"]);
        let s = style(&[(StyleField::Padding, "8px auto")]);
        assert!(translate(&s).is_empty());
    }

    #[test]
    fn test_colors_require_hex() {
        let s = style(&[
            (StyleField::BackgroundColor, "#3b82f6"),
            (StyleField::Color, "red"),
        ]);
        assert_eq!(translate(&s), ["bg-[#3b82f6]"]);
    }

    #[test]
    fn test_keywords() {
        let s = style(&[
            (StyleField::FontWeight, "bold"),
            (StyleField::TextAlign, "center"),
            (StyleField::Display, "flex"),
            (StyleField::FlexDirection, "column"),
            (StyleField::JustifyContent, "space-between"),
            (StyleField::AlignItems, "stretch"),
        ]);
        assert_eq!(
            translate(&s),
            [
                "font-bold",
                "text-center",
                "flex",
                "flex-col",
                "justify-between",
                "items-stretch"
            ]
        );
    }

    #[test]
    fn test_unknown_keywords_dropped() {
        let s = style(&[
            (StyleField::FontWeight, "heavy"),
            (StyleField::TextAlign, "middle"),
            (StyleField::Display, "table"),
        ]);
        assert!(translate(&s).is_empty());
    }

    #[test]
    fn test_borders() {
        assert_eq!(
            translate(&style(&[(StyleField::Border, "1px solid #e5e7eb")])),
            ["border"]
        );
        assert_eq!(
            translate(&style(&[(StyleField::Border, "2px dashed #d1d5db")])),
            ["border-2 border-dashed"]
        );
        assert!(translate(&style(&[(StyleField::Border, "none")])).is_empty());
    }

    #[test]
    fn test_grid_columns() {
        assert_eq!(grid_columns("repeat(2, 1fr)").as_deref(), Some("grid-cols-2"));
        assert_eq!(grid_columns("repeat(12,1fr)").as_deref(), Some("grid-cols-12"));
        assert_eq!(grid_columns("repeat(13, 1fr)"), None);
        assert_eq!(grid_columns("1fr 1fr"), None);
    }

    #[test]
    fn test_untranslated_fields() {
        let s = style(&[
            (StyleField::Position, "absolute"),
            (StyleField::Top, "10px"),
            (StyleField::Cursor, "pointer"),
        ]);
        assert!(translate(&s).is_empty());
    }

    #[test]
    fn test_field_order() {
        let s = style(&[
            (StyleField::BoxShadow, "0 1px 3px"),
            (StyleField::Gap, "4px"),
            (StyleField::Margin, "4px"),
            (StyleField::Width, "10px"),
            (StyleField::BackgroundColor, "#fff"),
        ]);
        assert_eq!(
            class_names(&s),
            "w-[10px] bg-[#fff] m-[4px] gap-[4px] shadow"
        );
    }
}
