//! Tree to source text.

use crate::classes::class_names;
use crate::config::{CodegenFormat, CodegenOptions, MAX_INDENT_WIDTH};
use crate::node::{Kind, Node};

/// Render with default options: a `GeneratedComponent` TSX function.
pub fn render(tree: &[Node]) -> String {
    render_with(tree, &CodegenOptions::default())
}

/// Produce output in whatever format `options` asks for.
pub fn generate(tree: &[Node], options: &CodegenOptions) -> String {
    match options.format {
        CodegenFormat::Component => render_with(tree, options),
        CodegenFormat::MarkupOnly => render_markup(tree, options),
        CodegenFormat::Json => render_json(tree).unwrap_or_else(|e| {
            tracing::warn!("json export failed: {e}");
            String::new()
        }),
    }
}

/// The whole function component.
pub fn render_with(tree: &[Node], options: &CodegenOptions) -> String {
    let pad = |depth: usize| indent(depth, options);
    let root_attr = if options.root_class.is_empty() {
        String::new()
    } else {
        format!(" className=\"{}\"", escape_attr(&options.root_class))
    };

    let mut lines = vec![
        format!("export default function {}() {{", options.component_name),
        format!("{}return (", pad(1)),
        format!("{}<div{root_attr}>", pad(2)),
    ];
    for node in tree {
        render_node(node, 3, options, &mut lines);
    }
    lines.push(format!("{}</div>", pad(2)));
    lines.push(format!("{});", pad(1)));
    lines.push("}".into());
    lines.join("\n")
}

/// Only the node tags, roots at column zero.
pub fn render_markup(tree: &[Node], options: &CodegenOptions) -> String {
    let mut lines = Vec::new();
    for node in tree {
        render_node(node, 0, options, &mut lines);
    }
    lines.join("\n")
}

pub fn render_json(tree: &[Node]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(tree)
}

fn render_node(node: &Node, depth: usize, options: &CodegenOptions, out: &mut Vec<String>) {
    let pad = indent(depth, options);
    let inner = indent(depth + 1, options);
    let classes = class_names(&node.style);
    let class_attr = if classes.is_empty() {
        String::new()
    } else {
        format!(" className=\"{}\"", escape_attr(&classes))
    };

    match node.kind {
        Kind::Button => {
            let on_click = node
                .prop("onClick")
                .map(|h| format!(" onClick={{{h}}}"))
                .unwrap_or_default();
            let label = node.prop("text").unwrap_or("Button");
            out.push(format!("{pad}<button{class_attr}{on_click}>"));
            out.push(format!("{inner}{}", escape_text(label)));
            out.push(format!("{pad}</button>"));
        }
        Kind::Input => {
            let input_type = node.prop("type").unwrap_or("text");
            let placeholder = node
                .prop("placeholder")
                .map(|p| format!(" placeholder=\"{}\"", escape_attr(p)))
                .unwrap_or_default();
            out.push(format!(
                "{pad}<input{class_attr} type=\"{}\"{placeholder} />",
                escape_attr(input_type)
            ));
        }
        Kind::Text => {
            let text = node.prop("text").unwrap_or("Text");
            out.push(format!("{pad}<span{class_attr}>"));
            out.push(format!("{inner}{}", escape_text(text)));
            out.push(format!("{pad}</span>"));
        }
        Kind::Image => {
            let src = node.prop("src").unwrap_or("/placeholder.svg");
            let alt = node.prop("alt").unwrap_or("Image");
            out.push(format!(
                "{pad}<img{class_attr} src=\"{}\" alt=\"{}\" />",
                escape_attr(src),
                escape_attr(alt)
            ));
        }
        Kind::Container | Kind::Card | Kind::Grid => {
            if node.children.is_empty() {
                out.push(format!("{pad}<div{class_attr}></div>"));
            } else {
                out.push(format!("{pad}<div{class_attr}>"));
                for child in &node.children {
                    render_node(child, depth + 1, options, out);
                }
                out.push(format!("{pad}</div>"));
            }
        }
    }
}

fn indent(depth: usize, options: &CodegenOptions) -> String {
    " ".repeat(depth.saturating_mul(options.indent_width.min(MAX_INDENT_WIDTH)))
}

pub(crate) fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;").replace('"', "&quot;")
}

pub(crate) fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('{', "&#123;")
        .replace('}', "&#125;")
}
