use crate::highlight::Highlighter;
use egui::{Color32, Id, RichText, Sense, Stroke, vec2};
use rad_canvas::config::Theme;
use rad_canvas::{
    BuilderConfig, CodegenFormat, DragPayload, Kind, Node, NodeId, NodePatch, Session, StyleField,
};
use std::path::PathBuf;

const SELECTED: Color32 = Color32::from_rgb(59, 130, 246);
const PLACEHOLDER_BORDER: Color32 = Color32::from_rgb(209, 213, 219);

/// Something the canvas asked for while it was borrowed for drawing.
enum CanvasAction {
    Select(NodeId),
    Drop {
        payload: DragPayload,
        target: Option<NodeId>,
    },
}

pub(crate) struct RadCanvasApp {
    palette_open: bool,
    session: Session,
    config: BuilderConfig,
    // Cached generated code
    generated: String,
    /// Tree changed since `generated` was produced
    dirty: bool,
    highlighter: Highlighter,
    /// Error/status message to display
    status_message: Option<(String, std::time::Instant)>,
    /// Node awaiting delete confirmation
    pending_delete: Option<NodeId>,
    /// Active tab in the right panel (0 = Properties, 1 = Code)
    right_panel_tab: usize,
}

impl RadCanvasApp {
    pub(crate) fn new(ctx: &egui::Context, config: BuilderConfig) -> Self {
        ctx.set_visuals(match config.theme {
            Theme::Dark => egui::Visuals::dark(),
            Theme::Light => egui::Visuals::light(),
        });
        Self {
            palette_open: true,
            session: Session::new(),
            highlighter: Highlighter::new(config.theme),
            config,
            generated: String::new(),
            dirty: true,
            status_message: None,
            pending_delete: None,
            right_panel_tab: 0,
        }
    }

    /// Set a status message that will auto-clear after a few seconds
    fn set_status(&mut self, msg: impl Into<String>) {
        let stamped = format!("[{}] {}", chrono::Local::now().format("%H:%M:%S"), msg.into());
        self.status_message = Some((stamped, std::time::Instant::now()));
    }

    fn regenerate(&mut self) {
        self.generated = self.session.generate(&self.config.codegen);
        self.dirty = false;
    }

    /// Generated code matching the current tree.
    fn current_code(&mut self) -> &str {
        if self.dirty {
            self.regenerate();
        }
        &self.generated
    }

    fn copy_code(&mut self, ctx: &egui::Context) {
        ctx.copy_text(self.current_code().to_owned());
        self.set_status("Code copied to clipboard");
    }

    /// Ask for confirmation before deleting the selected node.
    fn request_delete(&mut self) {
        if let Some(id) = self.session.selected_id() {
            self.pending_delete = Some(id.clone());
        }
    }

    /// Where a click on a palette entry should put the new node.
    fn click_target(&self) -> Option<NodeId> {
        self.session
            .selected()
            .filter(|n| n.is_container())
            .map(|n| n.id.clone())
    }

    fn apply(&mut self, action: CanvasAction) {
        match action {
            CanvasAction::Select(id) => self.session.select(Some(id)),
            CanvasAction::Drop { payload, target } => {
                if self.session.apply_drop(&payload, target.as_ref()) {
                    self.dirty = true;
                } else {
                    self.set_status("Drop ignored");
                }
            }
        }
    }

    fn export_code(&mut self, path: PathBuf) {
        match std::fs::write(&path, self.current_code()) {
            Ok(_) => {
                tracing::info!(path = %path.display(), "exported code");
                self.set_status(format!("Exported to {}", path.display()));
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), "export failed: {e}");
                self.set_status(format!("Export failed: {}", e));
            }
        }
    }

    fn palette_ui(&mut self, ui: &mut egui::Ui) {
        ui.heading("Components");
        ui.separator();
        ui.label("Drag onto the canvas, or click to add");
        ui.add_space(4.0);

        for kind in Kind::ALL {
            let id = Id::new(("palette", kind.as_str()));
            let label = format!("{}  {}", kind.icon(), kind.display_name());
            let r = ui.dnd_drag_source(id, DragPayload::New(kind), |ui| {
                ui.add_sized(
                    vec2(ui.available_width(), 28.0),
                    egui::Button::new(label).sense(Sense::hover()),
                )
            });
            let click = ui.interact(r.response.rect, id.with("click"), Sense::click());
            if click.clicked() {
                let target = self.click_target();
                if self.session.add(kind, target.as_ref()).is_some() {
                    self.dirty = true;
                }
            }
        }

        ui.add_space(8.0);
        ui.separator();
        egui::CollapsingHeader::new("Shortcuts")
            .default_open(false)
            .show(ui, |ui| {
                ui.small("Delete: remove selected (asks first)");
                ui.small("Esc: clear selection");
                ui.small("Ctrl+G: generate");
            });
    }

    fn canvas_ui(&mut self, ui: &mut egui::Ui) {
        let mut actions = Vec::new();
        let selected = self.session.selected_id().cloned();

        egui::ScrollArea::both()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                let frame = egui::Frame::default()
                    .inner_margin(16.0)
                    .corner_radius(8.0)
                    .stroke(Stroke::new(2.0, Color32::GRAY));
                let (_, dropped) = ui.dnd_drop_zone::<DragPayload, _>(frame, |ui| {
                    ui.set_min_size(ui.available_size());
                    if self.session.is_empty() {
                        ui.vertical_centered(|ui| {
                            ui.add_space(120.0);
                            ui.label(RichText::new("Canvas is empty").size(18.0).weak());
                            ui.weak("Drag components from the left panel to start building");
                        });
                    }
                    for node in self.session.tree() {
                        draw_node(ui, node, selected.as_ref(), &mut actions);
                        ui.add_space(8.0);
                    }
                });
                if let Some(payload) = dropped {
                    actions.push(CanvasAction::Drop {
                        payload: (*payload).clone(),
                        target: None,
                    });
                }
            });

        for action in actions {
            self.apply(action);
        }
    }

    fn inspector_ui(&mut self, ui: &mut egui::Ui) {
        ui.heading("Properties");
        ui.separator();
        let Some(node) = self.session.selected().cloned() else {
            ui.weak("Select a component to edit its properties");
            return;
        };

        ui.horizontal(|ui| {
            ui.label(RichText::new(node.kind.as_str().to_uppercase()).strong());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("🗑 Delete").on_hover_text("Delete component").clicked() {
                    self.pending_delete = Some(node.id.clone());
                }
            });
        });
        ui.monospace(format!("ID: {}", node.id));
        ui.add_space(6.0);

        let mut patch = NodePatch::new();
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                let props: &[(&str, &str)] = match node.kind {
                    Kind::Button => &[("text", "Text"), ("onClick", "onClick handler")],
                    Kind::Text => &[("text", "Text")],
                    Kind::Input => &[("placeholder", "Placeholder"), ("type", "Type")],
                    Kind::Image => &[("src", "Image URL"), ("alt", "Alt text")],
                    Kind::Container | Kind::Card | Kind::Grid => &[],
                };
                if !props.is_empty() {
                    section(ui, "Content", &node, |ui, node| {
                        for (key, label) in props {
                            prop_row(ui, node, key, label, &mut patch);
                        }
                    });
                }

                use StyleField::*;
                section(ui, "Dimensions", &node, |ui, node| {
                    for f in [Width, Height, MinHeight] {
                        style_row(ui, node, f, &mut patch);
                    }
                });
                section(ui, "Colors", &node, |ui, node| {
                    for f in [BackgroundColor, Color] {
                        color_row(ui, node, f, &mut patch);
                    }
                });
                section(ui, "Typography", &node, |ui, node| {
                    for f in [FontSize, FontWeight, TextAlign] {
                        style_row(ui, node, f, &mut patch);
                    }
                });
                section(ui, "Spacing", &node, |ui, node| {
                    for f in [Padding, Margin] {
                        style_row(ui, node, f, &mut patch);
                    }
                });
                section(ui, "Border", &node, |ui, node| {
                    for f in [Border, BorderRadius, BoxShadow] {
                        style_row(ui, node, f, &mut patch);
                    }
                });
                if node.is_container() {
                    section(ui, "Layout", &node, |ui, node| {
                        for f in [
                            Display,
                            FlexDirection,
                            JustifyContent,
                            AlignItems,
                            Gap,
                            GridTemplateColumns,
                        ] {
                            style_row(ui, node, f, &mut patch);
                        }
                    });
                }
                section(ui, "Position", &node, |ui, node| {
                    for f in [Position, Top, Left, Right, Bottom] {
                        style_row(ui, node, f, &mut patch);
                    }
                });
            });

        if !patch.is_empty() && self.session.edit(&node.id, &patch) {
            self.dirty = true;
        }
    }

    fn generated_panel(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading("Generated Code");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Copy").clicked() {
                    self.copy_code(ui.ctx());
                }
            });
        });
        ui.horizontal(|ui| {
            let before = self.config.codegen.format;
            egui::ComboBox::from_id_salt("codegen_format")
                .selected_text(before.display_name())
                .show_ui(ui, |ui| {
                    for f in CodegenFormat::ALL {
                        ui.selectable_value(&mut self.config.codegen.format, f, f.display_name());
                    }
                });
            if self.config.codegen.format != before {
                self.dirty = true;
            }
            ui.checkbox(&mut self.config.syntax_highlighting, "Highlight");
        });
        if !self.config.auto_generate && ui.button("Generate").clicked() {
            self.regenerate();
        }
        ui.separator();

        let format = self.config.codegen.format;
        egui::ScrollArea::both()
            .id_salt("generated_output_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                if self.config.syntax_highlighting && !self.generated.is_empty() {
                    let job = self.highlighter.layout_job(&self.generated, format);
                    ui.add(egui::Label::new(job).selectable(true));
                } else {
                    let mut view = self.generated.as_str();
                    ui.add(
                        egui::TextEdit::multiline(&mut view)
                            .code_editor()
                            .desired_width(f32::INFINITY),
                    );
                }
            });
    }

    fn top_bar(&mut self, ui: &mut egui::Ui) {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui
                    .button("New Canvas")
                    .on_hover_text("Discard every component")
                    .clicked()
                {
                    self.session.clear();
                    self.dirty = true;
                    self.set_status("Canvas cleared");
                    ui.close_kind(egui::UiKind::Menu);
                }
                ui.separator();
                if ui.button("Copy Code").clicked() {
                    self.copy_code(ui.ctx());
                    ui.close_kind(egui::UiKind::Menu);
                }
                if ui
                    .button("Export Code...")
                    .on_hover_text("Write the generated code to a file")
                    .clicked()
                {
                    let format = self.config.codegen.format;
                    let name = format!("{}.{}", self.config.codegen.component_name, format.extension());
                    if let Some(path) = rfd::FileDialog::new()
                        .add_filter(format.display_name(), &[format.extension()])
                        .set_file_name(name)
                        .save_file()
                    {
                        self.export_code(path);
                    }
                    ui.close_kind(egui::UiKind::Menu);
                }
            });

            ui.menu_button("Edit", |ui| {
                let has_selection = self.session.selected().is_some();
                ui.add_enabled_ui(has_selection, |ui| {
                    if ui.button("Delete").on_hover_text("Delete selected (Del)").clicked() {
                        self.request_delete();
                        ui.close_kind(egui::UiKind::Menu);
                    }
                    if ui.button("Deselect").on_hover_text("Esc").clicked() {
                        self.session.select(None);
                        ui.close_kind(egui::UiKind::Menu);
                    }
                });
            });

            ui.menu_button("View", |ui| {
                ui.checkbox(&mut self.palette_open, "Palette");
                ui.checkbox(&mut self.config.syntax_highlighting, "Syntax highlighting");
                ui.checkbox(&mut self.config.auto_generate, "Auto-generate code");
            });

            if let Some((msg, time)) = &self.status_message {
                if time.elapsed().as_secs() < 3 {
                    ui.separator();
                    ui.label(msg.as_str());
                } else {
                    self.status_message = None;
                }
            }
        });
    }

    fn delete_dialog(&mut self, ctx: &egui::Context) {
        let Some(id) = self.pending_delete.clone() else {
            return;
        };
        let Some(kind) = self.session.find(&id).map(|n| n.kind) else {
            self.pending_delete = None;
            return;
        };
        egui::Window::new("Delete component")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(format!("Are you sure you want to delete this {kind} component?"));
                ui.horizontal(|ui| {
                    if ui.button("Delete").clicked() {
                        if self.session.delete(&id) {
                            self.dirty = true;
                            self.set_status(format!("Deleted {kind}"));
                        }
                        self.pending_delete = None;
                    }
                    if ui.button("Cancel").clicked() {
                        self.pending_delete = None;
                    }
                });
            });
    }
}

impl eframe::App for RadCanvasApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let editing_text = ctx.memory(|m| m.focused().is_some());
        let (delete_pressed, escape_pressed, generate_pressed) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::Delete),
                i.key_pressed(egui::Key::Escape),
                i.modifiers.command && i.key_pressed(egui::Key::G),
            )
        });

        if delete_pressed && !editing_text {
            self.request_delete();
        }
        if escape_pressed && !editing_text {
            self.session.select(None);
        }
        if generate_pressed {
            self.regenerate();
        }

        egui::TopBottomPanel::top("menubar").show(ctx, |ui| self.top_bar(ui));
        if self.palette_open {
            egui::SidePanel::left("palette")
                .resizable(true)
                .default_width(200.0)
                .show(ctx, |ui| {
                    self.palette_ui(ui);
                });
        }
        egui::SidePanel::right("inspector")
            .default_width(320.0)
            .show(ctx, |ui| {
                // Tab bar for right panel
                ui.horizontal(|ui| {
                    if ui
                        .selectable_label(self.right_panel_tab == 0, "Properties")
                        .clicked()
                    {
                        self.right_panel_tab = 0;
                    }
                    if ui
                        .selectable_label(self.right_panel_tab == 1, "Code")
                        .clicked()
                    {
                        self.right_panel_tab = 1;
                    }
                });
                ui.separator();

                match self.right_panel_tab {
                    0 => self.inspector_ui(ui),
                    1 => self.generated_panel(ui),
                    _ => {}
                }
            });
        egui::CentralPanel::default().show(ctx, |ui| self.canvas_ui(ui));

        self.delete_dialog(ctx);

        if self.config.auto_generate && self.dirty {
            self.regenerate();
        }

        if egui::DragAndDrop::has_payload_of_type::<DragPayload>(ctx) {
            ctx.set_cursor_icon(egui::CursorIcon::Grabbing);
        }
    }
}

/// Draw `node` and its subtree. Leaves select on click; containers select
/// through their header and accept drops in their body. The ⠿ handle drags.
fn draw_node(
    ui: &mut egui::Ui,
    node: &Node,
    selected: Option<&NodeId>,
    actions: &mut Vec<CanvasAction>,
) {
    let is_selected = selected == Some(&node.id);
    let drag_id = Id::new(("node", node.id.as_str()));
    let payload = DragPayload::Existing(node.id.clone());

    if node.is_container() {
        ui.dnd_drag_source(drag_id, payload, |ui| {
            ui.horizontal(|ui| {
                ui.label("⠿");
                let header = format!("{} {}", node.kind.icon(), node.kind.display_name());
                if ui.selectable_label(is_selected, header).clicked() {
                    actions.push(CanvasAction::Select(node.id.clone()));
                }
            });
        });

        let (_, dropped) = ui.dnd_drop_zone::<DragPayload, _>(container_frame(node, is_selected), |ui| {
            if let Some(w) = px(node.style.get(StyleField::Width)) {
                ui.set_min_width(w);
            }
            if let Some(h) = px(node.style.get(StyleField::MinHeight)) {
                ui.set_min_height(h);
            }
            if node.children.is_empty() {
                ui.weak("Drop components here");
            } else {
                draw_children(ui, node, selected, actions);
            }
        });
        if let Some(payload) = dropped {
            actions.push(CanvasAction::Drop {
                payload: (*payload).clone(),
                target: Some(node.id.clone()),
            });
        }
        return;
    }

    ui.horizontal(|ui| {
        ui.dnd_drag_source(drag_id, payload, |ui| {
            ui.label("⠿");
        });
        let r = draw_leaf(ui, node);
        if r.clicked() {
            actions.push(CanvasAction::Select(node.id.clone()));
        }
        if is_selected {
            ui.painter()
                .rect_stroke(r.rect.expand(2.0), 2.0, Stroke::new(2.0, SELECTED), egui::StrokeKind::Outside);
        }
    });
}

/// Children laid out roughly the way the container's style asks.
fn draw_children(
    ui: &mut egui::Ui,
    node: &Node,
    selected: Option<&NodeId>,
    actions: &mut Vec<CanvasAction>,
) {
    let display = node.style.get(StyleField::Display);
    let row = node.style.get(StyleField::FlexDirection) != Some("column");
    match display {
        Some("grid") => {
            let cols = grid_columns(node.style.get(StyleField::GridTemplateColumns)).unwrap_or(1);
            egui::Grid::new(("grid", node.id.as_str()))
                .num_columns(cols)
                .spacing(vec2(px(node.style.get(StyleField::Gap)).unwrap_or(8.0), 8.0))
                .show(ui, |ui| {
                    for (i, child) in node.children.iter().enumerate() {
                        ui.vertical(|ui| draw_node(ui, child, selected, actions));
                        if (i + 1) % cols == 0 {
                            ui.end_row();
                        }
                    }
                });
        }
        Some("flex") if row => {
            ui.horizontal_wrapped(|ui| {
                for child in &node.children {
                    ui.vertical(|ui| draw_node(ui, child, selected, actions));
                }
            });
        }
        _ => {
            for child in &node.children {
                draw_node(ui, child, selected, actions);
            }
        }
    }
}

fn draw_leaf(ui: &mut egui::Ui, node: &Node) -> egui::Response {
    let fg = color(node.style.get(StyleField::Color));
    let size = vec2(
        px(node.style.get(StyleField::Width)).unwrap_or(0.0),
        px(node.style.get(StyleField::Height)).unwrap_or(0.0),
    );
    match node.kind {
        Kind::Button => {
            let mut text = RichText::new(node.prop("text").unwrap_or("Button"));
            if let Some(c) = fg {
                text = text.color(c);
            }
            let mut button = egui::Button::new(text)
                .corner_radius(px(node.style.get(StyleField::BorderRadius)).unwrap_or(4.0))
                .min_size(size);
            if let Some(bg) = color(node.style.get(StyleField::BackgroundColor)) {
                button = button.fill(bg);
            }
            ui.add(button)
        }
        Kind::Input => {
            let hint = node.prop("placeholder").unwrap_or("");
            egui::Frame::default()
                .inner_margin(6.0)
                .corner_radius(px(node.style.get(StyleField::BorderRadius)).unwrap_or(4.0))
                .stroke(Stroke::new(1.0, PLACEHOLDER_BORDER))
                .show(ui, |ui| {
                    ui.set_min_width(size.x.max(120.0));
                    ui.weak(hint);
                })
                .response
                .interact(Sense::click())
        }
        Kind::Text => {
            let mut text = RichText::new(node.prop("text").unwrap_or("Text"));
            if let Some(s) = px(node.style.get(StyleField::FontSize)) {
                text = text.size(s);
            }
            if let Some(c) = fg {
                text = text.color(c);
            }
            if matches!(node.style.get(StyleField::FontWeight), Some("bold" | "700" | "800" | "900")) {
                text = text.strong();
            }
            ui.add(egui::Label::new(text).sense(Sense::click()))
        }
        Kind::Image => {
            let src = node.prop("src").unwrap_or_default();
            let alt = node.prop("alt").unwrap_or("Image");
            let size = if size.x > 0.0 && size.y > 0.0 { size } else { vec2(100.0, 100.0) };
            if ["http://", "https://", "file://"].iter().any(|p| src.starts_with(p)) {
                ui.add(
                    egui::Image::new(src.to_string())
                        .max_size(size)
                        .sense(Sense::click()),
                )
            } else {
                let (rect, response) = ui.allocate_exact_size(size, Sense::click());
                ui.painter().rect_stroke(rect, 4.0, Stroke::new(1.0, PLACEHOLDER_BORDER), egui::StrokeKind::Inside);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    format!("🖼 {alt}"),
                    egui::FontId::proportional(12.0),
                    Color32::GRAY,
                );
                response
            }
        }
        Kind::Container | Kind::Card | Kind::Grid => ui.label(node.kind.display_name()),
    }
}

fn container_frame(node: &Node, is_selected: bool) -> egui::Frame {
    let border = node.style.get(StyleField::Border).unwrap_or_default();
    let stroke = if is_selected {
        Stroke::new(2.0, SELECTED)
    } else if border.contains("dashed") {
        Stroke::new(2.0, PLACEHOLDER_BORDER)
    } else if border.contains("solid") {
        Stroke::new(1.0, PLACEHOLDER_BORDER)
    } else {
        Stroke::NONE
    };
    let mut frame = egui::Frame::default()
        .inner_margin(px(node.style.get(StyleField::Padding)).unwrap_or(8.0))
        .corner_radius(px(node.style.get(StyleField::BorderRadius)).unwrap_or(0.0))
        .stroke(stroke);
    if let Some(bg) = color(node.style.get(StyleField::BackgroundColor)) {
        frame = frame.fill(bg);
    }
    if node.style.get(StyleField::BoxShadow).is_some() {
        frame = frame.shadow(egui::Shadow {
            offset: [0, 1],
            blur: 3,
            spread: 0,
            color: Color32::from_black_alpha(25),
        });
    }
    frame
}

fn section(ui: &mut egui::Ui, title: &str, node: &Node, add_rows: impl FnOnce(&mut egui::Ui, &Node)) {
    egui::CollapsingHeader::new(title)
        .id_salt((title, node.id.as_str()))
        .default_open(true)
        .show(ui, |ui| {
            egui::Grid::new((title, "grid"))
                .num_columns(2)
                .striped(true)
                .show(ui, |ui| add_rows(ui, node));
        });
}

fn prop_row(ui: &mut egui::Ui, node: &Node, key: &str, label: &str, patch: &mut NodePatch) {
    ui.label(label);
    let mut value = node.props.get(key).cloned().unwrap_or_default();
    if ui
        .add(egui::TextEdit::singleline(&mut value).desired_width(160.0))
        .changed()
    {
        patch.props.insert(key.to_string(), value);
    }
    ui.end_row();
}

fn style_row(ui: &mut egui::Ui, node: &Node, field: StyleField, patch: &mut NodePatch) {
    ui.label(field.label());
    let current = node.style.get(field).unwrap_or_default().to_string();
    if let Some(choices) = field.choices() {
        let mut value = current.clone();
        let shown = if value.is_empty() { "(unset)".to_string() } else { value.clone() };
        egui::ComboBox::from_id_salt((field.key(), node.id.as_str()))
            .selected_text(shown)
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut value, String::new(), "(unset)");
                for choice in choices {
                    ui.selectable_value(&mut value, choice.to_string(), *choice);
                }
            });
        if value != current {
            patch.style.set(field, value);
        }
    } else {
        let mut value = current;
        if ui
            .add(
                egui::TextEdit::singleline(&mut value)
                    .desired_width(160.0)
                    .hint_text("auto"),
            )
            .changed()
        {
            patch.style.set(field, value);
        }
    }
    ui.end_row();
}

fn color_row(ui: &mut egui::Ui, node: &Node, field: StyleField, patch: &mut NodePatch) {
    ui.label(field.label());
    ui.horizontal(|ui| {
        let current = node.style.get(field).unwrap_or_default().to_string();
        let mut picked = color(Some(current.as_str())).unwrap_or(Color32::WHITE);
        if egui::color_picker::color_edit_button_srgba(ui, &mut picked, egui::color_picker::Alpha::Opaque)
            .changed()
        {
            patch
                .style
                .set(field, format!("#{:02x}{:02x}{:02x}", picked.r(), picked.g(), picked.b()));
        }
        let mut value = current;
        if ui
            .add(
                egui::TextEdit::singleline(&mut value)
                    .desired_width(100.0)
                    .hint_text("#ffffff"),
            )
            .changed()
        {
            patch.style.set(field, value);
        }
    });
    ui.end_row();
}

/// First `<n>px` part of a length, for canvas sizing only. Negative and
/// non-finite lengths are ignored.
fn px(value: Option<&str>) -> Option<f32> {
    value?
        .split_whitespace()
        .next()?
        .strip_suffix("px")?
        .parse::<f32>()
        .ok()
        .filter(|n| n.is_finite() && *n >= 0.0)
}

/// `#rgb` or `#rrggbb`.
fn color(value: Option<&str>) -> Option<Color32> {
    let hex = value?.strip_prefix('#')?;
    let expanded: String = match hex.len() {
        3 => hex.chars().flat_map(|c| [c, c]).collect(),
        6 => hex.to_string(),
        _ => return None,
    };
    let channel = |i: usize| u8::from_str_radix(expanded.get(i..i + 2)?, 16).ok();
    Some(Color32::from_rgb(channel(0)?, channel(2)?, channel(4)?))
}

fn grid_columns(value: Option<&str>) -> Option<usize> {
    let compact: String = value?.chars().filter(|c| !c.is_whitespace()).collect();
    let n = compact
        .strip_prefix("repeat(")?
        .split(',')
        .next()?
        .parse::<usize>()
        .ok()?;
    (n > 0).then_some(n)
}
