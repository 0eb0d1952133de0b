use eframe::egui::{self, Align, Color32, Layout, RichText, Sense, Stroke, TextEdit};

use crate::engines::{self, ENGINES};
use crate::url::SearchAction;
use crate::widget::{SearchWidget, Submission};

pub struct SearchApp {
    widget: SearchWidget,
}

impl SearchApp {
    pub fn new(widget: SearchWidget) -> Self {
        Self { widget }
    }

    fn submit(&mut self) {
        match self.widget.submit() {
            Submission::Navigate(url) => {
                tracing::info!("opening {url}");
                if let Err(e) = open::that(&url) {
                    tracing::error!("failed to open {url}: {e}");
                    self.widget
                        .set_error(format!("Failed to open the browser: {e}"));
                }
            }
            Submission::Calculated(_) | Submission::Rejected => {}
        }
    }
}

fn parse_accent(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');
    if hex.len() == 6 {
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16);
        if let (Ok(r), Ok(g), Ok(b)) = (channel(0..2), channel(2..4), channel(4..6)) {
            return Color32::from_rgb(r, g, b);
        }
    }
    Color32::GRAY
}

fn format_time(rfc3339: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(rfc3339)
        .map(|t| {
            t.with_timezone(&chrono::Local)
                .format("%b %d, %H:%M")
                .to_string()
        })
        .unwrap_or_default()
}

impl eframe::App for SearchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let accent = parse_accent(self.widget.accent());
        let input_id = egui::Id::new("search-query");

        // Ctrl+/ pulls focus back to the query box from anywhere.
        if ctx.input(|i| i.modifiers.ctrl && i.key_pressed(egui::Key::Slash)) {
            ctx.memory_mut(|m| m.request_focus(input_id));
        }

        let frame = egui::Frame::central_panel(&ctx.style()).stroke(Stroke::new(2.0, accent));
        egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
            let mut pointer_on_widget = false;

            let bar = ui
                .horizontal(|ui| {
                    let mut query = self.widget.query().to_string();
                    let response = ui.add(
                        TextEdit::singleline(&mut query)
                            .id(input_id)
                            .hint_text(self.widget.placeholder().to_string())
                            .desired_width((ui.available_width() - 170.0).max(120.0)),
                    );
                    if response.changed() {
                        self.widget.set_query(query);
                    }
                    if response.gained_focus() {
                        self.widget.open_panel();
                    }
                    if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                        self.submit();
                    }

                    if !self.widget.query().is_empty() && ui.button("✕").clicked() {
                        self.widget.set_query(String::new());
                    }

                    let mut selected = self.widget.selected_index();
                    egui::ComboBox::from_id_source("engine-select")
                        .selected_text(self.widget.selected_engine().label)
                        .show_ui(ui, |ui| {
                            for (index, engine) in ENGINES.iter().enumerate() {
                                ui.selectable_value(&mut selected, index, engine.label);
                            }
                        });
                    if selected != self.widget.selected_index() {
                        self.widget.select_engine(ENGINES[selected].id);
                    }
                })
                .response;

            pointer_on_widget |= bar.contains_pointer();

            // Wheel over the bar steps through the engines, up = backward.
            if bar.contains_pointer() {
                let scroll = ui.input(|i| i.raw_scroll_delta.y);
                if scroll > 0.0 {
                    self.widget.cycle_engine(-1);
                } else if scroll < 0.0 {
                    self.widget.cycle_engine(1);
                }
            }

            if let Some(result) = self.widget.calc_result() {
                ui.label(
                    RichText::new(format!("{} = {}", result.expression, result.value)).strong(),
                );
            }
            if let Some(error) = self.widget.error() {
                ui.colored_label(Color32::RED, error);
            }

            ui.horizontal(|ui| {
                for (action, label) in [
                    (SearchAction::Images, "images"),
                    (SearchAction::Videos, "videos"),
                    (SearchAction::Calculate, "calculate"),
                ] {
                    let active = self.widget.action() == action;
                    if ui.selectable_label(active, label).clicked() {
                        self.widget.toggle_action(action);
                    }
                }
            });

            if self.widget.panel_open() && !self.widget.visible_history().is_empty() {
                let mut recalled: Option<(String, String)> = None;
                let panel = ui
                    .group(|ui| {
                        egui::ScrollArea::vertical().max_height(160.0).show(ui, |ui| {
                            for entry in self.widget.visible_history() {
                                let engine_accent = engines::position_of(&entry.engine)
                                    .map(|i| ENGINES[i].accent)
                                    .unwrap_or(ENGINES[0].accent);
                                let row = ui
                                    .horizontal(|ui| {
                                        let (rect, _) = ui.allocate_exact_size(
                                            egui::vec2(10.0, 10.0),
                                            Sense::hover(),
                                        );
                                        ui.painter().circle_filled(
                                            rect.center(),
                                            4.0,
                                            parse_accent(engine_accent),
                                        );
                                        ui.label(&entry.query);
                                        ui.with_layout(
                                            Layout::right_to_left(Align::Center),
                                            |ui| {
                                                ui.weak(format_time(&entry.timestamp));
                                            },
                                        );
                                    })
                                    .response
                                    .interact(Sense::click());
                                if row.clicked() {
                                    recalled = Some((entry.query.clone(), entry.engine.clone()));
                                }
                            }
                        });
                    })
                    .response;
                pointer_on_widget |= panel.contains_pointer();
                if let Some((query, engine)) = recalled {
                    self.widget.recall(query, &engine);
                }
            }

            // A click anywhere else dismisses the panel.
            if self.widget.panel_open()
                && ui.input(|i| i.pointer.any_pressed())
                && !pointer_on_widget
            {
                self.widget.close_panel();
            }
        });
    }
}
