//! Chat panel — conversation history, suggestion chips, and input field.

use egui::{self, Align, Layout, RichText, ScrollArea, Vec2};
use chat_types::message::{Message, Role};
use crate::state::UiState;
use crate::theme::*;

/// What the caller should do after rendering the chat panel.
pub enum ChatAction {
    /// The user submitted the input field.
    Submit(String),
    /// The user asked to stop the in-flight reply.
    Cancel,
}

/// Render the chat panel. The message log itself is owned by the client
/// core; submissions come back as actions, never as direct mutations.
pub fn chat_panel(ui: &mut egui::Ui, state: &mut UiState) -> Option<ChatAction> {
    let mut action = None;

    egui::Frame::default()
        .fill(BG_PRIMARY)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.vertical(|ui| {
                // Header
                ui.horizontal(|ui| {
                    ui.heading(
                        RichText::new("Companion")
                            .color(TEXT_PRIMARY)
                            .strong(),
                    );
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        let status_color = if state.sending { WARNING } else { SUCCESS };
                        ui.label(
                            RichText::new(&state.status_text)
                                .color(status_color)
                                .small(),
                        );
                    });
                });

                ui.separator();

                // Messages area
                let available_height = ui.available_height() - 90.0;
                ScrollArea::vertical()
                    .max_height(available_height)
                    .auto_shrink([false, false])
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        for message in &state.messages {
                            render_message(ui, message);
                            ui.add_space(4.0);
                        }
                    });

                ui.add_space(6.0);

                // Suggestion chips
                if !state.suggestions.is_empty() && !state.sending {
                    let mut picked = None;
                    ui.horizontal_wrapped(|ui| {
                        for suggestion in &state.suggestions {
                            let chip = ui.add(
                                egui::Button::new(
                                    RichText::new(suggestion).color(TEXT_SECONDARY).small(),
                                )
                                .fill(BG_SURFACE)
                                .corner_radius(PANEL_ROUNDING),
                            );
                            if chip.clicked() {
                                picked = Some(suggestion.clone());
                            }
                        }
                    });
                    if let Some(text) = picked {
                        state.input_text = text;
                    }
                    ui.add_space(4.0);
                }

                // Input area
                ui.horizontal(|ui| {
                    let input = egui::TextEdit::singleline(&mut state.input_text)
                        .hint_text("What's on your mind?")
                        .desired_width(ui.available_width() - 70.0)
                        .font(egui::FontId::proportional(14.0));

                    let response = ui.add(input);

                    if state.sending {
                        let cancel_btn = ui.add(
                            egui::Button::new(RichText::new("Stop").color(TEXT_PRIMARY))
                                .fill(ERROR)
                                .corner_radius(PANEL_ROUNDING)
                                .min_size(Vec2::new(60.0, 0.0)),
                        );
                        if cancel_btn.clicked() {
                            action = Some(ChatAction::Cancel);
                        }
                    } else {
                        let send_enabled = !state.input_text.trim().is_empty();
                        let send_btn = ui.add_enabled(
                            send_enabled,
                            egui::Button::new(RichText::new("Send").color(TEXT_PRIMARY))
                                .fill(if send_enabled { ACCENT } else { BG_SURFACE })
                                .corner_radius(PANEL_ROUNDING)
                                .min_size(Vec2::new(60.0, 0.0)),
                        );

                        // Submit on Enter or button click
                        if (response.lost_focus()
                            && ui.input(|i| i.key_pressed(egui::Key::Enter))
                            && send_enabled)
                            || send_btn.clicked()
                        {
                            let text = state.input_text.trim().to_string();
                            action = Some(ChatAction::Submit(text));
                            state.input_text.clear();
                            response.request_focus();
                        }
                    }
                });
            });
        });

    action
}

fn render_message(ui: &mut egui::Ui, message: &Message) {
    let (label, label_color, bg) = match message.role {
        Role::User => ("You", ACCENT, BG_SECONDARY),
        Role::Assistant => ("Companion", SUCCESS, BG_SECONDARY),
        Role::System => ("Note", TEXT_SECONDARY, BG_SURFACE),
    };

    egui::Frame::default()
        .fill(bg)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.label(RichText::new(label).color(label_color).strong().small());
            if message.streaming && message.content.is_empty() {
                ui.label(RichText::new("▌").color(ACCENT).strong());
            } else if message.streaming {
                ui.horizontal_wrapped(|ui| {
                    ui.label(RichText::new(&message.content).color(TEXT_PRIMARY));
                    ui.label(RichText::new("▌").color(ACCENT).strong());
                });
            } else {
                ui.label(RichText::new(&message.content).color(TEXT_PRIMARY));
            }
        });
}
