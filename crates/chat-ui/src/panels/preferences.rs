//! Preferences panel — tone, depth, and check-in frequency.
//! Includes an explicit Save button with visual feedback.

use egui::{self, RichText, Vec2};
use chat_types::prefs::{CheckInFrequency, DepthLevel, TonePreference, UserPreferences};
use crate::theme::*;

/// What the caller should do after rendering the preferences panel
pub enum PreferencesAction {
    /// Nothing changed
    None,
    /// A field was changed (auto-save)
    Changed,
    /// The user clicked the explicit Save button
    SaveClicked,
}

/// Save feedback passed in from the app layer
#[derive(Clone)]
pub struct SaveFeedback {
    pub message: String,
    pub success: bool,
}

/// Render the preferences panel. Returns an action for the caller to handle.
pub fn preferences_panel(
    ui: &mut egui::Ui,
    prefs: &mut UserPreferences,
    save_feedback: Option<&SaveFeedback>,
) -> PreferencesAction {
    let mut changed = false;
    let mut save_clicked = false;

    egui::Frame::default()
        .fill(BG_SECONDARY)
        .inner_margin(PANEL_PADDING)
        .corner_radius(PANEL_ROUNDING)
        .show(ui, |ui| {
            ui.heading(RichText::new("Preferences").color(TEXT_PRIMARY));
            ui.separator();

            ui.label(RichText::new("Conversation").color(ACCENT).strong());
            ui.add_space(2.0);

            ui.label(RichText::new("Tone").color(TEXT_SECONDARY).small());
            egui::ComboBox::from_id_salt("pref_tone")
                .selected_text(prefs.default_tone.label())
                .show_ui(ui, |ui| {
                    for tone in TonePreference::all() {
                        if ui
                            .selectable_value(&mut prefs.default_tone, *tone, tone.label())
                            .changed()
                        {
                            changed = true;
                        }
                    }
                });

            ui.add_space(4.0);

            ui.label(RichText::new("Depth").color(TEXT_SECONDARY).small());
            egui::ComboBox::from_id_salt("pref_depth")
                .selected_text(prefs.depth_level.label())
                .show_ui(ui, |ui| {
                    for depth in DepthLevel::all() {
                        if ui
                            .selectable_value(&mut prefs.depth_level, *depth, depth.label())
                            .changed()
                        {
                            changed = true;
                        }
                    }
                });

            ui.add_space(4.0);

            ui.label(
                RichText::new("Check-in frequency")
                    .color(TEXT_SECONDARY)
                    .small(),
            );
            egui::ComboBox::from_id_salt("pref_check_in")
                .selected_text(prefs.check_in_frequency.label())
                .show_ui(ui, |ui| {
                    for freq in CheckInFrequency::all() {
                        if ui
                            .selectable_value(&mut prefs.check_in_frequency, *freq, freq.label())
                            .changed()
                        {
                            changed = true;
                        }
                    }
                });

            ui.add_space(4.0);
            ui.label(
                RichText::new(depth_description(prefs.depth_level))
                    .color(TEXT_SECONDARY)
                    .small()
                    .italics(),
            );

            // ── Save Button ──────────────────────────────────
            ui.add_space(16.0);
            ui.separator();
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                let btn = ui.add(
                    egui::Button::new(
                        RichText::new("Save Preferences")
                            .color(TEXT_PRIMARY)
                            .strong(),
                    )
                    .fill(ACCENT)
                    .corner_radius(PANEL_ROUNDING)
                    .min_size(Vec2::new(120.0, 28.0)),
                );
                if btn.clicked() {
                    save_clicked = true;
                }

                if let Some(fb) = save_feedback {
                    let color = if fb.success { SUCCESS } else { ERROR };
                    ui.label(RichText::new(&fb.message).color(color).small());
                }
            });
        });

    if save_clicked {
        PreferencesAction::SaveClicked
    } else if changed {
        PreferencesAction::Changed
    } else {
        PreferencesAction::None
    }
}

fn depth_description(depth: DepthLevel) -> &'static str {
    match depth {
        DepthLevel::Light => "Short, gentle check-ins. Good for busy days.",
        DepthLevel::Medium => "Balanced conversations with some reflection.",
        DepthLevel::Deep => "Longer reflective exchanges that dig into patterns.",
    }
}
