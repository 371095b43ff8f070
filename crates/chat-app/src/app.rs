//! Main egui application — composes the panels and manages the chat client.

use std::rc::Rc;

use egui::{self, CentralPanel, RichText, SidePanel, TopBottomPanel};

use chat_core::event_bus::EventBus;
use chat_core::persist::PersistQueue;
use chat_core::ports::LocalStorePort;
use chat_core::session::{ChatClient, SendContext};
use chat_core::store::{load_preferences, resolve_user_id, save_preferences};
use chat_platform::http::GlooChatBackend;
use chat_platform::spawn::LocalSpawner;
use chat_platform::storage::auto_detect_store;
use chat_types::config::ClientConfig;
use chat_types::event::ChatEvent;
use chat_types::prefs::UserPreferences;
use chat_types::thread::Thread;
use chat_ui::panels::{chat, preferences};
use chat_ui::state::UiState;
use chat_ui::theme;

const DEFAULT_THREAD_ID: &str = "t1";

/// Starter prompts shown as chips until the conversation gets going.
const STARTER_SUGGESTIONS: &[&str] = &[
    "I keep circling the same decision.",
    "Today felt heavier than usual.",
    "Help me untangle my thoughts.",
];

/// The main application state
pub struct ChatApp {
    ui_state: UiState,
    client: ChatClient,
    event_bus: EventBus,
    store: Rc<dyn LocalStorePort>,
    preferences: UserPreferences,
    user_id: String,
    thread: Thread,
    save_feedback: Option<preferences::SaveFeedback>,
    first_frame: bool,
}

impl ChatApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let config = ClientConfig::default();
        let event_bus = EventBus::new();

        let backend = Rc::new(GlooChatBackend::new(config));
        let persist = PersistQueue::new(backend.clone(), Rc::new(LocalSpawner));
        let client = ChatClient::new(backend, persist, event_bus.clone());

        let store = auto_detect_store();
        let user_id = resolve_user_id(store.as_ref());
        let preferences = load_preferences(store.as_ref());

        event_bus.emit(ChatEvent::SuggestionsUpdated {
            items: STARTER_SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
        });

        Self {
            ui_state: UiState::new(),
            client,
            event_bus,
            store,
            preferences,
            user_id,
            thread: Thread::new(DEFAULT_THREAD_ID, "Daily check-in"),
            save_feedback: None,
            first_frame: true,
        }
    }

    fn send_context(&self) -> SendContext {
        SendContext {
            user_id: self.user_id.clone(),
            thread_id: self.thread.thread_id.clone(),
            preferences: self.preferences.clone(),
        }
    }

    /// Dispatch a user message to the chat client (async)
    fn dispatch_message(&self, text: String, ctx: &egui::Context) {
        let client = self.client.clone();
        let send_ctx = self.send_context();
        let ctx = ctx.clone();

        wasm_bindgen_futures::spawn_local(async move {
            client.send(&text, &send_ctx).await;
            ctx.request_repaint();
        });
    }

    fn save_preferences(&mut self) {
        save_preferences(self.store.as_ref(), &self.preferences);
        self.save_feedback = Some(preferences::SaveFeedback {
            message: "Saved".to_string(),
            success: true,
        });
    }
}

impl eframe::App for ChatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            theme::apply_theme(ctx);
            self.first_frame = false;
        }

        // Drain events from the chat client
        let events = self.event_bus.drain();
        if !events.is_empty() {
            self.ui_state.process_events(events);
            ctx.request_repaint();
        }

        if self.ui_state.sending {
            ctx.request_repaint();
        }

        // ── Top bar ──────────────────────────────────────────
        TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new("Companion")
                        .strong()
                        .color(theme::ACCENT)
                        .size(16.0),
                );
                ui.separator();
                ui.label(
                    RichText::new(format!(
                        "{} | Tone: {} | Depth: {}",
                        self.thread.title,
                        self.preferences.default_tone.label(),
                        self.preferences.depth_level.label()
                    ))
                    .color(theme::TEXT_SECONDARY)
                    .small(),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .selectable_label(self.ui_state.show_preferences, "Preferences")
                        .clicked()
                    {
                        self.ui_state.show_preferences = !self.ui_state.show_preferences;
                        self.save_feedback = None;
                    }
                });
            });
        });

        // ── Preferences side panel ───────────────────────────
        if self.ui_state.show_preferences {
            SidePanel::right("preferences_panel")
                .min_width(280.0)
                .max_width(350.0)
                .show(ctx, |ui| {
                    match preferences::preferences_panel(
                        ui,
                        &mut self.preferences,
                        self.save_feedback.as_ref(),
                    ) {
                        preferences::PreferencesAction::Changed
                        | preferences::PreferencesAction::SaveClicked => {
                            self.save_preferences();
                        }
                        preferences::PreferencesAction::None => {}
                    }
                });
        }

        // ── Main content ─────────────────────────────────────
        CentralPanel::default().show(ctx, |ui| {
            match chat::chat_panel(ui, &mut self.ui_state) {
                Some(chat::ChatAction::Submit(text)) => {
                    self.dispatch_message(text, ctx);
                }
                Some(chat::ChatAction::Cancel) => {
                    self.client.cancel();
                }
                None => {}
            }
        });
    }
}
