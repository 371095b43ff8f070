#[cfg(test)]
mod tests {
    use crate::state::*;
    use chat_types::event::ChatEvent;
    use chat_types::message::Message;

    // ─── UiState Tests ───────────────────────────────────────

    #[test]
    fn test_ui_state_initial() {
        let state = UiState::new();
        assert!(state.messages.is_empty());
        assert!(!state.sending);
        assert!(state.suggestions.is_empty());
        assert!(state.input_text.is_empty());
        assert!(!state.show_preferences);
        assert_eq!(state.status_text, "Ready");
        assert!(!state.has_streaming_message());
    }

    #[test]
    fn test_ui_state_message_appended() {
        let mut state = UiState::new();
        state.process_events(vec![ChatEvent::MessageAppended {
            message: Message::user("hello"),
        }]);

        assert_eq!(state.messages.len(), 1);
        assert_eq!(state.messages[0].content, "hello");
    }

    #[test]
    fn test_ui_state_message_updated_in_place() {
        let mut state = UiState::new();
        let placeholder = Message::assistant_placeholder();
        let id = placeholder.id.clone();
        state.process_events(vec![ChatEvent::MessageAppended {
            message: placeholder,
        }]);
        assert!(state.has_streaming_message());

        state.process_events(vec![
            ChatEvent::MessageUpdated {
                id: id.clone(),
                content: "Hel".to_string(),
                streaming: true,
            },
            ChatEvent::MessageUpdated {
                id: id.clone(),
                content: "Hello".to_string(),
                streaming: false,
            },
        ]);

        assert_eq!(state.messages.len(), 1);
        assert_eq!(state.messages[0].content, "Hello");
        assert!(!state.has_streaming_message());
    }

    #[test]
    fn test_ui_state_update_for_unknown_id_ignored() {
        let mut state = UiState::new();
        state.process_events(vec![ChatEvent::MessageUpdated {
            id: "missing".to_string(),
            content: "x".to_string(),
            streaming: false,
        }]);
        assert!(state.messages.is_empty());
    }

    #[test]
    fn test_ui_state_sending_changed() {
        let mut state = UiState::new();
        state.process_events(vec![ChatEvent::SendingChanged { sending: true }]);
        assert!(state.sending);
        assert_eq!(state.status_text, "Assistant is replying...");

        state.process_events(vec![ChatEvent::SendingChanged { sending: false }]);
        assert!(!state.sending);
        assert_eq!(state.status_text, "Ready");
    }

    #[test]
    fn test_ui_state_history_replaced() {
        let mut state = UiState::new();
        state.process_events(vec![ChatEvent::MessageAppended {
            message: Message::user("stale"),
        }]);

        state.process_events(vec![ChatEvent::HistoryReplaced {
            messages: vec![Message::user("restored"), Message::assistant("reply")],
        }]);

        assert_eq!(state.messages.len(), 2);
        assert_eq!(state.messages[0].content, "restored");
    }

    #[test]
    fn test_ui_state_history_cleared() {
        let mut state = UiState::new();
        state.process_events(vec![ChatEvent::MessageAppended {
            message: Message::user("gone"),
        }]);
        state.process_events(vec![ChatEvent::HistoryReplaced {
            messages: Vec::new(),
        }]);
        assert!(state.messages.is_empty());
    }

    #[test]
    fn test_ui_state_suggestions_updated() {
        let mut state = UiState::new();
        state.process_events(vec![ChatEvent::SuggestionsUpdated {
            items: vec!["How was your day?".to_string()],
        }]);
        assert_eq!(state.suggestions.len(), 1);
    }

    #[test]
    fn test_ui_state_full_send_lifecycle() {
        let mut state = UiState::new();

        let placeholder = Message::assistant_placeholder();
        let id = placeholder.id.clone();

        state.process_events(vec![
            ChatEvent::MessageAppended {
                message: Message::user("hi"),
            },
            ChatEvent::MessageAppended {
                message: placeholder,
            },
            ChatEvent::SendingChanged { sending: true },
        ]);
        assert!(state.sending);
        assert!(state.has_streaming_message());

        state.process_events(vec![
            ChatEvent::MessageUpdated {
                id: id.clone(),
                content: "Hello there".to_string(),
                streaming: true,
            },
            ChatEvent::MessageUpdated {
                id,
                content: "Hello there".to_string(),
                streaming: false,
            },
            ChatEvent::SendingChanged { sending: false },
        ]);

        assert!(!state.sending);
        assert!(!state.has_streaming_message());
        assert_eq!(state.messages.len(), 2);
        assert_eq!(state.messages[1].content, "Hello there");
        assert_eq!(state.status_text, "Ready");
    }

    #[test]
    fn test_ui_state_default() {
        let state = UiState::default();
        assert!(state.messages.is_empty());
        assert!(!state.sending);
    }
}
