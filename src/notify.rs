use std::sync::Mutex;

/// Transient, fire-and-forget user notifications.
///
/// The screen pushes short-lived messages here instead of returning them,
/// so validation and mutation can be tested without a UI runtime. Sinks
/// must not affect application state.
pub trait NotificationSink {
    fn notify(&self, message: &str);
}

/// Prints notifications to the terminal, where the hosting loop shows them
/// above the next prompt.
#[derive(Debug, Default)]
pub struct TerminalToast;

impl NotificationSink for TerminalToast {
    fn notify(&self, message: &str) {
        println!("[!] {message}");
    }
}

/// Records notifications for inspection in tests.
#[derive(Debug, Default)]
pub struct RecordingSink {
    messages: Mutex<Vec<String>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&self, message: &str) {
        self.messages
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_sink_keeps_order() {
        let sink = RecordingSink::new();
        sink.notify("first");
        sink.notify("second");

        assert_eq!(sink.messages(), vec!["first", "second"]);
    }
}
