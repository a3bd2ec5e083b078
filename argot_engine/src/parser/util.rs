use std::sync::{Arc, Mutex};

use crate::parser::{ParseError, UserInterface};

/// Records printed output, so that a clone may inspect what the parser printed.
#[derive(Clone, Default)]
pub(crate) struct InMemoryInterface {
    messages: Arc<Mutex<Vec<String>>>,
    errors: Arc<Mutex<Vec<String>>>,
}

impl UserInterface for InMemoryInterface {
    fn print(&self, message: String) {
        self.messages.lock().unwrap().push(message);
    }

    fn print_error(&self, error: ParseError) {
        self.errors.lock().unwrap().push(error.message().to_string());
    }
}

impl InMemoryInterface {
    pub(crate) fn consume(&self) -> (Option<String>, Option<String>) {
        let drain = |values: &Mutex<Vec<String>>| {
            let values: Vec<String> = values.lock().unwrap().drain(..).collect();

            if values.is_empty() {
                None
            } else {
                Some(values.join("\n"))
            }
        };

        (drain(&self.messages), drain(&self.errors))
    }

    pub(crate) fn consume_message(&self) -> String {
        let (message, error) = self.consume();
        assert_eq!(error, None);
        message.unwrap()
    }

    pub(crate) fn consume_error(&self) -> String {
        let (message, error) = self.consume();
        assert_eq!(message, None);
        error.unwrap()
    }
}
