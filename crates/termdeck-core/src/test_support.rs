//! Recording fakes for the host traits, shared by unit tests.

use std::cell::RefCell;

use crate::host::{Notifier, PickOutcome, PresetPicker};
use crate::terminal::{TerminalBackend, TerminalError, TerminalHandle, TerminalOptions};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCall {
    Create(TerminalOptions),
    Show(String),
    Send {
        id: String,
        text: String,
        add_new_line: bool,
    },
}

/// Backend that records calls. Terminals named `fail_name` fail to create.
#[derive(Default)]
pub struct RecordingBackend {
    pub calls: RefCell<Vec<BackendCall>>,
    pub fail_name: Option<String>,
}

impl RecordingBackend {
    pub fn failing_for(name: &str) -> Self {
        Self {
            fail_name: Some(name.to_string()),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<BackendCall> {
        self.calls.borrow().clone()
    }

    pub fn created(&self) -> Vec<TerminalOptions> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                BackendCall::Create(options) => Some(options.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, predicate: impl Fn(&BackendCall) -> bool) -> usize {
        self.calls.borrow().iter().filter(|c| predicate(c)).count()
    }
}

impl TerminalBackend for RecordingBackend {
    fn name(&self) -> &'static str {
        "recording"
    }

    fn display_name(&self) -> &'static str {
        "Recording"
    }

    fn is_available(&self) -> bool {
        true
    }

    fn create_terminal(&self, options: &TerminalOptions) -> Result<TerminalHandle, TerminalError> {
        if self.fail_name.is_some() && options.name == self.fail_name {
            return Err(TerminalError::SpawnFailed {
                message: "simulated failure".to_string(),
            });
        }
        let mut calls = self.calls.borrow_mut();
        calls.push(BackendCall::Create(options.clone()));
        Ok(TerminalHandle::new(
            format!("t{}", calls.len()),
            options.location,
        ))
    }

    fn show(&self, handle: &TerminalHandle) -> Result<(), TerminalError> {
        self.calls
            .borrow_mut()
            .push(BackendCall::Show(handle.id.clone()));
        Ok(())
    }

    fn send_text(
        &self,
        handle: &TerminalHandle,
        text: &str,
        add_new_line: bool,
    ) -> Result<(), TerminalError> {
        self.calls.borrow_mut().push(BackendCall::Send {
            id: handle.id.clone(),
            text: text.to_string(),
            add_new_line,
        });
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Error(String),
    Warning(String),
    Info(String),
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub notices: RefCell<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.borrow().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.notices
            .borrow()
            .iter()
            .filter_map(|n| match n {
                Notice::Error(m) => Some(m.clone()),
                _ => None,
            })
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn error(&self, message: &str) {
        self.notices
            .borrow_mut()
            .push(Notice::Error(message.to_string()));
    }

    fn warning(&self, message: &str) {
        self.notices
            .borrow_mut()
            .push(Notice::Warning(message.to_string()));
    }

    fn info(&self, message: &str) {
        self.notices
            .borrow_mut()
            .push(Notice::Info(message.to_string()));
    }
}

/// Picker returning a fixed outcome and remembering what it was offered.
pub struct ScriptedPicker {
    pub outcome: PickOutcome,
    pub offered: RefCell<Option<(String, Vec<String>)>>,
}

impl ScriptedPicker {
    pub fn selecting(name: &str) -> Self {
        Self {
            outcome: PickOutcome::Selected(name.to_string()),
            offered: RefCell::new(None),
        }
    }

    pub fn cancelling() -> Self {
        Self {
            outcome: PickOutcome::Cancelled,
            offered: RefCell::new(None),
        }
    }
}

impl PresetPicker for ScriptedPicker {
    fn pick(&self, title: &str, items: &[String]) -> PickOutcome {
        *self.offered.borrow_mut() = Some((title.to_string(), items.to_vec()));
        self.outcome.clone()
    }
}
