//! `DialogPort` with a preset confirmation answer

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::{future::Future, pin::Pin};

use crate::ports::outbound::DialogPort;

#[derive(Default)]
struct State {
    answer: bool,
    confirmations: Vec<String>,
    alerts: Vec<String>,
}

/// Declines every confirmation until told otherwise
#[derive(Clone, Default)]
pub struct ScriptedDialogs {
    state: Arc<Mutex<State>>,
}

impl ScriptedDialogs {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn answer_confirm(&self, answer: bool) {
        self.state().answer = answer;
    }

    pub fn confirmations(&self) -> Vec<String> {
        self.state().confirmations.clone()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.state().alerts.clone()
    }
}

impl DialogPort for ScriptedDialogs {
    fn confirm(&self, message: &str) -> Pin<Box<dyn Future<Output = bool> + 'static>> {
        let mut state = self.state();
        state.confirmations.push(message.to_string());
        Box::pin(std::future::ready(state.answer))
    }

    fn alert(&self, message: &str) {
        self.state().alerts.push(message.to_string());
    }
}
