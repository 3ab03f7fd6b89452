//! Seams to the rendering layer, plus in-memory implementations for
//! headless hosts.

use std::sync::{Arc, Mutex, PoisonError};
use sw_core::{DisplayState, InputField, RawInput};

/// Reads the current slider positions on demand.
pub trait InputSource: Send + Sync {
    fn read(&self, field: InputField) -> RawInput;
}

impl<F> InputSource for F
where
    F: Fn(InputField) -> RawInput + Send + Sync,
{
    fn read(&self, field: InputField) -> RawInput {
        self(field)
    }
}

/// Writes a computed state into the visible widget.
pub trait Renderer: Send + Sync {
    fn render(&self, state: &DisplayState);

    /// Replace the widget with a fallback notice after a failed start.
    fn show_unavailable(&self, _message: &str) {}
}

/// Slider positions held in memory, shared between clones.
#[derive(Debug, Clone)]
pub struct MemorySliders {
    values: Arc<Mutex<[RawInput; 4]>>,
}

impl MemorySliders {
    /// All sliders empty, so every input falls back to its default.
    pub fn new() -> Self {
        Self { values: Arc::new(Mutex::new(std::array::from_fn(|_| RawInput::Missing))) }
    }

    pub fn set(&self, field: InputField, value: impl Into<RawInput>) {
        self.values.lock().unwrap_or_else(PoisonError::into_inner)[field as usize] = value.into();
    }
}

impl Default for MemorySliders {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSource for MemorySliders {
    fn read(&self, field: InputField) -> RawInput {
        self.values.lock().unwrap_or_else(PoisonError::into_inner)[field as usize].clone()
    }
}

/// Keeps every rendered state and fallback notice.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    states: Arc<Mutex<Vec<DisplayState>>>,
    notices: Arc<Mutex<Vec<String>>>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn renders(&self) -> Vec<DisplayState> {
        self.states.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn render_count(&self) -> usize {
        self.states.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn last(&self) -> Option<DisplayState> {
        self.states.lock().unwrap_or_else(PoisonError::into_inner).last().cloned()
    }

    pub fn notices(&self) -> Vec<String> {
        self.notices.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl Renderer for RecordingRenderer {
    fn render(&self, state: &DisplayState) {
        self.states.lock().unwrap_or_else(PoisonError::into_inner).push(state.clone());
    }

    fn show_unavailable(&self, message: &str) {
        self.notices.lock().unwrap_or_else(PoisonError::into_inner).push(message.to_string());
    }
}
