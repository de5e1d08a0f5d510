use std::time::Duration;

/// How long a confirmation stays on screen
pub const TOAST_DISMISS_AFTER: Duration = Duration::from_millis(2200);

/// Transient confirmation message.
///
/// Each `show` bumps a generation counter; a dismiss timer only hides the
/// toast it was started for, so a late timer never hides a newer message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastState {
    message: Option<String>,
    generation: u64,
}

impl ToastState {
    pub fn show(&mut self, message: impl Into<String>) -> u64 {
        self.generation += 1;
        self.message = Some(message.into());
        self.generation
    }

    /// Hide the toast if it is still the one shown at `generation`.
    /// Returns whether anything was hidden.
    pub fn dismiss(&mut self, generation: u64) -> bool {
        if self.generation == generation && self.message.is_some() {
            self.message = None;
            true
        } else {
            false
        }
    }

    pub fn is_visible(&self) -> bool {
        self.message.is_some()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
