//! Input events
//!
//! Keyboard, pointer and touch all collapse into a single `Activate` signal.
//! The restart control has its own event.

/// A discrete, edge-triggered input signal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Start a session, or flap while one is running
    Activate,
    /// Restart control pressed
    Restart,
}

/// Key code that activates
pub const ACTIVATE_KEY_CODE: &str = "Space";

/// Map a `KeyboardEvent.code` to an input event
pub fn event_for_key(code: &str) -> Option<InputEvent> {
    (code == ACTIVATE_KEY_CODE).then_some(InputEvent::Activate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_for_key() {
        assert_eq!(event_for_key("Space"), Some(InputEvent::Activate));
        assert_eq!(event_for_key("Enter"), None);
        assert_eq!(event_for_key("KeyR"), None);
    }
}
