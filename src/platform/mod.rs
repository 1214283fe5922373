//! Platform abstraction layer
//!
//! Maps host keyboard input onto simulation commands. Key names follow the
//! DOM `KeyboardEvent.key` values.

use crate::sim::InputCommand;

/// Lane command for a key, if it is bound to one
pub fn command_for_key(key: &str) -> Option<InputCommand> {
    match key {
        "ArrowLeft" | "a" | "A" => Some(InputCommand::MoveLeft),
        "ArrowRight" | "d" | "D" => Some(InputCommand::MoveRight),
        _ => None,
    }
}

/// Keys that start or restart a run
pub fn is_start_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

/// Toggles the demo autopilot
pub fn is_autopilot_toggle(key: &str) -> bool {
    matches!(key, "i" | "I")
}
