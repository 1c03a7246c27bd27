//! User actions exposed by the contact view.
//!
//! Actions are plain data: markup only references them through `data-*`
//! attributes, and [`ContactBoard`](crate::client::ContactBoard) executes them.

use super::view::DELETE_CONFIRMATION;

/// An action a rendered item offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewAction {
    /// Delete the contact with this id, after confirmation
    Delete { id: i64 },
}

impl ViewAction {
    /// Prompt the user must accept before the action runs.
    pub fn confirmation(&self) -> &'static str {
        match self {
            ViewAction::Delete { .. } => DELETE_CONFIRMATION,
        }
    }

    /// Value of the `data-action` attribute.
    pub fn name(&self) -> &'static str {
        match self {
            ViewAction::Delete { .. } => "delete",
        }
    }
}

/// Interactive confirmation.
pub trait Confirm {
    /// Ask the user; `true` means proceed.
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}
