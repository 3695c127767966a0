//! One-shot user actions: form submits and file downloads.
//!
//! An action owns only its busy flag and error line. It never holds page
//! data, so an action failing or running long leaves fetched content alone.

#[cfg(test)]
#[path = "action_test.rs"]
mod action_test;

use std::fmt::Display;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActionState {
    pub busy: bool,
    pub error: Option<String>,
}

impl ActionState {
    /// Claim the action. Refused while an earlier run is still in flight.
    pub fn try_begin(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.busy = true;
        self.error = None;
        true
    }

    /// Prepare a payload and claim the action in one step.
    ///
    /// Returns `None` without side effects while busy. A preparation error
    /// is recorded and the action stays idle.
    pub fn begin_with<T, E: Display>(&mut self, prepare: impl FnOnce() -> Result<T, E>) -> Option<T> {
        if self.busy {
            return None;
        }
        match prepare() {
            Ok(payload) => {
                self.try_begin();
                Some(payload)
            }
            Err(err) => {
                self.error = Some(err.to_string());
                None
            }
        }
    }

    /// Release the action, keeping the failure message if there was one.
    pub fn finish(&mut self, outcome: Result<(), String>) {
        self.busy = false;
        self.error = outcome.err();
    }
}
