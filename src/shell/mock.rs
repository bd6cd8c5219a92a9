//! Scripted runner for tests.
//!
//! Records every [`ProcessCall`] and replies from a script closure, so
//! installer logic can be exercised without real package managers.

use std::cell::RefCell;

use crate::error::Result;
use crate::shell::runner::{CommandRunner, ProcessCall, RunOutput};

/// Test double that records calls and replies from a script function.
pub struct ScriptedRunner {
    script: Box<dyn Fn(&ProcessCall) -> RunOutput>,
    calls: RefCell<Vec<ProcessCall>>,
}

impl ScriptedRunner {
    /// Create a runner that answers each call via `script`.
    pub fn with_script(script: impl Fn(&ProcessCall) -> RunOutput + 'static) -> Self {
        Self {
            script: Box::new(script),
            calls: RefCell::new(Vec::new()),
        }
    }

    /// A runner whose every call succeeds with empty output.
    pub fn always_ok() -> Self {
        Self::with_script(|_| RunOutput::success(""))
    }

    /// A runner whose every call fails with the given exit code.
    pub fn always_failing(exit_code: i32) -> Self {
        Self::with_script(move |_| RunOutput::failure(exit_code))
    }

    /// All calls made so far, in order.
    pub fn calls(&self) -> Vec<ProcessCall> {
        self.calls.borrow().clone()
    }

    /// Command lines of all calls made so far.
    pub fn command_lines(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .map(ProcessCall::command_line)
            .collect()
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, call: &ProcessCall) -> Result<RunOutput> {
        self.calls.borrow_mut().push(call.clone());
        Ok((self.script)(call))
    }
}
