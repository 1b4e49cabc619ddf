//! Isolation for cosmetic subtrees.
//!
//! A [`Boundary`] runs a fallible render closure. Errors and panics are logged and the
//! subtree renders nothing; the boundary then stays tripped until [`Boundary::reset`], so a
//! broken effect is not retried every frame.

use std::panic::{AssertUnwindSafe, catch_unwind};

use crate::foundation::error::FolioResult;

#[derive(Clone, Debug)]
pub struct Boundary {
    name: String,
    failure: Option<String>,
}

impl Boundary {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            failure: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_tripped(&self) -> bool {
        self.failure.is_some()
    }

    /// Message of the error or panic that tripped the boundary.
    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }

    pub fn reset(&mut self) {
        self.failure = None;
    }

    /// Run `render`, returning `None` if it fails, panics, or the boundary already tripped.
    pub fn guard<T>(&mut self, render: impl FnOnce() -> FolioResult<T>) -> Option<T> {
        if self.is_tripped() {
            return None;
        }
        let message = match catch_unwind(AssertUnwindSafe(render)) {
            Ok(Ok(value)) => return Some(value),
            Ok(Err(err)) => err.to_string(),
            Err(payload) => {
                if let Some(s) = payload.downcast_ref::<&str>() {
                    format!("panic: {s}")
                } else if let Some(s) = payload.downcast_ref::<String>() {
                    format!("panic: {s}")
                } else {
                    "panic: unknown payload".to_owned()
                }
            }
        };
        tracing::warn!(boundary = %self.name, error = %message, "suppressing failed subtree");
        self.failure = Some(message);
        None
    }
}

#[cfg(test)]
#[path = "../../tests/unit/site/boundary.rs"]
mod tests;
