//! Failure containment for a render subtree.
//!
//! A [`RenderBoundary`] owns at most one captured failure. While it holds
//! one, guarded render steps are skipped and the host shows a fallback;
//! only an explicit [`RenderBoundary::retry`] clears it.

use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedFailure {
    /// Which part of the subtree failed
    pub scope: String,
    pub message: String,
    /// Render attempt the failure happened on, starting at 1
    pub attempt: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderBoundary {
    name: String,
    failure: Option<CapturedFailure>,
    attempt: u32,
}

impl Default for RenderBoundary {
    fn default() -> Self {
        Self::new("root")
    }
}

impl RenderBoundary {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            failure: None,
            attempt: 1,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn failure(&self) -> Option<&CapturedFailure> {
        self.failure.as_ref()
    }

    pub fn is_contained(&self) -> bool {
        self.failure.is_some()
    }

    pub fn attempt(&self) -> u32 {
        self.attempt
    }

    /// Record a failure raised somewhere below the boundary. The first
    /// failure of an attempt wins; later ones are logged only.
    pub fn capture(&mut self, scope: &str, failure: impl Display) {
        let message = failure.to_string();
        if let Some(existing) = &self.failure {
            tracing::warn!(
                boundary = %self.name,
                scope,
                error = %message,
                first_scope = %existing.scope,
                "Additional render failure while contained"
            );
            return;
        }

        tracing::error!(
            boundary = %self.name,
            scope,
            attempt = self.attempt,
            error = %message,
            "Uncaught render failure"
        );
        self.failure = Some(CapturedFailure {
            scope: scope.to_string(),
            message,
            attempt: self.attempt,
        });
    }

    /// Run a fallible render step. Returns `None` without running it when a
    /// failure is already captured, or when the step itself fails.
    pub fn guard<T, E: Display>(
        &mut self,
        scope: &str,
        render: impl FnOnce() -> Result<T, E>,
    ) -> Option<T> {
        if self.is_contained() {
            return None;
        }
        match render() {
            Ok(value) => Some(value),
            Err(err) => {
                self.capture(scope, err);
                None
            }
        }
    }

    /// Clear the captured failure so the subtree renders again. Returns
    /// false if there was nothing to clear.
    pub fn retry(&mut self) -> bool {
        let Some(failure) = self.failure.take() else {
            return false;
        };
        self.attempt += 1;
        tracing::info!(
            boundary = %self.name,
            scope = %failure.scope,
            attempt = self.attempt,
            "Retrying contained subtree"
        );
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_passes_success_through() {
        let mut boundary = RenderBoundary::new("document");
        assert_eq!(boundary.guard("body", || Ok::<_, String>(7)), Some(7));
        assert!(!boundary.is_contained());
    }

    #[test]
    fn guard_captures_failure_and_short_circuits() {
        let mut boundary = RenderBoundary::new("document");
        assert_eq!(boundary.guard("body", || Err::<(), _>("boom")), None);

        let failure = boundary.failure().unwrap();
        assert_eq!(failure.scope, "body");
        assert_eq!(failure.message, "boom");
        assert_eq!(failure.attempt, 1);

        let mut ran = false;
        let result = boundary.guard("body", || {
            ran = true;
            Ok::<_, String>(())
        });
        assert_eq!(result, None);
        assert!(!ran, "contained boundary must not re-run the step");
    }

    #[test]
    fn first_failure_wins() {
        let mut boundary = RenderBoundary::default();
        boundary.capture("preview", "first");
        boundary.capture("viewer", "second");
        assert_eq!(boundary.failure().unwrap().message, "first");
    }

    #[test]
    fn retry_clears_and_reattempts() {
        let mut boundary = RenderBoundary::new("document");
        boundary.capture("body", "boom");
        assert!(boundary.retry());
        assert!(!boundary.is_contained());
        assert_eq!(boundary.attempt(), 2);

        assert_eq!(boundary.guard("body", || Ok::<_, String>("ok")), Some("ok"));

        boundary.capture("body", "again");
        assert_eq!(boundary.failure().unwrap().attempt, 2);
    }

    #[test]
    fn retry_without_failure_is_noop() {
        let mut boundary = RenderBoundary::default();
        assert!(!boundary.retry());
        assert_eq!(boundary.attempt(), 1);
        assert_eq!(boundary.name(), "root");
    }

    #[test]
    fn name_is_fixed_across_retries() {
        let mut boundary = RenderBoundary::new("preview");
        boundary.capture("body", "boom");
        boundary.retry();
        assert_eq!(boundary.name(), "preview");
    }
}
