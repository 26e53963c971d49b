//! Failure boundary component
//!
//! Wraps a subtree and swaps it for a fallback once any descendant reports a
//! render failure through the [`BoundaryHandle`] context. The subtree is only
//! rendered again after the user presses "Try again".

use std::cell::RefCell;
use std::fmt::Display;
use std::rc::Rc;

use dioxus::prelude::*;
use document_core::{CapturedFailure, RenderBoundary};

/// Context handle descendants use to report into the nearest boundary.
#[derive(Clone)]
pub struct BoundaryHandle {
    state: Rc<RefCell<RenderBoundary>>,
    epoch: Signal<u64>,
}

impl BoundaryHandle {
    /// Run a fallible render step inside the boundary.
    pub fn guard<T, E: Display>(
        &self,
        scope: &str,
        render: impl FnOnce() -> Result<T, E>,
    ) -> Option<T> {
        let (value, newly_contained) = {
            let mut boundary = self.state.borrow_mut();
            let was_contained = boundary.is_contained();
            let value = boundary.guard(scope, render);
            (value, !was_contained && boundary.is_contained())
        };
        if newly_contained {
            self.schedule_fallback();
        }
        value
    }

    /// Report a failure that happened outside a guarded step.
    pub fn report(&self, scope: &str, failure: impl Display) {
        let newly_contained = {
            let mut boundary = self.state.borrow_mut();
            let was_contained = boundary.is_contained();
            boundary.capture(scope, failure);
            !was_contained
        };
        if newly_contained {
            self.schedule_fallback();
        }
    }

    pub fn failure(&self) -> Option<CapturedFailure> {
        self.state.borrow().failure().cloned()
    }

    pub fn retry(&self) {
        if self.state.borrow_mut().retry() {
            let mut epoch = self.epoch;
            *epoch.write() += 1;
        }
    }

    // Failures arrive while a descendant renders; the boundary is marked
    // dirty from a task instead of writing a signal mid-render.
    fn schedule_fallback(&self) {
        let mut epoch = self.epoch;
        spawn(async move {
            *epoch.write() += 1;
        });
    }
}

#[component]
pub fn FailureBoundary(name: String, children: Element) -> Element {
    let epoch = use_signal(|| 0u64);
    // `name` labels log events only and is read once on mount.
    let state = use_hook(|| Rc::new(RefCell::new(RenderBoundary::new(name.clone()))));
    let handle = use_context_provider(|| BoundaryHandle { state, epoch });

    // Re-render whenever a failure is captured or cleared.
    let _ = epoch();

    if let Some(failure) = handle.failure() {
        let retry_handle = handle.clone();
        return rsx! {
            div { class: "boundary-fallback", role: "alert",
                h2 { class: "boundary-fallback-title", "Something went wrong" }
                p { class: "boundary-fallback-message", "{failure.message}" }
                button {
                    class: "doc-btn doc-btn--primary",
                    onclick: move |_| retry_handle.retry(),
                    "Try again"
                }
            }
        };
    }

    rsx! { {children} }
}
