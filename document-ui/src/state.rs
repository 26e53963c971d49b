use chrono::{DateTime, Utc};
use dioxus::prelude::{spawn, WritableExt};
use document_core::{Notice, NoticeLevel};
use gloo_timers::future::TimeoutFuture;
use uuid::Uuid;

use crate::config::ui_config;

#[derive(Debug, Clone, PartialEq)]
pub struct NoticeEntry {
    pub id: Uuid,
    pub notice: Notice,
    pub raised_at: DateTime<Utc>,
}

/// Transient notices, oldest first
#[derive(Debug, Clone, PartialEq)]
pub struct NoticeBoard {
    entries: Vec<NoticeEntry>,
    cap: usize,
}

impl NoticeBoard {
    pub fn new(cap: usize) -> Self {
        Self {
            entries: Vec::new(),
            cap: cap.max(1),
        }
    }

    /// Add a notice, dropping the oldest ones past the cap.
    pub fn push(&mut self, notice: Notice) -> Uuid {
        let id = Uuid::new_v4();
        self.entries.push(NoticeEntry {
            id,
            notice,
            raised_at: Utc::now(),
        });
        if self.entries.len() > self.cap {
            let overflow = self.entries.len() - self.cap;
            self.entries.drain(..overflow);
        }
        id
    }

    /// Returns false if the notice was already gone.
    pub fn dismiss(&mut self, id: Uuid) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    pub fn entries(&self) -> &[NoticeEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Global notice list shown by the notice stack
pub static NOTICES: dioxus::signals::GlobalSignal<NoticeBoard> =
    dioxus::signals::GlobalSignal::new(|| NoticeBoard::new(ui_config().notice_cap));

/// Show a notice and schedule its dismissal.
pub fn raise_notice(notice: Notice) {
    match notice.level {
        NoticeLevel::Success => dioxus_logger::tracing::info!("Notice: {}", notice.message),
        NoticeLevel::Error => dioxus_logger::tracing::warn!("Notice: {}", notice.message),
    }

    let id = NOTICES.write().push(notice);
    let duration = ui_config().notice_duration_ms;
    spawn(async move {
        TimeoutFuture::new(duration).await;
        NOTICES.write().dismiss(id);
    });
}

pub fn dismiss_notice(id: Uuid) {
    NOTICES.write().dismiss(id);
}
