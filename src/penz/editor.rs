//! An editing session over one pen: the working copy of title and sources,
//! wired to the debounced auto-save and the preview composer.
//!
//! The session is deliberately passive about persistence: it emits due
//! save drafts, and whoever drives it decides whether that means an update
//! to an existing pen or the creation of a new one.

use crate::autosave::{AutoSave, DEBOUNCE_DELAY};
use crate::model::{Pen, PenDraft, PenId, UNTITLED};
use crate::preview;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedReceiver;

pub struct EditorSession {
    pen_id: Option<PenId>,
    title: String,
    html: String,
    css: String,
    javascript: String,
    autosave: AutoSave,
    saves: UnboundedReceiver<PenDraft>,
}

impl EditorSession {
    /// A blank session for a brand-new pen.
    pub fn new() -> Self {
        Self::with_delay(DEBOUNCE_DELAY)
    }

    pub fn with_delay(delay: Duration) -> Self {
        let (autosave, saves) = AutoSave::new(delay);
        Self {
            pen_id: None,
            title: UNTITLED.to_string(),
            html: String::new(),
            css: String::new(),
            javascript: String::new(),
            autosave,
            saves,
        }
    }

    /// A session editing an existing pen.
    pub fn for_pen(pen: &Pen) -> Self {
        let mut session = Self::new();
        session.pen_id = Some(pen.id);
        session.title = pen.title.clone();
        session.html = pen.html.clone();
        session.css = pen.css.clone();
        session.javascript = pen.javascript.clone();
        session
    }

    /// A session pre-populated from a fork draft (see
    /// [`crate::service::PenService::take_pending_fork`]).
    pub fn from_draft(draft: PenDraft) -> Self {
        let mut session = Self::new();
        session.title = draft
            .title
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| UNTITLED.to_string());
        session.html = draft.html.unwrap_or_default();
        session.css = draft.css.unwrap_or_default();
        session.javascript = draft.javascript.unwrap_or_default();
        session
    }

    pub fn pen_id(&self) -> Option<PenId> {
        self.pen_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn css(&self) -> &str {
        &self.css
    }

    pub fn javascript(&self) -> &str {
        &self.javascript
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.queue_save();
    }

    pub fn set_html(&mut self, html: impl Into<String>) {
        self.html = html.into();
        self.queue_save();
    }

    pub fn set_css(&mut self, css: impl Into<String>) {
        self.css = css.into();
        self.queue_save();
    }

    pub fn set_javascript(&mut self, javascript: impl Into<String>) {
        self.javascript = javascript.into();
        self.queue_save();
    }

    // Nothing is worth saving until at least one source blob is non-empty.
    fn queue_save(&mut self) {
        if self.html.is_empty() && self.css.is_empty() && self.javascript.is_empty() {
            return;
        }
        self.autosave.schedule(self.draft());
    }

    /// Snapshot of the working copy.
    pub fn draft(&self) -> PenDraft {
        PenDraft {
            title: Some(self.title.clone()),
            html: Some(self.html.clone()),
            css: Some(self.css.clone()),
            javascript: Some(self.javascript.clone()),
            author: None,
        }
    }

    /// Save immediately, superseding any pending auto-save.
    pub fn flush(&mut self) {
        self.autosave.flush(self.draft());
    }

    pub fn has_pending_save(&self) -> bool {
        self.autosave.has_pending()
    }

    /// The next due save, as scheduled by the debounce timer or a flush.
    pub async fn next_save(&mut self) -> Option<PenDraft> {
        self.saves.recv().await
    }

    /// A due save if one has already fired, without waiting.
    pub fn try_next_save(&mut self) -> Option<PenDraft> {
        self.saves.try_recv().ok()
    }

    /// The live preview of the working copy.
    pub fn preview_document(&self) -> String {
        preview::compose_document(&self.html, &self.css, &self.javascript)
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}
