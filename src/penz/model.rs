use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type PenId = u64;

/// Title applied when a pen is created without one.
pub const UNTITLED: &str = "Untitled Pen";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub avatar: Option<String>,
    pub id: String,
}

impl Author {
    pub fn anonymous() -> Self {
        Self {
            name: "Anonymous".to_string(),
            avatar: None,
            id: "anonymous".to_string(),
        }
    }

    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        let id = name.to_lowercase().replace(' ', "-");
        Self {
            name,
            avatar: None,
            id,
        }
    }
}

impl Default for Author {
    fn default() -> Self {
        Self::anonymous()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pen {
    pub id: PenId,
    pub title: String,
    pub html: String,
    pub css: String,
    pub javascript: String,
    pub thumbnail: Option<String>,
    pub author: Author,
    pub views: u64,
    pub likes: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Pen {
    pub fn from_draft(id: PenId, draft: PenDraft) -> Self {
        let now = Utc::now();
        Self {
            id,
            title: draft
                .title
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| UNTITLED.to_string()),
            html: draft.html.unwrap_or_default(),
            css: draft.css.unwrap_or_default(),
            javascript: draft.javascript.unwrap_or_default(),
            thumbnail: None,
            author: draft.author.unwrap_or_default(),
            views: 0,
            likes: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Combined engagement score used by the trending feed.
    pub fn popularity(&self) -> u64 {
        self.likes + self.views
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Input for creating a pen. Also the fork-handoff payload, so it must
/// round-trip through serde.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PenDraft {
    pub title: Option<String>,
    pub html: Option<String>,
    pub css: Option<String>,
    pub javascript: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<Author>,
}

impl PenDraft {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }
}

/// Partial update for a pen. Provided fields override, absent fields are
/// retained. Counters and identity never change through a patch.
#[derive(Debug, Clone, Default)]
pub struct PenPatch {
    pub title: Option<String>,
    pub html: Option<String>,
    pub css: Option<String>,
    pub javascript: Option<String>,
    pub thumbnail: Option<String>,
}

impl PenPatch {
    pub fn apply(&self, pen: &mut Pen) {
        if let Some(title) = &self.title {
            pen.title = title.clone();
        }
        if let Some(html) = &self.html {
            pen.html = html.clone();
        }
        if let Some(css) = &self.css {
            pen.css = css.clone();
        }
        if let Some(javascript) = &self.javascript {
            pen.javascript = javascript.clone();
        }
        if let Some(thumbnail) = &self.thumbnail {
            pen.thumbnail = Some(thumbnail.clone());
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.html.is_none()
            && self.css.is_none()
            && self.javascript.is_none()
            && self.thumbnail.is_none()
    }
}

/// Lenient id coercion for route and CLI parameters. A malformed id is
/// simply no match, never an error.
pub fn parse_pen_id(raw: &str) -> Option<PenId> {
    raw.trim().parse().ok()
}
