//! View-models for the playground's pages: each wraps service calls with a
//! [`RequestState`] slot.
//!
//! Contract: invoking an operation sets Loading and clears any previous
//! failure; success stores the payload; failure stores a static user-facing
//! message and logs the underlying cause. Failures never propagate to the
//! caller, except from [`PensModel::create`], which re-raises so the invoking
//! UI can branch on it.

use crate::error::Result;
use crate::model::{Pen, PenDraft, PenId};
use crate::request::RequestState;
use crate::service::PenService;
use crate::store::Mirror;

pub const LOAD_PENS_FAILED: &str = "Failed to load pens. Please try again.";
pub const LOAD_TRENDING_FAILED: &str = "Failed to load trending pens. Please try again.";
pub const SEARCH_FAILED: &str = "Search failed. Please try again.";
pub const LOAD_PEN_FAILED: &str = "Failed to load pen. Please try again.";

/// The gallery page: all pens plus like/create actions over them.
#[derive(Debug, Default)]
pub struct PensModel {
    pub state: RequestState<Vec<Pen>>,
}

impl PensModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn load<M: Mirror>(&mut self, service: &PenService<M>) {
        self.state.begin();
        match service.get_all().await {
            Ok(pens) => self.state.succeed(pens),
            Err(err) => {
                tracing::error!(error = %err, "error loading pens");
                self.state.fail(LOAD_PENS_FAILED);
            }
        }
    }

    /// Record a like and patch the loaded list in place. A failure is logged
    /// but does not disturb the list or the error slot.
    pub async fn like<M: Mirror>(&mut self, service: &mut PenService<M>, id: PenId) {
        match service.like_pen(id).await {
            Ok(Some(updated)) => {
                if let RequestState::Success(pens) = &mut self.state {
                    if let Some(slot) = pens.iter_mut().find(|p| p.id == id) {
                        *slot = updated;
                    }
                }
            }
            Ok(None) => {}
            Err(err) => tracing::error!(error = %err, "error liking pen"),
        }
    }

    /// Create a pen and prepend it to the loaded list. Re-raises on failure
    /// so the caller can roll back optimistic UI state.
    pub async fn create<M: Mirror>(
        &mut self,
        service: &mut PenService<M>,
        draft: PenDraft,
    ) -> Result<Pen> {
        match service.create(draft).await {
            Ok(pen) => {
                if let RequestState::Success(pens) = &mut self.state {
                    pens.insert(0, pen.clone());
                }
                Ok(pen)
            }
            Err(err) => {
                tracing::error!(error = %err, "error creating pen");
                Err(err)
            }
        }
    }
}

/// The trending strip on the gallery page.
#[derive(Debug, Default)]
pub struct TrendingModel {
    pub state: RequestState<Vec<Pen>>,
}

impl TrendingModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn load<M: Mirror>(&mut self, service: &PenService<M>) {
        self.state.begin();
        match service.get_trending().await {
            Ok(pens) => self.state.succeed(pens),
            Err(err) => {
                tracing::error!(error = %err, "error loading trending pens");
                self.state.fail(LOAD_TRENDING_FAILED);
            }
        }
    }
}

/// The search page, driven by its query parameter.
#[derive(Debug, Default)]
pub struct SearchModel {
    pub state: RequestState<Vec<Pen>>,
}

impl SearchModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// A blank query resets to an empty result set without a service call.
    pub async fn search<M: Mirror>(&mut self, service: &PenService<M>, query: &str) {
        if query.trim().is_empty() {
            self.state.succeed(Vec::new());
            return;
        }

        self.state.begin();
        match service.search(query).await {
            Ok(pens) => self.state.succeed(pens),
            Err(err) => {
                tracing::error!(error = %err, "error searching pens");
                self.state.fail(SEARCH_FAILED);
            }
        }
    }
}

/// The detail page for one pen. Not-found is data (`Success(None)`), kept
/// distinct from a transient failure.
#[derive(Debug, Default)]
pub struct PenModel {
    pub state: RequestState<Option<Pen>>,
}

impl PenModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn load<M: Mirror>(&mut self, service: &PenService<M>, id: PenId) {
        self.state.begin();
        match service.get_by_id(id).await {
            Ok(pen) => self.state.succeed(pen),
            Err(err) => {
                tracing::error!(error = %err, "error loading pen");
                self.state.fail(LOAD_PEN_FAILED);
            }
        }
    }

    /// Bump the view counter and refresh the loaded pen. Failures are logged
    /// only; a missed view count never breaks the page.
    pub async fn record_view<M: Mirror>(&mut self, service: &mut PenService<M>, id: PenId) {
        match service.view_pen(id).await {
            Ok(Some(updated)) => {
                if let RequestState::Success(pen) = &mut self.state {
                    *pen = Some(updated);
                }
            }
            Ok(None) => {}
            Err(err) => tracing::error!(error = %err, "error recording view"),
        }
    }
}
