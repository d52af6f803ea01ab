//! # Service Facade
//!
//! [`PenService`] is the single entry point for all pen operations. It owns
//! the authoritative in-memory collection, the monotonic id counter, the
//! persistence mirror, and the latency simulator, and dispatches each call to
//! the matching command.
//!
//! Every operation is async and pauses for its simulated network delay before
//! touching the collection. Not-found is always a sentinel (`None`/`false`),
//! never an error; errors surface only when the mirror write-through fails,
//! and by then the in-memory mutation has already been applied. The mirror
//! is best-effort, not transactional.

use crate::commands;
use crate::error::Result;
use crate::latency::{self, Latency};
use crate::model::{Pen, PenDraft, PenId, PenPatch};
use crate::seed;
use crate::store::Mirror;

pub struct PenService<M: Mirror> {
    pens: Vec<Pen>,
    next_id: PenId,
    mirror: M,
    latency: Latency,
}

impl<M: Mirror> PenService<M> {
    /// An empty service. Ids start at 1.
    pub fn new(mirror: M) -> Self {
        Self::with_pens(mirror, Vec::new())
    }

    /// A service over an explicit collection. The id counter starts one past
    /// the highest existing id and never goes back, so deleted ids are not
    /// reused.
    pub fn with_pens(mirror: M, pens: Vec<Pen>) -> Self {
        let next_id = pens.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        Self {
            pens,
            next_id,
            mirror,
            latency: Latency::simulated(),
        }
    }

    /// Recover the collection from the mirror. An empty mirror is seeded
    /// with the built-in fixture, which is mirrored back so the next session
    /// starts from the same place.
    pub fn open(mut mirror: M) -> Result<Self> {
        let mut pens = mirror.load_pens()?;
        if pens.is_empty() {
            pens = seed::pens()?;
            for pen in &pens {
                mirror.save_pen(pen)?;
            }
            tracing::debug!(count = pens.len(), "seeded mirror from fixture");
        } else {
            tracing::debug!(count = pens.len(), "recovered pens from mirror");
        }
        Ok(Self::with_pens(mirror, pens))
    }

    pub fn with_latency(mut self, latency: Latency) -> Self {
        self.latency = latency;
        self
    }

    pub fn mirror(&self) -> &M {
        &self.mirror
    }

    /// All pens, most recently updated first.
    pub async fn get_all(&self) -> Result<Vec<Pen>> {
        self.latency.pause(latency::DEFAULT).await;
        Ok(commands::list::run(&self.pens))
    }

    /// The matching pen, or `None`.
    pub async fn get_by_id(&self, id: PenId) -> Result<Option<Pen>> {
        self.latency.pause(latency::DEFAULT).await;
        Ok(commands::get::run(&self.pens, id))
    }

    /// Top pens by likes + views.
    pub async fn get_trending(&self) -> Result<Vec<Pen>> {
        self.latency.pause(latency::DEFAULT).await;
        Ok(commands::trending::run(&self.pens))
    }

    /// Pens whose title or author matches the query.
    pub async fn search(&self, query: &str) -> Result<Vec<Pen>> {
        self.latency.pause(latency::SEARCH).await;
        Ok(commands::search::run(&self.pens, query))
    }

    /// Create a pen from a draft. The id is consumed even if the mirror
    /// write fails, keeping ids strictly increasing.
    pub async fn create(&mut self, draft: PenDraft) -> Result<Pen> {
        self.latency.pause(latency::DEFAULT).await;
        let id = self.next_id;
        self.next_id += 1;
        commands::create::run(&mut self.pens, &mut self.mirror, id, draft)
    }

    /// Merge a patch onto the matching pen.
    pub async fn update(&mut self, id: PenId, patch: PenPatch) -> Result<Option<Pen>> {
        self.latency.pause(latency::DEFAULT).await;
        commands::update::run(&mut self.pens, &mut self.mirror, id, patch)
    }

    /// Remove the matching pen. `false` if the id is absent.
    pub async fn delete(&mut self, id: PenId) -> Result<bool> {
        self.latency.pause(latency::DEFAULT).await;
        commands::delete::run(&mut self.pens, &mut self.mirror, id)
    }

    /// Record a like on the matching pen.
    pub async fn like_pen(&mut self, id: PenId) -> Result<Option<Pen>> {
        self.latency.pause(latency::LIKE).await;
        Ok(commands::engagement::like(&mut self.pens, id))
    }

    /// Record a view on the matching pen.
    pub async fn view_pen(&mut self, id: PenId) -> Result<Option<Pen>> {
        self.latency.pause(latency::VIEW).await;
        Ok(commands::engagement::view(&mut self.pens, id))
    }

    /// Stash a fork draft of the matching pen for the next editor session.
    pub async fn fork_pen(&mut self, id: PenId) -> Result<Option<PenDraft>> {
        self.latency.pause(latency::DEFAULT).await;
        let pen = match commands::get::run(&self.pens, id) {
            Some(pen) => pen,
            None => return Ok(None),
        };
        commands::fork::stash(&mut self.mirror, &pen).map(Some)
    }

    /// Take the stashed fork draft, if one is waiting.
    pub fn take_pending_fork(&mut self) -> Result<Option<PenDraft>> {
        commands::fork::take(&mut self.mirror)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::FailingMirror;
    use crate::store::memory::InMemoryMirror;

    fn service() -> PenService<InMemoryMirror> {
        PenService::new(InMemoryMirror::new()).with_latency(Latency::none())
    }

    #[tokio::test]
    async fn create_assigns_strictly_increasing_ids() {
        let mut service = service();

        let a = service.create(PenDraft::titled("A")).await.unwrap();
        let b = service.create(PenDraft::titled("B")).await.unwrap();
        assert!(b.id > a.id);

        // Deleting the highest id must not cause reuse
        assert!(service.delete(b.id).await.unwrap());
        let c = service.create(PenDraft::titled("C")).await.unwrap();
        assert!(c.id > b.id);
    }

    #[tokio::test]
    async fn created_pens_show_up_in_get_all() {
        let mut service = service();
        let pen = service.create(PenDraft::titled("Visible")).await.unwrap();

        let all = service.get_all().await.unwrap();
        assert!(all.iter().any(|p| p.id == pen.id));
    }

    #[tokio::test]
    async fn sentinel_returns_for_absent_ids() {
        let mut service = service();

        assert!(service.get_by_id(42).await.unwrap().is_none());
        assert!(service
            .update(42, PenPatch::default())
            .await
            .unwrap()
            .is_none());
        assert!(!service.delete(42).await.unwrap());
        assert!(service.like_pen(42).await.unwrap().is_none());
        assert!(service.view_pen(42).await.unwrap().is_none());
        assert!(service.fork_pen(42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn fork_roundtrip_through_the_stash() {
        let mut service = service();
        let pen = service.create(PenDraft::titled("Starfield")).await.unwrap();

        service.fork_pen(pen.id).await.unwrap().unwrap();

        let draft = service.take_pending_fork().unwrap().unwrap();
        assert_eq!(draft.title.as_deref(), Some("Fork of Starfield"));
        assert!(service.take_pending_fork().unwrap().is_none());
    }

    #[tokio::test]
    async fn open_seeds_an_empty_mirror() {
        let service = PenService::open(InMemoryMirror::new())
            .unwrap()
            .with_latency(Latency::none());

        let all = service.get_all().await.unwrap();
        assert!(!all.is_empty());
        assert_eq!(service.mirror().len(), all.len());
    }

    #[tokio::test]
    async fn open_prefers_mirrored_records_over_the_fixture() {
        let mut mirror = InMemoryMirror::new();
        let pen = Pen::from_draft(1, PenDraft::titled("Recovered"));
        mirror.save_pen(&pen).unwrap();

        let service = PenService::open(mirror)
            .unwrap()
            .with_latency(Latency::none());

        let all = service.get_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].title, "Recovered");
    }

    #[tokio::test]
    async fn mirror_failure_surfaces_from_create() {
        let mut service = PenService::new(FailingMirror).with_latency(Latency::none());
        assert!(service.create(PenDraft::titled("Doomed")).await.is_err());
        // The in-memory mutation still happened; the mirror is best-effort
        assert_eq!(service.get_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn returned_copies_do_not_alias_the_store() {
        let mut service = service();
        let pen = service.create(PenDraft::titled("Original")).await.unwrap();

        let mut copy = service.get_by_id(pen.id).await.unwrap().unwrap();
        copy.title = "Mutated".into();

        let fresh = service.get_by_id(pen.id).await.unwrap().unwrap();
        assert_eq!(fresh.title, "Original");
    }
}
