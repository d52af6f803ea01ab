use super::Mirror;
use crate::error::Result;
use crate::model::{Pen, PenDraft, PenId};
use std::collections::HashMap;

/// In-memory mirror for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryMirror {
    pens: HashMap<PenId, Pen>,
    fork: Option<PenDraft>,
}

impl InMemoryMirror {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: PenId) -> bool {
        self.pens.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.pens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pens.is_empty()
    }

    pub fn pending_fork(&self) -> Option<&PenDraft> {
        self.fork.as_ref()
    }
}

impl Mirror for InMemoryMirror {
    fn save_pen(&mut self, pen: &Pen) -> Result<()> {
        self.pens.insert(pen.id, pen.clone());
        Ok(())
    }

    fn remove_pen(&mut self, id: PenId) -> Result<()> {
        self.pens.remove(&id);
        Ok(())
    }

    fn load_pens(&self) -> Result<Vec<Pen>> {
        let mut pens: Vec<Pen> = self.pens.values().cloned().collect();
        pens.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(pens)
    }

    fn stash_fork(&mut self, draft: &PenDraft) -> Result<()> {
        self.fork = Some(draft.clone());
        Ok(())
    }

    fn take_fork(&mut self) -> Result<Option<PenDraft>> {
        Ok(self.fork.take())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::error::PenzError;

    /// A mirror whose writes always fail, for exercising the transient-failure
    /// path of the service and view-models.
    #[derive(Default)]
    pub struct FailingMirror;

    impl Mirror for FailingMirror {
        fn save_pen(&mut self, _pen: &Pen) -> Result<()> {
            Err(PenzError::Store("mirror unavailable".to_string()))
        }

        fn remove_pen(&mut self, _id: PenId) -> Result<()> {
            Err(PenzError::Store("mirror unavailable".to_string()))
        }

        fn load_pens(&self) -> Result<Vec<Pen>> {
            Err(PenzError::Store("mirror unavailable".to_string()))
        }

        fn stash_fork(&mut self, _draft: &PenDraft) -> Result<()> {
            Err(PenzError::Store("mirror unavailable".to_string()))
        }

        fn take_fork(&mut self) -> Result<Option<PenDraft>> {
            Err(PenzError::Store("mirror unavailable".to_string()))
        }
    }
}
