//! # Persistence Mirror
//!
//! The authoritative pen collection lives in memory, owned by the service.
//! The [`Mirror`] trait is the write-through persistence surface next to it:
//! create/update/delete push records through, reads never consult it during a
//! session. It also carries the transient fork-handoff slot.
//!
//! ## Implementations
//!
//! - [`fs::FileMirror`]: production file-based mirror
//!   - One `pen-{id}.json` file per record
//!   - Transient fork draft in `pending_fork.json`
//! - [`memory::InMemoryMirror`]: map-backed mirror for testing
//!
//! ## Recovery
//!
//! `load_pens` exists for one purpose: rebuilding the in-memory collection at
//! process start. Once the service is running the mirror is write-only.

use crate::error::Result;
use crate::model::{Pen, PenDraft, PenId};

pub mod fs;
pub mod memory;

/// Write-through persistence surface for the pen collection.
pub trait Mirror {
    /// Write or overwrite the mirror entry for a pen
    fn save_pen(&mut self, pen: &Pen) -> Result<()>;

    /// Remove a pen's mirror entry; an absent entry is not an error
    fn remove_pen(&mut self, id: PenId) -> Result<()>;

    /// All mirrored pens, newest first, for recovery at startup
    fn load_pens(&self) -> Result<Vec<Pen>>;

    /// Stash the fork-handoff draft, replacing any previous one
    fn stash_fork(&mut self, draft: &PenDraft) -> Result<()>;

    /// Take the fork-handoff draft, clearing the slot
    fn take_fork(&mut self) -> Result<Option<PenDraft>>;
}
