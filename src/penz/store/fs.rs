use super::Mirror;
use crate::error::{PenzError, Result};
use crate::model::{Pen, PenDraft, PenId};
use std::fs;
use std::path::{Path, PathBuf};

const PEN_FILE_PREFIX: &str = "pen-";
const PEN_FILE_EXT: &str = ".json";
const FORK_FILENAME: &str = "pending_fork.json";

/// File-based mirror: one JSON file per pen under a root directory, plus a
/// transient fork-handoff file.
pub struct FileMirror {
    root: PathBuf,
}

impl FileMirror {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn pen_filename(id: PenId) -> String {
        format!("{}{}{}", PEN_FILE_PREFIX, id, PEN_FILE_EXT)
    }

    fn pen_path(&self, id: PenId) -> PathBuf {
        self.root.join(Self::pen_filename(id))
    }

    fn fork_path(&self) -> PathBuf {
        self.root.join(FORK_FILENAME)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(PenzError::Io)?;
        }
        Ok(())
    }
}

impl Mirror for FileMirror {
    fn save_pen(&mut self, pen: &Pen) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(pen).map_err(PenzError::Serialization)?;
        fs::write(self.pen_path(pen.id), content).map_err(PenzError::Io)?;
        Ok(())
    }

    fn remove_pen(&mut self, id: PenId) -> Result<()> {
        let path = self.pen_path(id);
        if path.exists() {
            fs::remove_file(path).map_err(PenzError::Io)?;
        }
        Ok(())
    }

    fn load_pens(&self) -> Result<Vec<Pen>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let mut pens = Vec::new();
        for entry in fs::read_dir(&self.root).map_err(PenzError::Io)? {
            let entry = entry.map_err(PenzError::Io)?;
            let name = entry.file_name();
            let name = name.to_string_lossy();
            if !name.starts_with(PEN_FILE_PREFIX) || !name.ends_with(PEN_FILE_EXT) {
                continue;
            }
            let content = fs::read_to_string(entry.path()).map_err(PenzError::Io)?;
            let pen: Pen = serde_json::from_str(&content).map_err(PenzError::Serialization)?;
            pens.push(pen);
        }

        // Newest first, matching the in-session head-insertion order
        pens.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(pens)
    }

    fn stash_fork(&mut self, draft: &PenDraft) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(draft).map_err(PenzError::Serialization)?;
        fs::write(self.fork_path(), content).map_err(PenzError::Io)?;
        Ok(())
    }

    fn take_fork(&mut self) -> Result<Option<PenDraft>> {
        let path = self.fork_path();
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path).map_err(PenzError::Io)?;
        let draft: PenDraft = serde_json::from_str(&content).map_err(PenzError::Serialization)?;
        fs::remove_file(path).map_err(PenzError::Io)?;
        Ok(Some(draft))
    }
}
