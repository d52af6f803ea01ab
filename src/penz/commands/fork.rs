use crate::error::Result;
use crate::model::{Pen, PenDraft};
use crate::store::Mirror;

/// A fork draft carries the source pen's three blobs under a "Fork of" title.
/// The author is left unset so the fork is created as the forking user.
pub fn draft_from(pen: &Pen) -> PenDraft {
    PenDraft {
        title: Some(format!("Fork of {}", pen.title)),
        html: Some(pen.html.clone()),
        css: Some(pen.css.clone()),
        javascript: Some(pen.javascript.clone()),
        author: None,
    }
}

/// Stash a fork draft in the mirror's transient slot for the next editor
/// session to pick up.
pub fn stash<M: Mirror>(mirror: &mut M, pen: &Pen) -> Result<PenDraft> {
    let draft = draft_from(pen);
    mirror.stash_fork(&draft)?;
    Ok(draft)
}

/// Take the stashed draft. Consuming clears the slot, so a fork is handed
/// off at most once.
pub fn take<M: Mirror>(mirror: &mut M) -> Result<Option<PenDraft>> {
    mirror.take_fork()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryMirror;

    #[test]
    fn draft_carries_sources_under_fork_title() {
        let mut pen = Pen::from_draft(1, PenDraft::titled("Starfield"));
        pen.html = "<canvas></canvas>".into();
        pen.css = "canvas { background: black; }".into();
        pen.javascript = "draw()".into();

        let draft = draft_from(&pen);
        assert_eq!(draft.title.as_deref(), Some("Fork of Starfield"));
        assert_eq!(draft.html.as_deref(), Some("<canvas></canvas>"));
        assert_eq!(draft.css.as_deref(), Some("canvas { background: black; }"));
        assert_eq!(draft.javascript.as_deref(), Some("draw()"));
        assert!(draft.author.is_none());
    }

    #[test]
    fn stash_then_take_consumes_the_slot() {
        let mut mirror = InMemoryMirror::new();
        let pen = Pen::from_draft(1, PenDraft::titled("Starfield"));

        stash(&mut mirror, &pen).unwrap();

        let taken = take(&mut mirror).unwrap().unwrap();
        assert_eq!(taken.title.as_deref(), Some("Fork of Starfield"));
        assert!(take(&mut mirror).unwrap().is_none());
    }
}
