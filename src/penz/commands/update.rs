use super::helpers::find_pen_mut;
use crate::error::Result;
use crate::model::{Pen, PenId, PenPatch};
use crate::store::Mirror;

/// Shallow-merge a patch onto the matching pen, refresh `updated_at`,
/// mirror, and return a copy. The not-found sentinel if the id is absent.
pub fn run<M: Mirror>(
    pens: &mut [Pen],
    mirror: &mut M,
    id: PenId,
    patch: PenPatch,
) -> Result<Option<Pen>> {
    let pen = match find_pen_mut(pens, id) {
        Some(pen) => pen,
        None => return Ok(None),
    };

    patch.apply(pen);
    pen.touch();
    mirror.save_pen(pen)?;
    Ok(Some(pen.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PenDraft;
    use crate::store::memory::InMemoryMirror;

    fn seeded() -> Vec<Pen> {
        vec![Pen::from_draft(
            1,
            PenDraft {
                title: Some("Original".into()),
                html: Some("<p>hi</p>".into()),
                ..PenDraft::default()
            },
        )]
    }

    #[test]
    fn merges_and_refreshes_updated_at() {
        let mut pens = seeded();
        let mut mirror = InMemoryMirror::new();
        let before = pens[0].updated_at;

        let patch = PenPatch {
            title: Some("Renamed".into()),
            ..PenPatch::default()
        };
        let updated = run(&mut pens, &mut mirror, 1, patch).unwrap().unwrap();

        assert_eq!(updated.title, "Renamed");
        assert_eq!(updated.html, "<p>hi</p>");
        assert!(updated.updated_at >= before);
        assert!(mirror.contains(1));
    }

    #[test]
    fn absent_id_leaves_store_untouched() {
        let mut pens = seeded();
        let mut mirror = InMemoryMirror::new();

        let patch = PenPatch {
            title: Some("Renamed".into()),
            ..PenPatch::default()
        };
        let result = run(&mut pens, &mut mirror, 9, patch).unwrap();

        assert!(result.is_none());
        assert_eq!(pens[0].title, "Original");
        assert!(mirror.is_empty());
    }
}
