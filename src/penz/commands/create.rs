use crate::error::Result;
use crate::model::{Pen, PenDraft, PenId};
use crate::store::Mirror;

/// Create a pen from a draft under the given id, mirror it, and return a
/// copy. New pens sit at the head of the collection.
pub fn run<M: Mirror>(
    pens: &mut Vec<Pen>,
    mirror: &mut M,
    id: PenId,
    draft: PenDraft,
) -> Result<Pen> {
    let pen = Pen::from_draft(id, draft);
    pens.insert(0, pen.clone());
    mirror.save_pen(&pen)?;
    Ok(pen)
}
