use super::helpers::position;
use crate::error::Result;
use crate::model::{Pen, PenId};
use crate::store::Mirror;

/// Splice the pen out of the collection and drop its mirror entry.
/// No tombstone is left and the id is never reused.
pub fn run<M: Mirror>(pens: &mut Vec<Pen>, mirror: &mut M, id: PenId) -> Result<bool> {
    let idx = match position(pens, id) {
        Some(idx) => idx,
        None => return Ok(false),
    };

    pens.remove(idx);
    mirror.remove_pen(id)?;
    Ok(true)
}
