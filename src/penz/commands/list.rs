use crate::model::Pen;

/// All pens, cloned, most recently updated first.
pub fn run(pens: &[Pen]) -> Vec<Pen> {
    let mut all = pens.to_vec();
    all.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    all
}
