use super::helpers::find_pen;
use crate::model::{Pen, PenId};

/// A clone of the matching pen, or the not-found sentinel.
pub fn run(pens: &[Pen], id: PenId) -> Option<Pen> {
    find_pen(pens, id).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PenDraft;

    #[test]
    fn returns_a_copy_of_the_match() {
        let pens = vec![Pen::from_draft(3, PenDraft::titled("Starfield"))];
        let mut found = run(&pens, 3).unwrap();
        found.title = "Mutated".into();
        assert_eq!(pens[0].title, "Starfield");
    }

    #[test]
    fn absent_id_is_none() {
        let pens = vec![Pen::from_draft(3, PenDraft::titled("Starfield"))];
        assert!(run(&pens, 4).is_none());
    }
}
