use crate::error::Result;
use crate::model::Pen;

const PENS_JSON: &str = include_str!("seed/pens.json");

/// The built-in gallery fixture, newest first.
pub fn pens() -> Result<Vec<Pen>> {
    let pens: Vec<Pen> = serde_json::from_str(PENS_JSON)?;
    Ok(pens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn fixture_parses() {
        assert!(!pens().unwrap().is_empty());
    }

    #[test]
    fn fixture_ids_are_unique_and_positive() {
        let pens = pens().unwrap();
        let ids: HashSet<_> = pens.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), pens.len());
        assert!(pens.iter().all(|p| p.id > 0));
    }

    #[test]
    fn fixture_timestamps_are_ordered() {
        for pen in pens().unwrap() {
            assert!(pen.updated_at >= pen.created_at, "pen {}", pen.id);
        }
    }
}
