use crate::model::Pen;

/// Maximum number of pens in the trending feed.
pub const TRENDING_LIMIT: usize = 10;

/// Top pens by combined likes + views. The sort is stable, so ties keep
/// their collection order; only the returned slice is cloned.
pub fn run(pens: &[Pen]) -> Vec<Pen> {
    let mut ranked: Vec<&Pen> = pens.iter().collect();
    ranked.sort_by(|a, b| b.popularity().cmp(&a.popularity()));
    ranked.into_iter().take(TRENDING_LIMIT).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PenDraft;

    fn pen_with_score(id: u64, likes: u64, views: u64) -> Pen {
        let mut pen = Pen::from_draft(id, PenDraft::titled(format!("Pen {}", id)));
        pen.likes = likes;
        pen.views = views;
        pen
    }

    #[test]
    fn ranks_by_combined_score() {
        let pens = vec![pen_with_score(1, 5, 10), pen_with_score(2, 20, 1)];
        let trending = run(&pens);
        assert_eq!(
            trending.iter().map(|p| p.id).collect::<Vec<_>>(),
            vec![2, 1]
        );
    }

    #[test]
    fn never_returns_more_than_the_limit() {
        let pens: Vec<Pen> = (1..=15).map(|id| pen_with_score(id, id, 0)).collect();
        assert_eq!(run(&pens).len(), TRENDING_LIMIT);
    }

    #[test]
    fn ties_keep_collection_order() {
        let pens = vec![
            pen_with_score(1, 3, 0),
            pen_with_score(2, 0, 3),
            pen_with_score(3, 9, 0),
        ];
        let trending = run(&pens);
        assert_eq!(
            trending.iter().map(|p| p.id).collect::<Vec<_>>(),
            vec![3, 1, 2]
        );
    }
}
