use super::helpers::find_pen_mut;
use crate::model::{Pen, PenId};

/// Record a like: bump the counter by exactly one and refresh `updated_at`.
pub fn like(pens: &mut [Pen], id: PenId) -> Option<Pen> {
    bump(pens, id, Counter::Likes)
}

/// Record a view: bump the counter by exactly one and refresh `updated_at`.
pub fn view(pens: &mut [Pen], id: PenId) -> Option<Pen> {
    bump(pens, id, Counter::Views)
}

enum Counter {
    Likes,
    Views,
}

// Engagement never touches the mirror; only create/update/delete persist.
fn bump(pens: &mut [Pen], id: PenId, counter: Counter) -> Option<Pen> {
    let pen = find_pen_mut(pens, id)?;
    match counter {
        Counter::Likes => pen.likes += 1,
        Counter::Views => pen.views += 1,
    }
    pen.touch();
    Some(pen.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PenDraft;

    fn seeded() -> Vec<Pen> {
        vec![Pen::from_draft(
            1,
            PenDraft {
                title: Some("Starfield".into()),
                html: Some("<canvas></canvas>".into()),
                ..PenDraft::default()
            },
        )]
    }

    #[test]
    fn like_bumps_exactly_one_counter() {
        let mut pens = seeded();
        let before = pens[0].clone();

        let liked = like(&mut pens, 1).unwrap();

        assert_eq!(liked.likes, before.likes + 1);
        assert_eq!(liked.views, before.views);
        assert_eq!(liked.title, before.title);
        assert_eq!(liked.html, before.html);
        assert_eq!(liked.created_at, before.created_at);
        assert!(liked.updated_at >= before.updated_at);
    }

    #[test]
    fn view_bumps_exactly_one_counter() {
        let mut pens = seeded();
        let viewed = view(&mut pens, 1).unwrap();
        assert_eq!(viewed.views, 1);
        assert_eq!(viewed.likes, 0);
    }

    #[test]
    fn absent_id_mutates_nothing() {
        let mut pens = seeded();
        assert!(like(&mut pens, 9).is_none());
        assert!(view(&mut pens, 9).is_none());
        assert_eq!(pens[0].likes, 0);
        assert_eq!(pens[0].views, 0);
    }

    #[test]
    fn counters_only_ever_grow() {
        let mut pens = seeded();
        for _ in 0..5 {
            like(&mut pens, 1);
            view(&mut pens, 1);
        }
        assert_eq!(pens[0].likes, 5);
        assert_eq!(pens[0].views, 5);
    }
}
