use crate::model::Pen;

/// Case-insensitive substring match against the title or the author's name.
/// A blank query matches nothing, not everything.
pub fn run(pens: &[Pen], query: &str) -> Vec<Pen> {
    let term = query.trim().to_lowercase();
    if term.is_empty() {
        return Vec::new();
    }

    pens.iter()
        .filter(|pen| {
            pen.title.to_lowercase().contains(&term)
                || pen.author.name.to_lowercase().contains(&term)
        })
        .cloned()
        .collect()
}
