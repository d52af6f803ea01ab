use crate::model::{Pen, PenId};

pub fn find_pen(pens: &[Pen], id: PenId) -> Option<&Pen> {
    pens.iter().find(|p| p.id == id)
}

pub fn find_pen_mut(pens: &mut [Pen], id: PenId) -> Option<&mut Pen> {
    pens.iter_mut().find(|p| p.id == id)
}

pub fn position(pens: &[Pen], id: PenId) -> Option<usize> {
    pens.iter().position(|p| p.id == id)
}
