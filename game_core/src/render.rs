//! Drawing seam between the simulation and whatever host paints the frame
//!
//! The core only hands out geometry. Colours, brushes and buffering are host concerns.

use crate::Rect;

/// Something the host can fill shapes on
pub trait Surface {
    fn fill_rect(&mut self, rect: Rect);

    /// Ellipse inscribed in `bounds`
    fn fill_ellipse(&mut self, bounds: Rect);
}

/// One recorded draw call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawCommand {
    FillRect(Rect),
    FillEllipse(Rect),
}

/// Surface that records draw calls in order, for batching hosts and tests
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayList {
    pub commands: Vec<DrawCommand>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter()
    }
}

impl Surface for DisplayList {
    fn fill_rect(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::FillRect(rect));
    }

    fn fill_ellipse(&mut self, bounds: Rect) {
        self.commands.push(DrawCommand::FillEllipse(bounds));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_list_records_in_order() {
        let mut list = DisplayList::new();
        assert!(list.is_empty());

        list.fill_rect(Rect::new(0, 0, 10, 50));
        list.fill_ellipse(Rect::new(20, 20, 10, 10));

        assert_eq!(list.len(), 2);
        assert_eq!(
            list.iter().copied().collect::<Vec<_>>(),
            vec![
                DrawCommand::FillRect(Rect::new(0, 0, 10, 50)),
                DrawCommand::FillEllipse(Rect::new(20, 20, 10, 10)),
            ]
        );

        list.clear();
        assert!(list.is_empty());
    }
}
