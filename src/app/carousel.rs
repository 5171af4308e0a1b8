/// Cursor over the displayed tools in the single-card layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
}

impl Carousel {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }

    /// Advance one slot, wrapping to the first after the last.
    pub fn next(&mut self, len: usize) {
        self.index = if self.index + 1 >= len { 0 } else { self.index + 1 };
    }

    /// Step back one slot, wrapping to the last from the first.
    pub fn previous(&mut self, len: usize) {
        self.index = match len {
            0 => 0,
            _ if self.index == 0 || self.index >= len => len - 1,
            _ => self.index - 1,
        };
    }

    /// Jump to `slot`; ignored when out of range.
    pub fn go_to(&mut self, slot: usize, len: usize) -> bool {
        if slot < len {
            self.index = slot;
            true
        } else {
            false
        }
    }

    pub fn current<'a, T>(&self, items: &'a [T]) -> Option<&'a T> {
        items.get(self.index)
    }
}
