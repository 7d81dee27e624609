use std::fmt::Display;
use std::fmt::Formatter;

use crate::containers::StorageKey;

/// A colour from the palette `{0, ..., num_colours - 1}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Colour {
    pub id: u32,
}

impl Colour {
    pub fn new(id: u32) -> Self {
        Colour { id }
    }

    /// Returns all colours of a palette with `num_colours` colours, in their natural order.
    pub fn palette(num_colours: u32) -> impl Iterator<Item = Colour> {
        (0..num_colours).map(Colour::new)
    }
}

impl StorageKey for Colour {
    fn index(&self) -> usize {
        self.id as usize
    }

    fn create_from_index(index: usize) -> Self {
        Colour::new(index as u32)
    }
}

impl Display for Colour {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id)
    }
}
