use std::fmt::{self, Display};

/// One explicitly assigned cell of a sparse matrix.
///
/// The value may change over the entry's lifetime, the coordinates may not.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry<T> {
    pub value: T,
    row: u32,
    col: u32,
}

impl<T> Entry<T> {
    pub(crate) fn new(value: T, row: u32, col: u32) -> Self {
        Self { value, row, col }
    }

    pub fn row(&self) -> u32 {
        self.row
    }

    pub fn col(&self) -> u32 {
        self.col
    }

    pub fn coords(&self) -> (u32, u32) {
        (self.row, self.col)
    }
}

impl<T: Display> Display for Entry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}] = {}", self.row, self.col, self.value)
    }
}
