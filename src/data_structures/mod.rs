pub mod entry;
pub mod iter;
pub mod sparse_matrix;

/// Comparison capability used by [`sparse_matrix::SparseMatrix`].
///
/// This is the only way two values of the element type are ever compared,
/// so the element type itself never has to implement `PartialEq`.
pub trait Equality<T> {
    fn equals(&self, a: &T, b: &T) -> bool;
}

impl<T, F> Equality<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    fn equals(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// Compares with the element type's own `PartialEq`.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdEq;

impl<T> Equality<T> for StdEq
where
    T: PartialEq,
{
    fn equals(&self, a: &T, b: &T) -> bool {
        a == b
    }
}
