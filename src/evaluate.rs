use crate::data_structures::sparse_matrix::SparseMatrix;

/// Counts the logical cells of `matrix` whose value satisfies `predicate`.
///
/// The logical cells are the `rows() x columns()` rectangle, unoccupied
/// cells included. An empty matrix has no logical cells and always yields 0.
pub fn evaluate<T, E, P>(matrix: &SparseMatrix<T, E>, mut predicate: P) -> usize
where
    P: FnMut(&T) -> bool,
{
    if matrix.is_empty() {
        return 0;
    }

    let mut n = 0;
    if predicate(matrix.default_value()) {
        n += matrix
            .rows()
            .saturating_mul(matrix.columns())
            .saturating_sub(matrix.size());
    }
    n + matrix.iter().filter(|e| predicate(&e.value)).count()
}
