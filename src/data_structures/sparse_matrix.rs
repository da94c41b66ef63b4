use std::{
    fmt::{self, Debug, Display},
    ops::Index,
};

use ndarray::Array2;
use tracing::{debug, trace, warn};

use crate::{
    data_structures::{
        entry::Entry,
        iter::{Iter, IterMut},
        Equality,
    },
    error::{Error, Result},
};

/// Sparse matrix over an unbounded `u32 x u32` index space.
///
/// Only explicitly assigned cells are stored. Every other cell reads as the
/// default value. Values are compared exclusively through `E`.
#[derive(Clone)]
pub struct SparseMatrix<T, E> {
    /// Stored cells, sorted by `(row, col)`, at most one per coordinate
    entries: Vec<Entry<T>>,
    /// Value of every cell without an entry
    default: T,
    equals: E,
}

impl<T, E> SparseMatrix<T, E>
where
    E: Default,
{
    pub fn new(default: T) -> Self {
        Self::with_equality(default, E::default())
    }
}

impl<T, E> SparseMatrix<T, E> {
    pub fn with_equality(default: T, equals: E) -> Self {
        Self {
            entries: Vec::new(),
            default,
            equals,
        }
    }

    pub fn default_value(&self) -> &T {
        &self.default
    }

    /// Replaces the value read at every unoccupied cell. Stored entries are
    /// left alone, even those holding the old default.
    pub fn set_default(&mut self, default: T) {
        self.default = default;
    }

    /// Number of stored entries.
    pub fn size(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// One past the largest stored row, 0 when empty.
    pub fn rows(&self) -> usize {
        // entries are sorted, so the last one carries the largest row
        self.entries.last().map_or(0, |e| e.row() as usize + 1)
    }

    /// One past the largest stored column, 0 when empty.
    pub fn columns(&self) -> usize {
        self.entries
            .iter()
            .map(|e| e.col() as usize + 1)
            .max()
            .unwrap_or(0)
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows(), self.columns())
    }

    /// Value at `(row, col)`, or the default if nothing is stored there.
    ///
    /// Any coordinate may be queried, including ones beyond the logical
    /// extent. Unoccupied cells are read-only: the shared default can only
    /// be changed through [`SparseMatrix::set_default`].
    pub fn get(&self, row: u32, col: u32) -> &T {
        match self.position(row, col) {
            Some(i) => &self.entries[i].value,
            None => &self.default,
        }
    }

    /// Mutable access to a stored value. `None` for unoccupied cells.
    pub fn get_mut(&mut self, row: u32, col: u32) -> Option<&mut T> {
        let i = self.position(row, col)?;
        Some(&mut self.entries[i].value)
    }

    pub fn contains(&self, row: u32, col: u32) -> bool {
        self.position(row, col).is_some()
    }

    /// Drops every entry and releases the storage. The default is kept.
    pub fn clear(&mut self) {
        if !self.entries.is_empty() {
            debug!(size = self.entries.len(), "clearing matrix");
        }
        self.entries = Vec::new();
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.entries)
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(&mut self.entries)
    }

    /// Cursor at the first stored entry in row-major order.
    pub fn begin(&self) -> Iter<'_, T> {
        self.iter()
    }

    /// Cursor one past the last stored entry.
    pub fn end(&self) -> Iter<'_, T> {
        Iter::new(&self.entries[self.entries.len()..])
    }

    /// Full dump of the logical extent, defaults included.
    pub fn show(&self) -> Show<'_, T, E> {
        Show { matrix: self }
    }

    /// Materialises the `rows() x columns()` logical extent.
    ///
    /// Memory grows with the extent, not with the number of stored entries.
    /// Fails with [`Error::Extent`] when the cell count overflows `usize` and
    /// with [`Error::Alloc`] when the cells cannot be allocated.
    pub fn to_dense(&self) -> Result<Array2<T>>
    where
        T: Clone,
    {
        let (rows, columns) = self.shape();
        let len = rows
            .checked_mul(columns)
            .ok_or(Error::Extent { rows, columns })?;

        let mut cells = Vec::new();
        cells.try_reserve_exact(len)?;
        cells.resize(len, self.default.clone());
        for entry in &self.entries {
            cells[entry.row() as usize * columns + entry.col() as usize] = entry.value.clone();
        }
        Ok(Array2::from_shape_vec((rows, columns), cells)?)
    }

    /// Deep copy that reports allocation failure instead of aborting.
    pub fn try_clone(&self) -> Result<Self>
    where
        T: Clone,
        E: Clone,
    {
        let mut entries = Vec::new();
        entries.try_reserve_exact(self.entries.len())?;
        entries.extend(self.entries.iter().cloned());
        Ok(Self {
            entries,
            default: self.default.clone(),
            equals: self.equals.clone(),
        })
    }

    /// Replaces the whole state of `self` with a deep copy of `other`.
    ///
    /// The copy is built before `self` is touched. If building it fails,
    /// `self` is cleared and the error returned.
    pub fn assign_from(&mut self, other: &Self) -> Result<()>
    where
        T: Clone,
        E: Clone,
    {
        match other.try_clone() {
            Ok(copy) => {
                *self = copy;
                Ok(())
            }
            Err(err) => Err(self.abandon(err)),
        }
    }

    fn position(&self, row: u32, col: u32) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| e.row() == row && e.col() == col)
    }

    /// Appends `entry` and restores row-major order.
    fn push_entry(&mut self, entry: Entry<T>) -> Result<()> {
        if let Err(err) = self.entries.try_reserve(1) {
            return Err(self.abandon(err.into()));
        }
        debug!(
            row = entry.row(),
            col = entry.col(),
            size = self.entries.len() + 1,
            "inserting entry"
        );
        self.entries.push(entry);
        self.sort();
        Ok(())
    }

    /// Drops every entry after a failed allocation and hands the error back.
    fn abandon(&mut self, err: Error) -> Error {
        warn!(size = self.entries.len(), "{err}, clearing matrix");
        self.clear();
        err
    }

    fn sort(&mut self) {
        // stable, so entries with equal keys keep their relative order
        self.entries.sort_by_key(|e| e.coords());
    }
}

impl<T, E> SparseMatrix<T, E>
where
    E: Equality<T>,
{
    /// Inserts `value` at `(row, col)`.
    ///
    /// Inserting the value already read at that cell is a no-op, so is
    /// inserting the default into an unoccupied cell. A stored entry is
    /// overwritten in place, otherwise a new entry is added. The very first
    /// entry of an empty matrix is stored without any comparison.
    ///
    /// On allocation failure the matrix is cleared and the error returned.
    pub fn add(&mut self, value: T, row: u32, col: u32) -> Result<()> {
        if self.entries.is_empty() {
            return self.push_entry(Entry::new(value, row, col));
        }

        let slot = self.position(row, col);
        let current = match slot {
            Some(i) => &self.entries[i].value,
            None => &self.default,
        };
        if self.equals.equals(&value, current) {
            trace!(row, col, "value already present, insert ignored");
            return Ok(());
        }

        match slot {
            Some(i) => {
                debug!(row, col, "overwriting stored entry");
                self.entries[i].value = value;
                Ok(())
            }
            None => self.push_entry(Entry::new(value, row, col)),
        }
    }

    /// Builds a matrix by re-inserting, front to back, every entry of a
    /// matrix with a different element type.
    ///
    /// ```
    /// use sparse_assoc::{SparseMatrix, StdEq};
    ///
    /// let mut narrow: SparseMatrix<i32, StdEq> = SparseMatrix::new(0);
    /// narrow.add(7, 1, 2).unwrap();
    /// let wide: SparseMatrix<i64, StdEq> = SparseMatrix::convert_from(&narrow).unwrap();
    /// assert_eq!(wide[(1, 2)], 7);
    /// ```
    ///
    /// Element types without a conversion are rejected at compile time:
    ///
    /// ```compile_fail
    /// use sparse_assoc::{SparseMatrix, StdEq};
    ///
    /// let numbers: SparseMatrix<i32, StdEq> = SparseMatrix::new(0);
    /// let words: SparseMatrix<String, StdEq> = SparseMatrix::convert_from(&numbers).unwrap();
    /// ```
    pub fn convert_from<Q, F>(other: &SparseMatrix<Q, F>) -> Result<Self>
    where
        Q: Clone + Into<T>,
        E: Default,
    {
        Self::convert_from_with(other, E::default())
    }

    /// Like [`SparseMatrix::convert_from`] with an explicit comparator.
    pub fn convert_from_with<Q, F>(other: &SparseMatrix<Q, F>, equals: E) -> Result<Self>
    where
        Q: Clone + Into<T>,
    {
        let mut matrix = Self::with_equality(other.default_value().clone().into(), equals);
        for entry in other {
            // a failed add has already cleared `matrix`, which is dropped here
            matrix.add(entry.value.clone().into(), entry.row(), entry.col())?;
        }
        debug!(size = matrix.size(), "converted matrix");
        Ok(matrix)
    }
}

impl<T, E> Index<(u32, u32)> for SparseMatrix<T, E> {
    type Output = T;

    fn index(&self, (row, col): (u32, u32)) -> &Self::Output {
        self.get(row, col)
    }
}

impl<'a, T, E> IntoIterator for &'a SparseMatrix<T, E> {
    type Item = &'a Entry<T>;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, E> IntoIterator for &'a mut SparseMatrix<T, E> {
    type Item = &'a mut Entry<T>;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T: Debug, E> Debug for SparseMatrix<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SparseMatrix")
            .field("entries", &self.entries)
            .field("default", &self.default)
            .finish_non_exhaustive()
    }
}

/// Lists stored entries in row-major order, one `[row, col] = value` per
/// line. An empty matrix prints its default value instead.
impl<T: Display, E> Display for SparseMatrix<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.entries.is_empty() {
            return writeln!(f, "{}", self.default);
        }
        for entry in &self.entries {
            writeln!(f, "{}", entry)?;
        }
        Ok(())
    }
}

/// Row by row rendering of every logical cell, returned by
/// [`SparseMatrix::show`].
pub struct Show<'a, T, E> {
    matrix: &'a SparseMatrix<T, E>,
}

impl<'a, T: Display, E> Display for Show<'a, T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (rows, columns) = self.matrix.shape();
        // entries are row-major, so they come up in the same order as the cells
        let mut stored = self.matrix.iter().peekable();
        for i in 0..rows {
            writeln!(f)?;
            for j in 0..columns {
                let here = stored.next_if(|e| (e.row() as usize, e.col() as usize) == (i, j));
                let value = match here {
                    Some(e) => &e.value,
                    None => self.matrix.default_value(),
                };
                write!(f, "{} | ", value)?;
            }
        }
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_structures::StdEq;

    type IntMatrix = SparseMatrix<i32, StdEq>;

    fn coords<T, E>(m: &SparseMatrix<T, E>) -> Vec<(u32, u32)> {
        m.iter().map(|e| e.coords()).collect()
    }

    fn basic() -> IntMatrix {
        let mut m = IntMatrix::new(0);
        m.add(3, 0, 0).unwrap();
        m.add(9, 4, 2).unwrap();
        m.add(5, 7, 1).unwrap();
        m.add(4, 0, 1).unwrap();
        m.add(1, 3, 3).unwrap();
        m.add(3, 0, 2).unwrap();
        m.add(3, 0, 2).unwrap();
        m
    }

    #[test]
    fn test_basic_scenario() {
        let m = basic();
        assert_eq!(m.size(), 6);
        assert_eq!(m.rows(), 8);
        assert_eq!(m.columns(), 4);
        let listed: Vec<_> = m.iter().map(|e| (e.row(), e.col(), e.value)).collect();
        assert_eq!(
            listed,
            vec![
                (0, 0, 3),
                (0, 1, 4),
                (0, 2, 3),
                (3, 3, 1),
                (4, 2, 9),
                (7, 1, 5)
            ]
        );
    }

    #[test]
    fn test_new_matrix_is_empty() {
        let m = IntMatrix::new(7);
        assert!(m.is_empty());
        assert_eq!(m.shape(), (0, 0));
        assert_eq!(*m.default_value(), 7);
        assert_eq!(*m.get(0, 0), 7);
    }

    #[test]
    fn test_idempotent_insert() {
        let mut m = basic();
        m.add(8, 2, 5).unwrap();
        let size = m.size();
        m.add(8, 2, 5).unwrap();
        assert_eq!(m.size(), size);
        assert_eq!(*m.get(2, 5), 8);
    }

    #[test]
    fn test_insert_default_into_unoccupied_cell_is_noop() {
        let mut m = basic();
        m.add(0, 10, 10).unwrap();
        assert_eq!(m.size(), 6);
        assert!(!m.contains(10, 10));
        assert_eq!(m.rows(), 8);
    }

    #[test]
    fn test_overwrite_keeps_size() {
        let mut m = basic();
        m.add(11, 4, 2).unwrap();
        assert_eq!(m.size(), 6);
        assert_eq!(*m.get(4, 2), 11);
        assert_eq!(
            coords(&m),
            vec![(0, 0), (0, 1), (0, 2), (3, 3), (4, 2), (7, 1)]
        );
    }

    #[test]
    fn test_first_insert_skips_comparison() {
        let mut m = IntMatrix::new(0);
        m.add(0, 2, 3).unwrap();
        assert_eq!(m.size(), 1);
        assert!(m.contains(2, 3));
        assert_eq!(m.shape(), (3, 4));
    }

    #[test]
    fn test_entry_holding_default_is_overwritten_not_duplicated() {
        let mut m = IntMatrix::new(0);
        m.add(0, 1, 1).unwrap();
        m.add(5, 1, 1).unwrap();
        assert_eq!(m.size(), 1);
        assert_eq!(*m.get(1, 1), 5);

        m.set_default(5);
        m.add(6, 1, 1).unwrap();
        assert_eq!(m.size(), 1);
        assert_eq!(*m.get(1, 1), 6);
    }

    #[test]
    fn test_sparse_default() {
        let m = basic();
        for r in 0..10 {
            for c in 0..10 {
                if !m.contains(r, c) {
                    assert_eq!(*m.get(r, c), 0);
                }
            }
        }
        assert_eq!(m[(1_000_000, 4_000_000)], 0);
        assert_eq!(m.rows(), 8);
        assert_eq!(m.columns(), 4);
    }

    #[test]
    fn test_index_reads_stored_values() {
        let m = basic();
        assert_eq!(m[(7, 1)], 5);
        assert_eq!(m[(3, 3)], 1);
        assert_eq!(m[(3, 2)], 0);
    }

    #[test]
    fn test_order_invariant_for_scrambled_inserts() {
        let mut m = IntMatrix::new(0);
        let mut seed: u32 = 17;
        for v in 1..200 {
            seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            let row = (seed >> 16) % 13;
            let col = (seed >> 8) % 11;
            m.add(v, row, col).unwrap();
        }
        let c = coords(&m);
        assert!(c.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(m.rows(), *c.iter().map(|(r, _)| r).max().unwrap() as usize + 1);
        assert_eq!(m.columns(), *c.iter().map(|(_, c)| c).max().unwrap() as usize + 1);
    }

    #[test]
    fn test_extents_independent_of_insert_order() {
        let mut a = IntMatrix::new(0);
        a.add(1, 9, 0).unwrap();
        a.add(2, 0, 6).unwrap();
        let mut b = IntMatrix::new(0);
        b.add(2, 0, 6).unwrap();
        b.add(1, 9, 0).unwrap();
        assert_eq!(a.shape(), (10, 7));
        assert_eq!(b.shape(), (10, 7));
        assert_eq!(coords(&a), coords(&b));
    }

    #[test]
    fn test_clear_resets_fully() {
        let mut m = basic();
        m.clear();
        assert_eq!(m.size(), 0);
        assert_eq!(m.rows(), 0);
        assert_eq!(m.columns(), 0);
        assert_eq!(*m.default_value(), 0);
        m.clear();
        assert!(m.is_empty());
        m.add(2, 1, 1).unwrap();
        assert_eq!(m.size(), 1);
    }

    #[test]
    fn test_unoccupied_cells_are_read_only() {
        let mut m = basic();
        assert!(m.get_mut(5, 5).is_none());
        *m.get_mut(0, 1).unwrap() = 40;
        assert_eq!(*m.get(0, 1), 40);
        assert_eq!(*m.default_value(), 0);
        assert_eq!(*m.get(5, 5), 0);
    }

    #[test]
    fn test_set_default_changes_every_unoccupied_cell() {
        let mut m = basic();
        m.set_default(-1);
        assert_eq!(*m.get(5, 5), -1);
        assert_eq!(*m.get(100, 0), -1);
        assert_eq!(*m.get(0, 0), 3);
        assert_eq!(m.size(), 6);
    }

    #[test]
    fn test_custom_equality() {
        let ci = |a: &String, b: &String| a.eq_ignore_ascii_case(b);
        let mut m = SparseMatrix::with_equality(String::from("empty"), ci);
        m.add("Foo".to_string(), 0, 0).unwrap();
        m.add("FOO".to_string(), 0, 0).unwrap();
        assert_eq!(m.get(0, 0), "Foo");
        m.add("EMPTY".to_string(), 1, 1).unwrap();
        assert_eq!(m.size(), 1);
        m.add("bar".to_string(), 0, 0).unwrap();
        assert_eq!(m.get(0, 0), "bar");
    }

    #[test]
    fn test_clone_is_independent() {
        let m1 = basic();
        let mut m2 = m1.clone();
        m2.add(8, 0, 0).unwrap();
        m2.add(8, 1, 1).unwrap();
        m2.add(5, 10, 6).unwrap();
        m2.set_default(1);

        assert_eq!(m1.size(), 6);
        assert_eq!(*m1.get(0, 0), 3);
        assert_eq!(*m1.default_value(), 0);
        assert_eq!(m2.size(), 8);
        assert_eq!(m2.shape(), (11, 7));
        assert_eq!(*m2.get(0, 0), 8);
    }

    #[test]
    fn test_try_clone_and_assign() {
        let m1 = basic();
        let copy = m1.try_clone().unwrap();
        assert_eq!(coords(&copy), coords(&m1));
        assert_eq!(copy.to_string(), m1.to_string());

        let mut m2 = IntMatrix::new(42);
        m2.add(1, 20, 20).unwrap();
        m2.assign_from(&m1).unwrap();
        assert_eq!(coords(&m2), coords(&m1));
        assert_eq!(*m2.default_value(), 0);
        assert!(!m2.contains(20, 20));
    }

    #[test]
    fn test_convert_from_narrower_type() {
        let mut src: SparseMatrix<i32, StdEq> = SparseMatrix::new(0);
        src.add(1, 0, 1).unwrap();
        src.add(2, 1, 1).unwrap();
        src.add(6, 3, 2).unwrap();
        src.add(3, 1, 2).unwrap();
        src.add(9, 0, 2).unwrap();

        let dst: SparseMatrix<i64, StdEq> = SparseMatrix::convert_from(&src).unwrap();
        assert_eq!(dst.size(), src.size());
        assert_eq!(dst.rows(), src.rows());
        assert_eq!(dst.columns(), src.columns());
        assert_eq!(*dst.default_value(), 0i64);
        for r in 0..5 {
            for c in 0..5 {
                assert_eq!(*dst.get(r, c), i64::from(*src.get(r, c)));
            }
        }
    }

    #[test]
    fn test_convert_from_with_comparator() {
        let mut src: SparseMatrix<u8, StdEq> = SparseMatrix::new(1);
        src.add(4, 2, 0).unwrap();
        src.add(7, 0, 3).unwrap();

        let close = |a: &f64, b: &f64| (a - b).abs() < 1e-9;
        let dst: SparseMatrix<f64, _> = SparseMatrix::convert_from_with(&src, close).unwrap();
        assert_eq!(dst.size(), 2);
        assert_eq!(*dst.default_value(), 1.0);
        assert_eq!(*dst.get(2, 0), 4.0);
        assert_eq!(*dst.get(0, 3), 7.0);
        assert_eq!(*dst.get(1, 1), 1.0);
    }

    #[test]
    fn test_display_lists_entries() {
        let mut m = IntMatrix::new(0);
        assert_eq!(m.to_string(), "0\n");
        m.add(5, 1, 0).unwrap();
        m.add(2, 0, 3).unwrap();
        assert_eq!(m.to_string(), "[0, 3] = 2\n[1, 0] = 5\n");
    }

    #[test]
    fn test_show_renders_logical_extent() {
        let mut m = IntMatrix::new(0);
        m.add(1, 0, 0).unwrap();
        m.add(2, 1, 2).unwrap();
        assert_eq!(m.show().to_string(), "\n1 | 0 | 0 | \n0 | 0 | 2 | \n");
        assert_eq!(IntMatrix::new(0).show().to_string(), "\n");
    }

    #[test]
    fn test_to_dense() {
        let m = basic();
        let dense = m.to_dense().unwrap();
        assert_eq!(dense.dim(), (8, 4));
        assert_eq!(dense[[0, 2]], 3);
        assert_eq!(dense[[7, 1]], 5);
        assert_eq!(dense[[5, 0]], 0);
        assert_eq!(dense.iter().filter(|&&v| v != 0).count(), 6);
    }

    #[test]
    fn test_show_walks_cells_without_dense_copy() {
        let mut m = IntMatrix::new(0);
        m.add(7, 0, 0).unwrap();
        m.add(9, 1, 50_000).unwrap();
        let out = m.show().to_string();
        let lines: Vec<_> = out.split('\n').collect();
        // leading newline, two rows, trailing newline
        assert_eq!(lines.len(), 4);
        assert!(lines[1].starts_with("7 | 0 | "));
        assert!(lines[2].ends_with("0 | 9 | "));
        assert_eq!(lines[1].matches(" | ").count(), 50_001);
        assert_eq!(lines[2].matches('9').count(), 1);
    }

    #[test]
    fn test_show_needs_no_clone() {
        struct Label(&'static str);
        impl Display for Label {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.0)
            }
        }
        let same = |a: &Label, b: &Label| a.0 == b.0;
        let mut m = SparseMatrix::with_equality(Label("."), same);
        m.add(Label("x"), 1, 1).unwrap();
        assert_eq!(m.show().to_string(), "\n. | . | \n. | x | \n");
    }

    #[test]
    fn test_to_dense_rejects_huge_extent() {
        let mut m: SparseMatrix<u8, StdEq> = SparseMatrix::new(0);
        m.add(1, u32::MAX, u32::MAX).unwrap();
        assert_eq!(m.shape(), (u32::MAX as usize + 1, u32::MAX as usize + 1));
        assert!(matches!(m.to_dense(), Err(Error::Extent { .. })));
        assert_eq!(m.to_string(), format!("[{0}, {0}] = 1\n", u32::MAX));
        assert_eq!(crate::evaluate(&m, |&v| v != 0), 1);
    }

    // Real allocation failures cannot be provoked through `Vec` in a test,
    // so the clearing path is driven with a genuine `TryReserveError`.
    #[test]
    fn test_failed_allocation_clears_matrix() {
        let mut m = basic();
        let reserve_err = Vec::<u8>::new().try_reserve(usize::MAX).unwrap_err();
        let err = m.abandon(reserve_err.into());
        assert!(matches!(err, Error::Alloc(_)));
        assert!(m.is_empty());
        assert_eq!(m.shape(), (0, 0));
        assert_eq!(*m.default_value(), 0);
        m.add(4, 2, 2).unwrap();
        assert_eq!(m.size(), 1);
    }

    #[test]
    fn test_value_type_without_partial_eq() {
        #[derive(Debug, Clone, Copy)]
        struct Point {
            x: i32,
            y: i32,
        }
        let same = |p: &Point, q: &Point| p.x == q.x && p.y == q.y;
        let mut m = SparseMatrix::with_equality(Point { x: 0, y: 0 }, same);
        m.add(Point { x: 1, y: 1 }, 0, 0).unwrap();
        m.add(Point { x: 2, y: 3 }, 1, 2).unwrap();
        m.add(Point { x: 0, y: 0 }, 3, 3).unwrap();
        assert_eq!(m.size(), 2);
        assert_eq!(m.get(1, 2).y, 3);
    }
}
