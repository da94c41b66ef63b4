//! A sparse associative matrix over an unbounded `u32 x u32` index space.
//!
//! Only explicitly assigned cells are stored; every other cell reads as the
//! matrix's default value. Stored entries are kept in row-major order.

pub mod data_structures;
pub mod error;
pub mod evaluate;

pub use data_structures::{
    entry::Entry,
    iter::{Iter, IterMut},
    sparse_matrix::{Show, SparseMatrix},
    Equality, StdEq,
};
pub use error::{Error, Result};
pub use evaluate::evaluate;
