use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
    str::FromStr,
};

use anyhow::{anyhow, bail, Context, Result};
use ndarray::{Array, Axis};
use ndarray_rand::{rand_distr::Uniform, RandomExt};
use sparse_assoc::{SparseMatrix, StdEq};
use tracing::info;

pub type TripletMatrix = SparseMatrix<f64, StdEq>;

fn parse_field<F>(tok: Option<&str>, name: &str, line_no: usize) -> Result<F>
where
    F: FromStr,
    F::Err: std::error::Error + Send + Sync + 'static,
{
    tok.ok_or_else(|| anyhow!("line {}: missing {}", line_no, name))?
        .trim()
        .parse()
        .with_context(|| format!("line {}: invalid {}", line_no, name))
}

/// Reads `row,col,value` lines, skipping the header line and blank lines.
pub fn load_triplets<R: BufRead>(reader: R) -> Result<TripletMatrix> {
    let mut m = TripletMatrix::new(0.);

    for (idx, res_line) in reader.lines().enumerate().skip(1) {
        let line_no = idx + 1;
        let line = res_line.with_context(|| format!("failed to read line {}", line_no))?;
        if line.trim().is_empty() {
            continue;
        }
        let mut toks = line.split(',');

        let row: u32 = parse_field(toks.next(), "row", line_no)?;
        let col: u32 = parse_field(toks.next(), "column", line_no)?;
        let value: f64 = parse_field(toks.next(), "value", line_no)?;
        if toks.next().is_some() {
            bail!("line {}: expected 3 fields", line_no);
        }

        m.add(value, row, col)?;
    }

    Ok(m)
}

pub fn load_triplet_file(path: &Path) -> Result<TripletMatrix> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let m = load_triplets(BufReader::new(file))?;
    info!(path = %path.display(), size = m.size(), "loaded triplets");
    Ok(m)
}

/// Draws `n_entries` cells with coordinates uniform in `[0, max_index)` and
/// values uniform in `[-1, 1)`. Colliding coordinates overwrite each other.
pub fn random_matrix(n_entries: usize, max_index: u32) -> Result<TripletMatrix> {
    if max_index == 0 {
        bail!("max index must be positive");
    }
    let coords = Array::random((n_entries, 2), Uniform::new(0, max_index));
    let values = Array::random(n_entries, Uniform::new(-1., 1.));

    let mut m = TripletMatrix::new(0.);
    for (rc, &value) in coords.axis_iter(Axis(0)).zip(values.iter()) {
        m.add(value, rc[0], rc[1])?;
    }
    info!(drawn = n_entries, size = m.size(), "generated random matrix");
    Ok(m)
}
