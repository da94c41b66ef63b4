use std::fmt::{self, Display};

use anyhow::{Context, Result};
use sparse_assoc::{evaluate, Iter, SparseMatrix, StdEq};
use tracing::info;

use crate::{
    args::{Args, Scenario},
    data_loader,
};

pub fn run(args: &Args) -> Result<()> {
    info!(scenario = ?args.scenario, "running");
    match args.scenario {
        Scenario::Basic => basic(args.show),
        Scenario::Conversion => conversion(args.show),
        Scenario::Strings => strings(args.show),
        Scenario::Points => points(args.show),
        Scenario::Random => {
            let m = data_loader::random_matrix(args.n_entries, args.max_index)?;
            report(&m, args.show);
            Ok(())
        }
        Scenario::Load => {
            let path = args
                .input
                .as_deref()
                .context("the load scenario needs --input")?;
            let m = data_loader::load_triplet_file(path)?;
            report(&m, args.show);
            Ok(())
        }
    }
}

fn report<T: Display, E>(m: &SparseMatrix<T, E>, show: bool) {
    println!("entries: {}", m.size());
    println!("rows x columns: {} x {}", m.rows(), m.columns());
    print!("{}", m);
    if show {
        print!("{}", m.show());
    }
}

fn basic(show: bool) -> Result<()> {
    let mut m1: SparseMatrix<i32, StdEq> = SparseMatrix::new(0);
    for (v, r, c) in [(3, 0, 0), (9, 4, 2), (5, 7, 1), (4, 0, 1), (1, 3, 3), (3, 0, 2)] {
        m1.add(v, r, c)?;
    }
    // ignored, (0, 2) already holds 3
    m1.add(3, 0, 2)?;
    report(&m1, show);

    let mut m2 = m1.try_clone()?;
    m2.add(8, 0, 0)?;
    m2.add(8, 1, 1)?;
    m2.add(5, 10, 6)?;
    println!("copy extended with three more inserts:");
    report(&m2, show);
    Ok(())
}

fn int_matrix() -> Result<SparseMatrix<i32, StdEq>> {
    let mut m = SparseMatrix::new(0);
    m.add(1, 0, 1)?;
    m.add(2, 1, 1)?;
    m.add(6, 3, 2)?;
    m.add(3, 1, 2)?;
    m.add(9, 0, 2)?;
    Ok(m)
}

fn conversion(show: bool) -> Result<()> {
    let narrow = int_matrix()?;
    report(&narrow, show);

    let mut wide: SparseMatrix<i64, StdEq> = SparseMatrix::convert_from(&narrow)?;
    println!("converted default: {}", wide.default_value());
    wide.set_default(10101);
    println!("new default: {}", wide.default_value());
    report(&wide, show);

    for (r, c) in [(1, 1), (6, 9), (3, 2)] {
        println!("[{}, {}] = {}", r, c, wide[(r, c)]);
    }
    Ok(())
}

fn strings(show: bool) -> Result<()> {
    let mut m: SparseMatrix<String, StdEq> = SparseMatrix::new("empty".to_string());
    for (s, r, c) in [
        ("e12", 1, 2),
        ("e58", 5, 8),
        ("e15", 1, 5),
        ("e42", 4, 2),
        ("e_30", 3, 0),
    ] {
        m.add(s.to_string(), r, c)?;
    }
    println!("rows x columns: {} x {}", m.rows(), m.columns());
    println!("entries: {}", m.size());

    let mut it = m.begin();
    let end = m.end();
    while it != end {
        if let Some(e) = it.next() {
            println!("{}", e);
        }
    }
    if show {
        print!("{}", m.show());
    }

    println!(
        "cells longer than 3 characters: {}",
        evaluate(&m, |s| s.len() > 3)
    );

    m.clear();
    println!("after clear: {} x {}, {} entries", m.rows(), m.columns(), m.size());
    Ok(())
}

#[derive(Debug, Clone, Copy)]
struct Point {
    x: i32,
    y: i32,
}

impl Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

fn same_point(p: &Point, q: &Point) -> bool {
    p.x == q.x && p.y == q.y
}

fn on_x_axis(p: &Point) -> bool {
    p.y == 0
}

type PointMatrix = SparseMatrix<Point, fn(&Point, &Point) -> bool>;

/// Point matrix whose row 2 has been flattened onto the x axis through a
/// mutable cursor.
fn point_matrix() -> Result<PointMatrix> {
    let mut m: PointMatrix = SparseMatrix::with_equality(Point { x: 0, y: 0 }, same_point);
    for (x, y, r, c) in [(1, 1, 0, 0), (2, 3, 2, 3), (2, 1, 2, 1), (2, 2, 2, 2), (3, 1, 3, 1)] {
        m.add(Point { x, y }, r, c)?;
    }
    for e in m.iter_mut().filter(|e| e.row() == 2) {
        e.value = Point { x: 2, y: 0 };
    }
    Ok(m)
}

fn points(show: bool) -> Result<()> {
    let m = point_matrix()?;
    println!("default: {}", m.default_value());
    report(&m, show);

    println!("cells on the x axis: {}", evaluate(&m, on_x_axis));
    if on_x_axis(m.default_value()) {
        println!("default = {}", m.default_value());
    }
    let on_axis: Iter<'_, Point> = m.begin();
    for e in on_axis.filter(|e| on_x_axis(&e.value)) {
        println!("{}", e);
    }
    Ok(())
}
