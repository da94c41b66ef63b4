use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Scenario {
    /// Integer matrix: inserts, duplicates, copy
    Basic,
    /// `i32` matrix converted into an `i64` one
    Conversion,
    /// String matrix with cursor listing and `evaluate`
    Strings,
    /// Point matrix mutated through a cursor
    Points,
    /// Randomly drawn entries
    Random,
    /// `row,col,value` triplets read from `--input`
    Load,
}

#[derive(Parser, Debug)]
pub struct Args {
    /// Demonstration to run
    #[arg(long, value_enum, default_value_t = Scenario::Basic)]
    pub scenario: Scenario,
    /// Triplet file for the `load` scenario, first line is a header
    #[arg(short, long)]
    pub input: Option<PathBuf>,
    /// Number of entries to draw in the `random` scenario
    #[arg(long, default_value_t = 20)]
    pub n_entries: usize,
    /// Exclusive bound on coordinates drawn in the `random` scenario
    #[arg(long, default_value_t = 10)]
    pub max_index: u32,
    /// Also print every logical cell, defaults included
    #[arg(long, default_value_t = false)]
    pub show: bool,
    /// Log more, repeat for more detail
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
