// src/services/indexer.rs

//! Daily word selection.
//!
//! Maps a calendar date to an index into the word pool. Both strategies are
//! pure functions of the date and the pool size.

use std::num::NonZeroUsize;

use chrono::{Datelike, NaiveDate};

use crate::models::{IndexStrategy, WordPool};
use crate::utils;

/// Picks the day's word from a pool.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateIndexer {
    strategy: IndexStrategy,
}

impl DateIndexer {
    pub fn new(strategy: IndexStrategy) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> IndexStrategy {
        self.strategy
    }

    /// Index in `[0, pool_size)` for `date`.
    pub fn index_for(&self, date: NaiveDate, pool_size: NonZeroUsize) -> usize {
        let size = pool_size.get() as u64;
        let value = match self.strategy {
            IndexStrategy::NumericDate => numeric_date(date),
            IndexStrategy::DayOfYear => u64::from(date.ordinal()),
        };
        (value % size) as usize
    }

    /// Index for the current UTC date.
    pub fn index_for_today(&self, pool_size: NonZeroUsize) -> usize {
        self.index_for(utils::today(), pool_size)
    }

    /// The word `date` selects from `pool`, with its index.
    pub fn pick<'a>(&self, pool: &'a WordPool, date: NaiveDate) -> (usize, &'a str) {
        let index = self.index_for(date, pool.size());
        (index, pool.get(index))
    }
}

/// The ISO date with separators removed, read as a number (2024-05-01 → 20240501).
pub fn numeric_date(date: NaiveDate) -> u64 {
    date.format("%Y-%m-%d")
        .to_string()
        .chars()
        .filter_map(|c| c.to_digit(10))
        .fold(0u64, |acc, d| acc * 10 + u64::from(d))
}
