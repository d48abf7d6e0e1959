//! The fixed pool of candidate words.

use std::num::NonZeroUsize;

use crate::error::{AppError, Result};

/// An immutable, non-empty, ordered list of English words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordPool {
    words: Vec<String>,
}

impl WordPool {
    /// Build a pool, rejecting an empty list.
    pub fn new<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        if words.is_empty() {
            return Err(AppError::validation("word pool must not be empty"));
        }
        Ok(Self { words })
    }

    pub fn size(&self) -> NonZeroUsize {
        // `new` guarantees at least one word.
        NonZeroUsize::new(self.words.len()).unwrap_or(NonZeroUsize::MIN)
    }

    /// Word at `index`, wrapping around the pool size.
    pub fn get(&self, index: usize) -> &str {
        &self.words[index % self.words.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_pool_is_rejected() {
        assert!(WordPool::new(Vec::<String>::new()).is_err());
    }

    #[test]
    fn get_wraps_around() {
        let pool = WordPool::new(["a", "b", "c"]).unwrap();
        assert_eq!(pool.size().get(), 3);
        assert_eq!(pool.get(1), "b");
        assert_eq!(pool.get(4), "b");
    }
}
