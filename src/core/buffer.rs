//! Bounded, append-only sequence of accepted codes.

use crate::error::{GameError, Result};
use serde::{Deserialize, Serialize};

/// Ordered list of the codes picked so far this round.
///
/// The buffer never grows past its capacity. There is no pop: undo works by
/// restoring an older snapshot, which carries the older, shorter buffer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Buffer {
    capacity: usize,
    codes: Vec<String>,
}

impl Buffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            codes: Vec::new(),
        }
    }

    /// Append a code, returning the longer buffer.
    pub fn append(&self, code: impl Into<String>) -> Result<Self> {
        if self.is_full() {
            return Err(GameError::BufferFull {
                capacity: self.capacity,
            });
        }
        let mut codes = self.codes.clone();
        codes.push(code.into());
        Ok(Self {
            capacity: self.capacity,
            codes,
        })
    }

    /// Empty buffer with the same capacity.
    pub fn cleared(&self) -> Self {
        Self::new(self.capacity)
    }

    pub fn is_full(&self) -> bool {
        self.codes.len() >= self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn remaining(&self) -> usize {
        self.capacity.saturating_sub(self.codes.len())
    }

    pub fn code(&self, index: usize) -> Option<&str> {
        self.codes.get(index).map(String::as_str)
    }

    pub fn codes(&self) -> &[String] {
        &self.codes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_grows_by_one() {
        let buffer = Buffer::new(3);
        let next = buffer.append("1C").unwrap();

        assert!(buffer.is_empty());
        assert_eq!(next.len(), 1);
        assert_eq!(next.code(0), Some("1C"));
        assert_eq!(next.remaining(), 2);
    }

    #[test]
    fn append_rejects_when_full() {
        let buffer = Buffer::new(2).append("1C").unwrap().append("BD").unwrap();
        assert!(buffer.is_full());
        assert_eq!(
            buffer.append("55").unwrap_err(),
            GameError::BufferFull { capacity: 2 }
        );
        assert_eq!(buffer.len(), 2);
    }

    #[test]
    fn zero_capacity_is_always_full() {
        let buffer = Buffer::new(0);
        assert!(buffer.is_full());
        assert!(buffer.append("1C").is_err());
    }

    #[test]
    fn cleared_keeps_capacity() {
        let buffer = Buffer::new(4).append("E9").unwrap().cleared();
        assert!(buffer.is_empty());
        assert_eq!(buffer.capacity(), 4);
    }

    #[test]
    fn huge_capacity_does_not_preallocate() {
        let buffer = Buffer::new(usize::MAX);
        assert_eq!(buffer.remaining(), usize::MAX);
        assert_eq!(buffer.append("1C").unwrap().len(), 1);
    }

    #[test]
    fn code_out_of_range_is_none() {
        assert_eq!(Buffer::new(1).code(0), None);
    }
}
