//! String Interning Pool
//!
//! Deduplicated storage for tag names, attribute names, and attribute
//! values. Nodes and attributes hold `u32` string ids instead of owned
//! strings, keeping the arena compact when the same names repeat across
//! a document (which they almost always do in markup).
//!
//! Uses hash-based lookup to avoid storing duplicate string data.

use std::collections::HashMap;
use std::hash::{Hash, Hasher};

/// String interning pool
///
/// Memory layout:
/// - `entries`: (offset, length) into `data` for each interned string id
/// - `data`: one contiguous buffer holding all unique string bytes
/// - `hash_index`: hash -> list of ids (handles rare collisions)
#[derive(Debug, Default)]
pub struct StringPool {
    /// (offset, length) entries indexed by string id
    entries: Vec<(u32, u32)>,
    /// Buffer holding all interned string bytes
    data: Vec<u8>,
    /// Hash of string content -> list of ids with that hash
    hash_index: HashMap<u64, Vec<u32>>,
}

impl StringPool {
    /// Create a new empty string pool
    pub fn new() -> Self {
        let mut pool = StringPool {
            entries: Vec::with_capacity(64),
            data: Vec::with_capacity(1024),
            hash_index: HashMap::new(),
        };
        // Entry 0 is reserved for the empty string
        pool.entries.push((0, 0));
        pool
    }

    /// Compute hash of string content
    #[inline]
    fn compute_hash(s: &str) -> u64 {
        use std::collections::hash_map::DefaultHasher;
        let mut hasher = DefaultHasher::new();
        s.as_bytes().hash(&mut hasher);
        hasher.finish()
    }

    /// Intern a string, returning its id
    ///
    /// Interning the same content twice returns the same id.
    pub fn intern(&mut self, s: &str) -> u32 {
        if s.is_empty() {
            return 0;
        }

        let hash = Self::compute_hash(s);

        // Check for an existing entry with the same content
        if let Some(ids) = self.hash_index.get(&hash) {
            for &id in ids {
                if self.get(id) == Some(s) {
                    return id;
                }
            }
        }

        let offset = self.data.len() as u32;
        self.data.extend_from_slice(s.as_bytes());

        let id = self.entries.len() as u32;
        self.entries.push((offset, s.len() as u32));
        self.hash_index.entry(hash).or_default().push(id);

        id
    }

    /// Get a string by id
    pub fn get(&self, id: u32) -> Option<&str> {
        if id == 0 {
            return Some("");
        }
        let &(offset, len) = self.entries.get(id as usize)?;
        let start = offset as usize;
        let end = start + len as usize;
        if end <= self.data.len() {
            std::str::from_utf8(&self.data[start..end]).ok()
        } else {
            None
        }
    }

    /// Number of unique strings stored (including the reserved empty entry)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the pool holds nothing beyond the reserved empty entry
    pub fn is_empty(&self) -> bool {
        self.entries.len() <= 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intern_and_get() {
        let mut pool = StringPool::new();
        let id = pool.intern("hello");
        assert!(id > 0);
        assert_eq!(pool.get(id), Some("hello"));
    }

    #[test]
    fn test_intern_duplicate() {
        let mut pool = StringPool::new();
        let id1 = pool.intern("hello");
        let id2 = pool.intern("hello");
        assert_eq!(id1, id2);
    }

    #[test]
    fn test_intern_different() {
        let mut pool = StringPool::new();
        let id1 = pool.intern("hello");
        let id2 = pool.intern("world");
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_empty_string() {
        let mut pool = StringPool::new();
        let id = pool.intern("");
        assert_eq!(id, 0);
        assert_eq!(pool.get(0), Some(""));
        assert!(pool.is_empty());
    }

    #[test]
    fn test_unknown_id() {
        let pool = StringPool::new();
        assert_eq!(pool.get(42), None);
    }
}
