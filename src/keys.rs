//! Path accumulation and key materialization for traversals.

/// Turns a byte sequence into a `String`, one character per byte.
///
/// Each byte becomes the Unicode scalar of equal value, so every byte
/// 0–255 materializes and the resulting strings sort the same way the
/// raw bytes do. ASCII keys round-trip unchanged.
pub(crate) fn materialize(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Ordered buffer of path bytes, pushed and popped as traversals walk
/// down and back up the tree.
pub(crate) struct KeyBuf {
    bytes: Vec<u8>,
}

impl KeyBuf {
    pub fn new() -> Self {
        Self { bytes: Vec::new() }
    }

    /// Buffer seeded with the bytes already consumed before the walk
    /// starts (the query prefix).
    pub fn from_slice(prefix: &[u8]) -> Self {
        Self {
            bytes: prefix.to_vec(),
        }
    }

    #[inline]
    pub fn push(&mut self, b: u8) {
        self.bytes.push(b);
    }

    #[inline]
    pub fn pop(&mut self) {
        self.bytes.pop();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn materialize(&self) -> String {
        materialize(&self.bytes)
    }
}
