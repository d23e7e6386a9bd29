//! A 256-way radix trie mapping byte-string keys to arbitrary values.
//!
//! Every node fans out over the full byte alphabet, so edge dispatch is a
//! single array index and traversals visit children in ascending byte
//! order. On top of exact lookup the tree supports prefix enumeration,
//! single-byte wildcard matching (`.` matches any one byte), longest-prefix
//! queries, and a compact structural rendering that folds straight-line
//! chains onto one line.
//!
//! Keys are raw byte strings: anything `AsRef<[u8]>` works as a key, and
//! key-listing operations return `String`s with one character per key byte.
//!
//! ```rust
//! use rway::RadixTree;
//!
//! let mut tree = RadixTree::new();
//! tree.insert("romane", 1);
//! tree.insert("romulus", 3);
//! tree.insert("rubicon", 6);
//!
//! assert_eq!(tree.get("romane"), Some(&1));
//! assert_eq!(tree.keys_with_prefix("rom"), ["romane", "romulus"]);
//! assert_eq!(tree.longest_prefix_of("romulus1234"), "romulus");
//! ```

mod keys;
mod mapping;
mod node;
pub mod tree;
mod utils;

pub use tree::RadixTree;
