#![no_std]

//! `ArrayList`: a growable list over one contiguous buffer.
//!
//! `ArrayList` keeps its elements in positional order and tracks the logical
//! length separately from the allocated capacity. Growth and shrinking follow
//! an explicit `ResizePolicy`, so the cost model is predictable: appends are
//! amortized O(1) and the buffer never holds more than a fixed multiple of
//! the live elements after removals.
//!
//! This crate is `no_std` compatible and needs only `alloc`. Enable the
//! optional `std` feature to get `std::error::Error` support from the
//! dependencies.
//!
//! # Time Complexity
//! - `push()`, `add()`: amortized O(1) per element
//! - `get()`, `set()`, `swap()`, `len()`: O(1)
//! - `insert()`, `remove()`: O(n) - later elements are shifted
//! - `contains()`: O(n * m) for m query values
//! - `index_of()`: O(n)
//! - `clear()`: O(n) to drop the elements, releases the buffer
//!
//! # Out-of-range positions
//!
//! Positional operations never panic and never return errors for bad
//! indices. `get()` and `remove()` return `None`; `set()`, `insert()` and
//! `swap()` leave the list untouched. An index equal to `len()` is valid for
//! `set()` and `insert()` and means append.
//!
//! ```
//! # use arraylist::ArrayList;
//! let mut list = ArrayList::new();
//! list.add(["a", "c"]);
//! list.insert(1, ["b"]);
//! list.set(3, "d"); // index == len appends
//! list.set(9, "z"); // ignored
//!
//! assert_eq!(list.values(), vec!["a", "b", "c", "d"]);
//! assert_eq!(list.get(9), None);
//! assert_eq!(list.remove(0), Some("a"));
//! assert_eq!(list.index_of(&"d"), Some(2));
//! assert!(list.contains(&["b", "c"]));
//! ```
//!
//! # Resize Policy
//!
//! Before `n` elements are added, if `len + n >= capacity`, the buffer is
//! reallocated to `floor((capacity + n) * growth_factor)` slots. After a
//! removal, if `len <= floor(capacity * shrink_factor)`, the buffer is
//! reallocated to exactly `len` slots. The defaults are 2.0 and 0.25.
//!
//! ```
//! # use arraylist::{ArrayList, ResizePolicy};
//! let policy = ResizePolicy::new(1.5, 0.0).unwrap(); // never shrink
//! let mut list = ArrayList::with_policy(policy);
//! list.add(0..10);
//! assert_eq!(list.capacity(), 15);
//!
//! while list.remove(0).is_some() {}
//! assert_eq!(list.capacity(), 15);
//! ```
//!
//! # Iterator Support
//!
//! `ArrayList` implements standard Rust iterator patterns, plus a stateful
//! cursor that can walk in both directions and seek with a predicate:
//!
//! ```
//! # use arraylist::ArrayList;
//! let list: ArrayList<i32> = [1, 2, 3, 4].into_iter().collect();
//!
//! let doubled: Vec<_> = list.iter().map(|v| v * 2).collect();
//! assert_eq!(doubled, vec![2, 4, 6, 8]);
//!
//! let mut cursor = list.cursor();
//! assert!(cursor.next_to(|_, value| value % 2 == 0));
//! assert_eq!(cursor.index(), Some(1));
//! assert!(cursor.next_to(|_, value| value % 2 == 0));
//! assert_eq!(cursor.index(), Some(3));
//! assert!(!cursor.next_to(|_, value| value % 2 == 0));
//! ```
//!
//! # JSON
//!
//! The wire format is a bare JSON array of the elements. A failed
//! `from_json()` leaves the list unchanged.
//!
//! ```
//! # use arraylist::ArrayList;
//! let list: ArrayList<i32> = [1, 2, 3].into_iter().collect();
//! let json = list.to_json().unwrap();
//! assert_eq!(json, b"[1,2,3]");
//!
//! let mut restored: ArrayList<i32> = ArrayList::new();
//! restored.from_json(&json).unwrap();
//! assert_eq!(restored, list);
//!
//! assert!(restored.from_json(b"[1, 2,").is_err());
//! assert_eq!(restored.values(), vec![1, 2, 3]);
//! ```

extern crate alloc;

mod error;
mod iter;
mod list;
mod policy;
mod serialization;

// Re-export public types and traits
pub use crate::error::ArrayListError;
pub use crate::iter::{ArrayListCursor, ArrayListIter, ArrayListRevIter};
pub use crate::list::ArrayList;
pub use crate::policy::{ResizePolicy, DEFAULT_GROWTH_FACTOR, DEFAULT_SHRINK_FACTOR};
