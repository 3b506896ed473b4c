//! Kitbag – a small kit of composable, side-effect-free collection-processing
//! operations.
//!
//! Every operation borrows its input and produces a fresh owned result:
//! * An ordered collection is any slice, addressed by position.
//! * A keyed collection is a [`collection::Mapping`], an insertion-ordered map
//!   from string keys to values.
//! * Operations that accept either shape take anything convertible into a
//!   [`collection::Collection`] view and enumerate it in natural order.
//!
//! Inputs are never mutated. The one operation that reorders anything,
//! [`combine::shuffle`], still leaves its input alone and hands back a
//! permuted copy.
//!
//! ## Modules
//! * [`collection`] – The [`collection::Collection`] view over both collection
//!   shapes, plus keys, records and truthiness.
//! * [`error`] – The crate-wide [`error::KitbagError`] and `Result` alias.
//! * [`traverse`] – Enumeration ([`traverse::each`]) and position lookup
//!   ([`traverse::index_of`]).
//! * [`select`] – Picking elements: the ends of a sequence, filtering,
//!   deduplication, membership and the quantifiers.
//! * [`transform`] – Deriving new values: [`transform::map`],
//!   [`transform::pluck`], [`transform::invoke`] and the reductions.
//! * [`merge`] – Merge policies for mappings: [`merge::extend`] overrides,
//!   [`merge::defaults`] fills gaps.
//! * [`wrap`] – Wrappers that change when a function runs: [`wrap::once`],
//!   [`wrap::memoize`] and [`wrap::delay`].
//! * [`combine`] – Operations over several sequences at once: zip, flatten,
//!   intersection, difference, shuffle and sorting.
//!
//! ## Natural Order
//! Ordered collections enumerate by ascending position; keyed collections
//! enumerate in key insertion order. Every operation that walks a collection
//! or preserves "input order" in its output means this order.
//!
//! ## Errors
//! Most operations are total and return plain values. The few that can fail,
//! such as reducing an empty collection without a seed or sorting by a field
//! an element lacks, return the crate-wide [`error::Result`].
//!
//! ## Quick Start
//! ```
//! use kitbag::mapping;
//! use kitbag::merge::extend;
//! use kitbag::select::{filter, reject};
//! use kitbag::transform::reduce_from;
//!
//! let numbers = vec![1, 2, 3, 4, 5, 6];
//! let evens = filter(&numbers, |n: &i32| n % 2 == 0);
//! let odds = reject(&numbers, |n: &i32| n % 2 == 0);
//! assert_eq!(evens, vec![2, 4, 6]);
//! assert_eq!(odds, vec![1, 3, 5]);
//!
//! let total = reduce_from(&numbers, |sum, n| sum + n, 0);
//! assert_eq!(total, 21);
//!
//! let base = mapping! {"host" => "localhost", "scheme" => "https"};
//! let overrides = mapping! {"host" => "example.org"};
//! let merged = extend(&base, &[&overrides]);
//! assert_eq!(merged.get("host"), Some(&"example.org"));
//! assert_eq!(merged.get("scheme"), Some(&"https"));
//! ```

pub mod collection;
pub mod error;
pub mod traverse;
pub mod select;
pub mod transform;
pub mod merge;
pub mod wrap;
pub mod combine;
