//! The data model shared by every operation in the crate.
//!
//! Two shapes of collection exist. An ordered collection is a borrowed slice
//! whose elements are addressed by position. A keyed collection is a borrowed
//! [`Mapping`], an insertion-ordered map from string keys to values. The
//! [`Collection`] enum unifies the two behind a single enumeration interface,
//! so operations that accept either shape take anything convertible into a
//! `Collection` and walk it through [`Collection::entries`].

use std::fmt;
use std::hash::BuildHasherDefault;
use std::iter::Enumerate;
use std::slice;

use indexmap::IndexMap;
use seahash::SeaHasher;

// ------------- Hashing -------------
pub type KeyHasher = BuildHasherDefault<SeaHasher>;
pub type ValueHasher = BuildHasherDefault<SeaHasher>;

/// An insertion-ordered map from string keys to values. The enumeration
/// order of a keyed collection is the order in which its keys were first
/// inserted.
pub type Mapping<V> = IndexMap<String, V, KeyHasher>;

/// Builds a [`Mapping`] from `"key" => value` pairs, in the given order.
#[macro_export]
macro_rules! mapping {
    () => {
        $crate::collection::Mapping::default()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut mapping = $crate::collection::Mapping::default();
        $(
            mapping.insert(::std::string::String::from($key), $value);
        )+
        mapping
    }};
}

// ------------- Keys -------------
/// The position of an element within a collection, as reported to iteration
/// callbacks. Ordered collections yield indexes, keyed collections yield
/// key names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key<'a> {
    Index(usize),
    Name(&'a str),
}

impl fmt::Display for Key<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(position) => write!(f, "{}", position),
            Key::Name(name) => write!(f, "{}", name),
        }
    }
}

// ------------- Collections -------------
/// A borrowed view over either shape of collection.
#[derive(Debug)]
pub enum Collection<'a, T> {
    Ordered(&'a [T]),
    Keyed(&'a Mapping<T>),
}

// Derived Clone and Copy would demand T: Clone and T: Copy. The view is a
// reference either way, so it copies for any element type.
impl<T> Clone for Collection<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Collection<'_, T> {}

impl<'a, T> Collection<'a, T> {
    pub fn len(&self) -> usize {
        match self {
            Collection::Ordered(values) => values.len(),
            Collection::Keyed(mapping) => mapping.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Enumerates every element with its key, in natural order. Natural
    /// order is positional for ordered collections and insertion order
    /// for keyed ones.
    pub fn entries(&self) -> Entries<'a, T> {
        match *self {
            Collection::Ordered(values) => Entries {
                inner: EntriesInner::Ordered(values.iter().enumerate()),
            },
            Collection::Keyed(mapping) => Entries {
                inner: EntriesInner::Keyed(mapping.iter()),
            },
        }
    }
}

impl<'a, T> From<&'a [T]> for Collection<'a, T> {
    fn from(values: &'a [T]) -> Self {
        Collection::Ordered(values)
    }
}

impl<'a, T> From<&'a Vec<T>> for Collection<'a, T> {
    fn from(values: &'a Vec<T>) -> Self {
        Collection::Ordered(values)
    }
}

impl<'a, T, const N: usize> From<&'a [T; N]> for Collection<'a, T> {
    fn from(values: &'a [T; N]) -> Self {
        Collection::Ordered(values)
    }
}

impl<'a, T> From<&'a Mapping<T>> for Collection<'a, T> {
    fn from(mapping: &'a Mapping<T>) -> Self {
        Collection::Keyed(mapping)
    }
}

/// Iterator over `(key, element)` pairs of a collection.
pub struct Entries<'a, T> {
    inner: EntriesInner<'a, T>,
}

enum EntriesInner<'a, T> {
    Ordered(Enumerate<slice::Iter<'a, T>>),
    Keyed(indexmap::map::Iter<'a, String, T>),
}

impl<'a, T> Iterator for Entries<'a, T> {
    type Item = (Key<'a>, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            EntriesInner::Ordered(values) => {
                values.next().map(|(position, value)| (Key::Index(position), value))
            }
            EntriesInner::Keyed(entries) => {
                entries.next().map(|(key, value)| (Key::Name(key.as_str()), value))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            EntriesInner::Ordered(values) => values.size_hint(),
            EntriesInner::Keyed(entries) => entries.size_hint(),
        }
    }
}

// ------------- Records -------------
/// An element whose named fields can be read, as used by property-based
/// operations such as plucking and field-keyed sorting.
pub trait Record {
    type Value;

    /// The value of the field called `name`, or None when the record
    /// has no such field.
    fn field(&self, name: &str) -> Option<&Self::Value>;
}

impl<V> Record for Mapping<V> {
    type Value = V;

    fn field(&self, name: &str) -> Option<&V> {
        self.get(name)
    }
}

// ------------- Truthiness -------------
/// Values that can stand in for a predicate result when no predicate is
/// given. Zero, NaN, empty strings and None count as false.
pub trait Truthy {
    fn truthy(&self) -> bool;
}

impl Truthy for bool {
    fn truthy(&self) -> bool {
        *self
    }
}

impl Truthy for i32 {
    fn truthy(&self) -> bool {
        *self != 0
    }
}

impl Truthy for i64 {
    fn truthy(&self) -> bool {
        *self != 0
    }
}

impl Truthy for u32 {
    fn truthy(&self) -> bool {
        *self != 0
    }
}

impl Truthy for u64 {
    fn truthy(&self) -> bool {
        *self != 0
    }
}

impl Truthy for usize {
    fn truthy(&self) -> bool {
        *self != 0
    }
}

impl Truthy for f32 {
    fn truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for f64 {
    fn truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for &str {
    fn truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    fn truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for Option<T> {
    fn truthy(&self) -> bool {
        self.is_some()
    }
}
