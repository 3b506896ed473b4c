use std::collections::HashSet;
use std::hash::Hash;

use crate::collection::{Collection, Truthy, ValueHasher};

// ------------- Ends -------------
/// The first element of the sequence, or None when it is empty.
pub fn first<T>(sequence: &[T]) -> Option<&T> {
    sequence.first()
}

/// The first `n` elements, in order. Asking for more elements than exist
/// yields a copy of the whole sequence.
pub fn first_n<T: Clone>(sequence: &[T], n: usize) -> Vec<T> {
    sequence[..n.min(sequence.len())].to_vec()
}

/// The last element of the sequence, or None when it is empty.
pub fn last<T>(sequence: &[T]) -> Option<&T> {
    sequence.last()
}

/// The last `n` elements, keeping their original order.
pub fn last_n<T: Clone>(sequence: &[T], n: usize) -> Vec<T> {
    sequence[sequence.len() - n.min(sequence.len())..].to_vec()
}

// ------------- Sifting -------------
/// Every element for which `predicate` holds, in natural order.
pub fn filter<'a, T, C, P>(collection: C, mut predicate: P) -> Vec<T>
where
    T: Clone + 'a,
    C: Into<Collection<'a, T>>,
    P: FnMut(&T) -> bool,
{
    let mut kept = Vec::new();
    for (_, value) in collection.into().entries() {
        if predicate(value) {
            kept.push(value.clone());
        }
    }
    kept
}

/// Every element for which `predicate` does not hold. Together with
/// [`filter`] this partitions the collection.
pub fn reject<'a, T, C, P>(collection: C, mut predicate: P) -> Vec<T>
where
    T: Clone + 'a,
    C: Into<Collection<'a, T>>,
    P: FnMut(&T) -> bool,
{
    filter(collection, move |value| !predicate(value))
}

/// The sequence with later duplicates removed. The first occurrence of
/// each value keeps its position.
pub fn uniq<T>(sequence: &[T]) -> Vec<T>
where
    T: Clone + Eq + Hash,
{
    let mut seen: HashSet<&T, ValueHasher> = HashSet::default();
    let mut kept = Vec::new();
    for value in sequence {
        if seen.insert(value) {
            kept.push(value.clone());
        }
    }
    kept
}

// ------------- Membership -------------
/// Whether any element equals `target`.
pub fn contains<'a, T, C>(collection: C, target: &T) -> bool
where
    T: PartialEq + 'a,
    C: Into<Collection<'a, T>>,
{
    collection.into().entries().any(|(_, value)| value == target)
}

// ------------- Quantifiers -------------
/// Whether `predicate` holds for every element. Vacuously true on an
/// empty collection.
pub fn every<'a, T, C, P>(collection: C, mut predicate: P) -> bool
where
    T: 'a,
    C: Into<Collection<'a, T>>,
    P: FnMut(&T) -> bool,
{
    collection.into().entries().all(|(_, value)| predicate(value))
}

/// Whether `predicate` holds for at least one element. False on an empty
/// collection.
pub fn some<'a, T, C, P>(collection: C, mut predicate: P) -> bool
where
    T: 'a,
    C: Into<Collection<'a, T>>,
    P: FnMut(&T) -> bool,
{
    collection.into().entries().any(|(_, value)| predicate(value))
}

/// [`every`] with the elements' own truthiness as the predicate.
pub fn every_truthy<'a, T, C>(collection: C) -> bool
where
    T: Truthy + 'a,
    C: Into<Collection<'a, T>>,
{
    every(collection, T::truthy)
}

/// [`some`] with the elements' own truthiness as the predicate.
pub fn some_truthy<'a, T, C>(collection: C) -> bool
where
    T: Truthy + 'a,
    C: Into<Collection<'a, T>>,
{
    some(collection, T::truthy)
}
