use std::collections::HashSet;
use std::hash::Hash;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::collection::{Collection, Record, ValueHasher};
use crate::error::{KitbagError, Result};

// ------------- Zip -------------
/// Regroups the sequences into rows, one row per position. Row `i` holds
/// the `i`-th element of every input in input order; inputs too short to
/// reach a row contribute None there.
pub fn zip<T: Clone>(sequences: &[&[T]]) -> Vec<Vec<Option<T>>> {
    let rows = sequences
        .iter()
        .map(|sequence| sequence.len())
        .max()
        .unwrap_or(0);
    let mut zipped = Vec::with_capacity(rows);
    for row in 0..rows {
        zipped.push(
            sequences
                .iter()
                .map(|sequence| sequence.get(row).cloned())
                .collect(),
        );
    }
    zipped
}

// ------------- Flatten -------------
/// A sequence whose elements are either plain items or further nested
/// sequences, to any depth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Nested<T> {
    Item(T),
    Seq(Vec<Nested<T>>),
}

/// Every item of the tree in depth-first order, with all nesting
/// removed.
pub fn flatten<T: Clone>(sequence: &[Nested<T>]) -> Vec<T> {
    let mut flat = Vec::new();
    descend(sequence, &mut flat);
    flat
}

fn descend<T: Clone>(sequence: &[Nested<T>], flat: &mut Vec<T>) {
    for element in sequence {
        match element {
            Nested::Item(value) => flat.push(value.clone()),
            Nested::Seq(inner) => descend(inner, flat),
        }
    }
}

/// Removes a single level of nesting, leaving anything nested deeper
/// untouched.
pub fn flatten_shallow<T: Clone>(sequence: &[Nested<T>]) -> Vec<Nested<T>> {
    let mut flat = Vec::new();
    for element in sequence {
        match element {
            Nested::Item(value) => flat.push(Nested::Item(value.clone())),
            Nested::Seq(inner) => flat.extend(inner.iter().cloned()),
        }
    }
    flat
}

// ------------- Set operations -------------
/// Every value present in all of the sequences, listed once each in the
/// order the first sequence presents them. No sequences at all intersect
/// to nothing.
pub fn intersection<T>(sequences: &[&[T]]) -> Vec<T>
where
    T: Clone + Eq + Hash,
{
    let (head, rest) = match sequences.split_first() {
        Some(parts) => parts,
        None => return Vec::new(),
    };
    let others: Vec<HashSet<&T, ValueHasher>> = rest
        .iter()
        .map(|sequence| sequence.iter().collect())
        .collect();
    let mut seen: HashSet<&T, ValueHasher> = HashSet::default();
    let mut shared = Vec::new();
    for value in head.iter() {
        if seen.insert(value) && others.iter().all(|other| other.contains(value)) {
            shared.push(value.clone());
        }
    }
    shared
}

/// The sequence with every value that appears in any of `others`
/// removed. Surviving elements keep their order and multiplicity.
pub fn difference<T>(sequence: &[T], others: &[&[T]]) -> Vec<T>
where
    T: Clone + Eq + Hash,
{
    let excluded: HashSet<&T, ValueHasher> =
        others.iter().flat_map(|other| other.iter()).collect();
    sequence
        .iter()
        .filter(|value| !excluded.contains(*value))
        .cloned()
        .collect()
}

// ------------- Shuffle -------------
/// A copy of the sequence in uniformly random order, using the thread's
/// generator.
pub fn shuffle<T: Clone>(sequence: &[T]) -> Vec<T> {
    shuffle_with(sequence, &mut rand::thread_rng())
}

/// A copy of the sequence in random order drawn from `rng`. Seed the
/// generator to make the permutation reproducible.
pub fn shuffle_with<T, R>(sequence: &[T], rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let mut shuffled = sequence.to_vec();
    shuffled.shuffle(rng);
    shuffled
}

// ------------- Sorting -------------
/// Something that ranks elements for [`sort_by`] by deriving an ordered
/// key from each one.
pub trait SortCriterion<T> {
    type Key: Ord;

    fn key_of(&self, element: &T) -> Result<Self::Key>;
}

/// Ranks records by the value of a named field. An element without the
/// field fails the whole sort.
pub struct ByField<'a>(pub &'a str);

impl<R> SortCriterion<R> for ByField<'_>
where
    R: Record,
    R::Value: Ord + Clone,
{
    type Key = R::Value;

    fn key_of(&self, element: &R) -> Result<R::Value> {
        element.field(self.0).cloned().ok_or_else(|| {
            KitbagError::InvalidArgument(format!("no field named '{}' to sort by", self.0))
        })
    }
}

/// Ranks elements by the key a function derives from each one.
pub struct ByKey<F>(pub F);

impl<T, K, F> SortCriterion<T> for ByKey<F>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    type Key = K;

    fn key_of(&self, element: &T) -> Result<K> {
        Ok((self.0)(element))
    }
}

/// The elements in ascending order of the key `criterion` derives for
/// each of them. The sort is stable, so elements with equal keys keep
/// their natural order.
pub fn sort_by<'a, T, C, S>(collection: C, criterion: S) -> Result<Vec<T>>
where
    T: Clone + 'a,
    C: Into<Collection<'a, T>>,
    S: SortCriterion<T>,
{
    let mut decorated = Vec::new();
    for (_, value) in collection.into().entries() {
        decorated.push((criterion.key_of(value)?, value.clone()));
    }
    decorated.sort_by(|left, right| left.0.cmp(&right.0));
    Ok(decorated.into_iter().map(|(_, value)| value).collect())
}
