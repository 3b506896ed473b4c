use crate::collection::{Collection, Key};

/// Calls `iterator` once per element in natural order, passing the element,
/// its key and a view of the whole collection. Produces nothing; this is
/// the side-effecting way to walk a collection.
pub fn each<'a, T, C, F>(collection: C, mut iterator: F)
where
    T: 'a,
    C: Into<Collection<'a, T>>,
    F: FnMut(&'a T, Key<'a>, Collection<'a, T>),
{
    let view = collection.into();
    for (key, value) in view.entries() {
        iterator(value, key, view);
    }
}

/// The position of the first element equal to `target`, or None when no
/// element matches.
pub fn index_of<T: PartialEq>(sequence: &[T], target: &T) -> Option<usize> {
    sequence.iter().position(|value| value == target)
}
