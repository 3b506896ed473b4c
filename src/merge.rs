use crate::collection::Mapping;

/// A copy of `target` with every entry of every source merged in. On a
/// key clash the last writer wins, so later sources override earlier
/// ones and every source overrides `target`. Keys already present keep
/// their position; new keys append in encounter order.
pub fn extend<V: Clone>(target: &Mapping<V>, sources: &[&Mapping<V>]) -> Mapping<V> {
    let mut merged = target.clone();
    for source in sources {
        for (key, value) in source.iter() {
            merged.insert(key.clone(), value.clone());
        }
    }
    merged
}

/// A copy of `target` with missing entries filled in from the sources.
/// Keys already present are never overwritten, so the first writer wins
/// and earlier sources take precedence over later ones.
pub fn defaults<V: Clone>(target: &Mapping<V>, sources: &[&Mapping<V>]) -> Mapping<V> {
    let mut filled = target.clone();
    for source in sources {
        for (key, value) in source.iter() {
            if !filled.contains_key(key) {
                filled.insert(key.clone(), value.clone());
            }
        }
    }
    filled
}
