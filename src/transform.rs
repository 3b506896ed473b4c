use crate::collection::{Collection, Record};
use crate::error::{KitbagError, Result};

// ------------- Mapping -------------
/// A new sequence holding `iteratee` applied to each element, in order.
/// The input is left untouched.
pub fn map<T, U, F>(sequence: &[T], iteratee: F) -> Vec<U>
where
    F: FnMut(&T) -> U,
{
    sequence.iter().map(iteratee).collect()
}

/// The value of the field called `property` in each record. Records
/// lacking the field contribute None at their position, so the output
/// always lines up with the input.
pub fn pluck<R>(records: &[R], property: &str) -> Vec<Option<R::Value>>
where
    R: Record,
    R::Value: Clone,
{
    records
        .iter()
        .map(|record| record.field(property).cloned())
        .collect()
}

// ------------- Invocation -------------
/// A receiver whose methods can be looked up by name at runtime.
///
/// Implementations route `method` to the matching behavior and must
/// answer an unknown name with [`KitbagError::InvalidArgument`].
pub trait MethodDispatch {
    type Arg;
    type Output;

    fn dispatch(&self, method: &str, args: &[Self::Arg]) -> Result<Self::Output>;
}

/// Something [`invoke`] can call on each element of a sequence, either a
/// method name or a free function.
pub trait Invocable<T, A, R> {
    fn apply(&self, receiver: &T, args: &[A]) -> Result<R>;
}

/// Invoke a method by name on each element.
pub struct ByMethod<'a>(pub &'a str);

impl<T> Invocable<T, T::Arg, T::Output> for ByMethod<'_>
where
    T: MethodDispatch,
{
    fn apply(&self, receiver: &T, args: &[T::Arg]) -> Result<T::Output> {
        receiver.dispatch(self.0, args)
    }
}

/// Invoke a function with each element as its receiver.
pub struct ByFunction<F>(pub F);

impl<T, A, R, F> Invocable<T, A, R> for ByFunction<F>
where
    F: Fn(&T, &[A]) -> R,
{
    fn apply(&self, receiver: &T, args: &[A]) -> Result<R> {
        Ok((self.0)(receiver, args))
    }
}

/// Calls `invocable` on every element with the same `args` and collects
/// the results in order. The first failing element aborts the whole
/// invocation.
pub fn invoke<T, A, R, I>(sequence: &[T], invocable: I, args: &[A]) -> Result<Vec<R>>
where
    I: Invocable<T, A, R>,
{
    let mut produced = Vec::with_capacity(sequence.len());
    for receiver in sequence {
        produced.push(invocable.apply(receiver, args)?);
    }
    Ok(produced)
}

// ------------- Reduction -------------
/// Folds the collection into a single value, seeding the accumulator
/// with the first element. Fails with [`KitbagError::EmptyReduce`] when
/// there is no element to seed from.
pub fn reduce<'a, T, C, F>(collection: C, mut iteratee: F) -> Result<T>
where
    T: Clone + 'a,
    C: Into<Collection<'a, T>>,
    F: FnMut(T, &T) -> T,
{
    let mut entries = collection.into().entries();
    let mut accumulated = match entries.next() {
        Some((_, value)) => value.clone(),
        None => return Err(KitbagError::EmptyReduce),
    };
    for (_, value) in entries {
        accumulated = iteratee(accumulated, value);
    }
    Ok(accumulated)
}

/// Folds the collection into a single value starting from `initial`. An
/// empty collection folds to `initial` unchanged, so the accumulator may
/// be of a different type than the elements.
pub fn reduce_from<'a, T, A, C, F>(collection: C, mut iteratee: F, initial: A) -> A
where
    T: 'a,
    C: Into<Collection<'a, T>>,
    F: FnMut(A, &T) -> A,
{
    let mut accumulated = initial;
    for (_, value) in collection.into().entries() {
        accumulated = iteratee(accumulated, value);
    }
    accumulated
}
