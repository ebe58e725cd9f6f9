//! Combinators for checks that report every problem they find instead of
//! stopping at the first one.
//!
//! A [`Validated`] is a plain [`Result`] whose error side is a list, so
//! [`Result::map`] and [`Result::and_then`] already cover transforming a
//! success and chaining a dependent step. What `Result` lacks is a way to
//! combine *independent* checks so that every failure is kept; that is
//! [`accumulate`].

/// The outcome of a check. On failure, holds every error encountered,
/// which is never empty.
pub type Validated<T, E> = Result<T, Vec<E>>;

/// Fails with a single error.
pub fn fail<T, E>(error: E) -> Validated<T, E> {
    Err(vec![error])
}

/// Combines the results of independent checks.
///
/// Every result is consumed, even after one has failed. If they all
/// succeeded, returns their values in order. Otherwise, returns the errors
/// of every failed result, concatenated in order.
pub fn accumulate<T, E, I>(results: I) -> Validated<Vec<T>, E>
where
    I: IntoIterator<Item = Validated<T, E>>,
{
    let mut values = Vec::new();
    let mut errors = Vec::new();

    for result in results {
        match result {
            Ok(value) if errors.is_empty() => values.push(value),
            // Already failed, so the value is of no use
            Ok(_) => {},
            Err(mut res_errors) => errors.append(&mut res_errors),
        }
    }

    if errors.is_empty() {
        Ok(values)
    } else {
        Err(errors)
    }
}

/// Method syntax for [`accumulate`], ex. `fields.iter().map(check).accumulate()`.
pub trait Accumulate<T, E>: Iterator<Item = Validated<T, E>> + Sized {
    fn accumulate(self) -> Validated<Vec<T>, E> {
        accumulate(self)
    }
}

impl<T, E, I> Accumulate<T, E> for I where I: Iterator<Item = Validated<T, E>> {}
