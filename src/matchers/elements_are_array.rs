use crate::core::{IntoMatcher, Matcher};
use crate::matchers::elements_are::elements_are;
use crate::types::Iterable;

/// Builds a sequence matcher from a homogeneous collection of values or
/// matchers: a `Vec`, a fixed-size array or a slice. Every element is coerced
/// the same way `elements_are!` arguments are, then matching is entirely the
/// sequence matcher's. Arity is the input's length.
pub fn elements_are_array<C, T, I>(expected: I) -> Matcher<C>
where
  C: Iterable<Item = T> + 'static,
  T: Clone + Send + Sync + 'static,
  I: IntoIterator,
  I::Item: IntoMatcher<T>,
{
  elements_are(expected.into_iter().map(IntoMatcher::into_matcher).collect())
}
