use crate::core::{Description, IntoMatcher, Match, Matcher};
use std::fmt::Debug;

/// Matches values equal to an expected value, using the natural equality of
/// the tested type. This is the matcher every raw composition argument is
/// coerced to.
pub struct EqualMatcher<E> {
  expected: E,
}

impl<T, E> Match<T> for EqualMatcher<E>
where
  T: PartialEq<E> + ?Sized,
  E: Debug,
{
  fn matches(&self, actual: &T) -> bool {
    actual.eq(&self.expected)
  }

  fn describe_to(&self, out: &mut Description) {
    out.append(format!("is equal to {:?}", self.expected));
  }

  fn describe_negation_to(&self, out: &mut Description) {
    out.append(format!("is not equal to {:?}", self.expected));
  }
}

pub fn equal_to<T>(expected: T) -> Matcher<T>
where
  T: PartialEq + Debug + Send + Sync + 'static,
{
  Matcher::new(EqualMatcher { expected })
}

impl<T> IntoMatcher<T> for T
where
  T: PartialEq + Debug + Send + Sync + 'static,
{
  fn into_matcher(self) -> Matcher<T> {
    equal_to(self)
  }
}

impl<'a, T> IntoMatcher<T> for &'a T
where
  T: Clone + PartialEq + Debug + Send + Sync + 'static,
{
  fn into_matcher(self) -> Matcher<T> {
    equal_to(self.clone())
  }
}

impl<'a> IntoMatcher<String> for &'a str {
  fn into_matcher(self) -> Matcher<String> {
    equal_to(self.to_string())
  }
}
