use crate::core::{Description, IntoMatcher, Match, Matcher};

/// Inverts a matcher: description and negation swap roles, the explanation of
/// the inner matcher is forwarded unchanged.
pub struct NotMatcher<T: ?Sized> {
  inner: Matcher<T>,
}

impl<T: ?Sized> Match<T> for NotMatcher<T> {
  fn matches(&self, actual: &T) -> bool {
    !self.inner.matches(actual)
  }

  fn describe_to(&self, out: &mut Description) {
    self.inner.describe_negation_to(out)
  }

  fn describe_negation_to(&self, out: &mut Description) {
    self.inner.describe_to(out)
  }

  fn explain_match_to(&self, actual: &T, out: &mut Description) {
    self.inner.explain_match_to(actual, out)
  }
}

pub fn not<T, M>(inner: M) -> Matcher<T>
where
  T: ?Sized + 'static,
  M: IntoMatcher<T>,
{
  Matcher::new(NotMatcher { inner: inner.into_matcher() })
}
