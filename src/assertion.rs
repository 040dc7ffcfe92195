use crate::core::IntoMatcher;
use std::fmt::Debug;

/// A reported match failure: what the matcher expected, what was found, the
/// matcher's explanation when it has one, and the call-site location when the
/// [`assert_that!`](crate::assert_that!) macro captured one.
pub struct Mismatch {
  expected: String,
  actual: String,
  explanation: Option<String>,
  location: Option<String>,
}

impl Mismatch {
  pub fn fail(self) -> ! {
    let explanation = self.explanation.map_or_else(String::new, |explanation| format!("\t   which {}\n", explanation));

    let location = self.location.map_or_else(String::new, |location| format!("at {}\n", location));

    panic!(
      "\n\
       \texpected: {}\n\
       \t   found: {}\n\
       {}{}",
      self.expected, self.actual, explanation, location
    )
  }
}

/// Asserts that `actual` satisfies the given value or matcher, panicking with
/// the matcher's description and explanation otherwise.
pub fn assert_that<T, M>(actual: &T, matcher: M)
where
  T: Debug,
  M: IntoMatcher<T>,
{
  assert_that_at(actual, matcher, None)
}

pub fn assert_that_at<T, M>(actual: &T, matcher: M, location: Option<String>)
where
  T: Debug,
  M: IntoMatcher<T>,
{
  let matcher = matcher.into_matcher();
  if matcher.matches(actual) {
    return;
  }
  let explanation = matcher.explain(actual);
  Mismatch {
    expected: matcher.describe(),
    actual: format!("<{:?}>", actual),
    explanation: if explanation.is_empty() { None } else { Some(explanation) },
    location,
  }
  .fail()
}

#[macro_export]
macro_rules! assert_that {
  (&$actual:expr, $matcher:expr) => {
    assert_that!($actual, $matcher)
  };
  ($actual:expr, $matcher:expr) => {
    $crate::assertion::assert_that_at(&$actual, $matcher, Some(format!("{}:{}", file!(), line!())))
  };
}
