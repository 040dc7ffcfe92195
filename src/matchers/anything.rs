use crate::core::{Description, Match, Matcher};

/// Wildcard matcher, the composition counterpart of "don't care about this
/// position".
pub struct AnythingMatcher;

impl<T: ?Sized> Match<T> for AnythingMatcher {
  fn matches(&self, _actual: &T) -> bool {
    true
  }

  fn describe_to(&self, out: &mut Description) {
    out.append("is anything");
  }

  fn describe_negation_to(&self, out: &mut Description) {
    out.append("never matches");
  }
}

pub fn anything<T: ?Sized + 'static>() -> Matcher<T> {
  Matcher::new(AnythingMatcher)
}

#[cfg(test)]
mod tests {

  use super::*;

  #[test]
  fn matches_any_value() {
    assert!(anything().matches(&0));
    assert!(anything().matches(&i32::MIN));
    assert!(anything::<String>().matches(&"anything at all".to_string()));
  }

  #[test]
  fn describes_itself() {
    assert_eq!(anything::<i32>().describe(), "is anything");
    assert_eq!(anything::<i32>().describe_negation(), "never matches");
  }

  #[test]
  fn explanation_is_trivial() {
    assert_eq!(anything().explain(&42), "");
  }
}
