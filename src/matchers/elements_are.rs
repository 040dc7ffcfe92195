use crate::core::{Description, Match, Matcher};
use crate::types::Iterable;

/// Matches an ordered container position by position against a fixed list of
/// element matchers. The arity of the list defines the required container
/// length; a container of any other length fails without any per-element
/// comparison.
pub struct ElementsAreMatcher<T> {
  element_matchers: Vec<Matcher<T>>,
}

impl<C, T> Match<C> for ElementsAreMatcher<T>
where
  C: Iterable<Item = T>,
  T: Clone,
{
  fn matches(&self, actual: &C) -> bool {
    if actual.count() != self.element_matchers.len() {
      return false;
    }
    let elements = actual.elements();
    self.element_matchers.iter().zip(elements.iter()).all(|(matcher, element)| matcher.matches(element))
  }

  fn describe_to(&self, out: &mut Description) {
    match self.element_matchers.len() {
      0 => out.append("is empty"),
      1 => {
        out.append("has 1 element that ");
        self.element_matchers[0].describe_to(out);
      }
      arity => {
        out.append(format!("has {} elements where\n", arity));
        for (index, matcher) in self.element_matchers.iter().enumerate() {
          if index > 0 {
            out.append(",\n");
          }
          out.append(format!("element {} ", index));
          matcher.describe_to(out);
        }
      }
    }
  }

  fn describe_negation_to(&self, out: &mut Description) {
    let arity = self.element_matchers.len();
    if arity == 0 {
      out.append("is not empty");
      return;
    }
    out.append(format!("does not have {} element{}, or\n", arity, if arity == 1 { "" } else { "s" }));
    for (index, matcher) in self.element_matchers.iter().enumerate() {
      if index > 0 {
        out.append(", or\n");
      }
      out.append(format!("element {} ", index));
      matcher.describe_negation_to(out);
    }
  }

  fn explain_match_to(&self, actual: &C, out: &mut Description) {
    let actual_count = actual.count();
    if actual_count != self.element_matchers.len() {
      // A structural mismatch: per-element detail would be noise. An empty
      // container needs no explanation at all.
      if actual_count != 0 {
        out.append(format!("has {} element{}", actual_count, if actual_count == 1 { "" } else { "s" }));
      }
      return;
    }
    let elements = actual.elements();
    let mut separate = false;
    for (index, (matcher, element)) in self.element_matchers.iter().zip(elements.iter()).enumerate() {
      let explanation = matcher.explain(element);
      if matcher.matches(element) {
        // A matching element is only worth mentioning when its matcher has
        // something non-trivial to say.
        if explanation.is_empty() {
          continue;
        }
        if separate {
          out.append(",\n");
        }
        out.append(format!("element {} {}", index, explanation));
      } else {
        if separate {
          out.append(",\n");
        }
        out.append(format!("element {} doesn't match", index));
        if !explanation.is_empty() {
          out.append(format!(" ({})", explanation));
        }
      }
      separate = true;
    }
  }
}

/// Composes an ordered list of element matchers into a matcher over any
/// iterable container. Use through the [`elements_are!`](crate::elements_are!)
/// macro, which coerces a mixed list of values and matchers.
pub fn elements_are<C, T>(element_matchers: Vec<Matcher<T>>) -> Matcher<C>
where
  C: Iterable<Item = T> + 'static,
  T: Clone + Send + Sync + 'static,
{
  Matcher::new(ElementsAreMatcher { element_matchers })
}

/// Matches a container whose elements match the given values or matchers, in
/// order. Arity is fixed at composition time.
#[macro_export]
macro_rules! elements_are {
  ($($element:expr),* $(,)?) => {
    $crate::matchers::elements_are::elements_are(vec![$($crate::core::IntoMatcher::into_matcher($element)),*])
  };
}

#[cfg(test)]
mod tests {

  use super::*;
  use crate::matchers::anything::anything;
  use crate::matchers::comparison::{greater_or_equal, greater_than, not_equal_to};
  use crate::matchers::equal_to::equal_to;
  use crate::matchers::not::not;
  use std::collections::LinkedList;

  // Custom matcher with a rich explanation, for exercising the explanation
  // aggregation. Reports the distance from the bound whether or not the value
  // matched.
  struct GreaterThanWithDistance {
    rhs: i32,
  }

  impl Match<i32> for GreaterThanWithDistance {
    fn matches(&self, actual: &i32) -> bool {
      *actual > self.rhs
    }

    fn describe_to(&self, out: &mut Description) {
      out.append(format!("is greater than {}", self.rhs));
    }

    fn explain_match_to(&self, actual: &i32, out: &mut Description) {
      let diff = actual - self.rhs;
      if diff > 0 {
        out.append(format!("is {} more than {}", diff, self.rhs));
      } else if diff == 0 {
        out.append(format!("is the same as {}", self.rhs));
      } else {
        out.append(format!("is {} less than {}", -diff, self.rhs));
      }
    }
  }

  fn greater_than_with_distance(rhs: i32) -> Matcher<i32> {
    Matcher::new(GreaterThanWithDistance { rhs })
  }

  #[test]
  fn describes_expecting_no_elements() {
    let matcher: Matcher<Vec<i32>> = elements_are![];

    assert_eq!(matcher.describe(), "is empty");
  }

  #[test]
  fn describes_expecting_one_element() {
    let matcher: Matcher<Vec<i32>> = elements_are![greater_than(5)];

    assert_eq!(matcher.describe(), "has 1 element that is greater than 5");
  }

  #[test]
  fn describes_expecting_many_elements() {
    let matcher: Matcher<LinkedList<String>> = elements_are![equal_to("one".to_string()), "two"];

    assert_eq!(
      matcher.describe(),
      "has 2 elements where\n\
       element 0 is equal to \"one\",\n\
       element 1 is equal to \"two\""
    );
  }

  #[test]
  fn describes_negation_of_expecting_no_elements() {
    let matcher: Matcher<Vec<i32>> = elements_are![];

    assert_eq!(matcher.describe_negation(), "is not empty");
  }

  #[test]
  fn describes_negation_of_expecting_one_element() {
    let matcher: Matcher<LinkedList<i32>> = elements_are![greater_than(5)];

    assert_eq!(
      matcher.describe_negation(),
      "does not have 1 element, or\n\
       element 0 is not greater than 5"
    );
  }

  #[test]
  fn describes_negation_of_expecting_many_elements() {
    let matcher: Matcher<LinkedList<String>> = elements_are!["one", "two"];

    assert_eq!(
      matcher.describe_negation(),
      "does not have 2 elements, or\n\
       element 0 is not equal to \"one\", or\n\
       element 1 is not equal to \"two\""
    );
  }

  #[test]
  fn does_not_explain_a_trivial_match() {
    let matcher: Matcher<LinkedList<i32>> = elements_are![1, not_equal_to(2)];

    assert_eq!(matcher.explain(&LinkedList::from([1, 3])), "");
  }

  #[test]
  fn explains_a_non_trivial_match() {
    let matcher: Matcher<Vec<i32>> = elements_are![greater_than_with_distance(1), 0, greater_than_with_distance(2)];

    assert_eq!(
      matcher.explain(&vec![10, 0, 100]),
      "element 0 is 9 more than 1,\n\
       element 2 is 98 more than 2"
    );
  }

  #[test]
  fn explains_a_mismatch_of_wrong_size() {
    let matcher: Matcher<LinkedList<i32>> = elements_are![1, 3];

    assert_eq!(matcher.explain(&LinkedList::new()), "");
    assert_eq!(matcher.explain(&LinkedList::from([1])), "has 1 element");
    assert_eq!(matcher.explain(&LinkedList::from([1, 2, 3])), "has 3 elements");
  }

  #[test]
  fn explains_a_mismatch_of_right_size() {
    let matcher: Matcher<Vec<i32>> = elements_are![1, greater_than_with_distance(5)];

    assert_eq!(
      matcher.explain(&vec![2, 1]),
      "element 0 doesn't match,\n\
       element 1 doesn't match (is 4 less than 5)"
    );
    assert_eq!(matcher.explain(&vec![1, 1]), "element 1 doesn't match (is 4 less than 5)");
  }

  #[test]
  fn matches_an_empty_container() {
    let matcher: Matcher<Vec<i32>> = elements_are![];

    assert!(matcher.matches(&vec![]));
    assert!(!matcher.matches(&vec![1]));
  }

  #[test]
  fn matches_a_one_element_vector() {
    let matcher: Matcher<Vec<String>> = elements_are!["test string"];

    assert!(matcher.matches(&vec!["test string".to_string()]));
  }

  #[test]
  fn matches_a_one_element_list() {
    let matcher: Matcher<LinkedList<String>> = elements_are!["test string"];

    assert!(matcher.matches(&LinkedList::from(["test string".to_string()])));
  }

  #[test]
  fn matches_a_three_element_vector_with_mixed_arguments() {
    let matcher: Matcher<Vec<String>> = elements_are!["one", equal_to("two".to_string()), anything()];

    assert!(matcher.matches(&vec!["one".to_string(), "two".to_string(), "three".to_string()]));
  }

  #[test]
  fn matches_mixed_values_and_matchers() {
    let matcher: Matcher<Vec<i32>> = elements_are![1, equal_to(2), anything()];

    assert!(matcher.matches(&vec![1, 2, 3]));
    assert!(!matcher.matches(&vec![1, 3, 3]));
  }

  #[test]
  fn matches_a_ten_element_vector() {
    let matcher: Matcher<Vec<i32>> = elements_are![0, greater_or_equal(0), anything(), 3, 4, not_equal_to(2), equal_to(6), 7, 8, anything()];

    assert!(matcher.matches(&vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9]));
  }

  #[test]
  fn does_not_match_a_container_of_wrong_size() {
    let matcher: Matcher<Vec<String>> = elements_are!["test string"];

    assert!(!matcher.matches(&vec!["test string".to_string(), "test string".to_string()]));
  }

  #[test]
  fn does_not_match_a_wrong_value() {
    let matcher: Matcher<Vec<String>> = elements_are!["test string"];

    assert!(!matcher.matches(&vec!["other string".to_string()]));
  }

  #[test]
  fn does_not_match_elements_in_wrong_order() {
    let matcher: Matcher<Vec<String>> = elements_are!["one", "two", "three"];

    assert!(!matcher.matches(&vec!["one".to_string(), "three".to_string(), "two".to_string()]));
  }

  #[test]
  fn works_for_nested_containers() {
    let nested: Vec<Vec<char>> = vec!["Hi".chars().collect(), "world".chars().collect()];

    let matching: Matcher<Vec<Vec<char>>> = elements_are![
      elements_are!['H', not_equal_to('e')],
      elements_are!['w', 'o', anything(), anything(), 'd']
    ];
    assert!(matching.matches(&nested));

    let mismatching: Matcher<Vec<Vec<char>>> = elements_are![
      elements_are!['H', 'e'],
      elements_are!['w', 'o', anything(), anything(), 'd']
    ];
    assert!(!mismatching.matches(&nested));
    assert!(not(mismatching).matches(&nested));
  }

  #[test]
  fn matches_an_optional_value() {
    let matcher: Matcher<Option<i32>> = elements_are![greater_than(5)];

    assert!(matcher.matches(&Some(6)));
    assert!(!matcher.matches(&Some(5)));
    assert!(!matcher.matches(&None));
  }

  #[test]
  fn repeated_calls_yield_identical_results() {
    let matcher: Matcher<Vec<i32>> = elements_are![greater_than_with_distance(1), 0];
    let value = vec![10, 0];

    assert_eq!(matcher.matches(&value), matcher.matches(&value));
    assert_eq!(matcher.describe(), matcher.describe());
    assert_eq!(matcher.explain(&value), matcher.explain(&value));
  }
}
