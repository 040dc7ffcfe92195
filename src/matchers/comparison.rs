use crate::core::{Description, Match, Matcher};
use std::fmt::Debug;

// The relational matchers differ only in the comparison operator and the
// phrase pair, so they are stamped out together.
macro_rules! comparison_matcher {
  ($matcher:ident, $factory:ident, $op:tt, $relation:expr, $negated_relation:expr) => {
    pub struct $matcher<E> {
      rhs: E,
    }

    impl<T, E> Match<T> for $matcher<E>
    where
      T: PartialOrd<E>,
      E: Debug,
    {
      fn matches(&self, actual: &T) -> bool {
        *actual $op self.rhs
      }

      fn describe_to(&self, out: &mut Description) {
        out.append(format!("{} {:?}", $relation, self.rhs));
      }

      fn describe_negation_to(&self, out: &mut Description) {
        out.append(format!("{} {:?}", $negated_relation, self.rhs));
      }
    }

    pub fn $factory<T>(rhs: T) -> Matcher<T>
    where
      T: PartialOrd + Debug + Send + Sync + 'static,
    {
      Matcher::new($matcher { rhs })
    }
  };
}

comparison_matcher!(GreaterThanMatcher, greater_than, >, "is greater than", "is not greater than");
comparison_matcher!(GreaterOrEqualMatcher, greater_or_equal, >=, "is greater than or equal to", "is not greater than or equal to");
comparison_matcher!(LessThanMatcher, less_than, <, "is less than", "is not less than");
comparison_matcher!(LessOrEqualMatcher, less_or_equal, <=, "is less than or equal to", "is not less than or equal to");
comparison_matcher!(NotEqualMatcher, not_equal_to, !=, "isn't equal to", "is equal to");
