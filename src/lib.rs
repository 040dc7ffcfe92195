//! Composable matchers for assertions over container-like values.
//!
//! A [`Matcher<T>`] tests a value, describes itself in natural language and can
//! explain why a particular value did or did not match. Small matchers (equality,
//! relational comparisons, the wildcard [`anything`]) compose into matchers over
//! ordered sequences via [`elements_are!`] and [`elements_are_array`].
//!
//! ```
//! use seqmatch::{assert_that, elements_are, greater_than};
//!
//! assert_that(&vec![6, 2], elements_are![greater_than(5), 2]);
//! ```

pub mod assertion;
pub mod core;
pub mod matchers;
pub mod types;

pub use crate::assertion::{assert_that, assert_that_at};
pub use crate::core::{Description, IntoMatcher, Match, Matcher};
pub use crate::matchers::anything::anything;
pub use crate::matchers::comparison::{greater_or_equal, greater_than, less_or_equal, less_than, not_equal_to};
pub use crate::matchers::elements_are::elements_are;
pub use crate::matchers::elements_are_array::elements_are_array;
pub use crate::matchers::equal_to::equal_to;
pub use crate::matchers::not::not;
pub use crate::types::Iterable;
