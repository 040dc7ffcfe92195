use std::collections::{LinkedList, VecDeque};

/// Read-only view of an ordered container: its elements in iteration order and
/// its length. Sequence matchers accept any implementor, so one matcher works
/// against vectors, deques, lists and arrays alike.
pub trait Iterable {
  type Item;
  fn elements(&self) -> Vec<Self::Item>;
  fn count(&self) -> usize;
}

impl<T> Iterable for Vec<T>
where
  T: Clone,
{
  type Item = T;

  fn elements(&self) -> Vec<T> {
    self.to_vec()
  }

  fn count(&self) -> usize {
    self.len()
  }
}

impl<T> Iterable for VecDeque<T>
where
  T: Clone,
{
  type Item = T;

  fn elements(&self) -> Vec<T> {
    self.iter().cloned().collect()
  }

  fn count(&self) -> usize {
    self.len()
  }
}

impl<T> Iterable for LinkedList<T>
where
  T: Clone,
{
  type Item = T;

  fn elements(&self) -> Vec<T> {
    self.iter().cloned().collect()
  }

  fn count(&self) -> usize {
    self.len()
  }
}

impl<T, const N: usize> Iterable for [T; N]
where
  T: Clone,
{
  type Item = T;

  fn elements(&self) -> Vec<T> {
    self.to_vec()
  }

  fn count(&self) -> usize {
    N
  }
}

impl<T> Iterable for Option<T>
where
  T: Clone,
{
  type Item = T;

  fn elements(&self) -> Vec<T> {
    self.iter().cloned().collect()
  }

  fn count(&self) -> usize {
    if self.is_some() {
      1
    } else {
      0
    }
  }
}
