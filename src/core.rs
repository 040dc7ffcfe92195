use std::sync::Arc;

/// Sink for streaming description text. Any matcher writes its phrases here
/// fragment by fragment; the finished text is extracted once at the end.
#[derive(Default)]
pub struct Description {
  text: String,
}

impl Description {
  pub fn new() -> Self {
    Description { text: String::new() }
  }

  pub fn append(&mut self, fragment: impl AsRef<str>) {
    self.text.push_str(fragment.as_ref());
  }

  pub fn into_text(self) -> String {
    self.text
  }
}

/// A matching strategy over values of type `T`.
///
/// `describe_to` completes the sentence "value ...", e.g. "is greater than 5".
/// `describe_negation_to` defaults to wrapping the description in "not (...)";
/// override it when a clearer phrase exists ("is not greater than 5").
/// `explain_match_to` defaults to writing nothing, which signals that the
/// description already says enough.
///
/// All operations are pure reads of the tested value.
pub trait Match<T: ?Sized> {
  fn matches(&self, actual: &T) -> bool;

  fn describe_to(&self, out: &mut Description);

  fn describe_negation_to(&self, out: &mut Description) {
    out.append("not (");
    self.describe_to(out);
    out.append(")");
  }

  fn explain_match_to(&self, _actual: &T, _out: &mut Description) {}
}

/// Value-semantics handle over a shared matching strategy.
///
/// Cloning is cheap and the handle holds no per-match state, so one matcher
/// can be applied to any number of values, from any number of readers.
pub struct Matcher<T: ?Sized> {
  strategy: Arc<dyn Match<T> + Send + Sync>,
}

impl<T: ?Sized> Clone for Matcher<T> {
  fn clone(&self) -> Self {
    Matcher {
      strategy: Arc::clone(&self.strategy),
    }
  }
}

impl<T: ?Sized> Matcher<T> {
  pub fn new<M>(strategy: M) -> Self
  where
    M: Match<T> + Send + Sync + 'static,
  {
    Matcher { strategy: Arc::new(strategy) }
  }

  pub fn matches(&self, actual: &T) -> bool {
    self.strategy.matches(actual)
  }

  pub fn describe(&self) -> String {
    let mut out = Description::new();
    self.strategy.describe_to(&mut out);
    out.into_text()
  }

  pub fn describe_negation(&self) -> String {
    let mut out = Description::new();
    self.strategy.describe_negation_to(&mut out);
    out.into_text()
  }

  /// Why `actual` did or did not match, beyond the description. Empty for
  /// trivial matchers.
  pub fn explain(&self, actual: &T) -> String {
    let mut out = Description::new();
    self.strategy.explain_match_to(actual, &mut out);
    out.into_text()
  }
}

impl<T: ?Sized> Match<T> for Matcher<T> {
  fn matches(&self, actual: &T) -> bool {
    self.strategy.matches(actual)
  }

  fn describe_to(&self, out: &mut Description) {
    self.strategy.describe_to(out)
  }

  fn describe_negation_to(&self, out: &mut Description) {
    self.strategy.describe_negation_to(out)
  }

  fn explain_match_to(&self, actual: &T, out: &mut Description) {
    self.strategy.explain_match_to(actual, out)
  }
}

/// Conversion of composition arguments into matcher handles.
///
/// A matcher converts to itself, a raw value converts to an equality matcher
/// (see `matchers::equal_to` for the value impls), so values and matchers mix
/// freely in one argument list. Conversion happens once at composition time,
/// never at match time.
pub trait IntoMatcher<T: ?Sized> {
  fn into_matcher(self) -> Matcher<T>;
}

impl<T: ?Sized> IntoMatcher<T> for Matcher<T> {
  fn into_matcher(self) -> Matcher<T> {
    self
  }
}
