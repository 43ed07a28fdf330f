use crate::Description;

/// Predicate over `T` that can explain itself when it fails.
///
/// The host calls [`matches`](Self::matches) first and, only when it returns
/// `false`, [`describe_to`](Self::describe_to) and
/// [`describe_mismatch`](Self::describe_mismatch) with the same candidate.
/// Implementations in this crate hold configuration only, so the three calls
/// may interleave freely across candidates and threads.
pub trait Matcher<T: ?Sized> {
    /// Returns `true` if `actual` satisfies the matcher.
    fn matches(&self, actual: &T) -> bool;

    /// Describes what the matcher expects.
    fn describe_to(&self, description: &mut Description);

    /// Describes why `actual` does not satisfy the matcher.
    fn describe_mismatch(&self, actual: &T, description: &mut Description);
}

impl<T: ?Sized, M: Matcher<T> + ?Sized> Matcher<T> for &M {
    fn matches(&self, actual: &T) -> bool {
        (**self).matches(actual)
    }

    fn describe_to(&self, description: &mut Description) {
        (**self).describe_to(description);
    }

    fn describe_mismatch(&self, actual: &T, description: &mut Description) {
        (**self).describe_mismatch(actual, description);
    }
}

/// Returns the failure message for `actual`, or `None` if `matcher` accepts it.
pub fn mismatch_message<T, M>(actual: &T, matcher: &M) -> Option<String>
where
    T: ?Sized,
    M: Matcher<T> + ?Sized,
{
    if matcher.matches(actual) {
        return None;
    }

    let mut expected = Description::new();
    matcher.describe_to(&mut expected);
    let mut mismatch = Description::new();
    matcher.describe_mismatch(actual, &mut mismatch);

    Some(format!("\nExpected: {expected}\n     but: {mismatch}"))
}

/// Panics with the matcher's descriptions unless `matcher` accepts `actual`.
#[track_caller]
pub fn assert_that<T, M>(actual: &T, matcher: &M)
where
    T: ?Sized,
    M: Matcher<T> + ?Sized,
{
    if let Some(message) = mismatch_message(actual, matcher) {
        panic!("{message}");
    }
}

/// Like [`assert_that`], prefixing the failure with `reason`.
#[track_caller]
pub fn assert_that_with_reason<T, M>(actual: &T, matcher: &M, reason: &str)
where
    T: ?Sized,
    M: Matcher<T> + ?Sized,
{
    if let Some(message) = mismatch_message(actual, matcher) {
        panic!("{reason}{message}");
    }
}

/// Asserts that a value satisfies a [`Matcher`].
///
/// # Example
/// ```
/// use matchers::{assert_that, is_error_code};
///
/// assert_that!(model::error_code(1000), is_error_code(1000));
/// assert_that!(model::error_code(1000), is_error_code(1000), "code for {}", "name");
/// ```
#[macro_export]
macro_rules! assert_that {
    ($actual:expr, $matcher:expr $(,)?) => {
        $crate::assert_that(&$actual, &$matcher)
    };
    ($actual:expr, $matcher:expr, $($reason:tt)+) => {
        $crate::assert_that_with_reason(&$actual, &$matcher, &format!($($reason)+))
    };
}
