//! Assertion helpers for use inside test actions.
//!
//! Every helper returns `Result<(), AssertionError>` so it composes with `?`
//! in an action returning [`TestOutcome`](crate::TestOutcome). The `*_msg`
//! variants replace the default failure message.

use crate::error::{panic_message, AssertionError};
use crate::value::Value;
use std::fmt::{Debug, Display};
use std::panic::{catch_unwind, AssertUnwindSafe};

pub type AssertResult = Result<(), AssertionError>;

/// Something that may stand for an absent value.
pub trait Nullish: Debug {
    fn is_null(&self) -> bool;

    fn is_undefined(&self) -> bool {
        false
    }
}

impl<T: Debug> Nullish for Option<T> {
    fn is_null(&self) -> bool {
        self.is_none()
    }
}

impl Nullish for Value {
    fn is_null(&self) -> bool {
        Value::is_null(self)
    }

    fn is_undefined(&self) -> bool {
        Value::is_undefined(self)
    }
}

impl<T: Nullish + ?Sized> Nullish for &T {
    fn is_null(&self) -> bool {
        (**self).is_null()
    }

    fn is_undefined(&self) -> bool {
        (**self).is_undefined()
    }
}

fn check(passed: bool, violation: impl FnOnce() -> AssertionError) -> AssertResult {
    if passed {
        Ok(())
    } else {
        Err(violation())
    }
}

pub fn assert_that(condition: bool) -> AssertResult {
    assert_that_msg(condition, "Assertion failed")
}

pub fn assert_that_msg(condition: bool, message: &str) -> AssertResult {
    check(condition, || AssertionError::new(message, "true", "false"))
}

pub fn assert_equal<A, E>(actual: A, expected: E) -> AssertResult
where
    A: PartialEq<E> + Debug,
    E: Debug,
{
    assert_equal_msg(actual, expected, "Values are not equal")
}

pub fn assert_equal_msg<A, E>(actual: A, expected: E, message: &str) -> AssertResult
where
    A: PartialEq<E> + Debug,
    E: Debug,
{
    check(actual == expected, || {
        AssertionError::new(
            message,
            format!("{:?}", expected),
            format!("{:?}", actual),
        )
    })
}

pub fn assert_not_equal<A, E>(actual: A, expected: E) -> AssertResult
where
    A: PartialEq<E> + Debug,
    E: Debug,
{
    assert_not_equal_msg(actual, expected, "Values are equal")
}

pub fn assert_not_equal_msg<A, E>(actual: A, expected: E, message: &str) -> AssertResult
where
    A: PartialEq<E> + Debug,
    E: Debug,
{
    check(actual != expected, || {
        AssertionError::new(
            message,
            format!("not {:?}", expected),
            format!("{:?}", actual),
        )
    })
}

pub fn assert_true(condition: bool) -> AssertResult {
    assert_true_msg(condition, "Condition is not true")
}

pub fn assert_true_msg(condition: bool, message: &str) -> AssertResult {
    check(condition, || AssertionError::new(message, "true", "false"))
}

pub fn assert_false(condition: bool) -> AssertResult {
    assert_false_msg(condition, "Condition is not false")
}

pub fn assert_false_msg(condition: bool, message: &str) -> AssertResult {
    check(!condition, || AssertionError::new(message, "false", "true"))
}

pub fn assert_null<V: Nullish>(value: V) -> AssertResult {
    assert_null_msg(value, "Value is not null")
}

pub fn assert_null_msg<V: Nullish>(value: V, message: &str) -> AssertResult {
    check(value.is_null(), || {
        AssertionError::new(message, "null", format!("{:?}", value))
    })
}

pub fn assert_not_null<V: Nullish>(value: V) -> AssertResult {
    assert_not_null_msg(value, "Value is null")
}

pub fn assert_not_null_msg<V: Nullish>(value: V, message: &str) -> AssertResult {
    check(!value.is_null(), || {
        AssertionError::new(message, "not null", "null")
    })
}

pub fn assert_undefined<V: Nullish>(value: V) -> AssertResult {
    assert_undefined_msg(value, "Value is not undefined")
}

pub fn assert_undefined_msg<V: Nullish>(value: V, message: &str) -> AssertResult {
    check(value.is_undefined(), || {
        AssertionError::new(message, "undefined", format!("{:?}", value))
    })
}

pub fn assert_not_undefined<V: Nullish>(value: V) -> AssertResult {
    assert_not_undefined_msg(value, "Value is undefined")
}

pub fn assert_not_undefined_msg<V: Nullish>(value: V, message: &str) -> AssertResult {
    check(!value.is_undefined(), || {
        AssertionError::new(message, "not undefined", "undefined")
    })
}

/// Passes when `operation` returns an error or panics.
pub fn assert_throws<T, E, F>(operation: F) -> AssertResult
where
    F: FnOnce() -> Result<T, E>,
{
    assert_throws_msg(operation, "Function did not throw")
}

pub fn assert_throws_msg<T, E, F>(operation: F, message: &str) -> AssertResult
where
    F: FnOnce() -> Result<T, E>,
{
    match catch_unwind(AssertUnwindSafe(operation)) {
        Ok(Ok(_)) => Err(AssertionError::new(
            message,
            "an error",
            "completed normally",
        )),
        Ok(Err(_)) | Err(_) => Ok(()),
    }
}

/// Like [`assert_throws`], but the error must also belong to `category`, as
/// decided by `is_category`. A panic never matches a category.
pub fn assert_throws_matching<T, E, F, P>(
    operation: F,
    category: &str,
    is_category: P,
) -> AssertResult
where
    F: FnOnce() -> Result<T, E>,
    E: Display,
    P: FnOnce(&E) -> bool,
{
    assert_throws_matching_msg(operation, category, is_category, "Function did not throw")
}

pub fn assert_throws_matching_msg<T, E, F, P>(
    operation: F,
    category: &str,
    is_category: P,
    message: &str,
) -> AssertResult
where
    F: FnOnce() -> Result<T, E>,
    E: Display,
    P: FnOnce(&E) -> bool,
{
    match catch_unwind(AssertUnwindSafe(operation)) {
        Ok(Ok(_)) => Err(AssertionError::new(message, category, "completed normally")),
        Ok(Err(error)) => check(is_category(&error), || {
            AssertionError::new("Unexpected error category", category, error.to_string())
        }),
        Err(payload) => Err(AssertionError::new(
            "Unexpected error category",
            category,
            format!("panic: {}", panic_message(payload.as_ref())),
        )),
    }
}

pub fn assert_contains<T: PartialEq + Debug>(items: &[T], item: &T) -> AssertResult {
    assert_contains_msg(items, item, "Collection does not contain item")
}

pub fn assert_contains_msg<T: PartialEq + Debug>(
    items: &[T],
    item: &T,
    message: &str,
) -> AssertResult {
    check(items.contains(item), || {
        AssertionError::new(
            message,
            format!("contains {:?}", item),
            format!("{:?}", items),
        )
    })
}

pub fn assert_not_contains<T: PartialEq + Debug>(items: &[T], item: &T) -> AssertResult {
    assert_not_contains_msg(items, item, "Collection contains item")
}

pub fn assert_not_contains_msg<T: PartialEq + Debug>(
    items: &[T],
    item: &T,
    message: &str,
) -> AssertResult {
    check(!items.contains(item), || {
        AssertionError::new(
            message,
            format!("not contains {:?}", item),
            format!("{:?}", items),
        )
    })
}

/// Text equality. A multi-line mismatch is reported as a line diff.
pub fn assert_text_eq(actual: &str, expected: &str) -> AssertResult {
    assert_text_eq_msg(actual, expected, "Text is not equal")
}

pub fn assert_text_eq_msg(actual: &str, expected: &str, message: &str) -> AssertResult {
    check(actual == expected, || {
        AssertionError::text(message, expected, actual)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn message(result: AssertResult) -> String {
        result.unwrap_err().to_string()
    }

    #[derive(Debug, PartialEq)]
    enum MathError {
        DivisionByZero,
        Overflow,
    }

    impl Display for MathError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                MathError::DivisionByZero => write!(f, "Division by zero"),
                MathError::Overflow => write!(f, "Overflow"),
            }
        }
    }

    fn divide(a: i32, b: i32) -> Result<i32, MathError> {
        if b == 0 {
            return Err(MathError::DivisionByZero);
        }
        a.checked_div(b).ok_or(MathError::Overflow)
    }

    #[test]
    fn equal_reports_expected_and_actual() {
        assert_eq!(assert_equal(2 + 2, 4), Ok(()));
        assert_eq!(
            message(assert_equal(2 + 2, 5)),
            "Values are not equal. Expected: 5, Actual: 4"
        );
    }

    #[test]
    fn equal_is_strict_across_kinds() {
        assert!(assert_equal(Value::from(1), Value::from("1")).is_err());
        assert!(assert_equal(Value::from(1), Value::from(1)).is_ok());
    }

    #[test]
    fn equal_compares_owned_and_borrowed_strings() {
        assert!(assert_equal(String::from("ok"), "ok").is_ok());
        assert_eq!(
            message(assert_equal_msg(String::from("ko"), "ok", "Wrong status")),
            "Wrong status. Expected: \"ok\", Actual: \"ko\""
        );
    }

    #[test]
    fn not_equal() {
        assert!(assert_not_equal(1, 2).is_ok());
        assert_eq!(
            message(assert_not_equal(3, 3)),
            "Values are equal. Expected: not 3, Actual: 3"
        );
    }

    #[rstest]
    #[case(assert_true(false), "Condition is not true. Expected: true, Actual: false")]
    #[case(assert_false(true), "Condition is not false. Expected: false, Actual: true")]
    #[case(assert_that(false), "Assertion failed. Expected: true, Actual: false")]
    #[case(
        assert_that_msg(false, "Should be even"),
        "Should be even. Expected: true, Actual: false"
    )]
    fn boolean_violations(#[case] result: AssertResult, #[case] expected: &str) {
        assert_eq!(message(result), expected);
    }

    #[rstest]
    #[case(assert_true(true))]
    #[case(assert_false(false))]
    #[case(assert_that(true))]
    #[case(assert_null(None::<i32>))]
    #[case(assert_null(Value::Null))]
    #[case(assert_not_null(Some(0)))]
    #[case(assert_not_null(Value::Undefined))]
    #[case(assert_undefined(Value::Undefined))]
    #[case(assert_not_undefined(Value::Null))]
    #[case(assert_not_undefined(None::<u8>))]
    #[case(assert_contains(&[1, 2, 3], &2))]
    #[case(assert_not_contains(&["a", "b"], &"c"))]
    #[case(assert_text_eq("same", "same"))]
    fn passing_assertions(#[case] result: AssertResult) {
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn null_checks() {
        assert_eq!(
            message(assert_null(Some(3))),
            "Value is not null. Expected: null, Actual: Some(3)"
        );
        assert_eq!(
            message(assert_not_null(None::<String>)),
            "Value is null. Expected: not null, Actual: null"
        );
        let stored = Some(String::from("value"));
        assert!(assert_not_null(&stored).is_ok());
    }

    #[test]
    fn undefined_checks() {
        assert_eq!(
            message(assert_undefined(Value::from(1))),
            "Value is not undefined. Expected: undefined, Actual: 1"
        );
        assert_eq!(
            message(assert_not_undefined(Value::Undefined)),
            "Value is undefined. Expected: not undefined, Actual: undefined"
        );
    }

    #[test]
    fn throws_on_error() {
        assert!(assert_throws(|| divide(10, 0)).is_ok());
        assert_eq!(
            message(assert_throws(|| divide(10, 2))),
            "Function did not throw. Expected: an error, Actual: completed normally"
        );
    }

    #[test]
    fn throws_on_panic() {
        let result = assert_throws(|| -> Result<(), ()> { panic!("boom") });
        assert!(result.is_ok());
    }

    #[test]
    fn throws_matching_checks_category() {
        assert!(assert_throws_matching(
            || divide(1, 0),
            "DivisionByZero",
            |e| *e == MathError::DivisionByZero
        )
        .is_ok());

        assert_eq!(
            message(assert_throws_matching(
                || divide(i32::MIN, -1),
                "DivisionByZero",
                |e| *e == MathError::DivisionByZero
            )),
            "Unexpected error category. Expected: DivisionByZero, Actual: Overflow"
        );

        assert_eq!(
            message(assert_throws_matching_msg(
                || divide(4, 2),
                "DivisionByZero",
                |e| *e == MathError::DivisionByZero,
                "Should throw division by zero error"
            )),
            "Should throw division by zero error. Expected: DivisionByZero, Actual: completed normally"
        );
    }

    #[test]
    fn contains_reports_collection() {
        assert_eq!(
            message(assert_contains(&[1, 2, 3], &6)),
            "Collection does not contain item. Expected: contains 6, Actual: [1, 2, 3]"
        );
        assert_eq!(
            message(assert_not_contains(&["a", "b"], &"a")),
            "Collection contains item. Expected: not contains \"a\", Actual: [\"a\", \"b\"]"
        );
    }

    #[test]
    fn text_mismatch_uses_diff_for_multiple_lines() {
        let error = assert_text_eq("a\nb\n", "a\nc\n").unwrap_err();
        assert!(error.is_text_diff());
        assert_eq!(error.expected, "a\nc\n");
        assert_eq!(error.actual, "a\nb\n");
    }
}
