//! Type-parametric guards: null, equality and predicate checks.

use serde::Serialize;

use crate::foundation::{Arg, GuardBuilder, GuardResult, Nullable, ensure, present, render};

/// Guards usable with any [`Nullable`] value.
pub trait GenericGuards: GuardBuilder {
    /// Fails with an absence error when the argument is absent; returns the
    /// present value otherwise.
    ///
    /// ```rust
    /// use bulwark_guard::prelude::*;
    ///
    /// let name: Option<&str> = None;
    /// let err = Guard::argument().is_null(arg!(name)).unwrap_err();
    /// assert_eq!(err.to_string(), "Value cannot be null. (Parameter 'name')");
    /// ```
    fn is_null<N: Nullable>(&self, argument: Arg<N>) -> GuardResult<N::Present> {
        present(argument).map(Arg::into_value)
    }

    /// Fails when the argument equals `comparison`.
    ///
    /// Both values are null-checked first; the custom message only applies
    /// to the argument's check, the comparison is reported as `comparison`
    /// with the default message.
    fn is_equal_to<N>(&self, argument: Arg<N>, comparison: N) -> GuardResult<N::Present>
    where
        N: Nullable,
        N::Present: PartialEq + Serialize,
    {
        let argument = present(argument)?;
        let comparison = self.is_null(Arg::new(comparison, "comparison"))?;

        ensure(
            argument,
            |value| *value != comparison,
            |value| {
                format!(
                    "Value was '{}', but must not be equal to '{}'.",
                    render(value),
                    render(&comparison)
                )
            },
        )
    }

    /// Fails when the argument differs from `comparison`.
    fn is_not_equal_to<N>(&self, argument: Arg<N>, comparison: N) -> GuardResult<N::Present>
    where
        N: Nullable,
        N::Present: PartialEq + Serialize,
    {
        let argument = present(argument)?;
        let comparison = self.is_null(Arg::new(comparison, "comparison"))?;

        ensure(
            argument,
            |value| *value == comparison,
            |value| {
                format!(
                    "Value was '{}', but must be equal to '{}'.",
                    render(value),
                    render(&comparison)
                )
            },
        )
    }

    /// Fails when `expression` returns false for the argument.
    fn is_against_expression<N, F>(&self, argument: Arg<N>, expression: F) -> GuardResult<N::Present>
    where
        N: Nullable,
        N::Present: Serialize,
        F: FnOnce(&N::Present) -> bool,
    {
        ensure(present(argument)?, expression, |value| {
            format!("Value was '{}', but did not match your expression.", render(value))
        })
    }
}

impl<B: GuardBuilder + ?Sized> GenericGuards for B {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Guard;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn is_null_returns_present_value() {
        let name = Some("alice");
        assert_eq!(Guard::argument().is_null(crate::arg!(name)).unwrap(), "alice");
    }

    #[test]
    fn is_null_custom_message() {
        let name: Option<String> = None;
        let err = Guard::argument()
            .is_null(crate::arg!(name).with_message("name is required"))
            .unwrap_err();
        assert!(err.is_absent());
        assert_eq!(err.to_string(), "name is required. (Parameter 'name')");
    }

    #[test]
    fn json_null_is_absent() {
        let payload = json!(null);
        assert!(Guard::argument().is_null(crate::arg!(payload)).unwrap_err().is_absent());
    }

    #[test]
    fn is_equal_to_messages() {
        let status = "closed";
        let err = Guard::argument().is_equal_to(crate::arg!(status), "closed").unwrap_err();
        assert_eq!(err.message(), "Value was 'closed', but must not be equal to 'closed'.");
        assert_eq!(Guard::argument().is_equal_to(crate::arg!(status), "open").unwrap(), "closed");
    }

    #[test]
    fn is_not_equal_to_messages() {
        let tags = vec!["a", "b"];
        let err = Guard::argument()
            .is_not_equal_to(crate::arg!(tags.clone(), "tags"), vec!["a"])
            .unwrap_err();
        assert_eq!(err.message(), r#"Value was '["a","b"]', but must be equal to '["a"]'."#);
        assert_eq!(
            Guard::argument().is_not_equal_to(crate::arg!(tags.clone(), "tags"), vec!["a", "b"]).unwrap(),
            tags
        );
    }

    #[test]
    fn absent_argument_wins_over_comparison() {
        let value: Option<i32> = None;
        let err = Guard::argument().is_equal_to(crate::arg!(value), None).unwrap_err();
        assert_eq!(err.param_name(), "value");
    }

    #[test]
    fn absent_comparison_is_reported_with_default_message() {
        let value = Some(1);
        let err = Guard::argument()
            .is_equal_to(crate::arg!(value).with_message("custom"), None)
            .unwrap_err();
        assert!(err.is_absent());
        assert_eq!(err.param_name(), "comparison");
        assert_eq!(err.message(), "Value cannot be null.");
    }

    #[test]
    fn is_against_expression() {
        let age = 17;
        let err = Guard::argument().is_against_expression(crate::arg!(age), |a| *a >= 18).unwrap_err();
        assert_eq!(err.message(), "Value was '17', but did not match your expression.");
        assert_eq!(Guard::argument().is_against_expression(crate::arg!(age), |a| *a > 0).unwrap(), 17);
    }
}
