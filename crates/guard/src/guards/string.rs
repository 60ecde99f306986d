//! String guards: emptiness, white space and regular-expression matching.

use std::time::{Duration, Instant};

use regex::{Regex, RegexBuilder};

use crate::foundation::{Arg, GuardBuilder, GuardResult, Nullable, ensure};

// ============================================================================
// PATTERN OPTIONS
// ============================================================================

/// Engine flags and an optional time limit for pattern guards.
///
/// ```rust
/// use std::time::Duration;
/// use bulwark_guard::prelude::*;
///
/// let options = PatternOptions::new()
///     .case_insensitive(true)
///     .timeout(Duration::from_millis(50));
///
/// let code = "abc-123";
/// assert!(Guard::argument().is_regex_match(arg!(code), "^ABC", &options).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternOptions {
    /// Match letters regardless of case.
    pub case_insensitive: bool,
    /// `^` and `$` match at line boundaries.
    pub multi_line: bool,
    /// `.` also matches `\n`.
    pub dot_matches_new_line: bool,
    /// Ignore unescaped white space and allow `#` comments in the pattern.
    pub ignore_whitespace: bool,
    /// Unicode-aware classes and case folding. On by default.
    pub unicode: bool,
    /// Upper bound on the time spent matching.
    pub timeout: Option<Duration>,
}

impl Default for PatternOptions {
    fn default() -> Self {
        Self {
            case_insensitive: false,
            multi_line: false,
            dot_matches_new_line: false,
            ignore_whitespace: false,
            unicode: true,
            timeout: None,
        }
    }
}

impl PatternOptions {
    /// Default options: Unicode on, every other flag off, no timeout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets case-insensitive matching.
    #[must_use = "builder methods must be chained or built"]
    pub fn case_insensitive(mut self, yes: bool) -> Self {
        self.case_insensitive = yes;
        self
    }

    /// Sets multi-line anchors.
    #[must_use = "builder methods must be chained or built"]
    pub fn multi_line(mut self, yes: bool) -> Self {
        self.multi_line = yes;
        self
    }

    /// Lets `.` match new lines.
    #[must_use = "builder methods must be chained or built"]
    pub fn dot_matches_new_line(mut self, yes: bool) -> Self {
        self.dot_matches_new_line = yes;
        self
    }

    /// Sets verbose pattern syntax.
    #[must_use = "builder methods must be chained or built"]
    pub fn ignore_whitespace(mut self, yes: bool) -> Self {
        self.ignore_whitespace = yes;
        self
    }

    /// Sets Unicode mode.
    #[must_use = "builder methods must be chained or built"]
    pub fn unicode(mut self, yes: bool) -> Self {
        self.unicode = yes;
        self
    }

    /// Sets the match time limit.
    #[must_use = "builder methods must be chained or built"]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Compiles `pattern` with these options.
    ///
    /// An invalid pattern or a zero timeout is reported as a constraint
    /// error on the `pattern` or `timeout` parameter.
    pub fn compile(&self, pattern: &str) -> GuardResult<Regex> {
        if let Some(timeout) = self.timeout {
            ensure(
                Arg::new(timeout, "timeout"),
                |timeout| !timeout.is_zero(),
                |timeout| format!("Value was '{timeout:?}', but must be greater than zero."),
            )?;
        }

        RegexBuilder::new(pattern)
            .case_insensitive(self.case_insensitive)
            .multi_line(self.multi_line)
            .dot_matches_new_line(self.dot_matches_new_line)
            .ignore_whitespace(self.ignore_whitespace)
            .unicode(self.unicode)
            .build()
            .map_err(|error| {
                tracing::debug!(%pattern, %error, "invalid guard pattern");
                Arg::new(pattern.to_owned(), "pattern").reject(|pattern| {
                    format!("Value was '{pattern}', but must be a valid regular expression.")
                })
            })
    }
}

/// Runs `regex` against the argument, enforcing the optional time limit.
///
/// The engine is linear-time, so matching always finishes; the elapsed time
/// is checked afterwards and a verdict that took too long is discarded.
fn timed_match<S: AsRef<str>>(regex: &Regex, argument: &Arg<S>, timeout: Option<Duration>) -> GuardResult<bool> {
    let started = Instant::now();
    let matched = regex.is_match(argument.value().as_ref());

    match timeout {
        Some(limit) if started.elapsed() > limit => Err(argument.timed_out(limit, |_| {
            format!("Matching pattern '{}' exceeded the timeout of {limit:?}.", regex.as_str())
        })),
        _ => Ok(matched),
    }
}

// ============================================================================
// GUARDS
// ============================================================================

/// Guards over nullable strings (`&str`, `String`, `Cow<str>`, and `Option`s
/// of those).
pub trait StringGuards: GuardBuilder {
    /// Fails when the argument is absent or empty.
    ///
    /// Absence is reported as a constraint error with the same message.
    ///
    /// ```rust
    /// use bulwark_guard::prelude::*;
    ///
    /// let nickname: Option<String> = None;
    /// let err = Guard::argument().is_null_or_empty(arg!(nickname)).unwrap_err();
    /// assert!(err.is_constraint());
    /// assert_eq!(err.message(), "Cannot be null or empty.");
    /// ```
    fn is_null_or_empty<N>(&self, argument: Arg<N>) -> GuardResult<N::Present>
    where
        N: Nullable,
        N::Present: AsRef<str>,
    {
        require_text(argument, |s| !s.is_empty(), "Cannot be null or empty.")
    }

    /// Fails when the argument is absent, empty, or only white space.
    fn is_null_or_white_space<N>(&self, argument: Arg<N>) -> GuardResult<N::Present>
    where
        N: Nullable,
        N::Present: AsRef<str>,
    {
        require_text(argument, |s| !s.trim().is_empty(), "Cannot be null or white space.")
    }

    /// Fails when `pattern` matches somewhere in the argument.
    fn is_regex_match<N>(
        &self,
        argument: Arg<N>,
        pattern: &str,
        options: &PatternOptions,
    ) -> GuardResult<N::Present>
    where
        N: Nullable,
        N::Present: AsRef<str>,
    {
        let argument = crate::foundation::present(argument)?;
        let regex = options.compile(pattern)?;
        let matched = timed_match(&regex, &argument, options.timeout)?;

        ensure(
            argument,
            |_| !matched,
            |value| {
                let text: &str = value.as_ref();
                format!("Value was '{text}', but cannot match pattern '{pattern}'.")
            },
        )
    }

    /// Fails when `pattern` matches nowhere in the argument.
    fn is_not_regex_match<N>(
        &self,
        argument: Arg<N>,
        pattern: &str,
        options: &PatternOptions,
    ) -> GuardResult<N::Present>
    where
        N: Nullable,
        N::Present: AsRef<str>,
    {
        let argument = crate::foundation::present(argument)?;
        let regex = options.compile(pattern)?;
        let matched = timed_match(&regex, &argument, options.timeout)?;

        ensure(
            argument,
            |_| matched,
            |value| {
                let text: &str = value.as_ref();
                format!("Value was '{text}', but must match pattern '{pattern}'.")
            },
        )
    }
}

impl<B: GuardBuilder + ?Sized> StringGuards for B {}

fn require_text<N>(argument: Arg<N>, permits: impl FnOnce(&str) -> bool, default: &str) -> GuardResult<N::Present>
where
    N: Nullable,
    N::Present: AsRef<str>,
{
    let (value, header) = argument.split();
    match value.into_present() {
        Some(value) => ensure(header.map(|()| value), |s| permits(s.as_ref()), |_| default.to_owned()),
        None => Err(header.reject(|_| default.to_owned())),
    }
}
