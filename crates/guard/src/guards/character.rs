//! Character classification guards.
//!
//! Classes follow the Unicode general categories. Guards accept any
//! [`CodeUnit`]: a `char`, or a UTF-16 `u16` code unit (the only way to
//! express a lone surrogate).

use std::fmt;

use unicode_general_category::{GeneralCategory, get_general_category};

use crate::foundation::{Arg, GuardBuilder, GuardResult, ensure};

// ============================================================================
// CODE UNITS
// ============================================================================

/// A single character-like value that can be classified.
pub trait CodeUnit: Copy + fmt::Debug {
    /// The numeric code point (or UTF-16 code unit).
    fn code_point(self) -> u32;

    /// The value as a Unicode scalar, or `None` for surrogates.
    fn to_char(self) -> Option<char>;
}

impl CodeUnit for char {
    #[inline]
    fn code_point(self) -> u32 {
        u32::from(self)
    }

    #[inline]
    fn to_char(self) -> Option<char> {
        Some(self)
    }
}

impl CodeUnit for u16 {
    #[inline]
    fn code_point(self) -> u32 {
        u32::from(self)
    }

    #[inline]
    fn to_char(self) -> Option<char> {
        char::from_u32(u32::from(self))
    }
}

/// Formats a code unit for messages: the character itself, or `\u{XXXX}`
/// when it has no scalar value.
fn show<C: CodeUnit>(unit: C) -> String {
    match unit.to_char() {
        Some(c) => c.to_string(),
        None => format!("\\u{{{:04X}}}", unit.code_point()),
    }
}

// ============================================================================
// CLASSES
// ============================================================================

/// A character classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// U+0000 through U+007F.
    Ascii,
    /// General category Cc.
    Control,
    /// General category Nd.
    Digit,
    /// Any letter category (Lu, Ll, Lt, Lm, Lo).
    Letter,
    /// General category Ll.
    Lower,
    /// General category Lu.
    Upper,
    /// Any number category (Nd, Nl, No).
    Number,
    /// Any punctuation category.
    Punctuation,
    /// Any separator category (Zs, Zl, Zp).
    Separator,
    /// Any symbol category (Sm, Sc, Sk, So).
    Symbol,
    /// U+D800 through U+DFFF.
    Surrogate,
    /// U+D800 through U+DBFF.
    HighSurrogate,
    /// U+DC00 through U+DFFF.
    LowSurrogate,
    /// The Unicode `White_Space` property.
    WhiteSpace,
    /// [`Letter`](Self::Letter) or [`Digit`](Self::Digit).
    LetterOrDigit,
}

impl CharClass {
    /// Every class, in declaration order.
    pub const ALL: [Self; 15] = [
        Self::Ascii,
        Self::Control,
        Self::Digit,
        Self::Letter,
        Self::Lower,
        Self::Upper,
        Self::Number,
        Self::Punctuation,
        Self::Separator,
        Self::Symbol,
        Self::Surrogate,
        Self::HighSurrogate,
        Self::LowSurrogate,
        Self::WhiteSpace,
        Self::LetterOrDigit,
    ];

    /// Returns true when `unit` belongs to this class.
    pub fn matches<C: CodeUnit>(self, unit: C) -> bool {
        let code = unit.code_point();
        match self {
            Self::Ascii => code <= 0x7F,
            Self::Surrogate => (0xD800..=0xDFFF).contains(&code),
            Self::HighSurrogate => (0xD800..=0xDBFF).contains(&code),
            Self::LowSurrogate => (0xDC00..=0xDFFF).contains(&code),
            _ => unit.to_char().is_some_and(|c| self.matches_scalar(c)),
        }
    }

    fn matches_scalar(self, c: char) -> bool {
        use GeneralCategory as G;

        let category = get_general_category(c);
        match self {
            Self::Control => matches!(category, G::Control),
            Self::Digit => matches!(category, G::DecimalNumber),
            Self::Letter => is_letter(category),
            Self::Lower => matches!(category, G::LowercaseLetter),
            Self::Upper => matches!(category, G::UppercaseLetter),
            Self::Number => matches!(category, G::DecimalNumber | G::LetterNumber | G::OtherNumber),
            Self::Punctuation => matches!(
                category,
                G::ConnectorPunctuation
                    | G::DashPunctuation
                    | G::OpenPunctuation
                    | G::ClosePunctuation
                    | G::InitialPunctuation
                    | G::FinalPunctuation
                    | G::OtherPunctuation
            ),
            Self::Separator => matches!(
                category,
                G::SpaceSeparator | G::LineSeparator | G::ParagraphSeparator
            ),
            Self::Symbol => matches!(
                category,
                G::MathSymbol | G::CurrencySymbol | G::ModifierSymbol | G::OtherSymbol
            ),
            Self::WhiteSpace => c.is_whitespace(),
            Self::LetterOrDigit => is_letter(category) || matches!(category, G::DecimalNumber),
            Self::Ascii | Self::Surrogate | Self::HighSurrogate | Self::LowSurrogate => false,
        }
    }

    /// The class name with its indefinite article, as used in messages.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Ascii => "an ASCII",
            Self::Control => "a control",
            Self::Digit => "a digit",
            Self::Letter => "a letter",
            Self::Lower => "a lower",
            Self::Upper => "an upper",
            Self::Number => "a number",
            Self::Punctuation => "a punctuation",
            Self::Separator => "a separator",
            Self::Symbol => "a symbol",
            Self::Surrogate => "a surrogate",
            Self::HighSurrogate => "a high surrogate",
            Self::LowSurrogate => "a low surrogate",
            Self::WhiteSpace => "a white space",
            Self::LetterOrDigit => "a letter or digit",
        }
    }
}

fn is_letter(category: GeneralCategory) -> bool {
    matches!(
        category,
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

// ============================================================================
// GUARDS
// ============================================================================

/// Classification guards over `char` and UTF-16 code units.
///
/// ```rust
/// use bulwark_guard::prelude::*;
///
/// let separator = ';';
/// assert_eq!(Guard::argument().is_letter(arg!(separator)).unwrap(), ';');
///
/// let err = Guard::argument().is_not_digit(arg!(separator)).unwrap_err();
/// assert_eq!(err.message(), "Value was ';', but must be a digit character.");
///
/// let lone = 0xD800_u16;
/// assert!(Guard::argument().is_high_surrogate(arg!(lone)).is_err());
/// ```
pub trait CharGuards: GuardBuilder {
    /// Fails when the argument belongs to `class`.
    fn is_char_class<C: CodeUnit>(&self, argument: Arg<C>, class: CharClass) -> GuardResult<C> {
        ensure(
            argument,
            |unit| !class.matches(*unit),
            |unit| format!("Value was '{}', but must not be {class} character.", show(*unit)),
        )
    }

    /// Fails when the argument does not belong to `class`.
    fn is_not_char_class<C: CodeUnit>(&self, argument: Arg<C>, class: CharClass) -> GuardResult<C> {
        ensure(
            argument,
            |unit| class.matches(*unit),
            |unit| format!("Value was '{}', but must be {class} character.", show(*unit)),
        )
    }

    crate::macros::char_class_guards! {
        /// Fails on ASCII characters.
        Ascii => is_ascii, is_not_ascii;
        /// Fails on control characters.
        Control => is_control, is_not_control;
        /// Fails on decimal digits.
        Digit => is_digit, is_not_digit;
        /// Fails on letters.
        Letter => is_letter, is_not_letter;
        /// Fails on lowercase letters.
        Lower => is_lower, is_not_lower;
        /// Fails on uppercase letters.
        Upper => is_upper, is_not_upper;
        /// Fails on any numeric character.
        Number => is_number, is_not_number;
        /// Fails on punctuation.
        Punctuation => is_punctuation, is_not_punctuation;
        /// Fails on separators.
        Separator => is_separator, is_not_separator;
        /// Fails on symbols.
        Symbol => is_symbol, is_not_symbol;
        /// Fails on surrogate code units.
        Surrogate => is_surrogate, is_not_surrogate;
        /// Fails on high (leading) surrogates.
        HighSurrogate => is_high_surrogate, is_not_high_surrogate;
        /// Fails on low (trailing) surrogates.
        LowSurrogate => is_low_surrogate, is_not_low_surrogate;
        /// Fails on white space.
        WhiteSpace => is_white_space, is_not_white_space;
        /// Fails on letters and decimal digits.
        LetterOrDigit => is_letter_or_digit, is_not_letter_or_digit;
    }
}

impl<B: GuardBuilder + ?Sized> CharGuards for B {}
