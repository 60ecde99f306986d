//! Boolean guards

use crate::foundation::{Arg, GuardBuilder, GuardResult, ensure};

/// Guards over `bool` arguments.
pub trait BooleanGuards: GuardBuilder {
    /// Fails when the argument is `true`.
    fn is_true(&self, argument: Arg<bool>) -> GuardResult<bool> {
        ensure(argument, |value| !*value, |_| "Value cannot be true.".to_owned())
    }

    /// Fails when the argument is `false`.
    fn is_false(&self, argument: Arg<bool>) -> GuardResult<bool> {
        ensure(argument, |value| *value, |_| "Value cannot be false.".to_owned())
    }
}

impl<B: GuardBuilder + ?Sized> BooleanGuards for B {}
