//! Leveled assertions which are used to check internal invariants of the solver.
//!
//! The level which is active is determined by [`CRAYON_ASSERT_LEVEL_DEFINITION`]; every assertion
//! with a level at most the active level is checked. The more expensive checks (e.g. re-running
//! arc consistency to verify that a fixpoint has been reached) are only enabled with the
//! `debug-checks` feature.

#[cfg(all(not(test), not(feature = "debug-checks")))]
pub const CRAYON_ASSERT_LEVEL_DEFINITION: u8 = CRAYON_ASSERT_SIMPLE;

#[cfg(any(test, feature = "debug-checks"))]
pub const CRAYON_ASSERT_LEVEL_DEFINITION: u8 = CRAYON_ASSERT_ADVANCED;

pub const CRAYON_ASSERT_SIMPLE: u8 = 1;
pub const CRAYON_ASSERT_MODERATE: u8 = 2;
pub const CRAYON_ASSERT_ADVANCED: u8 = 3;

#[macro_export]
#[doc(hidden)]
macro_rules! crayon_assert_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::CRAYON_ASSERT_LEVEL_DEFINITION >= $crate::asserts::CRAYON_ASSERT_SIMPLE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! crayon_assert_eq_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::CRAYON_ASSERT_LEVEL_DEFINITION >= $crate::asserts::CRAYON_ASSERT_SIMPLE {
            assert_eq!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! crayon_assert_moderate {
    ($($arg:tt)*) => {
        if $crate::asserts::CRAYON_ASSERT_LEVEL_DEFINITION >= $crate::asserts::CRAYON_ASSERT_MODERATE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! crayon_assert_advanced {
    ($($arg:tt)*) => {
        if $crate::asserts::CRAYON_ASSERT_LEVEL_DEFINITION >= $crate::asserts::CRAYON_ASSERT_ADVANCED {
            assert!($($arg)*);
        }
    };
}
