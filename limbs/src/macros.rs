//! Assertion macros.
//!
//! Two classes of runtime checks exist in this crate. Checks on public
//! quantities (lengths, entry counts) may branch freely. Checks on secret
//! values (carry bits, table indices) must never reach a release binary.

/// Assert an invariant over a secret value.
///
/// Compiled only with `debug_assertions` or the `dev` feature. Otherwise the
/// condition is not evaluated at all.
macro_rules! dev_assert_secret {
    ($cond:expr $(,)?) => {
        #[cfg(any(debug_assertions, feature = "dev"))]
        {
            assert!($cond, concat!("secret invariant violated: ", stringify!($cond)));
        }
    };
}

/// Assert a precondition over a public value such as a length.
macro_rules! debug_assert_nonsecret {
    ($($arg:tt)*) => {
        debug_assert!($($arg)*)
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn nonsecret_assertion_passes() {
        let num_limbs = 4usize;
        debug_assert_nonsecret!(num_limbs >= 1);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "secret invariant violated")]
    fn secret_assertion_fires_in_debug() {
        let carry = 2u64;
        dev_assert_secret!(carry == 0 || carry == 1);
    }

    #[test]
    fn secret_assertion_accepts_valid_bit() {
        for carry in [0u64, 1] {
            dev_assert_secret!(carry == 0 || carry == 1);
        }
    }
}
