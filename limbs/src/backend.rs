//! Word-level add-with-carry and subtract-with-borrow backends.
//!
//! Each backend implements [`CarryChain`] for both `u32` and `u64` words, so
//! every backend that exists on a target can be compared against the others
//! regardless of which one [`Selected`] names. Selection happens once, at
//! compile time; nothing here dispatches at runtime.

mod builtin;
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
mod intrinsics;
mod portable;

pub use self::{builtin::Builtin, portable::Portable};

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub use self::intrinsics::Intrinsics;

use cfg_if::cfg_if;

#[cfg(all(
    feature = "backend-intrinsics",
    not(any(target_arch = "x86", target_arch = "x86_64"))
))]
compile_error!("`backend-intrinsics` feature requires an x86 or x86_64 target");

cfg_if! {
    if #[cfg(feature = "backend-portable")] {
        /// Backend used by [`adc`](crate::adc) and [`sbb`](crate::sbb).
        pub type Selected = Portable;
    } else if #[cfg(all(
        feature = "backend-intrinsics",
        any(target_arch = "x86", target_arch = "x86_64")
    ))] {
        /// Backend used by [`adc`](crate::adc) and [`sbb`](crate::sbb).
        pub type Selected = Intrinsics;
    } else {
        /// Backend used by [`adc`](crate::adc) and [`sbb`](crate::sbb).
        pub type Selected = Builtin;
    }
}

/// Add-with-carry / subtract-with-borrow over words of type `W`.
///
/// Carry and borrow bits are passed and returned as `W` and are always
/// exactly `0` or `1`. Implementations must not branch on, or index memory
/// by, any of their arguments.
pub trait CarryChain<W> {
    /// Human readable backend name.
    const NAME: &'static str;

    /// Computes `a + b + carry`, returning the low word and the carry out.
    fn adc(a: W, b: W, carry: W) -> (W, W);

    /// Computes `a - b - borrow`, returning the low word and the borrow out.
    fn sbb(a: W, b: W, borrow: W) -> (W, W);
}
