#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]
#![doc = include_str!("../README.md")]

#[macro_use]
mod macros;

pub mod backend;
pub mod ct;
pub mod error;
pub mod limb;
pub mod ops;
pub mod select;

pub use crate::{
    ct::{CtPrimitives, SubtleCt},
    error::{Error, Result},
    limb::{Carry, LIMB_BITS, LIMB_BYTES, Limb, adc, add, sbb, sub},
    ops::{
        limbs_add, limbs_add_assign, limbs_are_zero, limbs_copy, limbs_equal, limbs_less_than,
        limbs_reduce_once, limbs_sub, limbs_sub_assign, limbs_sub_from, limbs_zero,
    },
    select::{Table, limbs_select, limbs_select_with},
};
pub use subtle;
pub use zeroize;
