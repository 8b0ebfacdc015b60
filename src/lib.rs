#![doc = include_str!("../README.md")]

#![warn(
    future_incompatible,
    rust_2018_compatibility,
    missing_docs,
    clippy::cargo,
    clippy::pedantic,
)]
#![deny(
    unused_must_use,
)]
#![doc(test(attr(deny(warnings))))]
#![cfg_attr(feature = "better-docs",
    feature(doc_cfg),
)]

#![cfg_attr(not(feature = "std"),
    no_std,
)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[path = "public_prelude.rs"]
pub
mod prelude;

#[macro_use]
mod utils;

mod public_macros;

pub use self::errors::*;
mod errors;

pub use self::optional::*;
mod optional;

pub mod cmp;

#[doc(hidden)] pub use ::core;

#[doc(hidden)]
#[path = "macro_internals.rs"]
pub mod __;

#[cfg(test)]
mod tests;
