use_prelude!();

/// An error returned when trying to read the value out of an empty
/// [`Optional`], through [`Optional::value`] or [`Optional::value_mut`].
///
/// ```rust
/// use ::optional_storage::prelude::*;
///
/// let empty = Optional::<u8>::None;
/// assert_eq!(empty.value(), Err(BadOptionalAccess));
/// assert_eq!(BadOptionalAccess.to_string(), "bad optional access");
/// ```
#[derive(
    Debug,
    Clone, Copy,
    PartialEq, Eq,
    Hash,
    Default,
)]
pub
struct BadOptionalAccess;

impl fmt::Display for BadOptionalAccess {
    fn fmt (self: &'_ Self, f: &'_ mut fmt::Formatter<'_>)
      -> fmt::Result
    {
        f.write_str("bad optional access")
    }
}

#[cfg(feature = "std")]
#[cfg_attr(feature = "better-docs",
    doc(cfg(feature = "std")),
)]
impl ::std::error::Error for BadOptionalAccess {}
