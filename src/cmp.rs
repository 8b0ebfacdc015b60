//! The comparison lattice of [`Optional`].
//!
//! An empty `Optional` equals any other empty one, and is strictly less than
//! any holding one, as well as any bare `T`. Only two primitives, `==` and `<`,
//! look at the presence flags; the other four operators are derived from them:
//!
//!   - `a != b` is `!(a == b)`,
//!   - `a > b` is `b < a`,
//!   - `a <= b` is `!(b < a)`,
//!   - `a >= b` is `!(a < b)`.
//!
//! Comparing against a bare `T` only ever borrows it: no temporary
//! `Optional<T>` gets built, so the `T` is never cloned.
//!
//! ```rust
//! use ::optional_storage::Optional;
//!
//! let none = Optional::<i32>::None;
//! let some = Optional::Some(-1);
//!
//! assert!(none < some && none < -1 && -1 > none);
//! assert!(some == -1 && -1 == some && none != -1);
//! assert!(some <= -1 && -1 >= some);
//! ```

use_prelude!();

pub(in crate)
mod primitives {
    use super::*;

    // ## `Optional` _vs._ `Optional`

    /// `a == b`: both empty, or both holding equal values.
    pub
    fn optional_eq_optional<T : PartialEq> (
        a: &'_ Optional<T>,
        b: &'_ Optional<T>,
    ) -> bool
    {
        match (a.as_ref(), b.as_ref()) {
            | (Some(a), Some(b)) => a == b,
            | (a, b) => a.is_none() && b.is_none(),
        }
    }

    /// `a < b`: empty before holding, held values otherwise.
    pub
    fn optional_lt_optional<T : PartialOrd> (
        a: &'_ Optional<T>,
        b: &'_ Optional<T>,
    ) -> bool
    {
        match (a.as_ref(), b.as_ref()) {
            | (Some(a), Some(b)) => a < b,
            | (a, b) => a.is_none() && b.is_some(),
        }
    }

    // ## `Optional<T>` _vs._ bare `U`

    /// `a == b`: never when `a` is empty.
    pub
    fn optional_eq_bare<T, U : ?Sized> (a: &'_ Optional<T>, b: &'_ U)
      -> bool
    where
        T : PartialEq<U>,
    {
        match a.as_ref() {
            | Some(a) => a == b,
            | None => false,
        }
    }

    /// `a < b`: always when `a` is empty.
    pub
    fn optional_lt_bare<T, U : ?Sized> (a: &'_ Optional<T>, b: &'_ U)
      -> bool
    where
        T : PartialOrd<U>,
    {
        match a.as_ref() {
            | Some(a) => a < b,
            | None => true,
        }
    }

    /// `a.partial_cmp(b)`: `Less` when `a` is empty.
    pub
    fn optional_partial_cmp_bare<T, U : ?Sized> (a: &'_ Optional<T>, b: &'_ U)
      -> Option<Ordering>
    where
        T : PartialOrd<U>,
    {
        match a.as_ref() {
            | Some(a) => PartialOrd::partial_cmp(a, b),
            | None => Some(Ordering::Less),
        }
    }

    // ## bare `U` _vs._ `Optional<T>`

    /// `a == b`: never when `b` is empty.
    pub
    fn bare_eq_optional<U : ?Sized, T> (a: &'_ U, b: &'_ Optional<T>)
      -> bool
    where
        U : PartialEq<T>,
    {
        match b.as_ref() {
            | Some(b) => a == b,
            | None => false,
        }
    }

    /// `a < b`: never when `b` is empty.
    pub
    fn bare_lt_optional<U : ?Sized, T> (a: &'_ U, b: &'_ Optional<T>)
      -> bool
    where
        U : PartialOrd<T>,
    {
        match b.as_ref() {
            | Some(b) => a < b,
            | None => false,
        }
    }

    /// `a.partial_cmp(b)`: `Greater` when `b` is empty.
    pub
    fn bare_partial_cmp_optional<U : ?Sized, T> (a: &'_ U, b: &'_ Optional<T>)
      -> Option<Ordering>
    where
        U : PartialOrd<T>,
    {
        match b.as_ref() {
            | Some(b) => PartialOrd::partial_cmp(a, b),
            | None => Some(Ordering::Greater),
        }
    }
}
use primitives::*;

// # HOMOGENEOUS
impl<T : PartialEq> PartialEq for Optional<T> {
    #[inline]
    fn eq (self: &'_ Self, other: &'_ Self)
      -> bool
    {
        optional_eq_optional(self, other)
    }
}

impl<T : Eq> Eq for Optional<T> {}

impl<T : PartialOrd> PartialOrd for Optional<T> {
    #[inline]
    fn partial_cmp (self: &'_ Self, other: &'_ Self)
      -> Option<Ordering>
    {
        self.as_ref().partial_cmp(&other.as_ref())
    }

    crate::__derived_from_lt! {
        Self,
        lt: optional_lt_optional,
        flipped_lt: optional_lt_optional,
    }
}

impl<T : Ord> Ord for Optional<T> {
    #[inline]
    fn cmp (self: &'_ Self, other: &'_ Self)
      -> Ordering
    {
        self.as_ref().cmp(&other.as_ref())
    }
}

impl<T : Hash> Hash for Optional<T> {
    fn hash<H : Hasher> (self: &'_ Self, state: &'_ mut H)
    {
        self.as_ref().hash(state)
    }
}

// # HETEROGENEOUS
// ## `Optional<T>` _vs._ `T`
impl<T : PartialEq> PartialEq<T> for Optional<T> {
    #[inline]
    fn eq (self: &'_ Self, other: &'_ T)
      -> bool
    {
        optional_eq_bare(self, other)
    }
}

impl<T : PartialOrd> PartialOrd<T> for Optional<T> {
    #[inline]
    fn partial_cmp (self: &'_ Self, other: &'_ T)
      -> Option<Ordering>
    {
        optional_partial_cmp_bare(self, other)
    }

    crate::__derived_from_lt! {
        T,
        lt: optional_lt_bare,
        flipped_lt: bare_lt_optional,
    }
}

// ## `U` _vs._ `Optional<T>`, and cross-type `Optional<T>` _vs._ `U`
//
// Coherence rules out both `impl<T> PartialEq<Optional<T>> for T` and
// `impl<T : PartialEq<U>, U> PartialEq<U> for Optional<T>` (the latter overlaps
// with the homogeneous impl), hence the per-type impls, and the exported macro
// for downstream types.
crate::impl_bare_cmp! {
    u8, u16, u32, u64, u128, usize,
    i8, i16, i32, i64, i128, isize,
    f32, f64,
    bool, char,
}

#[cfg(feature = "alloc")]
crate::impl_bare_cmp! {
    ::alloc::string::String,
}

#[cfg(feature = "alloc")]
crate::impl_bare_cmp! {
    eq: str => ::alloc::string::String
}

#[cfg(feature = "alloc")]
crate::impl_bare_cmp! {
    eq: impl<'a> &'a str => ::alloc::string::String
}
