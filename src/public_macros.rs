/// Implements the comparisons between bare values and
/// [`Optional`][`crate::Optional`]s that generic impls cannot provide.
///
/// ### `impl_bare_cmp!(T, ...)`
///
/// `T : PartialEq<Optional<T>> + PartialOrd<Optional<T>>`, so that a bare
/// value can appear on the left-hand side.
///
/// The opposite argument order, `Optional<T>` _vs._ `T`, is always available.
/// This one cannot be, generically, because of Rust's orphan rules. The crate
/// already covers the primitive scalars (and `String`, with the `"alloc"`
/// feature); other types have to opt in, which requires `T : PartialOrd`.
///
/// ### `impl_bare_cmp!(eq: U => T)` and `impl_bare_cmp!(ord: U => T)`
///
/// Comparisons against a bare `U` of another type, in both argument orders:
/// `Optional<T> : PartialEq<U>` and `U : PartialEq<Optional<T>>`, plus the
/// `PartialOrd` pair with `ord:`. This requires `T : PartialEq<U>` and
/// `U : PartialEq<T>` (resp. `PartialOrd`). A lifetime can be introduced with
/// `eq: impl<'a> &'a U => T`.
///
/// Outside this crate, `U` has to be a local type. The crate covers `str` and
/// `&str` against `Optional<String>`, with the `"alloc"` feature.
///
/// # Example
///
/// ```rust
/// use ::optional_storage::{impl_bare_cmp, Optional};
///
/// #[derive(Debug, PartialEq, PartialOrd)]
/// struct Meters(f64);
///
/// impl_bare_cmp!(Meters);
///
/// let unknown = Optional::<Meters>::None;
/// let known = Optional::Some(Meters(8.0));
/// assert!(Meters(0.0) > unknown);
/// assert!(Meters(8.0) == known);
/// assert!(Meters(9.0) >= known);
///
/// #[derive(Debug, PartialEq, PartialOrd)]
/// struct Feet(f64);
///
/// impl PartialEq<Feet> for Meters {
///     fn eq (self: &'_ Self, other: &'_ Feet) -> bool {
///         self.0 == other.0 * 0.3048
///     }
/// }
/// impl PartialEq<Meters> for Feet {
///     fn eq (self: &'_ Self, other: &'_ Meters) -> bool {
///         other == self
///     }
/// }
/// impl PartialOrd<Feet> for Meters {
///     fn partial_cmp (self: &'_ Self, other: &'_ Feet)
///       -> Option<::core::cmp::Ordering>
///     {
///         self.0.partial_cmp(&(other.0 * 0.3048))
///     }
/// }
/// impl PartialOrd<Meters> for Feet {
///     fn partial_cmp (self: &'_ Self, other: &'_ Meters)
///       -> Option<::core::cmp::Ordering>
///     {
///         (self.0 * 0.3048).partial_cmp(&other.0)
///     }
/// }
///
/// impl_bare_cmp!(ord: Feet => Meters);
///
/// assert!(known > Feet(10.0) && Feet(10.0) < known);
/// assert!(unknown < Feet(0.0) && Feet(0.0) > unknown);
/// assert!(unknown != Feet(0.0));
/// ```
#[macro_export]
macro_rules! impl_bare_cmp {
    // `Optional<T> : PartialEq<U>`
    (@optional_eq [$($generics:tt)*] $U:ty => $T:ty) => (
        impl<$($generics)*>
            $crate::core::cmp::PartialEq<$U>
        for
            $crate::Optional<$T>
        {
            #[inline]
            fn eq (self: &'_ Self, other: &'_ $U)
              -> bool
            {
                $crate::__::optional_eq_bare(self, other)
            }
        }
    );

    // `U : PartialEq<Optional<T>>`
    (@bare_eq [$($generics:tt)*] $U:ty => $T:ty) => (
        impl<$($generics)*>
            $crate::core::cmp::PartialEq<$crate::Optional<$T>>
        for
            $U
        {
            #[inline]
            fn eq (self: &'_ Self, other: &'_ $crate::Optional<$T>)
              -> bool
            {
                $crate::__::bare_eq_optional(self, other)
            }
        }
    );

    // `Optional<T> : PartialOrd<U>`
    (@optional_ord [$($generics:tt)*] $U:ty => $T:ty) => (
        impl<$($generics)*>
            $crate::core::cmp::PartialOrd<$U>
        for
            $crate::Optional<$T>
        {
            #[inline]
            fn partial_cmp (self: &'_ Self, other: &'_ $U)
              -> $crate::core::option::Option<$crate::core::cmp::Ordering>
            {
                $crate::__::optional_partial_cmp_bare(self, other)
            }

            $crate::__derived_from_lt! {
                $U,
                lt: $crate::__::optional_lt_bare,
                flipped_lt: $crate::__::bare_lt_optional,
            }
        }
    );

    // `U : PartialOrd<Optional<T>>`
    (@bare_ord [$($generics:tt)*] $U:ty => $T:ty) => (
        impl<$($generics)*>
            $crate::core::cmp::PartialOrd<$crate::Optional<$T>>
        for
            $U
        {
            #[inline]
            fn partial_cmp (self: &'_ Self, other: &'_ $crate::Optional<$T>)
              -> $crate::core::option::Option<$crate::core::cmp::Ordering>
            {
                $crate::__::bare_partial_cmp_optional(self, other)
            }

            $crate::__derived_from_lt! {
                $crate::Optional<$T>,
                lt: $crate::__::bare_lt_optional,
                flipped_lt: $crate::__::optional_lt_bare,
            }
        }
    );

    // The `impl<...>` forms go first: `impl` would otherwise be parsed as the
    // start of an `impl Trait` type.
    (
        eq: impl<$lt:lifetime> $U:ty => $T:ty $(,)?
    ) => (
        $crate::impl_bare_cmp!(@optional_eq [$lt] $U => $T);
        $crate::impl_bare_cmp!(@bare_eq [$lt] $U => $T);
    );

    (
        eq: $U:ty => $T:ty $(,)?
    ) => (
        $crate::impl_bare_cmp!(@optional_eq [] $U => $T);
        $crate::impl_bare_cmp!(@bare_eq [] $U => $T);
    );

    (
        ord: impl<$lt:lifetime> $U:ty => $T:ty $(,)?
    ) => (
        $crate::impl_bare_cmp!(eq: impl<$lt> $U => $T);
        $crate::impl_bare_cmp!(@optional_ord [$lt] $U => $T);
        $crate::impl_bare_cmp!(@bare_ord [$lt] $U => $T);
    );

    (
        ord: $U:ty => $T:ty $(,)?
    ) => (
        $crate::impl_bare_cmp!(eq: $U => $T);
        $crate::impl_bare_cmp!(@optional_ord [] $U => $T);
        $crate::impl_bare_cmp!(@bare_ord [] $U => $T);
    );

    (
        $($T:ty),* $(,)?
    ) => (
        $(
            $crate::impl_bare_cmp!(@bare_eq [] $T => $T);
            $crate::impl_bare_cmp!(@bare_ord [] $T => $T);
        )*
    );
}

/// Defines `lt`, `gt`, `le` and `ge` (inside a `PartialOrd` impl) out of a
/// single "less than" primitive, given in both argument orders.
#[doc(hidden)]
#[macro_export]
macro_rules! __derived_from_lt {(
    $Rhs:ty,
    lt: $lt:path,
    flipped_lt: $flipped_lt:path $(,)?
) => (
    #[inline]
    fn lt (self: &'_ Self, other: &'_ $Rhs)
      -> bool
    {
        $lt(self, other)
    }

    #[inline]
    fn gt (self: &'_ Self, other: &'_ $Rhs)
      -> bool
    {
        $flipped_lt(other, self)
    }

    #[inline]
    fn le (self: &'_ Self, other: &'_ $Rhs)
      -> bool
    {
        !$flipped_lt(other, self)
    }

    #[inline]
    fn ge (self: &'_ Self, other: &'_ $Rhs)
      -> bool
    {
        !$lt(self, other)
    }
)}
