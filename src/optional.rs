//! The [`Optional`] container itself: storage, lifecycle and access.
//!
//! The comparison impls live in [`crate::cmp`].

use_prelude!();

/// A container holding either nothing or exactly one `T`, stored inline.
///
/// The layout is a presence flag next to an uninitialized slot big enough (and
/// aligned enough) for one `T`: there is no heap allocation, and an empty
/// `Optional<T>` never needs a `T` to exist, so `T` does not need to be
/// [`Default`] (nor [`Clone`]) for the empty state to be usable.
///
/// The slot holds a live `T` if and only if the flag is set. Every transition
/// (construction, [`reset`][`Optional::reset`], [`swap`][`Optional::swap`],
/// [`assign`][`Optional::assign`], dropping) keeps that so: a value is never
/// written over another live one, and never dropped twice.
///
/// # Example
///
/// ```rust
/// use ::optional_storage::prelude::*;
///
/// let mut maybe_name = Optional::<String>::None;
/// assert!(!maybe_name.has_value());
/// assert_eq!(maybe_name.value(), Err(BadOptionalAccess));
///
/// maybe_name = Optional::Some("Ferris".to_owned());
/// assert_eq!(maybe_name.value().map(String::as_str), Ok("Ferris"));
///
/// // "No value" sorts before any value.
/// assert!(Optional::<String>::None < maybe_name);
/// assert!(maybe_name == "Ferris".to_owned());
///
/// maybe_name.reset();
/// assert!(!maybe_name.has_value());
/// ```
///
/// # Checked and unchecked access
///
///   - [`.value()`][`Optional::value`] and
///     [`.value_mut()`][`Optional::value_mut`] check the flag, and return a
///     [`BadOptionalAccess`] error when empty;
///
///   - [`.get_unchecked()`][`Optional::get_unchecked`] and
///     [`.get_unchecked_mut()`][`Optional::get_unchecked_mut`] are the raw
///     pointer-like fast path: `unsafe`, for callers who already checked.
///
/// # No conversion into `T`
///
/// An `Optional<T>` never converts into its `T`:
///
/// ```rust,compile_fail
/// use ::optional_storage::Optional;
///
/// let x: u32 = Optional::Some(42_u32);
/// ```
///
/// and shared access never hands out a mutable borrow:
///
/// ```rust,compile_fail
/// use ::optional_storage::Optional;
///
/// let x = Optional::Some(vec![42]);
/// x.value().unwrap().push(27);
/// ```
pub
struct Optional<T> {
    has_value: bool,
    storage: MaybeUninit<T>,
}

impl<T> Optional<T> {
    /// An empty `Optional`.
    #[allow(bad_style)]
    pub
    const None: Self = Self {
        has_value: false,
        storage: MaybeUninit::uninit(),
    };

    /// An `Optional` holding `value`.
    #[allow(bad_style)]
    #[inline]
    pub
    const
    fn Some (value: T)
      -> Self
    {
        Self {
            storage: MaybeUninit::new(value),
            has_value: true,
        }
    }

    /// Same as [`Optional::None`].
    #[inline]
    pub
    const
    fn new ()
      -> Self
    {
        Self::None
    }

    /// Whether a value is currently held.
    ///
    /// The explicit boolean conversion, `bool::from(&optional)`, is the same
    /// thing.
    #[inline]
    pub
    fn has_value (self: &'_ Self)
      -> bool
    {
        self.has_value
    }

    /// Checked shared access to the held value.
    #[inline]
    pub
    fn value (self: &'_ Self)
      -> Result<&'_ T, BadOptionalAccess>
    {
        self.as_ref().ok_or(BadOptionalAccess)
    }

    /// Checked exclusive access to the held value.
    ///
    /// ```rust
    /// use ::optional_storage::Optional;
    ///
    /// let mut x = Optional::Some(41);
    /// *x.value_mut().unwrap() += 1;
    /// assert!(x == 42);
    /// ```
    #[inline]
    pub
    fn value_mut (self: &'_ mut Self)
      -> Result<&'_ mut T, BadOptionalAccess>
    {
        self.as_mut().ok_or(BadOptionalAccess)
    }

    /// Unchecked shared access to the held value.
    ///
    /// # Safety
    ///
    /// `self` must be holding a value (_e.g._, because
    /// [`.has_value()`][`Optional::has_value`] was just checked). Calling this
    /// on an empty `Optional` is undefined behavior.
    #[inline]
    pub
    unsafe
    fn get_unchecked (self: &'_ Self)
      -> &'_ T
    {
        debug_assert!(self.has_value, "`Optional::get_unchecked()` on an empty `Optional`");
        self.storage.assume_init_ref()
    }

    /// Unchecked exclusive access to the held value.
    ///
    /// # Safety
    ///
    /// Same as [`Optional::get_unchecked`].
    #[inline]
    pub
    unsafe
    fn get_unchecked_mut (self: &'_ mut Self)
      -> &'_ mut T
    {
        debug_assert!(self.has_value, "`Optional::get_unchecked_mut()` on an empty `Optional`");
        self.storage.assume_init_mut()
    }

    /// Borrows the held value, if any, as a standard [`Option`].
    #[inline]
    pub
    fn as_ref (self: &'_ Self)
      -> Option<&'_ T>
    {
        if self.has_value {
            Some(unsafe {
                // Safety: the flag is set, so the slot is initialized.
                self.storage.assume_init_ref()
            })
        } else {
            None
        }
    }

    /// Mutably borrows the held value, if any, as a standard [`Option`].
    #[inline]
    pub
    fn as_mut (self: &'_ mut Self)
      -> Option<&'_ mut T>
    {
        if self.has_value {
            Some(unsafe {
                // Safety: the flag is set, so the slot is initialized.
                self.storage.assume_init_mut()
            })
        } else {
            None
        }
    }

    /// Drops the held value, if any. Idempotent.
    ///
    /// The container is left empty even if the value's destructor panics, so
    /// the value is never dropped a second time.
    pub
    fn reset (self: &'_ mut Self)
    {
        if self.has_value.not() {
            return;
        }
        ::unwind_safe::with_state(self)
            .try_eval(|this| unsafe {
                // Safety: the flag is set, so the slot is initialized, and
                // the flag gets cleared right after, even when unwinding.
                this.storage.assume_init_drop();
            })
            .finally(|this| {
                this.has_value = false;
            })
    }

    /// Moves the held value, if any, out of the container, leaving it empty.
    #[inline]
    pub
    fn take (self: &'_ mut Self)
      -> Option<T>
    {
        if self.has_value {
            self.has_value = false;
            Some(unsafe {
                // Safety: the slot was initialized, and is now flagged as
                // vacant, so the bits we read are owned by nobody else.
                self.storage.assume_init_read()
            })
        } else {
            None
        }
    }

    /// Puts `value` in the container, returning the previously held value
    /// (if any) without dropping it.
    #[inline]
    pub
    fn replace (self: &'_ mut Self, value: T)
      -> Option<T>
    {
        let prev = self.take();
        self.construct(value);
        prev
    }

    /// Drops the held value (if any), puts `value` in its stead, and returns a
    /// borrow to it.
    #[inline]
    pub
    fn insert (self: &'_ mut Self, value: T)
      -> &'_ mut T
    {
        self.reset();
        self.construct(value)
    }

    /// Unwraps the container into a standard [`Option`].
    #[inline]
    pub
    fn into_option (mut self: Self)
      -> Option<T>
    {
        self.take()
    }

    /// Exchanges the states of `self` and `other`.
    ///
    ///   - both holding: the two values are swapped in place;
    ///
    ///   - only one holding: its value is relocated into the other one's
    ///     slot, and both flags flip;
    ///
    ///   - both empty: nothing happens.
    ///
    /// Swapping twice always restores the original pair.
    ///
    /// ```rust
    /// use ::optional_storage::Optional;
    ///
    /// let mut a = Optional::Some('a');
    /// let mut b = Optional::None;
    /// a.swap(&mut b);
    /// assert!(a.has_value() == false && b == 'a');
    /// ```
    pub
    fn swap (self: &'_ mut Self, other: &'_ mut Self)
    {
        match (self.has_value, other.has_value) {
            | (true, true) => unsafe {
                // Safety: both flags are set.
                ::core::mem::swap(
                    self.storage.assume_init_mut(),
                    other.storage.assume_init_mut(),
                );
            },
            | (true, false) => other.relocate_from(self),
            | (false, true) => self.relocate_from(other),
            | (false, false) => {},
        }
    }

    /// Moves `source`'s value (if any) into `self`'s vacant slot.
    fn relocate_from (self: &'_ mut Self, source: &'_ mut Self)
    {
        if let Some(value) = source.take() {
            self.construct(value);
        }
    }

    /// Writes `value` into the slot, which must be vacant.
    fn construct (self: &'_ mut Self, value: T)
      -> &'_ mut T
    {
        debug_assert!(self.has_value.not(), "`Optional`: constructing into an occupied slot");
        self.has_value = true;
        self.storage.write(value)
    }
}

impl<T : Clone> Optional<T> {
    /// Copy assignment: makes `self` hold a clone of whatever `other` holds.
    ///
    /// | `self`  | `other` | effect                                        |
    /// |---------|---------|-----------------------------------------------|
    /// | holding | holding | [`T::clone_from`][`Clone::clone_from`] in place |
    /// | holding | empty   | the held value is dropped                     |
    /// | empty   | holding | a clone of `other`'s value is stored          |
    /// | empty   | empty   | nothing                                       |
    ///
    /// Returns `self`, so that assignments can be chained:
    ///
    /// ```rust
    /// use ::optional_storage::Optional;
    ///
    /// let x = Optional::Some(String::from("x"));
    /// let mut y = Optional::None;
    /// let mut z = Optional::Some(String::from("z"));
    /// z.assign(y.assign(&x));
    /// assert!(x == y && x == z);
    /// ```
    pub
    fn assign (self: &'_ mut Self, other: &'_ Self)
      -> &'_ mut Self
    {
        match (self.as_mut(), other.as_ref()) {
            | (Some(this), Some(value)) => this.clone_from(value),
            | (Some(_), None) => self.reset(),
            | (None, Some(value)) => {
                self.construct(value.clone());
            },
            | (None, None) => {},
        }
        self
    }
}

impl<T> Drop for Optional<T> {
    fn drop (self: &'_ mut Self)
    {
        self.reset();
    }
}

impl<T : Clone> Clone for Optional<T> {
    fn clone (self: &'_ Self)
      -> Self
    {
        match self.as_ref() {
            | Some(value) => Self::Some(value.clone()),
            | None => Self::None,
        }
    }

    #[inline]
    fn clone_from (self: &'_ mut Self, source: &'_ Self)
    {
        self.assign(source);
    }
}

/// Same as [`Optional::None`]; does not require `T : Default`.
impl<T> Default for Optional<T> {
    #[inline]
    fn default ()
      -> Self
    {
        Self::None
    }
}

impl<T : fmt::Debug> fmt::Debug for Optional<T> {
    fn fmt (self: &'_ Self, f: &'_ mut fmt::Formatter<'_>)
      -> fmt::Result
    {
        match self.as_ref() {
            | Some(value) => f.debug_tuple("Some").field(value).finish(),
            | None => f.write_str("None"),
        }
    }
}

impl<T> From<T> for Optional<T> {
    #[inline]
    fn from (value: T)
      -> Self
    {
        Self::Some(value)
    }
}

/// Value construction by copy: clones `value` exactly once.
impl<T : Clone> From<&'_ T> for Optional<T> {
    #[inline]
    fn from (value: &'_ T)
      -> Self
    {
        Self::Some(value.clone())
    }
}

impl<T> From<Option<T>> for Optional<T> {
    #[inline]
    fn from (value: Option<T>)
      -> Self
    {
        match value {
            | Some(value) => Self::Some(value),
            | None => Self::None,
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    #[inline]
    fn from (optional: Optional<T>)
      -> Self
    {
        optional.into_option()
    }
}

/// The (explicit) boolean conversion: whether a value is held.
impl<T> From<&'_ Optional<T>> for bool {
    #[inline]
    fn from (optional: &'_ Optional<T>)
      -> Self
    {
        optional.has_value()
    }
}

/// Free function version of [`Optional::swap`].
#[inline]
pub
fn swap<T> (a: &'_ mut Optional<T>, b: &'_ mut Optional<T>)
{
    a.swap(b)
}
