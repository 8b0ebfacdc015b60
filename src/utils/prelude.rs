pub(in crate)
use {
    ::core::{
        cmp::Ordering,
        fmt,
        hash::{Hash, Hasher},
        mem::MaybeUninit,
        ops::Not as _,
    },
    crate::{
        errors::BadOptionalAccess,
        optional::Optional,
    },
};
