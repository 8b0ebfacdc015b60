pub use crate::cmp::primitives::{
    bare_eq_optional,
    bare_lt_optional,
    bare_partial_cmp_optional,
    optional_eq_bare,
    optional_lt_bare,
    optional_partial_cmp_bare,
};
