#![allow(unused_imports)]
use {
    ::std::{
        collections::hash_map::DefaultHasher,
        panic,
        prelude::v1::*,
    },
    super::*,
};

fn hash_of<T : ::core::hash::Hash> (value: &'_ T)
  -> u64
{
    use ::core::hash::{Hash, Hasher};
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// Empty first, then increasing values.
fn samples ()
  -> [Optional<i32>; 4]
{
    [
        Optional::None,
        Optional::Some(-7),
        Optional::Some(0),
        Optional::Some(42),
    ]
}

#[test]
fn default_constructed_is_empty ()
{
    assert!(Optional::<u32>::new().has_value() == false);
    assert!(Optional::<u32>::None.has_value() == false);
    assert!(Optional::<u32>::default().has_value() == false);
    assert!(bool::from(&Optional::<u32>::None) == false);
}

#[test]
fn value_constructed_holds_the_value ()
{
    let any_value: u32 = 10;
    let x = Optional::Some(any_value);
    assert!(x.has_value());
    assert!(bool::from(&x));
    assert_eq!(x.value(), Ok(&any_value));
    assert_eq!(Optional::from(any_value).value(), Ok(&any_value));
    assert_eq!(Optional::<u32>::from(&any_value).value(), Ok(&any_value));
    assert_eq!(Optional::<u32>::from(Some(any_value)).value(), Ok(&any_value));
    assert!(Optional::<u32>::from(None).has_value() == false);
}

#[test]
fn checked_access ()
{
    let mut empty = Optional::<String>::None;
    assert_eq!(empty.value(), Err(BadOptionalAccess));
    assert_eq!(empty.value_mut(), Err(BadOptionalAccess));

    let mut full = Optional::Some(String::from("hello"));
    assert!(full.value().is_ok());
    full.value_mut().unwrap().push_str(", world");
    assert_eq!(full.value().unwrap(), "hello, world");
}

#[test]
fn unchecked_access ()
{
    let mut x = Optional::Some(vec![1, 2]);
    if x.has_value() {
        unsafe {
            x.get_unchecked_mut().push(3);
            assert_eq!(x.get_unchecked(), &[1, 2, 3]);
        }
    }
}

#[test]
fn bad_optional_access_displays ()
{
    let err: Box<dyn ::std::error::Error> = Box::new(BadOptionalAccess);
    assert_eq!(err.to_string(), "bad optional access");
}

#[test]
fn empties_are_equal_and_unordered_among_themselves ()
{
    let a = Optional::<i32>::None;
    let b = Optional::<i32>::None;
    assert!(a == b);
    assert!((a != b) == false);
    assert!((a < b) == false && (b < a) == false);
    assert!(a <= b && a >= b);
    assert_eq!(a.partial_cmp(&b), Some(::core::cmp::Ordering::Equal));
    assert_eq!(hash_of(&a), hash_of(&b));
}

#[test]
fn empty_is_the_minimum ()
{
    let empty = Optional::<i32>::None;
    for &value in &[i32::MIN, -1, 0, 1, i32::MAX] {
        let present = Optional::Some(value);
        assert!(empty < present);
        assert!((present < empty) == false);
        assert!(present > empty);
        assert!(empty != present);
        assert_eq!(empty.cmp(&present), ::core::cmp::Ordering::Less);
    }
}

#[test]
fn ordering_follows_the_held_values ()
{
    let samples = samples();
    for (i, a) in samples.iter().enumerate() {
        for (j, b) in samples.iter().enumerate() {
            assert_eq!(a == b, i == j);
            assert_eq!(a < b, i < j);
            assert_eq!(a > b, i > j);
            assert_eq!(a <= b, i <= j);
            assert_eq!(a >= b, i >= j);
            assert_eq!(a.cmp(b), i.cmp(&j));
        }
    }
}

#[test]
fn derived_operators_match_the_primitives ()
{
    let samples = samples();
    for a in &samples {
        assert!(*a == a.clone());
        for b in &samples {
            assert_eq!(a == b, b == a);
            assert_eq!(a != b, !(a == b));
            assert_eq!(a > b, b < a);
            assert_eq!(a <= b, !(b < a));
            assert_eq!(a >= b, !(a < b));
        }
    }
}

#[test]
fn derived_operators_with_a_partial_order ()
{
    let nan = Optional::Some(f64::NAN);
    let one = Optional::Some(1.0);
    assert_eq!(nan.partial_cmp(&one), None);
    assert!((nan < one) == false && (one < nan) == false);
    // `<=` is `!(b < a)`, not `< || ==`.
    assert!(nan <= one);
    assert!(nan >= one);
    assert!(nan != Optional::Some(f64::NAN));
}

#[test]
fn comparison_against_bare_values ()
{
    let empty = Optional::<i32>::None;
    let three = Optional::Some(3);

    assert!(empty != 3 && 3 != empty);
    assert!(empty < i32::MIN && i32::MIN > empty);
    assert!((empty > i32::MIN) == false);
    assert!(empty <= 0 && 0 >= empty);

    assert!(three == 3 && 3 == three);
    assert!(three != 4 && 4 != three);
    assert!(three < 4 && 4 > three);
    assert!(three > 2 && 2 < three);
    assert!(three <= 3 && three >= 3);
    assert!(3 <= three && 3 >= three);
}

#[test]
fn comparison_against_bare_strings ()
{
    let name = Optional::Some(String::from("ferris"));
    assert!(name == String::from("ferris"));
    assert!(String::from("ferris") == name);
    assert!(String::from("crab") < name);
    assert!(Optional::<String>::None < String::new());
}

#[test]
fn comparison_against_string_slices ()
{
    let name = Optional::Some(String::from("ferris"));
    assert!(name == *"ferris" && *"ferris" == name);
    assert!(name == "ferris" && "ferris" == name);
    assert!(name != "crab" && "crab" != name);
    assert!(name != *"crab" && *"crab" != name);

    let nobody = Optional::<String>::None;
    assert!(nobody != "ferris" && "ferris" != nobody);
    assert!(nobody != *"" && *"" != nobody);
}

#[test]
fn clones_are_equal_and_independent ()
{
    let original = Optional::Some(vec![1, 2, 3]);
    let mut copy = original.clone();
    assert!(copy == original);
    copy.value_mut().unwrap().push(4);
    assert!(copy != original);
    assert_eq!(original.value().unwrap(), &[1, 2, 3]);

    let empty = Optional::<Vec<i32>>::None;
    assert!(empty.clone() == empty);
}

#[test]
fn assignment_cases ()
{
    let empty = Optional::<String>::None;
    let full = Optional::Some(String::from("full"));

    // holding <- holding: assigned in place, reusing the allocation.
    let mut x = Optional::Some(String::with_capacity(64));
    x.value_mut().unwrap().push_str("previous contents");
    let buffer = x.value().unwrap().as_ptr();
    x.assign(&full);
    assert!(x == full);
    assert_eq!(x.value().unwrap().as_ptr(), buffer);

    // holding <- empty
    x.assign(&empty);
    assert!(x.has_value() == false);

    // empty <- holding
    x.assign(&full);
    assert!(x == full);

    // empty <- empty
    let mut y = Optional::<String>::None;
    y.assign(&empty);
    assert!(y.has_value() == false);

    // `clone_from` is the same operation.
    y.clone_from(&full);
    assert!(y == full);
}

#[test]
fn chained_assignment ()
{
    let x = Optional::Some(7);
    let mut y = Optional::None;
    let mut z = Optional::Some(0);
    z.assign(y.assign(&x));
    assert!(x == y);
    assert!(x == z);
}

#[test]
fn reset_is_idempotent ()
{
    let mut x = Optional::Some(String::from("x"));
    x.reset();
    assert!(x.has_value() == false);
    x.reset();
    assert!(x.has_value() == false);

    let mut empty = Optional::<String>::None;
    empty.reset();
    empty.reset();
    assert!(empty.has_value() == false);
}

#[test]
fn swap_is_its_own_inverse ()
{
    let states = || [
        Optional::<String>::None,
        Optional::Some(String::from("a")),
    ];
    for a0 in states().iter() {
        for b0 in states().iter() {
            let (mut a, mut b) = (a0.clone(), b0.clone());
            a.swap(&mut b);
            assert!(a == *b0 && b == *a0);
            a.swap(&mut b);
            assert!(a == *a0 && b == *b0);
        }
    }
}

#[test]
fn swap_both_holding ()
{
    let mut a = Optional::Some(1);
    let mut b = Optional::Some(2);
    crate::swap(&mut a, &mut b);
    assert!(a == 2 && b == 1);
}

#[test]
fn swap_transfers_a_lone_value ()
{
    let mut a = Optional::Some(String::from("moved"));
    let mut b = Optional::None;
    crate::swap(&mut a, &mut b);
    assert!(a.has_value() == false);
    assert!(b == String::from("moved"));
    crate::swap(&mut a, &mut b);
    assert!(a == String::from("moved"));
    assert!(b.has_value() == false);
}

#[test]
fn take_replace_insert ()
{
    let mut x = Optional::Some(1);
    assert_eq!(x.take(), Some(1));
    assert_eq!(x.take(), None);
    assert_eq!(x.replace(2), None);
    assert_eq!(x.replace(3), Some(2));
    *x.insert(4) += 1;
    assert!(x == 5);
    assert_eq!(x.into_option(), Some(5));
    assert_eq!(Option::<u8>::from(Optional::None), None);
}

#[test]
fn types_without_default_nor_clone ()
{
    #[derive(Debug, PartialEq)]
    struct NoDefault(u8);

    let mut a = Optional::<NoDefault>::None;
    let mut b = Optional::<NoDefault>::default();
    assert!(a == b);
    a.swap(&mut b);
    assert!(a.has_value() == false);
    b.insert(NoDefault(1));
    a.swap(&mut b);
    assert!(a == NoDefault(1));
}

#[test]
fn debug_output ()
{
    assert_eq!(format!("{:?}", Optional::Some(3)), "Some(3)");
    assert_eq!(format!("{:?}", Optional::<u8>::None), "None");
}

#[test]
fn reset_with_panicking_destructor_drops_once ()
{
    use ::std::{cell::Cell, rc::Rc};

    struct Bomb(Rc<Cell<usize>>);
    impl Drop for Bomb {
        fn drop (self: &'_ mut Self)
        {
            self.0.set(self.0.get() + 1);
            panic!("boom");
        }
    }

    let drops = Rc::new(Cell::new(0));
    let mut x = Optional::Some(Bomb(drops.clone()));
    let caught = panic::catch_unwind(panic::AssertUnwindSafe(|| x.reset()));
    assert!(caught.is_err());
    assert!(x.has_value() == false);
    assert_eq!(drops.get(), 1);
    drop(x);
    assert_eq!(drops.get(), 1);
}
