#![no_std]
#![no_main]

use ::optional_storage::{BadOptionalAccess, Optional};

/// This function is called on panic.
#[panic_handler]
fn panic (_info: &'_ ::core::panic::PanicInfo)
  -> !
{
    loop {}
}

#[no_mangle] pub extern "C"
fn _start ()
  -> !
{
    let mut a = Optional::Some(42_u8);
    let mut b = Optional::<u8>::None;
    a.swap(&mut b);
    let _: Result<&u8, BadOptionalAccess> = a.value();
    let _ = b > 41 && 42 == b;
    loop {}
}
