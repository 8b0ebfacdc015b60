fn main ()
{
    use ::optional_storage::prelude::*;

    /// No `Default`, no `Clone`: still fine for an empty `Optional`.
    #[derive(Debug, PartialEq, PartialOrd)]
    struct Port(u16);

    impl_bare_cmp!(Port);

    let mut configured = Optional::<Port>::None;
    let mut fallback = Optional::Some(Port(8080));

    assert_eq!(configured.value(), Err(BadOptionalAccess));
    assert!(configured < fallback);
    assert!(Port(0) > configured);

    configured.swap(&mut fallback);
    assert!(configured == Port(8080) && Port(8080) == configured);
    assert!(fallback.has_value() == false);

    if let Ok(port) = configured.value_mut() {
        port.0 += 1;
    }
    assert!(configured > Port(8080));

    configured.reset();
    configured.reset();
    assert_eq!(format!("{:?}", configured), "None");
}
