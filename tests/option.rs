use fortis::{func::identity, Option, Unit};
use indoc::indoc;
use test_log::test;

mod common;
use common::parse_port;

#[test]
fn map_preserves_identity() {
    for option in [Option::some(3), Option::none()] {
        assert_eq!(option.map(identity), option);
    }
}

#[test]
fn map_composes() {
    let f = |x: i32| x + 1;
    let g = |x: i32| x * 10;
    for option in [Option::some(4), Option::none()] {
        assert_eq!(option.map(f).map(g), option.map(|x| g(f(x))));
    }
}

#[test]
fn and_then_is_monadic() {
    let f = |x: i32| Option::of_bool(x > 0).map(|_| x * 2);
    let g = |x: i32| Option::some(x - 1);

    // left identity
    assert_eq!(Option::some(5).and_then(f), f(5));
    assert_eq!(Option::some(-5).and_then(f), f(-5));

    // right identity
    for option in [Option::some(5), Option::none()] {
        assert_eq!(option.and_then(Option::some), option);
    }

    // associativity
    for option in [Option::some(5), Option::some(-5), Option::none()] {
        assert_eq!(
            option.and_then(f).and_then(g),
            option.and_then(|x| f(x).and_then(g))
        );
    }
}

#[test]
fn with_default_and_substitute() {
    assert_eq!(Option::some(1).with_default(9), 1);
    assert_eq!(Option::none().with_default(9), 9);
    assert_eq!(Option::some(2).substitute(|| 0, |x| x + 1), 3);
    assert_eq!(Option::<i32>::none().substitute(|| 0, |x| x + 1), 0);
}

#[test]
fn parse_chain() {
    let port = Option::some(" 8080 ")
        .map(str::trim)
        .and_then(parse_port)
        .with_default(80);
    assert_eq!(port, 8080);

    let port = Option::some("0").and_then(parse_port).with_default(80);
    assert_eq!(port, 80);

    let port = Option::some("http").and_then(parse_port).with_default(80);
    assert_eq!(port, 80);
}

#[test]
fn of_value_accepts_native_absence() {
    let absent: std::option::Option<&str> = None;
    assert_eq!(Option::of_value(absent), Option::none());
    assert_eq!(Option::of_value(Some("here")), Option::some("here"));
    assert_eq!(Option::of_value(String::new()), Option::some(String::new()));
}

#[test]
fn guard_never_propagates_failures() {
    let words = ["alpha", "beta"];
    let index = std::hint::black_box(5_usize);
    assert_eq!(Option::guard(|| words[index]), Option::none());
    assert_eq!(Option::guard(|| words[1]), Option::some("beta"));
}

#[test]
fn unit_option_is_a_boolean() {
    assert!(Option::of_bool(true).exists());
    assert!(!Option::of_bool(false).exists());
    assert_eq!(Option::of_bool(true), Option::some(Unit));
}

#[test]
fn debug_output() {
    let option = Option::some(Option::some(Unit));
    assert_eq!(
        format!("{option:#?}"),
        indoc! {"
            Some(
                Some(
                    Unit,
                ),
            )"}
    );
    assert_eq!(format!("{option}"), "Some(Some(()))");
}
