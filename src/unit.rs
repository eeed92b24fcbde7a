use std::fmt;

/// The unit type: a single value carrying no information.
///
/// Used as the payload where only the shape of an `Option` or `Result` matters,
/// for example `Option<Unit>` from [`crate::Option::of_bool`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Unit;

impl Unit {
    pub const fn new() -> Self {
        Unit
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "()")
    }
}

impl From<()> for Unit {
    fn from(_: ()) -> Self {
        Unit
    }
}

impl From<Unit> for () {
    fn from(_: Unit) -> Self {}
}
