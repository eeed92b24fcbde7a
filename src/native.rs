//! Bridges between this crate's sum types and the standard library's.
//!
//! Each pair of conversions is total and the two directions are inverse of each other.
//! The `From` impls need an annotated target, since the std types also convert from
//! any payload; `to_native` and `from_native` never need one.

use crate::{option, result};

impl<T> option::Option<T> {
    pub fn from_native(native: Option<T>) -> Self {
        match native {
            Some(value) => Self::Some(value),
            None => Self::None,
        }
    }

    pub fn to_native(self) -> Option<T> {
        self.substitute(|| None, Some)
    }
}

impl<E, T> result::Result<E, T> {
    pub fn from_native(native: Result<T, E>) -> Self {
        match native {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Error(error),
        }
    }

    pub fn to_native(self) -> Result<T, E> {
        self.substitute(Err, Ok)
    }
}

impl<T> From<Option<T>> for option::Option<T> {
    fn from(native: Option<T>) -> Self {
        Self::from_native(native)
    }
}

impl<T> From<option::Option<T>> for Option<T> {
    fn from(option: option::Option<T>) -> Self {
        option.to_native()
    }
}

impl<E, T> From<Result<T, E>> for result::Result<E, T> {
    fn from(native: Result<T, E>) -> Self {
        Self::from_native(native)
    }
}

impl<E, T> From<result::Result<E, T>> for Result<T, E> {
    fn from(result: result::Result<E, T>) -> Self {
        result.to_native()
    }
}

/// Conversion method on the standard `Option`.
pub trait NativeOptionExt<T> {
    fn to_option(self) -> option::Option<T>;
}

impl<T> NativeOptionExt<T> for Option<T> {
    fn to_option(self) -> option::Option<T> {
        option::Option::from_native(self)
    }
}

/// Conversion method on the standard `Result`.
pub trait NativeResultExt<T, E> {
    fn to_result(self) -> result::Result<E, T>;
}

impl<T, E> NativeResultExt<T, E> for Result<T, E> {
    fn to_result(self) -> result::Result<E, T> {
        result::Result::from_native(self)
    }
}
