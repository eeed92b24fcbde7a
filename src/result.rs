// Copyright 2026 Enlightware GmbH
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not use this file except in compliance with the License. You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software distributed under the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied. See the License for the specific language governing permissions and limitations under the License.
//

use std::fmt;

use enum_as_inner::EnumAsInner;

use crate::{
    error::GuardError,
    guard::{guarded, guarded_value},
    nullable::Nullable,
    option::Option,
    unit::Unit,
};

/// The outcome of a computation that can fail: an `Error` of type `E` or a `Success` of type `T`.
///
/// The error slot comes first. Errors propagate untouched through [`Result::map`] and
/// [`Result::and_then`] until the result is eliminated with [`Result::substitute`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumAsInner)]
pub enum Result<E, T> {
    Error(E),
    Success(T),
}

impl<E, T> Result<E, T> {
    pub const fn error(value: E) -> Self {
        Self::Error(value)
    }

    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// The total eliminator: calls exactly one of the two functions, once.
    pub fn substitute<O>(
        self,
        for_error: impl FnOnce(E) -> O,
        for_success: impl FnOnce(T) -> O,
    ) -> O {
        match self {
            Self::Error(error) => for_error(error),
            Self::Success(value) => for_success(value),
        }
    }

    /// Transforms the success payload, an error passes through unchanged.
    pub fn map<U>(self, mapper: impl FnOnce(T) -> U) -> Result<E, U> {
        self.substitute(Result::error, |value| Result::success(mapper(value)))
    }

    /// Transforms the error payload, a success passes through unchanged.
    pub fn format_error<F>(self, mapper: impl FnOnce(E) -> F) -> Result<F, T> {
        self.substitute(|error| Result::error(mapper(error)), Result::success)
    }

    /// Chains a computation that may itself fail. `callback` is not called on `Error`.
    pub fn and_then<U>(self, callback: impl FnOnce(T) -> Result<E, U>) -> Result<E, U> {
        self.substitute(Result::error, callback)
    }

    /// Drops the error detail.
    pub fn to_option(self) -> Option<T> {
        self.substitute(|_| Option::none(), Option::some)
    }

    pub fn as_ref(&self) -> Result<&E, &T> {
        match self {
            Self::Error(error) => Result::Error(error),
            Self::Success(value) => Result::Success(value),
        }
    }
}

impl<T> Result<GuardError, T> {
    /// Calls `callback`, converting a panic into an `Error`.
    ///
    /// Unlike [`Option::guard`], the failure detail is kept.
    pub fn guard(callback: impl FnOnce() -> T) -> Self {
        Self::from_native(guarded(callback))
    }

    /// Like [`Result::guard`], but an absent return value is an `Error` as well.
    pub fn guard_value<N: Nullable<Value = T>>(callback: impl FnOnce() -> N) -> Self {
        Self::from_native(guarded_value(callback))
    }
}

impl<T> Result<Unit, T> {
    /// `Error(Unit)` if `value` is the absent sentinel of its type, `Success` otherwise.
    pub fn of_value<N: Nullable<Value = T>>(value: N) -> Self {
        Option::of_value(value).to_result()
    }
}

impl Result<Unit, Unit> {
    pub fn of_bool(value: bool) -> Self {
        if value {
            Self::Success(Unit)
        } else {
            Self::Error(Unit)
        }
    }
}

/// The error payload of `result`, if any.
pub fn errors<E, T>(result: Result<E, T>) -> Option<E> {
    result.substitute(Option::some, |_| Option::none())
}

/// The success payload of `result`, if any.
pub fn successes<E, T>(result: Result<E, T>) -> Option<T> {
    result.substitute(|_| Option::none(), Option::some)
}

impl<E: fmt::Display, T: fmt::Display> fmt::Display for Result<E, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error(error) => write!(f, "Error({})", error),
            Self::Success(value) => write!(f, "Success({})", value),
        }
    }
}
