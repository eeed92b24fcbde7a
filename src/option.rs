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
    guard::{guarded, guarded_value},
    nullable::Nullable, result::Result, unit::Unit};

/// An optional value: either `None` or `Some` value of type `T`.
///
/// Values are immutable once built. Equality, ordering and hashing are structural,
/// with `None` ordering before any `Some`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumAsInner)]
pub enum Option<T> {
    None,
    Some(T),
}

impl<T> Option<T> {
    pub const fn none() -> Self {
        Self::None
    }

    /// Wraps `value` as is, even when `value` is itself an absent nullable.
    /// Use [`Option::of_value`] to collapse absent values.
    pub const fn some(value: T) -> Self {
        Self::Some(value)
    }

    /// `None` if `value` is the absent sentinel of its type, `Some` otherwise.
    pub fn of_value<N: Nullable<Value = T>>(value: N) -> Self {
        match value.into_present() {
            Some(value) => Self::Some(value),
            None => Self::None,
        }
    }

    /// Calls `callback` and wraps its result. A panic in `callback` yields `None`,
    /// the panic detail is dropped.
    pub fn guard(callback: impl FnOnce() -> T) -> Self {
        Self::from_native(guarded(callback).ok())
    }

    /// Like [`Option::guard`], but the result goes through [`Option::of_value`].
    pub fn guard_value<N: Nullable<Value = T>>(callback: impl FnOnce() -> N) -> Self {
        Self::from_native(guarded_value(callback).ok())
    }

    /// Whether this is `Some`.
    pub fn exists(&self) -> bool {
        self.is_some()
    }

    /// The total eliminator: calls exactly one of the two functions, once.
    pub fn substitute<O>(self, for_none: impl FnOnce() -> O, for_some: impl FnOnce(T) -> O) -> O {
        match self {
            Self::None => for_none(),
            Self::Some(value) => for_some(value),
        }
    }

    /// Transforms the payload. The result is always `Some`, even when the mapper
    /// returns an absent value such as a std `None`; see [`Option::map_value`].
    pub fn map<U>(self, mapper: impl FnOnce(T) -> U) -> Option<U> {
        self.substitute(Option::none, |value| Option::some(mapper(value)))
    }

    /// Like [`Option::map`], but a mapper returning an absent value yields `None`.
    pub fn map_value<N: Nullable>(self, mapper: impl FnOnce(T) -> N) -> Option<N::Value> {
        self.and_then(|value| Option::of_value(mapper(value)))
    }

    /// Chains a computation that may itself be absent. `callback` is not called on `None`.
    pub fn and_then<U>(self, callback: impl FnOnce(T) -> Option<U>) -> Option<U> {
        self.substitute(Option::none, callback)
    }

    /// The payload, or `value` on `None`. `value` is built eagerly, use
    /// [`Option::substitute`] for a lazy default.
    pub fn with_default(self, value: T) -> T {
        self.substitute(|| value, |present| present)
    }

    pub fn filter(self, predicate: impl FnOnce(&T) -> bool) -> Self {
        self.substitute(Option::none, |value| {
            if predicate(&value) {
                Option::some(value)
            } else {
                Option::none()
            }
        })
    }

    pub fn to_result(self) -> Result<Unit, T> {
        self.substitute(|| Result::error(Unit), Result::success)
    }

    pub fn as_ref(&self) -> Option<&T> {
        match self {
            Self::None => Option::None,
            Self::Some(value) => Option::Some(value),
        }
    }
}

impl Option<Unit> {
    /// `Some(Unit)` when `value` is true, `None` otherwise.
    pub fn of_bool(value: bool) -> Self {
        if value {
            Self::Some(Unit)
        } else {
            Self::None
        }
    }
}

impl<T> Default for Option<T> {
    fn default() -> Self {
        Self::None
    }
}

impl<T: fmt::Display> fmt::Display for Option<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Some(value) => write!(f, "Some({})", value),
        }
    }
}

impl<T> From<Option<T>> for Result<Unit, T> {
    fn from(option: Option<T>) -> Self {
        option.to_result()
    }
}

impl<T> From<Result<Unit, T>> for Option<T> {
    fn from(result: Result<Unit, T>) -> Self {
        result.to_option()
    }
}
