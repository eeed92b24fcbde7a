// Copyright 2026 Enlightware GmbH
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not use this file except in compliance with the License. You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software distributed under the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied. See the License for the specific language governing permissions and limitations under the License.
//

//! Small function utilities: identity, currying and adapters from other
//! calling conventions to functions returning [`Option`].

use std::str::FromStr;

use crate::{option::Option, unit::Unit};

// Defines curry2 to curry5 and the Curried2 to Curried5 aliases.
fortis_macros::declare_curry_fns!(5);

pub fn identity<T>(value: T) -> T {
    value
}

/// Discards `value`.
pub fn ignore<T>(_value: T) -> Unit {
    Unit
}

/// Adapts a function that reports success through a flag next to its output,
/// so that it can be chained with [`Option::and_then`].
/// The output is discarded when the flag is false.
pub fn flagged<T, U>(mut function: impl FnMut(T) -> (bool, U)) -> impl FnMut(T) -> Option<U> {
    move |value| {
        let (succeeded, output) = function(value);
        Option::of_bool(succeeded).map(|_| output)
    }
}

/// Adapts a function returning a standard `Result`, dropping the error.
pub fn fallible<T, U, E>(
    mut function: impl FnMut(T) -> Result<U, E>,
) -> impl FnMut(T) -> Option<U> {
    move |value| Option::from_native(function(value).ok())
}

/// Parses `text`, `None` if it is not a valid `T`.
pub fn try_parse<T: FromStr>(text: &str) -> Option<T> {
    Option::from_native(text.parse().ok())
}

/// Parses a float, treating "NaN" as absent.
pub fn try_parse_float(text: &str) -> Option<f64> {
    try_parse::<f64>(text).filter(|value| !value.is_nan())
}
