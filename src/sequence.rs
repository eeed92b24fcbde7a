// Copyright 2026 Enlightware GmbH
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not use this file except in compliance with the License. You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software distributed under the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied. See the License for the specific language governing permissions and limitations under the License.
//

//! Searching and filtering sequences with functions returning [`Option`].

use itertools::{Either, Itertools};

use crate::{option::Option, result::Result};

/// The first `Some` produced by `choice`, scanning `items` in order.
///
/// `choice` is not called on the items after the first match.
pub fn pick<I, U>(items: I, mut choice: impl FnMut(I::Item) -> Option<U>) -> Option<U>
where
    I: IntoIterator,
{
    Option::from_native(
        items
            .into_iter()
            .find_map(|item| choice(item).to_native()),
    )
}

/// The payloads of every `Some` produced by `choice`, in input order.
///
/// `choice` is called exactly once per item.
pub fn choose<I, U>(items: I, mut choice: impl FnMut(I::Item) -> Option<U>) -> Vec<U>
where
    I: IntoIterator,
{
    items
        .into_iter()
        .filter_map(|item| choice(item).to_native())
        .collect()
}

/// Splits `results` into their error and success payloads, each in input order.
pub fn partition<I, E, T>(results: I) -> (Vec<E>, Vec<T>)
where
    I: IntoIterator<Item = Result<E, T>>,
{
    results
        .into_iter()
        .partition_map(|result| result.substitute(Either::Left, Either::Right))
}

/// [`pick`] and [`choose`] as iterator methods.
pub trait SequenceExt: Iterator + Sized {
    fn pick<U>(self, choice: impl FnMut(Self::Item) -> Option<U>) -> Option<U> {
        pick(self, choice)
    }

    fn choose<U>(self, choice: impl FnMut(Self::Item) -> Option<U>) -> Vec<U> {
        choose(self, choice)
    }
}

impl<I: Iterator> SequenceExt for I {}
