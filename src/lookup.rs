// Copyright 2026 Enlightware GmbH
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not use this file except in compliance with the License. You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software distributed under the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied. See the License for the specific language governing permissions and limitations under the License.
//

//! Key lookup in maps, returning an [`Option`] instead of the standard one.

use std::{
    borrow::Borrow,
    collections::{BTreeMap, HashMap},
    hash::{BuildHasher, Hash},
};

use crate::option::Option;

/// A map that can be queried with keys of type `Q`.
pub trait Lookup<Q: ?Sized> {
    type Value;

    /// The value stored under `key`, if any.
    fn try_get_value(&self, key: &Q) -> Option<&Self::Value>;
}

impl<K, V, S, Q> Lookup<Q> for HashMap<K, V, S>
where
    K: Borrow<Q> + Hash + Eq,
    Q: Hash + Eq + ?Sized,
    S: BuildHasher,
{
    type Value = V;

    fn try_get_value(&self, key: &Q) -> Option<&V> {
        Option::of_value(key).and_then(|key| Option::of_value(self.get(key)))
    }
}

impl<K, V, Q> Lookup<Q> for BTreeMap<K, V>
where
    K: Borrow<Q> + Ord,
    Q: Ord + ?Sized,
{
    type Value = V;

    fn try_get_value(&self, key: &Q) -> Option<&V> {
        Option::of_value(key).and_then(|key| Option::of_value(self.get(key)))
    }
}

#[cfg(feature = "indexmap")]
impl<K, V, S, Q> Lookup<Q> for indexmap::IndexMap<K, V, S>
where
    Q: Hash + indexmap::Equivalent<K> + ?Sized,
    S: BuildHasher,
{
    type Value = V;

    fn try_get_value(&self, key: &Q) -> Option<&V> {
        Option::of_value(key).and_then(|key| Option::of_value(self.get(key)))
    }
}
