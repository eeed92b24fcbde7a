// Copyright 2026 Enlightware GmbH
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not use this file except in compliance with the License. You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software distributed under the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied. See the License for the specific language governing permissions and limitations under the License.
//

use std::{
    collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque},
    ptr::NonNull,
    rc::Rc,
    sync::Arc,
};

use crate::unit::Unit;

/// A type that has an "absent" sentinel among its values.
///
/// This is what [`crate::Option::of_value`] and [`crate::Option::guard_value`] inspect to decide between
/// absence and presence. Types whose values are always present map to themselves.
pub trait Nullable {
    /// The type of a present value.
    type Value;

    /// Returns the present value, or `None` for the absent sentinel.
    fn into_present(self) -> Option<Self::Value>;
}

impl<T> Nullable for Option<T> {
    type Value = T;
    fn into_present(self) -> Option<T> {
        self
    }
}

impl<T> Nullable for crate::Option<T> {
    type Value = T;
    fn into_present(self) -> Option<T> {
        self.to_native()
    }
}

// Null pointers are absent, others become non-null pointers. No dereference takes place.

impl<T: ?Sized> Nullable for *const T {
    type Value = NonNull<T>;
    fn into_present(self) -> Option<NonNull<T>> {
        NonNull::new(self.cast_mut())
    }
}

impl<T: ?Sized> Nullable for *mut T {
    type Value = NonNull<T>;
    fn into_present(self) -> Option<NonNull<T>> {
        NonNull::new(self)
    }
}

macro_rules! impl_always_present {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Nullable for $ty {
                type Value = Self;
                #[inline]
                fn into_present(self) -> Option<Self> {
                    Some(self)
                }
            }
        )*
    };
}

impl_always_present!(
    Unit, (), bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32,
    f64, String,
);

impl<'a, T: ?Sized> Nullable for &'a T {
    type Value = Self;
    fn into_present(self) -> Option<Self> {
        Some(self)
    }
}

impl<'a, T: ?Sized> Nullable for &'a mut T {
    type Value = Self;
    fn into_present(self) -> Option<Self> {
        Some(self)
    }
}

impl<T: ?Sized> Nullable for Box<T> {
    type Value = Self;
    fn into_present(self) -> Option<Self> {
        Some(self)
    }
}

impl<T> Nullable for Vec<T> {
    type Value = Self;
    fn into_present(self) -> Option<Self> {
        Some(self)
    }
}

impl<T, const N: usize> Nullable for [T; N] {
    type Value = Self;
    fn into_present(self) -> Option<Self> {
        Some(self)
    }
}

// Generic containers hold their items, they are present even when empty.
macro_rules! impl_always_present_generic {
    ($($ty:ident<$($param:ident),+>),* $(,)?) => {
        $(
            impl<$($param),+> Nullable for $ty<$($param),+> {
                type Value = Self;
                fn into_present(self) -> Option<Self> {
                    Some(self)
                }
            }
        )*
    };
}

impl_always_present_generic!(
    VecDeque<T>,
    HashSet<T, S>,
    BTreeSet<T>,
    HashMap<K, V, S>,
    BTreeMap<K, V>,
);

impl<T: ?Sized> Nullable for Rc<T> {
    type Value = Self;
    fn into_present(self) -> Option<Self> {
        Some(self)
    }
}

impl<T: ?Sized> Nullable for Arc<T> {
    type Value = Self;
    fn into_present(self) -> Option<Self> {
        Some(self)
    }
}

macro_rules! impl_always_present_tuple {
    ($(($($param:ident),+)),* $(,)?) => {
        $(
            impl<$($param),+> Nullable for ($($param,)+) {
                type Value = Self;
                fn into_present(self) -> Option<Self> {
                    Some(self)
                }
            }
        )*
    };
}

impl_always_present_tuple!(
    (A),
    (A, B),
    (A, B, C),
    (A, B, C, D),
    (A, B, C, D, E),
    (A, B, C, D, E, F),
);

impl<E, T> Nullable for crate::Result<E, T> {
    type Value = Self;
    fn into_present(self) -> Option<Self> {
        Some(self)
    }
}

impl<T, E> Nullable for Result<T, E> {
    type Value = Self;
    fn into_present(self) -> Option<Self> {
        Some(self)
    }
}
