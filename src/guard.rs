// Copyright 2026 Enlightware GmbH
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not use this file except in compliance with the License. You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software distributed under the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied. See the License for the specific language governing permissions and limitations under the License.
//

//! The boundary where panics raised by a callback are turned into values.
//!
//! This is the only place where the crate catches unwinding. The panic hook is left alone,
//! so the usual panic message is still printed by the standard library.

use std::panic::{self, AssertUnwindSafe};

use crate::{error::GuardError, nullable::Nullable};

/// Runs `callback`, catching a panic.
///
/// Only effective when panics unwind; with `panic = "abort"` the process still aborts.
pub(crate) fn guarded<T>(callback: impl FnOnce() -> T) -> Result<T, GuardError> {
    panic::catch_unwind(AssertUnwindSafe(callback)).map_err(|payload| {
        let error = GuardError::from_panic(payload);
        log::debug!("Guarded callback panicked: {}", error.message());
        error
    })
}

/// Like [`guarded`], but an absent return value is a failure as well.
pub(crate) fn guarded_value<N: Nullable>(
    callback: impl FnOnce() -> N,
) -> Result<N::Value, GuardError> {
    guarded(callback)?.into_present().ok_or_else(|| {
        log::debug!("Guarded callback produced no value");
        GuardError::NoValue
    })
}
