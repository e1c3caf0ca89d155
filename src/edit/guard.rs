// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::{cell::Cell, rc::Rc};

/// Marks an operation of the state machine as in progress.
///
/// The flag is only ever raised through [`UpdateFlag::acquire`] and lowered
/// when the returned guard is dropped, whatever way the operation exits.
#[derive(Debug, Default, Clone)]
pub(crate) struct UpdateFlag(Rc<Cell<bool>>);

impl UpdateFlag {
    pub fn is_set(&self) -> bool {
        self.0.get()
    }

    /// Raises the flag. Returns `None` if it is already raised, meaning
    /// the caller is nested inside the same operation.
    pub fn acquire(&self) -> Option<UpdateGuard> {
        if self.0.replace(true) {
            return None;
        }
        Some(UpdateGuard(Rc::clone(&self.0)))
    }
}

#[derive(Debug)]
pub(crate) struct UpdateGuard(Rc<Cell<bool>>);

impl Drop for UpdateGuard {
    fn drop(&mut self) {
        self.0.set(false);
    }
}
