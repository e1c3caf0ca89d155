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

//! The edit state machine: turns edits of the visible text into a resolved
//! calling code, a canonical raw value and a formatted national number.

mod builder;
pub mod enums;
mod guard;
mod state;
mod state_machine;
mod surface;
mod text_change;

pub use builder::EditStateMachineBuilder;
pub use enums::{EditOutcome, Property};
pub use state::ResolvedState;
pub use state_machine::EditStateMachine;
pub use surface::EditSurface;
pub use text_change::TextChange;
