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

use thiserror::Error;

/// Reasons a caller-supplied calling code entry is refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidEntryError {
    #[error("Country calling code {0} is outside of 1..=999")]
    CountryCodeOutOfRange(u16),
    #[error("Area code {0} is listed more than once")]
    DuplicateAreaCode(u32),
    #[error("Region id must not be empty")]
    EmptyRegionId,
}
