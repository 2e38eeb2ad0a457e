// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for token identity and user visibility preferences

mod descriptor;
mod hidden;

pub use descriptor::{TokenDescriptor, TokenType};
pub use hidden::HiddenTokenSet;
