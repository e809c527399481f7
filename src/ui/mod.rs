// SPDX-License-Identifier: MPL-2.0
//! UI layer: design tokens and the toast overlay widgets.

pub mod design_tokens;
pub mod toasts;
