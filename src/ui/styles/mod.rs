// SPDX-License-Identifier: MPL-2.0
//! Shared widget styles for the shell screens.

pub mod button;
pub mod container;
