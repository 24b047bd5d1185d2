// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! screen module owns a `Message`, an `update` returning an `Event` for the
//! app, and a `view`.
//!
//! # Screens
//!
//! - [`dashboard`] - Stats, progress and the course catalog
//! - [`login`] - Sign-in form
//!
//! # Shared Infrastructure
//!
//! - [`navbar`] - Navigation bar with menu, search and user dropdown
//! - [`notifications`] - Toast notification center
//! - [`styles`] - Centralized widget styles
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod dashboard;
pub mod design_tokens;
pub mod login;
pub mod navbar;
pub mod notifications;
pub mod styles;
pub mod theming;
