// SPDX-License-Identifier: MPL-2.0
//! `learnhub` is a desktop learning-management front end built with the Iced
//! GUI framework.
//!
//! Its core is the toast [notification center](ui::notifications): transient
//! messages that fade out and remove themselves on a fixed schedule. Around
//! it sit the session flags, form validation, display formatters and the
//! dashboard animations used by the shell.

#![doc(html_root_url = "https://docs.rs/learnhub/0.1.0")]

pub mod animation;
pub mod app;
pub mod debounce;
pub mod error;
pub mod format;
pub mod session;
pub mod storage;
pub mod ui;
pub mod validation;
