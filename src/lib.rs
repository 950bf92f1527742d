// SPDX-License-Identifier: MPL-2.0
//! `tons_toast` shows short, non-interactive toast notifications over a
//! window, one at a time, with a fade-in, a hold and a fade-out.
//!
//! The notifier core in [`ui::notifications`] is toolkit agnostic: it drives
//! a [`Host`](ui::notifications::Host) and a
//! [`Scheduler`](ui::notifications::Scheduler). The crate ships an iced host
//! and a small demo application in [`app`].

#![doc(html_root_url = "https://docs.rs/tons_toast/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod ui;

#[cfg(test)]
mod test_utils;
