//! # adept
//!
//! Keymap for a six-button trackball with drag scroll and CPI stepping.
//!
//! The crate runs inside a host keyboard firmware. The host scans the matrix, manages layers and
//! drives the sensor; this crate declares the layers and reacts to the host callbacks through
//! [`Adept`]:
//!
//! - [`dpi`] steps the sensor CPI up and down, with coarser steps at high CPI
//! - [`scroll`] turns cursor motion into scroll ticks while the drag scroll key is held
//! - [`keymap`] holds the default layers
//! - [`host`] defines what the keymap needs from the host
//!
//! ## Feature flags
#![doc = document_features::document_features!()]
#![cfg_attr(not(test), no_std)]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod action;
pub mod config;
pub mod dpi;
pub mod host;
pub mod keycode;
pub mod keymap;
mod layout_macro;
pub mod processor;
pub mod scroll;

pub use config::AdeptConfig;
pub use processor::Adept;
