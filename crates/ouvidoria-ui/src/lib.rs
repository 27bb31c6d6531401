//! Central de Reclamações UI Components
//!
//! This crate provides the presentational Dioxus components used by the
//! complaint site: buttons, form controls, cards, icons and toasts.
//!
//! ## Design Language
//!
//! Clean banking look, light background with a red brand accent:
//! - **Primary (#cc092f)**: call-to-action buttons, icons, progress
//! - **Foreground (#1a1a2e)**: text, footer background
//! - **Destructive (#dc2626)**: field errors, failure toasts
//! - **Muted (#f4f4f6)**: section backgrounds, badges
//!
//! Components hold no intake logic. Values, errors and handlers come in as
//! props; state lives in the caller.

pub mod components;

pub use components::*;
