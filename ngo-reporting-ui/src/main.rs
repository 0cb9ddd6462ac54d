//! NGO Reporting
//!
//! Monthly report submission and dashboard for NGOs, built with Leptos (WASM).
//!
//! # Screens
//!
//! - Submit Report: validated monthly activity report form
//! - Dashboard: aggregated statistics for a selected month
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Validation, screen state and response handling live in the
//! `ngo-reporting` crate; this crate renders them and talks to the reporting
//! API over HTTP.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
