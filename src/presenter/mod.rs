//! Terminal rendition of the DePIN dashboard.
//!
//! The view fetches `/api/prices` once when mounted, keeps the result in
//! [`state::DashboardView`], and renders one of three tabs from it. Switching tabs never
//! refetches.

pub mod catalog;
pub mod client;
pub mod format;
pub mod render;
pub mod state;
