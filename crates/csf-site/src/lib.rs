//! Content, rendering, and announcement retrieval for the College of Sport &
//! Fitness Australia website. The HTTP surface lives in the `csf-site-web`
//! service; everything here is usable without a running server.

pub mod announcements;
pub mod catalog;
pub mod config;
pub mod contact;
pub mod content;
pub mod error;
pub mod site;
pub mod telemetry;
pub mod views;
