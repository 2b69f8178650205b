//! Monitoring plugin that checks majordomo2 list membership.
//!
//! Each configured list's live membership is scraped from the `mj_wwwadm`
//! admin interface and compared with the expected set. Unexpected members are
//! CRITICAL, missing members are a WARNING, and the worst status across all
//! lists becomes the plugin exit code.

pub mod check;
pub mod config;
pub mod constants;
pub mod error;
pub mod http;
pub mod logging;
pub mod majordomo;
pub mod nagios;
pub mod types;
