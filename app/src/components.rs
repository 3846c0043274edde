//! Reusable pieces shared across the page: navigation, footer, notices, the loading
//! spinner, icons, the decorative background and the not-found page.

pub mod background;
pub mod error_template;
pub mod footer;
pub mod header;
pub mod icons;
pub mod loader;
pub mod notice;
