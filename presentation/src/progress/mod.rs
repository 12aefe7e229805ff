//! Session event reporting

pub mod reporter;
