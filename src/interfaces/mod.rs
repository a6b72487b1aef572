//! Adapters between the outside world (files, text formats) and the domain.

pub mod csv;
pub mod json;
pub mod report;
