//! Application layer: the exercise services that orchestrate the entity
//! repositories and decide which failures to log and which to propagate.

pub mod finance;
pub mod grading;
pub mod health;
pub mod inventory_logger;
pub mod warehouse;
