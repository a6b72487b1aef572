//! Domain layer: the stored record types and the capability traits that the
//! repository and its collaborators are written against.

pub mod finance;
pub mod healthcare;
pub mod inventory;
pub mod ports;
pub mod student;
