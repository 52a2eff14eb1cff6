//! Small helpers shared by the server modules.

pub mod password;
pub mod validate;
