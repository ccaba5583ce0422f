/// Alert data models
pub mod alert;
/// List envelope shared by collection endpoints
pub mod common;
/// Report data models
pub mod report;
/// Sensor, reading and statistics data models
pub mod sensor;
/// User data models
pub mod user;

pub use alert::*;
pub use common::*;
pub use report::*;
pub use sensor::*;
pub use user::*;
