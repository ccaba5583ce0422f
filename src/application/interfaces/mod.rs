/// Alert service interface
pub mod alert;
/// Report service interface
pub mod report;
/// Sensor service interface
pub mod sensor;
/// User service interface
pub mod user;
