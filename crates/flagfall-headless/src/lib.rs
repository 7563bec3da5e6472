pub mod autopilot;
pub mod runner;
pub mod sink;
