pub mod mock;
pub mod types;

pub use types::{HeaderInfo, MonitorSnapshot, ReviewInfo, ReviewRecord, StepStatus, WashStep};
