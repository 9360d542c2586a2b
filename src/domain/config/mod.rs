mod pingback_config;

pub use pingback_config::{PingbackConfig, ReportSettings};
