pub mod identity;

pub use identity::{strip_mac_separators, Identity};
