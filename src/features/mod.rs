pub mod discovery;
pub mod pingback;
