pub mod pingback_client;
pub mod pingback_service;
