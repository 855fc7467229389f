pub mod os_random_source;
pub mod tracking_id;
pub mod tracking_manager;
