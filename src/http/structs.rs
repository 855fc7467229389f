pub mod board_service_data;
pub mod posts_form;
pub mod posts_query;
