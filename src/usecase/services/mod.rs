pub mod delete_service;
pub mod refresh_service;
pub mod search_service;
