pub mod people_api;
pub mod prompt;
pub mod scheduler;
pub mod view;
