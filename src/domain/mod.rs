pub mod library;
pub mod story;
pub mod studio;
