pub mod activity_directory;
pub mod catalog;

pub use activity_directory::ActivityDirectory;
pub use catalog::CatalogError;
