pub mod catalog;
pub mod providers;
pub mod ratings;
pub mod recommendations;

pub use providers::MovieCatalog;
pub use recommendations::Recommender;
