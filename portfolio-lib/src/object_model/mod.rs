mod project;
mod raw_repository;

pub use self::project::Project;
pub use self::raw_repository::RawRepository;
