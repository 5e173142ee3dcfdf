//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument.

pub mod class_repo;
pub mod image_repo;
pub mod label_repo;
pub mod model_repo;
pub mod snapshot_repo;

pub use class_repo::ClassRepo;
pub use image_repo::ImageRepo;
pub use label_repo::LabelRepo;
pub use model_repo::ModelRepo;
pub use snapshot_repo::SnapshotRepo;
