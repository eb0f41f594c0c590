//! Domain inputs with validation at construction
//!
//! Request input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod event;
pub mod image;
pub mod pagination;
pub mod person;
pub mod validation;

pub use event::{NewEvent, DEFAULT_ACCOUNT_ID};
pub use image::{image_file_name, image_path, NewImage, MAX_IMAGE_BYTES};
pub use pagination::{Pagination, PaginationParams};
pub use person::NewPerson;
pub use validation::ValidationError;
