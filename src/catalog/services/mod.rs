//! Orchestration services for the catalog record registry.

pub mod registry;

pub use registry::{
    CreateBookRequest, LibraryService, LibraryServiceError, LibraryServiceResult,
    UpdateBookRequest,
};
