//! Test doubles for exercising collaborators without real infrastructure.

mod mock_source;

pub use mock_source::MockRecordSource;
