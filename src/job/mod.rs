pub mod editor;
pub mod model;

pub use editor::JobEditor;
pub use model::{Job, JobStatus, JobUpdate};
