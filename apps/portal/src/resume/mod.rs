// Resume tooling: the builder document behind /resume, and local skill
// extraction from uploaded PDF resumes.
// PDF text extraction is CPU-bound and must run inside tokio::task::spawn_blocking.

pub mod builder;
pub mod extract;

pub use builder::{Palette, ResumeDocument, ResumeOptions, Template};
pub use extract::{extract_skills_from_pdf, merge_skills};
