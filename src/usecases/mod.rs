//! Application use cases. Orchestrate domain logic via ports.

pub mod submission_service;

pub use submission_service::SubmissionService;
