/// API route handlers
///
/// This module contains all route handlers organized by resource:
///
/// - `health`: Health check endpoint
/// - `home`: Home summary endpoint
/// - `projects`: Project listing/creation and project sub-resources
/// - `tasks`: Task creation, lookup, and partial update

pub mod health;
pub mod home;
pub mod projects;
pub mod tasks;
