//! The three guidance engines and their shared plumbing.
//!
//! Every lookup degrades gracefully: an unknown visa type, country, or
//! purpose resolves to an empty result, never an error. Errors exist only
//! at construction time, when a reference dataset is missing or malformed.

pub mod culture;
pub mod dataset;
pub mod documents;
pub mod router;
pub mod visa;

pub use router::{guidance_router, GuidanceServices};
