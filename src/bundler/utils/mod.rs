//! Shared helpers for the packaging pipeline.

pub(crate) mod fs;
