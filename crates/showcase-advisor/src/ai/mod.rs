//! AI backend plumbing

pub mod backend_impl;
pub mod prompts;
