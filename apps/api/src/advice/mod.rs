// Advice generation: request validation, prompt building, completion,
// response normalization and the static reference tables.
// All completion calls go through llm_client.

pub mod handlers;
pub mod links;
pub mod models;
pub mod normalizer;
pub mod prompts;
pub mod references;
pub mod service;
