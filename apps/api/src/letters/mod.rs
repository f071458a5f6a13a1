// Cover letter generation: request/response models, prompt construction,
// and the axum handlers for the generate and retrieval endpoints.
// All LLM calls go through llm_client — no direct OpenAI calls here.

pub mod handlers;
pub mod models;
pub mod prompts;
