// AI flows: template style generation and resume text improvement.
// Both are single-shot prompts through llm_client — no direct API calls here.

pub mod handlers;
pub mod prompts;
pub mod style_gen;
