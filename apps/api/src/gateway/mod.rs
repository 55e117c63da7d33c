// Prompt Gateway: validates the two form fields, templates the prompt,
// makes one upstream call and relays the text back as JSON.
// All LLM calls go through llm_client — no direct Anthropic calls here.

pub mod handlers;
pub mod prompts;
