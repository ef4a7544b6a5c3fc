// Headline scoring: prompt construction, response parsing, ranking and the
// end-to-end comparison flow. All completion calls go through llm_client.

pub mod comparator;
pub mod handlers;
pub mod parser;
pub mod prompts;
pub mod ranking;
