mod llm_client_factory;
mod openai_chat_client;

pub use llm_client_factory::LlmClientFactory;
pub use openai_chat_client::OpenAiChatClient;
