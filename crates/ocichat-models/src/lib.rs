// Models module - data structures for proxy API communication
pub mod proxy_config;
pub mod requests;
pub mod responses;


// Re-export commonly used types
pub use proxy_config::{ModelListEntry, ProxyConfig};
pub use requests::{ChatRequest, Message, DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE};
pub use responses::{ChatResponse, Choice, ModelEntry, ModelList, Usage};
