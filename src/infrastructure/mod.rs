pub mod audio;
pub mod drugs;
pub mod http;
pub mod llm;
pub mod observability;
pub mod speech;
pub mod storage;
pub mod translation;
