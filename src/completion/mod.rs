pub mod deepseek;

pub use deepseek::CompletionClient;
