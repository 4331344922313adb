pub mod config;
pub mod http;
pub mod services;

pub use config::NarrativeConfig;
pub use http::GeminiHttpClient;
pub use services::{BrowserTimeProvider, ConsoleLogger};
