#![forbid(unsafe_code)]

pub mod app_services;
pub mod config;
pub mod error;
pub mod offline;
pub mod quiz_service;
pub mod speech;

pub use app_services::AppServices;
pub use config::AppConfig;
pub use error::{AppServicesError, ConfigError, NetworkError, OfflineError, SpeechError};
pub use offline::{
    CacheConfig, HttpNetwork, Network, OfflineCacheProxy, ProxiedResponse, ProxyState,
    ResponseSource,
};
pub use quiz_service::QuizService;
pub use speech::{SilentSpeech, SpeechSynthesizer, SpeechTrigger, SystemSpeech};
