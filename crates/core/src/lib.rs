pub mod config;
pub mod fetcher;
pub mod pipeline;
pub mod presenter;
pub mod testing;
pub mod validator;

pub use config::{
    load_config, load_config_from_str, load_default_config, validate_config, Config,
    ConfigError, EndpointConfig, DEFAULT_ENDPOINT_URL, DEFAULT_TIMEOUT_MS,
};
pub use fetcher::{DataFetcher, FetchError, HttpFetcher};
pub use pipeline::{Pipeline, PipelineError, RunOutcome};
pub use presenter::{is_truthy, present, present_to, render, PresentedLine, Record};
pub use validator::{validate_url, InvalidUrlError};
