pub mod detect_mode;
pub mod inspect_config;
pub mod resolve_context;
