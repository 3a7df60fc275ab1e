pub mod exporters;
pub mod format_resolver;
pub mod model_service;
pub mod quiz_service;
pub mod response_parser;
