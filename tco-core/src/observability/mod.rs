pub mod logging;

pub use logging::{setup_logging, LogFormat};
