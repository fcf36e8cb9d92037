//! # Handlers for dbot framework
//!
//! Generic chain handlers that are not tied to a reply strategy. Currently: request logging.

mod logging;

#[cfg(test)]
mod test;

pub use logging::LoggingHandler;
