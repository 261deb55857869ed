//! In-process stand-ins for the directory and notice ports.
//!
//! Used by the `--use-test-stubs` mode and by the integration tests.

pub mod fixtures;
pub mod stubs;

pub use stubs::{RecordingNoticeSink, StubUserDirectory};
