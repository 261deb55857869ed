pub mod notice;
pub mod user_directory;

pub use notice::RecordingNoticeSink;
pub use user_directory::StubUserDirectory;
