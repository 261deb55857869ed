// Service ports the domains depend on, plus their production adapters.

pub mod notice;
pub mod user_directory;

pub use notice::{Notice, NoticeBoard, NoticeId, NoticeLevel, NoticeSink, PostedNotice};
pub use user_directory::{GraphQlUserDirectory, UserDirectory};
