#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use userdesk_console::common::messages::DomainUpdateResult;
use userdesk_console::domains::user_update::state::UserUpdateState;
use userdesk_console::domains::user_update::{
    UserUpdateMessage, tasks, update_user_update,
};
use userdesk_console::infra::services::{NoticeBoard, NoticeSink, UserDirectory};
use userdesk_console::infra::testing::{
    RecordingNoticeSink, StubUserDirectory, fixtures,
};
use userdesk_console::state::State;
use userdesk_model::{AvatarFile, SupportedLanguages, UserID};

pub fn languages() -> SupportedLanguages {
    SupportedLanguages::new(["en", "fr", "hi", "sp", "zh"]).unwrap()
}

pub fn user_one() -> UserID {
    UserID::new("1").unwrap()
}

/// Drives the profile editor the way the iced runtime would, running the
/// async half of each task by hand.
pub struct Harness {
    pub state: State,
    pub directory: Arc<StubUserDirectory>,
    pub notices: Arc<RecordingNoticeSink>,
}

impl Harness {
    pub fn new(directory: StubUserDirectory) -> Self {
        Self::for_user(user_one(), directory)
    }

    /// User "1" exists and is a superadmin.
    pub fn with_superadmin() -> Self {
        Self::new(
            StubUserDirectory::new()
                .with_user(user_one(), fixtures::superadmin_snapshot()),
        )
    }

    pub fn for_user(id: UserID, directory: StubUserDirectory) -> Self {
        let directory = Arc::new(directory);
        let notices = Arc::new(RecordingNoticeSink::new());
        let port: Arc<dyn UserDirectory> = directory.clone();
        let sink: Arc<dyn NoticeSink> = notices.clone();
        let state = State::new(id, languages(), port, sink, Arc::new(NoticeBoard::new(4)));
        Self {
            state,
            directory,
            notices,
        }
    }

    pub fn editor(&self) -> &UserUpdateState {
        &self.state.domains.user_update.state
    }

    pub fn send(&mut self, message: UserUpdateMessage) -> DomainUpdateResult {
        update_user_update(&mut self.state, message)
    }

    /// Run the detail fetch against the stub and deliver its result.
    pub async fn deliver_fetch(&mut self) -> DomainUpdateResult {
        let directory: Arc<dyn UserDirectory> = self.directory.clone();
        let result = tasks::load_user(directory, self.editor().user_id.clone()).await;
        self.send(UserUpdateMessage::UserLoaded(result))
    }

    /// Activate the screen and complete the initial fetch.
    pub async fn load(&mut self) -> DomainUpdateResult {
        self.send(UserUpdateMessage::Activate);
        self.deliver_fetch().await
    }

    /// Submit, then run the dispatch if one was started.
    pub async fn submit(&mut self) -> DomainUpdateResult {
        let started = self.send(UserUpdateMessage::Submit);
        let Some(request) = self.editor().in_flight.clone() else {
            return started;
        };
        let directory: Arc<dyn UserDirectory> = self.directory.clone();
        let result = tasks::dispatch_update(directory, request).await;
        self.send(UserUpdateMessage::SubmitCompleted(result))
    }

    /// Deliver `result` for the avatar read currently pending.
    pub fn finish_avatar_read(
        &mut self,
        result: Result<AvatarFile, String>,
    ) -> DomainUpdateResult {
        let ticket = self.editor().avatar_input.pending.unwrap();
        self.send(UserUpdateMessage::AvatarRead(ticket, result))
    }

    /// Drop `file` on the window and let the read complete with it.
    pub fn stage_avatar(&mut self, file: AvatarFile) -> DomainUpdateResult {
        let path = PathBuf::from(file.file_name());
        self.send(UserUpdateMessage::AvatarDropped(path));
        self.finish_avatar_read(Ok(file))
    }
}
