use std::sync::Arc;

use anyhow::Context;
use iced::Task;
use log::info;
use userdesk_config::ConsoleConfig;
use userdesk_model::UserID;

use crate::common::messages::DomainMessage;
use crate::domains::user_update::UserUpdateMessage;
use crate::infra::api_client::ApiClient;
use crate::infra::services::{
    GraphQlUserDirectory, NoticeBoard, NoticeSink, UserDirectory,
};
use crate::infra::testing::{StubUserDirectory, fixtures};
use crate::state::State;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub user_id: UserID,
    pub console: ConsoleConfig,
    pub use_test_stubs: bool,
}

impl AppConfig {
    pub fn new(user_id: UserID, console: ConsoleConfig) -> Self {
        let use_test_stubs = console.console.use_test_stubs;
        Self {
            user_id,
            console,
            use_test_stubs,
        }
    }

    pub fn use_test_stubs(&self) -> bool {
        self.use_test_stubs
    }

    pub fn with_test_stubs(mut self, enabled: bool) -> Self {
        self.use_test_stubs = enabled;
        self
    }
}

/// Wire services into a fresh state. Nothing is fetched yet.
pub fn base_state(config: &AppConfig) -> anyhow::Result<State> {
    let directory: Arc<dyn UserDirectory> = if config.use_test_stubs() {
        info!("[Bootstrap] Using in-memory user directory");
        Arc::new(
            StubUserDirectory::seeded_demo()
                .with_user(config.user_id.clone(), fixtures::superadmin_snapshot()),
        )
    } else {
        let client = ApiClient::from_config(&config.console.server)
            .context("failed to build the directory client")?;
        Arc::new(GraphQlUserDirectory::new(Arc::new(client)))
    };

    let board = Arc::new(NoticeBoard::new(config.console.console.notice_capacity));
    let notices: Arc<dyn NoticeSink> = board.clone();

    Ok(State::new(
        config.user_id.clone(),
        config.console.languages.clone(),
        directory,
        notices,
        board,
    ))
}

/// Initial state plus the activation that kicks off the detail fetch.
pub fn runtime_boot(state: State) -> (State, Task<DomainMessage>) {
    (
        state,
        Task::done(DomainMessage::from(UserUpdateMessage::Activate)),
    )
}
