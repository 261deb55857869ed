//! Root application state

use std::sync::Arc;

use userdesk_model::{SupportedLanguages, UserID};

use crate::domains::user_update::UserUpdateDomain;
use crate::infra::services::{NoticeBoard, NoticeSink, UserDirectory};

/// Per-domain state
#[derive(Debug)]
pub struct DomainState {
    pub user_update: UserUpdateDomain,
}

#[derive(Debug)]
pub struct State {
    pub domains: DomainState,
    /// Notices rendered by the overlay
    pub notice_board: Arc<NoticeBoard>,
}

impl State {
    /// `notices` is what the domains report to. The console passes the
    /// board itself; tests substitute a recording sink.
    pub fn new(
        user_id: UserID,
        languages: SupportedLanguages,
        directory: Arc<dyn UserDirectory>,
        notices: Arc<dyn NoticeSink>,
        notice_board: Arc<NoticeBoard>,
    ) -> Self {
        Self {
            domains: DomainState {
                user_update: UserUpdateDomain::new(
                    user_id, languages, directory, notices,
                ),
            },
            notice_board,
        }
    }
}
