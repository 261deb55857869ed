//! Notice board wiring through the root update

use std::sync::Arc;

use userdesk_console::common::messages::DomainMessage;
use userdesk_console::domains::feedback::FeedbackMessage;
use userdesk_console::domains::user_update::UserUpdateMessage;
use userdesk_console::infra::services::{
    Notice, NoticeBoard, NoticeLevel, NoticeSink, UserDirectory,
};
use userdesk_console::infra::testing::StubUserDirectory;
use userdesk_console::state::State;
use userdesk_console::update::update;
use userdesk_console::view::title;
use userdesk_model::{SupportedLanguages, UserID};

fn board_backed_state(capacity: usize) -> State {
    let board = Arc::new(NoticeBoard::new(capacity));
    let sink: Arc<dyn NoticeSink> = board.clone();
    let directory: Arc<dyn UserDirectory> = Arc::new(StubUserDirectory::new());
    State::new(
        UserID::new("1").unwrap(),
        SupportedLanguages::new(["en"]).unwrap(),
        directory,
        sink,
        board,
    )
}

#[test]
fn domain_notices_land_on_the_board() {
    let mut state = board_backed_state(4);
    let _ = update(
        &mut state,
        DomainMessage::from(UserUpdateMessage::Submit),
    );

    let posted = state.notice_board.posted();
    assert_eq!(posted.len(), 1);
    assert_eq!(posted[0].notice.level, NoticeLevel::Error);
}

#[test]
fn dismiss_and_clear_are_routed() {
    let mut state = board_backed_state(4);
    state.notice_board.notify(Notice::success("saved"));
    state.notice_board.notify(Notice::error("failed"));
    state.notice_board.notify(Notice::info("hello"));

    let first = state.notice_board.posted()[0].id;
    let _ = update(&mut state, FeedbackMessage::Dismiss(first).into());
    assert_eq!(state.notice_board.len(), 2);

    let _ = update(&mut state, FeedbackMessage::ClearAll.into());
    assert!(state.notice_board.is_empty());
}

#[test]
fn zero_capacity_still_shows_latest_notice() {
    let state = board_backed_state(0);
    state.notice_board.notify(Notice::error("one"));
    state.notice_board.notify(Notice::error("two"));

    let posted = state.notice_board.posted();
    assert_eq!(posted.len(), 1);
    assert_eq!(posted[0].notice.message, "two");
}

#[test]
fn title_names_the_user_until_loaded() {
    let state = board_backed_state(4);
    assert_eq!(title(&state), "userdesk - user 1");
}
