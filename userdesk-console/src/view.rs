//! Root view: the profile form with the notice overlay stacked on top

use iced::Element;
use iced::widget::stack;

use crate::common::messages::DomainMessage;
use crate::domains::feedback::view::view_notice_overlay;
use crate::domains::user_update::view::view_user_update;
use crate::state::State;

pub fn view(state: &State) -> Element<'_, DomainMessage> {
    stack![view_user_update(state), view_notice_overlay(state)].into()
}

pub fn title(state: &State) -> String {
    let editor = &state.domains.user_update.state;
    match &editor.snapshot {
        Some(snapshot) => format!("userdesk - {}", snapshot.display_name()),
        None => format!("userdesk - user {}", editor.user_id),
    }
}
