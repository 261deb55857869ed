//! Root-level subscription composition

use iced::{Event, Subscription, event, window};

use crate::common::messages::DomainMessage;
use crate::domains::user_update::UserUpdateMessage;
use crate::state::State;

/// Files dropped on the window are offered to the avatar picker.
pub fn subscription(_state: &State) -> Subscription<DomainMessage> {
    event::listen_with(|event, _status, _window| match event {
        Event::Window(window::Event::FileDropped(path)) => {
            Some(DomainMessage::from(UserUpdateMessage::AvatarDropped(path)))
        }
        _ => None,
    })
}
