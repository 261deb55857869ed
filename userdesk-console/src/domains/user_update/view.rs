use iced::widget::{
    Space, button, column, container, horizontal_space, pick_list, radio, row,
    scrollable, text, text_input,
};
use iced::{Alignment, Element, Length};
use userdesk_model::{UserRole, UserSnapshot};

use super::messages::UserUpdateMessage;
use super::state::{LoadPhase, UserUpdateState};
use crate::common::messages::DomainMessage;
use crate::state::State;

const LABEL_WIDTH: f32 = 140.0;

fn msg(message: UserUpdateMessage) -> DomainMessage {
    DomainMessage::from(message)
}

pub fn view_user_update(state: &State) -> Element<'_, DomainMessage> {
    let editor = &state.domains.user_update.state;

    let body: Element<'_, DomainMessage> = match editor.phase {
        LoadPhase::Idle | LoadPhase::Loading if editor.snapshot.is_none() => {
            column![text("Loading user details...").size(14), form(editor)]
                .spacing(16)
                .into()
        }
        LoadPhase::Unavailable => container(
            text(format!(
                "User {} could not be loaded. Check the id and the server, then reopen the editor.",
                editor.user_id
            ))
            .size(16)
            .style(text::danger),
        )
        .padding(20)
        .center_x(Length::Fill)
        .into(),
        _ => form(editor),
    };

    let header = row![
        text("Update User").size(22),
        horizontal_space(),
        text(format!("id {}", editor.user_id))
            .size(13)
            .style(text::secondary),
    ]
    .align_y(Alignment::Center);

    container(scrollable(
        column![header, body].spacing(16).padding(24).max_width(720),
    ))
    .width(Length::Fill)
    .height(Length::Fill)
    .center_x(Length::Fill)
    .into()
}

fn labeled<'a>(
    label: &'a str,
    input: impl Into<Element<'a, DomainMessage>>,
) -> Element<'a, DomainMessage> {
    let input: Element<'a, DomainMessage> = input.into();
    row![text(label).size(14).width(LABEL_WIDTH), input]
        .spacing(12)
        .align_y(Alignment::Center)
        .into()
}

fn form(editor: &UserUpdateState) -> Element<'_, DomainMessage> {
    let usable = editor.is_usable();
    let store = &editor.store;

    let first_name = text_input("First name", store.first_name())
        .on_input_maybe(
            usable.then_some(|v| msg(UserUpdateMessage::FirstNameChanged(v))),
        )
        .padding(8);
    let last_name = text_input("Last name", store.last_name())
        .on_input_maybe(
            usable.then_some(|v| msg(UserUpdateMessage::LastNameChanged(v))),
        )
        .padding(8);
    let email = text_input("Email", store.email())
        .on_input_maybe(
            usable.then_some(|v| msg(UserUpdateMessage::EmailChanged(v))),
        )
        .padding(8);

    let selected_role = store.role().current();
    let roles = UserRole::ALL.iter().fold(row![].spacing(24), |row, role| {
        row.push(radio(role.label(), *role, selected_role, |picked| {
            msg(UserUpdateMessage::RoleSelected(picked))
        }))
    });

    let language = pick_list(editor.languages.as_slice(), store.language(), |code| {
        msg(UserUpdateMessage::LanguageSelected(code))
    })
    .placeholder("Select a language");

    let avatar = column![
        row![
            text_input("Path to an image file", &editor.avatar_input.path)
                .on_input_maybe(usable.then_some(|v| {
                    msg(UserUpdateMessage::AvatarPathChanged(v))
                }))
                .on_submit(msg(UserUpdateMessage::AttachAvatar))
                .padding(8),
            button("Attach")
                .style(button::secondary)
                .on_press_maybe(
                    (usable && !editor.avatar_input.reading())
                        .then(|| msg(UserUpdateMessage::AttachAvatar)),
                ),
        ]
        .spacing(8),
        text(avatar_summary(editor)).size(12).style(text::secondary),
    ]
    .spacing(4);

    let actions = row![
        horizontal_space(),
        button("Cancel")
            .style(button::secondary)
            .padding([8, 16])
            .on_press_maybe(usable.then(|| msg(UserUpdateMessage::Cancel))),
        button(if editor.submitting() { "Saving..." } else { "Save" })
            .style(button::primary)
            .padding([8, 16])
            .on_press_maybe(
                editor.can_submit().then(|| msg(UserUpdateMessage::Submit)),
            ),
    ]
    .spacing(12);

    let mut content = column![
        labeled("First name", first_name),
        labeled("Last name", last_name),
        labeled("Email", email),
        labeled("Avatar", avatar),
        labeled("User type", roles),
        labeled("App language", language),
    ]
    .spacing(14);

    if let Some(snapshot) = &editor.snapshot {
        content = content.push(Space::with_height(8.0)).push(metadata(snapshot));
    }

    column![
        container(content.padding(16))
            .style(container::rounded_box)
            .width(Length::Fill),
        actions,
    ]
    .spacing(16)
    .into()
}

fn avatar_summary(editor: &UserUpdateState) -> String {
    if editor.avatar_input.reading() {
        return "Reading file...".to_string();
    }
    match editor.store.avatar() {
        Some(avatar) => format!(
            "Staged {} ({}, {} bytes)",
            avatar.file_name(),
            avatar.media_type(),
            avatar.len()
        ),
        None => match editor.snapshot.as_ref().and_then(|s| s.image.as_deref()) {
            Some(current) => format!("Current image: {current}"),
            None => "No image. Drop a file on the window or enter a path."
                .to_string(),
        },
    }
}

fn metadata(snapshot: &UserSnapshot) -> Element<'_, DomainMessage> {
    let line = |label: &'static str, value: String| {
        row![
            text(label).size(12).width(LABEL_WIDTH).style(text::secondary),
            text(value).size(12),
        ]
        .spacing(12)
    };

    column![
        line(
            "Created",
            snapshot.created_at.format("%Y-%m-%d %H:%M UTC").to_string(),
        ),
        line(
            "Account type",
            snapshot.user_type.clone().unwrap_or_else(|| "-".into()),
        ),
        line(
            "Organizations",
            snapshot.joined_organizations.len().to_string(),
        ),
        line("Admin approved", snapshot.admin_approved.to_string()),
    ]
    .spacing(4)
    .into()
}
