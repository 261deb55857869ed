//! Notice overlay, rendered in the top-right corner above the form.

use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Border, Color, Element, Length, Padding, Shadow, Vector};

use super::FeedbackMessage;
use crate::common::messages::DomainMessage;
use crate::infra::services::{NoticeLevel, PostedNotice};
use crate::state::State;

pub fn view_notice_overlay(state: &State) -> Element<'_, DomainMessage> {
    let posted = state.notice_board.posted();
    if posted.is_empty() {
        return Space::new(Length::Shrink, Length::Shrink).into();
    }

    let notices: Vec<Element<'_, DomainMessage>> =
        posted.into_iter().map(view_single_notice).collect();

    container(column(notices).spacing(8).width(Length::Shrink))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(Padding {
            top: 20.0,
            right: 20.0,
            bottom: 20.0,
            left: 20.0,
        })
        .align_x(Alignment::End)
        .align_y(Alignment::Start)
        .into()
}

fn view_single_notice<'a>(posted: PostedNotice) -> Element<'a, DomainMessage> {
    let (background, accent) = match posted.notice.level {
        NoticeLevel::Info => (
            Color::from_rgb(0.12, 0.14, 0.18),
            Color::from_rgb(0.35, 0.6, 0.95),
        ),
        NoticeLevel::Success => (
            Color::from_rgb(0.1, 0.3, 0.1),
            Color::from_rgb(0.3, 0.8, 0.4),
        ),
        NoticeLevel::Error => (
            Color::from_rgb(0.3, 0.1, 0.1),
            Color::from_rgb(0.9, 0.3, 0.3),
        ),
    };

    let dismiss = button(text("x").size(12))
        .padding(4)
        .style(|_theme, _status| button::Style {
            background: None,
            text_color: Color::from_rgb(0.7, 0.7, 0.7),
            ..Default::default()
        })
        .on_press(FeedbackMessage::Dismiss(posted.id).into());

    let content = row![
        text(posted.notice.message).size(13).color(Color::WHITE),
        Space::with_width(12.0),
        dismiss,
    ]
    .align_y(Alignment::Center);

    container(content)
        .padding([10, 14])
        .style(move |_| container::Style {
            background: Some(iced::Background::Color(background)),
            border: Border {
                color: accent,
                width: 1.0,
                radius: 6.0.into(),
            },
            shadow: Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.3),
                offset: Vector::new(0.0, 2.0),
                blur_radius: 8.0,
            },
            ..Default::default()
        })
        .into()
}
