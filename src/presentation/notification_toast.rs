use iced::widget::{button, column, container, row, text};
use iced::{Alignment, Element, Length};

use crate::core::models::Notification;
use crate::presentation::app_theme;

pub fn render_toast<'a, Message>(
    notification: &'a Notification,
    on_dismiss: Message,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    let kind = notification.kind;

    let body = column![
        text(&notification.title).size(16),
        text(&notification.description).size(13),
    ]
    .spacing(4)
    .width(Length::Fill);

    let dismiss_btn = button(text("✖").size(14))
        .padding([4, 8])
        .style(app_theme::dismiss_button_style)
        .on_press(on_dismiss);

    let toast = container(
        row![body, dismiss_btn]
            .spacing(12)
            .align_y(Alignment::Center),
    )
    .padding(12)
    .max_width(420.0)
    .style(move |_theme| app_theme::toast_style(kind));

    container(toast)
        .width(Length::Fill)
        .align_x(Alignment::Center)
        .into()
}
