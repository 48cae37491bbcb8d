use iced::widget::{button, container};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

use crate::core::models::{NotificationKind, ThemeMode};

const SUCCESS_GREEN: Color = Color::from_rgb(0.098, 0.529, 0.329);
const SUCCESS_GREEN_BORDER: Color = Color::from_rgb(0.122, 0.655, 0.408);
const FAILURE_RED: Color = Color::from_rgb(0.780, 0.196, 0.196);
const FAILURE_RED_BORDER: Color = Color::from_rgb(0.902, 0.298, 0.298);

pub fn get_theme(mode: &ThemeMode) -> Theme {
    match mode {
        ThemeMode::Dark => Theme::custom(
            "Dark".to_string(),
            iced::theme::Palette {
                background: Color::from_rgb(0.0, 0.0, 0.0),
                text: Color::from_rgb(1.0, 1.0, 1.0),
                primary: Color::from_rgb(0.4, 0.6, 1.0),
                success: Color::from_rgb(0.2, 0.9, 0.4),
                danger: Color::from_rgb(1.0, 0.3, 0.3),
                warning: Color::from_rgb(1.0, 0.7, 0.0),
            },
        ),
        ThemeMode::Light => Theme::custom(
            "Light".to_string(),
            iced::theme::Palette {
                background: Color::from_rgb(0.95, 0.95, 0.97),
                text: Color::from_rgb(0.1, 0.1, 0.1),
                primary: Color::from_rgb(0.2, 0.4, 0.9),
                success: Color::from_rgb(0.1, 0.7, 0.3),
                danger: Color::from_rgb(0.9, 0.2, 0.2),
                warning: Color::from_rgb(0.9, 0.6, 0.0),
            },
        ),
    }
}

pub fn card_style(mode: &ThemeMode) -> container::Style {
    let (background, border) = match mode {
        ThemeMode::Dark => (Color::from_rgb(0.09, 0.09, 0.11), Color::from_rgb(0.2, 0.2, 0.24)),
        ThemeMode::Light => (Color::WHITE, Color::from_rgb(0.85, 0.85, 0.88)),
    };

    container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            color: border,
            width: 1.0,
            radius: 24.0.into(),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.3),
            offset: Vector::new(0.0, 4.0),
            blur_radius: 16.0,
        },
        ..Default::default()
    }
}

pub fn toast_style(kind: NotificationKind) -> container::Style {
    let (background, border) = match kind {
        NotificationKind::Success => (SUCCESS_GREEN, SUCCESS_GREEN_BORDER),
        NotificationKind::Failure => (FAILURE_RED, FAILURE_RED_BORDER),
    };

    container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(Color::WHITE),
        border: Border {
            color: border,
            width: 1.0,
            radius: 6.0.into(),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.5),
            offset: Vector::new(0.0, 4.0),
            blur_radius: 8.0,
        },
        ..Default::default()
    }
}

pub fn dismiss_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => Color::WHITE,
        button::Status::Active | button::Status::Disabled => Color::from_rgba(1.0, 1.0, 1.0, 0.7),
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: Shadow::default(),
        snap: false,
    }
}

pub fn hint_text_color() -> Color {
    Color::from_rgba(0.45, 0.45, 0.45, 1.0)
}
