use iced::widget::{Container, Row, Space, Text};
use iced::{Color, Element, Font, Length};

use crate::client::models::messages::Message;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// One entry of the transient alert bar shown above the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogMessage {
    pub level: LogLevel,
    pub message: String,
}

impl LogMessage {
    pub fn emoji(&self) -> &'static str {
        match self.level {
            LogLevel::Info => "ℹ️",
            LogLevel::Success => "✅",
            LogLevel::Warning => "⚠️",
            LogLevel::Error => "❌",
        }
    }

    pub fn color(&self) -> Color {
        match self.level {
            LogLevel::Info => Color::from_rgb(0.2, 0.5, 0.9),
            LogLevel::Success => Color::from_rgb(0.1, 0.7, 0.4),
            LogLevel::Warning => Color::from_rgb(0.9, 0.6, 0.1),
            LogLevel::Error => Color::from_rgb(0.85, 0.2, 0.2),
        }
    }
}

/// Render the newest log entry as a colored bar; an empty log takes no space.
pub fn logger_view(messages: &[LogMessage]) -> Element<'_, Message> {
    let Some(log) = messages.last() else {
        return Space::new(Length::Fill, Length::Fixed(0.0)).into();
    };
    let bg = log.color();
    Container::new(
        Row::new()
            .spacing(10)
            .push(
                Text::new(log.emoji())
                    .font(Font::with_name("Segoe UI Emoji"))
                    .size(18)
                    .style(Color::WHITE),
            )
            .push(Text::new(&log.message).size(16).style(Color::WHITE)),
    )
    .padding([10, 14])
    .width(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(
        move |_: &iced::Theme| iced::widget::container::Appearance {
            background: Some(iced::Background::Color(bg)),
            text_color: Some(Color::WHITE),
            border: iced::Border {
                radius: 6.0.into(),
                ..Default::default()
            },
            ..Default::default()
        },
    )))
    .into()
}
