use iced::widget::{Column, Container, Row, Space, Text};
use iced::{Color, Element, Font, Length};

use crate::client::models::app_state::TriageAppState;
use crate::client::models::messages::Message;
use crate::client::models::screen::Screen;

const CARD_BG: Color = Color::from_rgb(0.13, 0.17, 0.23);
const LABEL_COLOR: Color = Color::from_rgb(0.55, 0.62, 0.70);
const VALUE_COLOR: Color = Color::WHITE;
const ACCENT_COLOR: Color = Color::from_rgb(0.15, 0.65, 0.45);

const BOLD_FONT: Font = Font {
    family: iced::font::Family::SansSerif,
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

fn card_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(CARD_BG)),
        text_color: Some(VALUE_COLOR),
        border: iced::Border {
            width: 0.0,
            color: Color::TRANSPARENT,
            radius: 12.0.into(),
        },
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 3.0),
            blur_radius: 10.0,
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.25),
        },
    }
}

fn field<'a>(label: &'a str, value: String) -> Element<'a, Message> {
    Column::new()
        .spacing(4)
        .push(Text::new(label).size(13).style(LABEL_COLOR))
        .push(Text::new(value).size(16).style(VALUE_COLOR))
        .into()
}

/// The results panel. Hidden while the screen is idle; otherwise it mirrors
/// `Screen::panel()` line for line.
pub fn view(state: &TriageAppState) -> Element<'_, Message> {
    let Some(panel) = state.screen.panel() else {
        return Space::new(Length::Fill, Length::Fixed(0.0)).into();
    };

    let mut content = Column::new()
        .spacing(16)
        .padding(24)
        .push(
            Row::new()
                .spacing(8)
                .push(Text::new("Result").font(BOLD_FONT).size(20).style(VALUE_COLOR)),
        )
        .push(field("Category", panel.categoria))
        .push(field("Subcategory", panel.sub_categoria))
        .push(field("Suggested reply", panel.resposta));

    // Completion time, only once a submission has finished.
    if !state.screen.is_processing() {
        if let Some(at) = &state.finished_at {
            content = content.push(
                Text::new(format!("Classified at {}", at))
                    .size(12)
                    .style(ACCENT_COLOR),
            );
        }
    }

    Container::new(content)
        .width(Length::Fixed(480.0))
        .style(iced::theme::Container::Custom(Box::new(card_appearance)))
        .into()
}
