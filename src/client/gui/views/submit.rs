use iced::widget::{Button, Column, Container, Space, Text, TextInput};
use iced::{Alignment, Color, Element, Font, Length};

use crate::client::gui::views::logger::logger_view;
use crate::client::gui::views::results;
use crate::client::models::app_state::TriageAppState;
use crate::client::models::messages::Message;

const BG_MAIN: Color = Color::from_rgb(0.07, 0.09, 0.12);
const CARD_BG: Color = Color::from_rgb(0.13, 0.17, 0.23);
const INPUT_BG: Color = Color::from_rgb(0.09, 0.12, 0.16);
const TEXT_PRIMARY: Color = Color::WHITE;
const TEXT_SECONDARY: Color = Color::from_rgb(0.55, 0.62, 0.70);

const BOLD_FONT: Font = Font {
    family: iced::font::Family::SansSerif,
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

fn bg_main_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(BG_MAIN)),
        text_color: Some(TEXT_PRIMARY),
        ..Default::default()
    }
}

fn card_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(CARD_BG)),
        text_color: Some(TEXT_PRIMARY),
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

fn input_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(INPUT_BG)),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            width: 1.0,
            color: Color::from_rgb(0.25, 0.30, 0.36),
            radius: 8.0.into(),
        },
        ..Default::default()
    }
}

fn labeled_input<'a>(
    label: &'a str,
    placeholder: &'a str,
    value: &'a str,
    on_input: fn(String) -> Message,
) -> Element<'a, Message> {
    Column::new()
        .spacing(6)
        .push(Text::new(label).size(14).style(TEXT_SECONDARY))
        .push(
            Container::new(
                TextInput::new(placeholder, value)
                    .on_input(on_input)
                    .on_submit(Message::SubmitRequested)
                    .width(Length::Fill)
                    .padding(12)
                    .size(14),
            )
            .style(iced::theme::Container::Custom(Box::new(input_appearance))),
        )
        .into()
}

pub fn view(state: &TriageAppState) -> Element<'_, Message> {
    let logger_bar = Container::new(logger_view(&state.logger))
        .width(Length::Fill)
        .padding([8, 12, 0, 12]);

    let title = Column::new()
        .spacing(4)
        .align_items(Alignment::Center)
        .push(Text::new("Triagem").size(36).font(BOLD_FONT).style(TEXT_PRIMARY))
        .push(Text::new("Email triage client").size(15).style(TEXT_SECONDARY));

    let text_field = labeled_input(
        "Email text",
        "Paste the email text here",
        &state.email_text,
        Message::EmailTextChanged,
    );

    let file_field = labeled_input(
        "Or a file to upload (.txt or .pdf)",
        "/path/to/email.txt",
        &state.file_path,
        Message::FilePathChanged,
    );

    let submit_label = if state.screen.is_processing() {
        "Processing..."
    } else {
        "Classify"
    };
    let submit_button = Button::new(
        Container::new(Text::new(submit_label).font(BOLD_FONT).size(16).style(TEXT_PRIMARY))
            .width(Length::Fill)
            .center_x(),
    )
    .on_press(Message::SubmitRequested)
    .style(iced::theme::Button::Primary)
    .width(Length::Fill)
    .padding(14);

    let form_card = Container::new(
        Column::new()
            .width(Length::Fixed(480.0))
            .spacing(18)
            .padding(28)
            .push(title)
            .push(Space::new(Length::Fill, Length::Fixed(4.0)))
            .push(text_field)
            .push(file_field)
            .push(submit_button),
    )
    .style(iced::theme::Container::Custom(Box::new(card_appearance)));

    let content = Column::new()
        .width(Length::Fill)
        .spacing(20)
        .align_items(Alignment::Center)
        .push(logger_bar)
        .push(form_card)
        .push(results::view(state))
        .push(Space::new(Length::Fill, Length::Fixed(12.0)));

    Container::new(iced::widget::scrollable(content))
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x()
        .style(iced::theme::Container::Custom(Box::new(bg_main_appearance)))
        .into()
}
