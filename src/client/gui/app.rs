use std::sync::Arc;

use iced::{Application, Command, Element, Theme};
use log::error;

use crate::client::config::ClientConfig;
use crate::client::gui::views::submit;
use crate::client::models::app_state::TriageAppState;
use crate::client::models::messages::Message;
use crate::client::services::classify_service::ClassifyService;

pub struct TriageApp {
    pub state: TriageAppState,
    pub classify_service: Arc<ClassifyService>,
}

impl Application for TriageApp {
    type Message = Message;
    type Theme = Theme;
    type Executor = iced::executor::Default;
    type Flags = ();

    fn new(_flags: ()) -> (Self, Command<Message>) {
        let config = ClientConfig::from_env();
        let classify_service = ClassifyService::new(&config).unwrap_or_else(|e| {
            error!("invalid TRIAGEM_SERVER_URL ({}), falling back to the default", e);
            ClassifyService::new(&ClientConfig::default())
                .expect("default server url is well-formed")
        });
        let app = TriageApp {
            state: TriageAppState::default(),
            classify_service: Arc::new(classify_service),
        };
        (app, Command::none())
    }

    fn title(&self) -> String {
        "Triagem".to_string()
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        self.state.update(message, &self.classify_service)
    }

    fn view(&self) -> Element<'_, Message> {
        submit::view(&self.state)
    }
}
