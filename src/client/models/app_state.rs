use std::path::Path;
use std::sync::Arc;

use iced::Command;
use log::warn;

use crate::client::gui::views::logger::{LogLevel, LogMessage};
use crate::client::models::messages::Message;
use crate::client::models::screen::Screen;
use crate::client::models::submission::{self, SubmissionInput};
use crate::client::services::classify_service::ClassifyService;

pub const EMPTY_FORM_ALERT: &str = "Please enter text or select a file.";

/// Everything the GUI needs to draw itself: the form fields, the submission
/// lifecycle and the transient log bar.
#[derive(Debug, Clone, Default)]
pub struct TriageAppState {
    pub email_text: String,
    pub file_path: String,
    pub screen: Screen,
    pub logger: Vec<LogMessage>,
    /// Wall-clock time of the last completed submission, for the panel footer.
    pub finished_at: Option<String>,
}

fn clear_log_later() -> Command<Message> {
    Command::perform(
        async move {
            tokio::time::sleep(tokio::time::Duration::from_secs(2)).await;
            Message::ClearLog
        },
        |msg| msg,
    )
}

fn file_name_of(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string())
}

impl TriageAppState {
    pub fn update(
        &mut self,
        message: Message,
        classify_service: &Arc<ClassifyService>,
    ) -> Command<Message> {
        match message {
            Message::EmailTextChanged(text) => {
                self.email_text = text;
            }
            Message::FilePathChanged(path) => {
                self.file_path = path;
            }
            Message::SubmitRequested => {
                let text = self.email_text.clone();
                let path = self.file_path.trim().to_string();

                // Nothing to send: alert and stay put, no request goes out.
                if text.is_empty() && path.is_empty() {
                    self.logger.push(LogMessage {
                        level: LogLevel::Warning,
                        message: EMPTY_FORM_ALERT.to_string(),
                    });
                    return clear_log_later();
                }

                self.screen = Screen::Processing;
                let svc = classify_service.clone();

                if path.is_empty() {
                    return Command::perform(
                        async move {
                            Message::ClassifyFinished(
                                svc.classify(SubmissionInput::Text(text)).await,
                            )
                        },
                        |msg| msg,
                    );
                }

                // A file is selected: it takes precedence and the text is dropped.
                if !submission::has_supported_extension(&path) {
                    warn!("'{}' is not a .txt or .pdf file; the server may reject it", path);
                }
                return Command::perform(
                    async move {
                        match tokio::fs::read(&path).await {
                            Ok(bytes) => {
                                let name = file_name_of(&path);
                                Message::ClassifyFinished(
                                    svc.classify(SubmissionInput::File { name, bytes }).await,
                                )
                            }
                            Err(e) => Message::FileUnreadable {
                                path,
                                error: e.to_string(),
                            },
                        }
                    },
                    |msg| msg,
                );
            }
            Message::FileUnreadable { path, error } => {
                self.screen = Screen::Idle;
                self.logger.push(LogMessage {
                    level: LogLevel::Error,
                    message: format!("Could not read '{}': {}", path, error),
                });
                return clear_log_later();
            }
            Message::ClassifyFinished(result) => {
                self.finished_at = Some(chrono::Local::now().format("%H:%M").to_string());
                let log = match &result {
                    Ok(_) => LogMessage {
                        level: LogLevel::Success,
                        message: "Classification received".to_string(),
                    },
                    Err(e) => LogMessage {
                        level: LogLevel::Error,
                        message: e.to_string(),
                    },
                };
                self.screen = match result {
                    Ok(classification) => Screen::Success(classification),
                    Err(e) => Screen::Failure(e),
                };
                self.logger.push(log);
                return clear_log_later();
            }
            Message::ClearLog => {
                self.logger.clear();
            }
        }
        Command::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::config::ClientConfig;
    use crate::client::services::classify_service::ClassifyError;
    use crate::common::protocol::Classification;

    fn service() -> Arc<ClassifyService> {
        Arc::new(ClassifyService::new(&ClientConfig::default()).unwrap())
    }

    #[test]
    fn empty_submit_alerts_and_stays_idle() {
        let mut state = TriageAppState::default();
        let _ = state.update(Message::SubmitRequested, &service());
        assert_eq!(state.screen, Screen::Idle);
        assert_eq!(state.logger.len(), 1);
        assert_eq!(state.logger[0].message, EMPTY_FORM_ALERT);
    }

    #[test]
    fn text_submit_enters_processing_before_any_response() {
        let mut state = TriageAppState {
            email_text: "um email qualquer".to_string(),
            ..TriageAppState::default()
        };
        let _ = state.update(Message::SubmitRequested, &service());
        assert!(state.screen.is_processing());
        let panel = state.screen.panel().unwrap();
        assert_eq!(panel.categoria, "Processing...");
    }

    #[test]
    fn unreadable_file_aborts_back_to_idle() {
        let mut state = TriageAppState {
            screen: Screen::Processing,
            ..TriageAppState::default()
        };
        let _ = state.update(
            Message::FileUnreadable {
                path: "missing.txt".to_string(),
                error: "No such file".to_string(),
            },
            &service(),
        );
        assert_eq!(state.screen, Screen::Idle);
        assert!(state.logger[0].message.contains("missing.txt"));
    }

    #[test]
    fn finished_ok_lands_in_success_with_timestamp() {
        let mut state = TriageAppState::default();
        let result = Classification {
            categoria_principal: "Produtivo".to_string(),
            sub_categoria: "Suporte".to_string(),
            resposta_sugerida: "Ok".to_string(),
        };
        let _ = state.update(Message::ClassifyFinished(Ok(result.clone())), &service());
        assert_eq!(state.screen, Screen::Success(result));
        assert!(state.finished_at.is_some());
    }

    #[test]
    fn finished_err_lands_in_failure() {
        let mut state = TriageAppState::default();
        let _ = state.update(
            Message::ClassifyFinished(Err(ClassifyError::Connection("Failed to fetch".into()))),
            &service(),
        );
        let panel = state.screen.panel().unwrap();
        assert_eq!(panel.categoria, "Connection error");
        assert_eq!(panel.sub_categoria, "Failed to fetch");
    }

    #[test]
    fn clear_log_empties_the_bar() {
        let mut state = TriageAppState::default();
        state.logger.push(LogMessage {
            level: LogLevel::Info,
            message: "x".to_string(),
        });
        let _ = state.update(Message::ClearLog, &service());
        assert!(state.logger.is_empty());
    }
}
