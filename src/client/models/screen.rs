use crate::client::services::classify_service::ClassifyError;
use crate::common::protocol::Classification;

pub const PROCESSING_PLACEHOLDER: &str = "Processing...";
pub const NEUTRAL_PLACEHOLDER: &str = "...";
pub const BACKEND_ERROR_LABEL: &str = "Error";
pub const CONNECTION_ERROR_LABEL: &str = "Connection error";

/// Lifecycle of one submission. Entered at Processing the moment validation
/// passes, before any network latency is observable; a terminal state sticks
/// until the next submit.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Idle,
    Processing,
    Success(Classification),
    Failure(ClassifyError),
}

/// The three lines of the results panel, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelText {
    pub categoria: String,
    pub sub_categoria: String,
    pub resposta: String,
}

impl Screen {
    pub fn is_processing(&self) -> bool {
        matches!(self, Screen::Processing)
    }

    /// Render the panel for this state. `None` means the panel is hidden.
    pub fn panel(&self) -> Option<PanelText> {
        match self {
            Screen::Idle => None,
            Screen::Processing => Some(PanelText {
                categoria: PROCESSING_PLACEHOLDER.to_string(),
                sub_categoria: NEUTRAL_PLACEHOLDER.to_string(),
                resposta: NEUTRAL_PLACEHOLDER.to_string(),
            }),
            Screen::Success(result) => Some(PanelText {
                categoria: result.categoria_principal.clone(),
                sub_categoria: result.sub_categoria.clone(),
                resposta: result.resposta_sugerida.clone(),
            }),
            Screen::Failure(ClassifyError::Backend(message)) => Some(PanelText {
                categoria: BACKEND_ERROR_LABEL.to_string(),
                sub_categoria: message.clone(),
                resposta: String::new(),
            }),
            Screen::Failure(ClassifyError::Connection(message)) => Some(PanelText {
                categoria: CONNECTION_ERROR_LABEL.to_string(),
                sub_categoria: message.clone(),
                resposta: String::new(),
            }),
        }
    }
}
