/// What gets sent to the server: exactly one of a pasted text or an uploaded
/// file. When both are filled in, the file wins and the text is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionInput {
    Text(String),
    File { name: String, bytes: Vec<u8> },
}

impl SubmissionInput {
    /// Build the input from the current form values. Returns `None` when there
    /// is nothing to submit (empty text and no file), in which case no request
    /// may be issued.
    pub fn from_form(text: &str, file: Option<(String, Vec<u8>)>) -> Option<Self> {
        if let Some((name, bytes)) = file {
            return Some(SubmissionInput::File { name, bytes });
        }
        if text.is_empty() {
            return None;
        }
        Some(SubmissionInput::Text(text.to_string()))
    }

    /// Multipart field name this input travels under.
    pub fn field_name(&self) -> &'static str {
        match self {
            SubmissionInput::Text(_) => "email_texto",
            SubmissionInput::File { .. } => "file",
        }
    }
}

/// The server only extracts text from `.txt` and `.pdf` uploads; anything else
/// comes back as a 400.
pub fn has_supported_extension(name: &str) -> bool {
    let lower = name.to_lowercase();
    lower.ends_with(".txt") || lower.ends_with(".pdf")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file() -> Option<(String, Vec<u8>)> {
        Some(("email.txt".to_string(), b"hello".to_vec()))
    }

    #[test]
    fn empty_form_yields_nothing() {
        assert_eq!(SubmissionInput::from_form("", None), None);
    }

    #[test]
    fn text_only_travels_as_email_texto() {
        let input = SubmissionInput::from_form("ola", None).unwrap();
        assert_eq!(input, SubmissionInput::Text("ola".to_string()));
        assert_eq!(input.field_name(), "email_texto");
    }

    #[test]
    fn file_only_travels_as_file() {
        let input = SubmissionInput::from_form("", file()).unwrap();
        assert_eq!(input.field_name(), "file");
    }

    #[test]
    fn file_wins_when_both_are_set() {
        let input = SubmissionInput::from_form("ignored text", file()).unwrap();
        match input {
            SubmissionInput::File { name, .. } => assert_eq!(name, "email.txt"),
            other => panic!("expected file input, got {:?}", other),
        }
    }

    #[test]
    fn whitespace_text_still_counts_as_input() {
        // Matches the form check: only the empty string is "no text".
        assert!(SubmissionInput::from_form("   ", None).is_some());
    }

    #[test]
    fn extension_check() {
        assert!(has_supported_extension("mail.txt"));
        assert!(has_supported_extension("MAIL.PDF"));
        assert!(!has_supported_extension("mail.docx"));
        assert!(!has_supported_extension("mail"));
    }
}
