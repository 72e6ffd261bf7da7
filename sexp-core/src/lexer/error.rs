use crate::utils::prelude::SrcSpan;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexicalErrorType {
    UnrecognizedCharacter { ch: char },
    UnterminatedString,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexicalError {
    pub error: LexicalErrorType,
    pub location: SrcSpan
}

impl LexicalError {
    pub fn details(&self) -> (&'static str, Vec<String>) {
        match self.error {
            LexicalErrorType::UnrecognizedCharacter { ch } => {
                ("Unrecognized character", vec![format!("`{ch}` is not part of the language")])
            },
            LexicalErrorType::UnterminatedString => {
                ("Unterminated string literal", vec!["Expected a closing `\"` before the end of input".to_string()])
            }
        }
    }
}
