use std::fmt::Display;

#[derive(Debug, PartialEq, Clone)]
pub enum TrieErr {
    /// Input bytes that are not a valid UTF-8 character sequence.
    InvalidInput(String),
}

impl std::error::Error for TrieErr {}

impl Display for TrieErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(format!("{:?}", self).as_str())
    }
}

impl From<std::str::Utf8Error> for TrieErr {
    fn from(err: std::str::Utf8Error) -> Self {
        TrieErr::InvalidInput(err.to_string())
    }
}

impl From<std::string::FromUtf8Error> for TrieErr {
    fn from(err: std::string::FromUtf8Error) -> Self {
        TrieErr::InvalidInput(err.utf8_error().to_string())
    }
}

impl Into<String> for TrieErr {
    fn into(self) -> String {
        std::fmt::format(format_args!("{:?}", self))
    }
}
