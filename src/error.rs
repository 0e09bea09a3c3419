use thiserror::Error;

/// Parse failure for one line of the caption script. Carries the line number
/// and the raw line so the user can locate and fix it.
#[derive(Debug, Error)]
#[error("line {line}: {kind}: `{text}`")]
pub struct ScriptError {
    pub line: usize,
    pub text: String,
    pub kind: LineError,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LineError {
    #[error("the message must come first and be single or double quoted")]
    MissingOrUnmatchedQuote,
    #[error("unexpected characters before the quoted message")]
    UnexpectedPrefix,
    #[error("expected a colon after the end of the message")]
    MissingFieldSeparator,
    #[error("expected exactly 3 colon separated fields after the message")]
    WrongFieldCount,
    #[error("the size must be a positive integer")]
    InvalidSize,
    #[error("the position must be either TOP or BOTTOM")]
    InvalidPosition,
    #[error("the time range must be two integers separated by a dash, like 5-10")]
    InvalidTimeRange,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    #[error("the command file contains no captions")]
    EmptyCaptionList,
}
