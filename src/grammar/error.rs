#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    #[error("empty pattern")]
    EmptyPattern,
    #[error("unbalanced delimiter in {0:?}")]
    UnbalancedDelimiter(String),
    #[error("empty parameter name in {0:?}")]
    EmptyParameterName(String),
    #[error("invalid parameter name {0:?}")]
    InvalidParameterName(String),
    #[error("unrecognized type {datatype:?} for parameter {name:?}")]
    UnrecognizedType { name: String, datatype: String },
    #[error("empty alternative in options {0:?}")]
    EmptyOption(String),
    #[error("duplicate parameter {0:?}")]
    DuplicateParameter(String),
    #[error("{0:?} is not a parameter")]
    NotAParameter(String),
    #[error("invalid expression: {0}")]
    Expression(#[from] regex::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatchError {
    #[error("unknown parameter \"{0}\"")]
    UnknownParameter(String),
    #[error("invalid integer for parameter \"{name}\": {value:?}")]
    InvalidInteger { name: String, value: String },
    #[error("no parameter at position {position} (pattern declares {count})")]
    PositionOutOfRange { position: usize, count: usize },
}
