pub mod command_set;
mod error;
pub mod parameter;
pub mod pattern;
pub mod pattern_lexer;
pub mod pattern_match;

pub use command_set::{CommandSet, Dispatch};
pub use error::*;
pub use parameter::{Datatype, Parameter};
pub use pattern::{Pattern, compile};
pub use pattern_lexer::{Token, TokenKind, normalize, tokenize};
pub use pattern_match::Match;
