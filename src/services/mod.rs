pub mod classify;
pub mod markup;
pub mod question_extractor;
pub mod toc_parser;

pub use question_extractor::{Extraction, ParseWarning, QuestionExtractor};
pub use toc_parser::TocParser;
