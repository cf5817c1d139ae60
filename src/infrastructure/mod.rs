pub mod book_reader;

pub use book_reader::{BookDocument, BookReader};
