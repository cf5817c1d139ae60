pub mod question;
pub mod session;
pub mod toc;

pub use question::{QuestionBank, QuestionRecord};
pub use session::{AttemptState, ChoiceReview, MissedReview, Points, QuizSession, SessionReport};
pub use toc::{Toc, TocPart};
