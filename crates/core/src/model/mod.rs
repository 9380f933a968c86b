mod course;
mod session;

pub use course::{Course, QaEntry, QuizQuestion};
pub use session::{Session, SessionEvent};
