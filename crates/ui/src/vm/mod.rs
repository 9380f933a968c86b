mod qa_vm;
mod quiz_vm;

pub use qa_vm::{QaItemVm, map_qa_items};
pub use quiz_vm::{QuizRowVm, ScoreVm, map_quiz_rows, map_score};
