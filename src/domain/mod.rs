mod flashcard;
mod package;
mod quiz;

pub use flashcard::Flashcard;
pub use package::StudyPackage;
pub use quiz::QuizQuestion;
