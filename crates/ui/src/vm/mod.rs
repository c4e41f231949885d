mod card_vm;
mod quiz_vm;

pub use card_vm::{CardIntent, CardVm};
pub use quiz_vm::{ChoiceVm, QuizIntent, QuizVm};
