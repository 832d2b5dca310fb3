pub mod exercise;
pub mod literal;
pub mod signature;

pub use exercise::{
    EntryClass, ExerciseItem, ExerciseKind, ItemId, TestCase, load_exercises, parse_exercises,
};
pub use literal::Literal;
pub use signature::{MethodSignature, Param, ReturnKind, parse_signature};
