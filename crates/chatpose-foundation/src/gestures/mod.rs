pub mod classifier;

pub use classifier::{
    ClassificationEvent, GestureClassifier, GestureIntent, GestureSession, SwipeKind,
};

#[cfg(test)]
#[path = "../tests/classifier_tests.rs"]
mod tests;
