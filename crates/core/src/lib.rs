#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod navigator;
pub mod quiz;

pub use error::Error;
pub use navigator::{CardFace, CardNavigator, CardView, NavigatorError};
pub use quiz::{QuizEngine, QuizError};
