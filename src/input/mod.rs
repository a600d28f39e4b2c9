//! Interactive input collection and validation.

mod collector;
mod validation;

pub use collector::InputCollector;
pub use validation::{
    MIN_ABSTRACT_TOKENS, MIN_TOPIC_LENGTH, Submission, abstract_token_count, is_valid_abstract,
    is_valid_name, is_valid_topic,
};
