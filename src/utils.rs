//! Helpers not tied to the growth analysis itself.

pub mod presentable_numbers;
