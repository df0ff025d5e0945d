pub mod formatting;
pub mod stack_frame;
