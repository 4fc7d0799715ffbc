pub mod perception;
pub mod pipeline;
pub mod publish;
