pub mod cell;
pub mod convert;
pub mod graph;
pub mod op;
pub mod parameter;
