mod cli_input;
mod operation;
mod pipeline_ops;
mod scootstat_app;

pub use cli_input::{parse_operator_input, OperatorInput};
pub use operation::ScootstatOperation;
pub use scootstat_app::ScootstatApp;
