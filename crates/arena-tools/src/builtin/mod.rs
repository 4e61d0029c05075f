//! Built-in tools for common operations

pub mod calculator;
pub mod data_analysis;
pub mod echo;
pub mod filesystem;
pub mod search;
pub mod time;
pub mod web;

pub use calculator::CalculatorTool;
pub use data_analysis::DataAnalysisTool;
pub use echo::create_echo_tool;
pub use filesystem::FileSystemTool;
pub use search::SearchTool;
pub use time::TimeTool;
pub use web::WebTool;
