mod args;
mod config;
mod output;

pub use args::{Args, Command, InitArgs, UiArgs, UploadTarget};
pub use config::{DashboardConfig, ServiceSettings, UploadLimits};
pub use output::print_screen;
