//! Web UI for the resume dashboard
//!
//! Server-rendered pages for the four sections, evaluation detail and CSV
//! export. Every page is produced from a dashboard [`Screen`](crate::dashboard::Screen),
//! so the browser and the CLI share one code path.

mod handlers;
mod pages;
mod server;
mod state;

pub use server::start_server;
