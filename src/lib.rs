#![warn(clippy::all, rust_2018_idioms)]

mod app;
mod dialog;
mod severity;
mod style;
mod widgets;

pub use app::App;
pub use dialog::{CloseCallback, DialogExt, Modal};
pub use severity::Severity;
