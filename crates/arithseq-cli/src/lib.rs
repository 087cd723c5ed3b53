//! # arithseq-cli
//!
//! CLI output, sequence presentation, text export, and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;
pub mod ui;

pub use presenter::{CLIResultPresenter, JsonResultPresenter, ResultPresenter};
