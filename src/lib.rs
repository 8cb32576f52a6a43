//! Outing Guide
//!
//! Browse character outing preferences in the terminal. The library side of
//! the binary holds the headless mode; the interactive UI lives in
//! `outing-tui`.

pub mod headless;

pub use headless::{run_headless, HeadlessEvent, OutputFormat, Query};
