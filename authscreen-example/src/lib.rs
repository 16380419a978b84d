pub mod accounts;
pub mod console;
pub mod script;

pub use script::{replay, ReplayReport, Script, ScriptError};
