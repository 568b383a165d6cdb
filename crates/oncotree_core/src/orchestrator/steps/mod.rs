//! Pipeline step implementations.
//!
//! Each step handles one phase of the bootstrap.

mod activate;
mod convert;
mod directories;
mod install;
mod interpreter;
mod platform;
mod venv;

pub use activate::ActivateStep;
pub use convert::ConvertStep;
pub use directories::{DirTarget, EnsureDirStep};
pub use install::InstallStep;
pub use interpreter::InterpreterStep;
pub use platform::PlatformCheckStep;
pub use venv::CreateVenvStep;
