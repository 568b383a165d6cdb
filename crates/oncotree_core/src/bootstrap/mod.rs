//! Environment bootstrap for the Python converter.
//!
//! Prepares an isolated Python virtual environment and launches the
//! converter inside it:
//! 1. Check the host platform
//! 2. Discover a Python interpreter on the search path
//! 3. Ensure the output and virtualenv parent directories exist
//! 4. Create the virtual environment if it is missing
//! 5. Activate it (scoped, never touches the global environment)
//! 6. Install dependencies from the manifest
//! 7. Run the converter
//!
//! The ambient environment is captured once in [`HostEnv`] and passed in,
//! so every step can run against a synthetic home and search path.

mod activation;
mod command;
mod error;
mod host;
mod install;
mod interpreter;
mod layout;
mod platform;
mod venv;

pub use activation::ActivatedEnv;
pub use command::{exit_code_from_status, ConverterCommand};
pub use error::{BootstrapError, BootstrapResult};
pub use host::HostEnv;
pub use install::{install_dependencies, read_tail};
pub use interpreter::discover_interpreter;
pub use layout::BootstrapPaths;
pub use platform::Platform;
pub use venv::{create_venv, ensure_dir, venv_ready};
