//! Native OncoTree to FHIR conversion.
//!
//! Mirrors the command line of the Python converter that the bootstrap
//! invokes: list releases, convert one release, or convert them all.

mod args;
mod error;
mod json;
mod paths;
mod runner;
mod tree;

pub use args::{Action, ConvertArgs, DEFAULT_VERSION};
pub use error::{ConvertError, ConvertResult};
pub use paths::{expand_output_path, OutputPath, VERSION_PLACEHOLDER};
pub use runner::{write_code_system, ConversionOutput, Converter};
pub use tree::{render_tree, render_version_tree, TreeNode, WRAP_WIDTH};
