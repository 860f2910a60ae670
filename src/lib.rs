//! Turns a command-line interface definition into a portable usage spec.
//!
//! The host tree (anything implementing [`HostCommand`], `clap::Command`
//! included) is converted once into a canonical [`Spec`], which can then be
//! rendered as a KDL document or as JSON.
//!
//! ```
//! use clap::{Arg, ArgAction, Command};
//!
//! let cmd = Command::new("mycli")
//!     .about("A simple CLI")
//!     .version("1.0.0")
//!     .arg(Arg::new("verbose").short('v').long("verbose").action(ArgAction::SetTrue));
//!
//! let kdl = usage_gen::generate(&cmd);
//! assert!(kdl.contains("name mycli\n"));
//! assert!(kdl.contains("version \"1.0.0\"\n"));
//! ```

mod ast;
mod convert;
mod json;
mod kdl;
mod options;
mod parse;

pub mod host;

use std::{fs, path::Path};

pub use crate::{
    ast::{Arg, Choices, Command, Flag, Spec, ValueKind},
    host::{HostCommand, HostFlag, PositionalInfo},
    options::{Builtins, Options},
};

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Converts and renders with a fixed set of [`Options`].
#[derive(Debug, Clone, Default)]
pub struct Generator {
    options: Options,
}

impl Generator {
    pub fn new(options: Options) -> Generator {
        Generator { options }
    }

    pub fn spec<C: HostCommand>(&self, cmd: &C) -> Spec {
        convert::spec(cmd, &self.options)
    }

    pub fn kdl<C: HostCommand>(&self, cmd: &C) -> String {
        kdl::render(&self.spec(cmd))
    }

    pub fn json<C: HostCommand>(&self, cmd: &C) -> Result<String> {
        json::render(&self.spec(cmd))
    }

    pub fn write_kdl<C: HostCommand>(&self, cmd: &C, path: &Path) -> Result<()> {
        write(path, self.kdl(cmd))
    }

    pub fn write_json<C: HostCommand>(&self, cmd: &C, path: &Path) -> Result<()> {
        write(path, self.json(cmd)?)
    }
}

/// The usage spec of `cmd` as a KDL document.
pub fn generate<C: HostCommand>(cmd: &C) -> String {
    Generator::default().kdl(cmd)
}

/// The usage spec of `cmd` as pretty-printed JSON.
pub fn generate_json<C: HostCommand>(cmd: &C) -> Result<String> {
    Generator::default().json(cmd)
}

pub fn generate_to_file<C: HostCommand>(cmd: &C, path: impl AsRef<Path>) -> Result<()> {
    Generator::default().write_kdl(cmd, path.as_ref())
}

pub fn generate_json_to_file<C: HostCommand>(cmd: &C, path: impl AsRef<Path>) -> Result<()> {
    Generator::default().write_json(cmd, path.as_ref())
}

impl Spec {
    pub fn to_kdl(&self) -> String {
        kdl::render(self)
    }

    pub fn to_json(&self) -> Result<String> {
        json::render(self)
    }
}

fn write(path: &Path, contents: String) -> Result<()> {
    tracing::debug!(path = %path.display(), bytes = contents.len(), "writing usage spec");
    fs::write(path, contents)?;
    Ok(())
}
