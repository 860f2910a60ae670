//! Read-only view of the command tree owned by the host CLI framework.
//!
//! The converter only ever calls these accessors, once, while building the
//! canonical [`Spec`](crate::Spec). Implement them for whatever framework
//! holds the definition; [`clap::Command`] is supported out of the box.

mod clap;

pub use crate::ast::ValueKind;

pub trait HostCommand {
    type Flag: HostFlag;

    fn name(&self) -> String;
    /// Free-form usage line, command name first, e.g. `deploy <service> [flags]`.
    fn usage(&self) -> String;
    fn about(&self) -> Option<String>;
    fn long_about(&self) -> Option<String>;
    fn version(&self) -> Option<String>;
    fn is_hidden(&self) -> bool;
    fn deprecated(&self) -> Option<String>;
    fn aliases(&self) -> Vec<String>;
    fn hidden_aliases(&self) -> Vec<String> {
        Vec::new()
    }
    /// Does the command do something on its own, without a subcommand?
    fn is_runnable(&self) -> bool {
        false
    }
    /// Closed set of values accepted by the first positional argument.
    fn valid_args(&self) -> Vec<String> {
        Vec::new()
    }
    /// Positional arguments, in order.
    ///
    /// Parsed from [`usage`](HostCommand::usage) by default. Hosts that know
    /// their positionals structurally should return them directly, so that
    /// an arg named like a placeholder (`[command]`) is not lost.
    fn args(&self) -> Vec<crate::Arg> {
        crate::parse::args(&self.usage())
    }
    /// Extra metadata for the positional called `name` in the usage line.
    fn positional(&self, _name: &str) -> Option<PositionalInfo> {
        None
    }
    /// Child commands, in declaration order.
    fn subcommands(&self) -> Vec<&Self>;
    /// Flags inherited by (or propagated to) subcommands.
    fn inherited_flags(&self) -> Vec<&Self::Flag>;
    fn local_flags(&self) -> Vec<&Self::Flag>;
}

pub trait HostFlag {
    /// Identity of the flag, used to match builtins and duplicates.
    fn name(&self) -> String;
    fn short(&self) -> Option<char>;
    fn long(&self) -> Option<String>;
    fn help(&self) -> Option<String>;
    fn long_help(&self) -> Option<String> {
        None
    }
    fn is_hidden(&self) -> bool;
    fn deprecated(&self) -> Option<String>;
    /// Whether the host explicitly marked the flag as required.
    fn has_required_marker(&self) -> bool;
    fn kind(&self) -> ValueKind;
    /// Default values in string form, zero values included.
    fn defaults(&self) -> Vec<String>;
    fn choices(&self) -> Vec<String> {
        Vec::new()
    }
}

/// Details a host may know about a positional beyond its usage token.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PositionalInfo {
    pub help: Option<String>,
    pub hide: bool,
    pub default: Vec<String>,
}
