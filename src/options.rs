/// Knobs for turning a host tree into a spec.
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub(crate) bin: Option<String>,
    pub(crate) usage: Option<String>,
    pub(crate) builtins: Builtins,
}

impl Options {
    /// Binary name to record; the root command name otherwise.
    pub fn bin(mut self, bin: impl Into<String>) -> Self {
        self.bin = Some(bin.into());
        self
    }

    pub fn usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = Some(usage.into());
        self
    }

    pub fn builtins(mut self, builtins: Builtins) -> Self {
        self.builtins = builtins;
        self
    }
}

/// Names of commands and flags the host framework adds by itself.
///
/// Entries matching these never make it into the generated [`Spec`](crate::Spec), at any depth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Builtins {
    commands: Vec<String>,
    flags: Vec<String>,
}

impl Default for Builtins {
    fn default() -> Self {
        Builtins::none()
            .with_command("help")
            .with_command("completion")
            .with_flag("help")
            .with_flag("version")
    }
}

impl Builtins {
    pub fn none() -> Self {
        Builtins { commands: Vec::new(), flags: Vec::new() }
    }

    pub fn with_command(mut self, name: impl Into<String>) -> Self {
        self.commands.push(name.into());
        self
    }

    pub fn with_flag(mut self, name: impl Into<String>) -> Self {
        self.flags.push(name.into());
        self
    }

    pub fn is_command(&self, name: &str) -> bool {
        self.commands.iter().any(|it| it == name)
    }

    pub fn is_flag(&self, name: &str) -> bool {
        self.flags.iter().any(|it| it == name)
    }
}
