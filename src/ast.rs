//! The canonical, host-independent model of a CLI definition.
//!
//! Built once by [`crate::convert`] and consumed by the renderers; nothing in
//! here points back into the host tree.

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Spec {
    pub name: String,
    pub bin: String,
    pub version: String,
    pub about: String,
    pub long_about: String,
    pub usage: String,
    pub flags: Vec<Flag>,
    pub args: Vec<Arg>,
    pub cmds: Vec<Command>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Command {
    pub name: String,
    pub help: String,
    pub help_long: String,
    pub hide: bool,
    /// Empty when the command is not deprecated.
    pub deprecated: String,
    pub aliases: Vec<String>,
    pub hidden_aliases: Vec<String>,
    pub subcommand_required: bool,
    pub flags: Vec<Flag>,
    pub args: Vec<Arg>,
    pub cmds: Vec<Command>,
}

impl Command {
    pub(crate) fn has_children(&self) -> bool {
        !self.help_long.is_empty()
            || !self.aliases.is_empty()
            || !self.hidden_aliases.is_empty()
            || !self.flags.is_empty()
            || !self.args.is_empty()
            || !self.cmds.is_empty()
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Flag {
    pub short: Option<char>,
    pub long: Option<String>,
    pub help: String,
    pub help_long: String,
    pub required: bool,
    pub hide: bool,
    pub global: bool,
    pub count: bool,
    pub var: bool,
    pub deprecated: String,
    pub default: Vec<String>,
    /// `None` for boolean and counter flags.
    pub arg: Option<Arg>,
}

impl Flag {
    /// `-s --long`, either half may be missing.
    pub(crate) fn switches(&self) -> String {
        let short = self.short.map(|it| format!("-{it}"));
        let long = self.long.as_ref().map(|it| format!("--{it}"));
        short.into_iter().chain(long).collect::<Vec<_>>().join(" ")
    }

    /// Name used to identify the flag in the JSON schema: long, then short.
    pub(crate) fn name(&self) -> String {
        match (&self.long, self.short) {
            (Some(long), _) => long.clone(),
            (None, Some(short)) => short.to_string(),
            (None, None) => String::new(),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Arg {
    pub name: String,
    pub help: String,
    pub required: bool,
    pub var: bool,
    pub hide: bool,
    pub default: Vec<String>,
    pub choices: Option<Choices>,
}

impl Arg {
    pub(crate) fn required(name: impl Into<String>) -> Arg {
        Arg { name: name.into(), required: true, ..Arg::default() }
    }

    pub(crate) fn optional(name: impl Into<String>) -> Arg {
        Arg { name: name.into(), required: false, ..Arg::default() }
    }

    /// `<name>` or `[name]`, without any variadic marker.
    pub(crate) fn usage(&self) -> String {
        if self.required {
            format!("<{}>", self.name)
        } else {
            format!("[{}]", self.name)
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Choices {
    pub values: Vec<String>,
}

/// What a flag's value looks like, as far as the generated [`Spec`] is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Bool,
    Count,
    String,
    Number,
    List,
    Other,
}

impl ValueKind {
    /// Whether `value` is this kind's zero value and so must not be recorded
    /// as an explicit default.
    ///
    /// `"0"` is a real default for a string flag.
    pub fn is_zero_default(self, value: &str) -> bool {
        if value.is_empty() {
            return true;
        }
        match self {
            ValueKind::Bool => value == "false",
            ValueKind::Count | ValueKind::Number => {
                value.parse::<f64>().map(|it| it == 0.0).unwrap_or(false)
            }
            ValueKind::String => false,
            ValueKind::List => value == "[]",
            ValueKind::Other => matches!(value, "false" | "0" | "[]"),
        }
    }

    pub(crate) fn takes_value(self) -> bool {
        !matches!(self, ValueKind::Bool | ValueKind::Count)
    }
}
