//! [`HostCommand`] for [`clap::Command`].
//!
//! Global args are the inherited set, other named args the local one.
//! Positionals are read straight off the command, one [`ast::Arg`] each.

use ::clap::{Arg, ArgAction, Command};

use super::{HostCommand, HostFlag, ValueKind};
use crate::ast;

impl HostCommand for Command {
    type Flag = Arg;

    fn name(&self) -> String {
        self.get_name().to_string()
    }

    /// `name [OPTIONS] <A> [B]... [COMMAND]`
    fn usage(&self) -> String {
        let mut res = vec![self.get_name().to_string()];
        if self.get_arguments().any(|it| !it.is_positional()) {
            res.push("[OPTIONS]".to_string());
        }
        for arg in self.get_positionals() {
            let name = positional_name(arg);
            let mut token =
                if arg.is_required_set() { format!("<{name}>") } else { format!("[{name}]") };
            if is_multiple(arg) {
                token.push_str("...");
            }
            res.push(token);
        }
        if self.has_subcommands() {
            res.push("[COMMAND]".to_string());
        }
        res.join(" ")
    }

    fn about(&self) -> Option<String> {
        self.get_about().map(|it| it.to_string())
    }

    fn long_about(&self) -> Option<String> {
        self.get_long_about().map(|it| it.to_string())
    }

    fn version(&self) -> Option<String> {
        self.get_version().map(str::to_string)
    }

    fn is_hidden(&self) -> bool {
        self.is_hide_set()
    }

    fn deprecated(&self) -> Option<String> {
        None
    }

    fn aliases(&self) -> Vec<String> {
        self.get_visible_aliases().map(str::to_string).collect()
    }

    fn hidden_aliases(&self) -> Vec<String> {
        let visible = self.get_visible_aliases().collect::<Vec<_>>();
        self.get_all_aliases()
            .filter(|it| !visible.contains(it))
            .map(str::to_string)
            .collect()
    }

    fn is_runnable(&self) -> bool {
        !self.is_subcommand_required_set()
    }

    fn valid_args(&self) -> Vec<String> {
        match self.get_positionals().next() {
            Some(first) => possible_values(first),
            None => Vec::new(),
        }
    }

    fn args(&self) -> Vec<ast::Arg> {
        self.get_positionals()
            .map(|arg| ast::Arg {
                name: positional_name(arg),
                help: arg.get_help().map(|it| it.to_string()).unwrap_or_default(),
                required: arg.is_required_set(),
                var: is_multiple(arg),
                hide: arg.is_hide_set(),
                default: defaults(arg).into_iter().filter(|it| !it.is_empty()).collect(),
                choices: None,
            })
            .collect()
    }

    fn subcommands(&self) -> Vec<&Command> {
        self.get_subcommands().collect()
    }

    fn inherited_flags(&self) -> Vec<&Arg> {
        self.get_arguments().filter(|it| !it.is_positional() && it.is_global_set()).collect()
    }

    fn local_flags(&self) -> Vec<&Arg> {
        self.get_arguments().filter(|it| !it.is_positional() && !it.is_global_set()).collect()
    }
}

impl HostFlag for Arg {
    fn name(&self) -> String {
        self.get_id().as_str().to_string()
    }

    fn short(&self) -> Option<char> {
        self.get_short()
    }

    fn long(&self) -> Option<String> {
        self.get_long().map(str::to_string)
    }

    fn help(&self) -> Option<String> {
        self.get_help().map(|it| it.to_string())
    }

    fn long_help(&self) -> Option<String> {
        self.get_long_help().map(|it| it.to_string())
    }

    fn is_hidden(&self) -> bool {
        self.is_hide_set()
    }

    fn deprecated(&self) -> Option<String> {
        None
    }

    fn has_required_marker(&self) -> bool {
        self.is_required_set()
    }

    fn kind(&self) -> ValueKind {
        match self.get_action() {
            ArgAction::SetTrue
            | ArgAction::SetFalse
            | ArgAction::Help
            | ArgAction::HelpShort
            | ArgAction::HelpLong
            | ArgAction::Version => ValueKind::Bool,
            ArgAction::Count => ValueKind::Count,
            ArgAction::Append => ValueKind::List,
            _ => ValueKind::String,
        }
    }

    fn defaults(&self) -> Vec<String> {
        defaults(self)
    }

    fn choices(&self) -> Vec<String> {
        possible_values(self)
    }
}

fn positional_name(arg: &Arg) -> String {
    let name = match arg.get_value_names().and_then(|it| it.first()) {
        Some(value_name) => value_name.as_str().to_string(),
        None => arg.get_id().as_str().to_string(),
    };
    // One token per positional in the usage line.
    name.split_whitespace().collect::<Vec<_>>().join("_")
}

fn is_multiple(arg: &Arg) -> bool {
    matches!(arg.get_action(), ArgAction::Append)
        || arg.get_num_args().map_or(false, |it| it.max_values() > 1)
}

fn defaults(arg: &Arg) -> Vec<String> {
    arg.get_default_values().iter().map(|it| it.to_string_lossy().into_owned()).collect()
}

fn possible_values(arg: &Arg) -> Vec<String> {
    arg.get_possible_values()
        .iter()
        .filter(|it| !it.is_hide_set())
        .map(|it| it.get_name().to_string())
        .collect()
}
