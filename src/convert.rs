//! Host tree -> canonical [`ast::Spec`].
//!
//! Total over any host tree: missing or malformed bits degrade to empty
//! values, nothing here can fail.

use crate::{
    ast,
    host::{HostCommand, HostFlag, PositionalInfo, ValueKind},
    options::Options,
};

pub fn spec<C: HostCommand>(root: &C, options: &Options) -> ast::Spec {
    let name = root.name();
    let mut res = ast::Spec {
        bin: options.bin.clone().unwrap_or_else(|| name.clone()),
        name,
        version: root.version().unwrap_or_default(),
        about: root.about().unwrap_or_default(),
        long_about: root.long_about().unwrap_or_default(),
        usage: options.usage.clone().unwrap_or_default(),
        flags: flags(root, options),
        args: args(root),
        cmds: Vec::new(),
    };
    let mut path = Vec::new();
    res.cmds = subcommands(root, options, &mut path);
    res
}

fn cmd<C: HostCommand>(host: &C, options: &Options, path: &mut Vec<String>) -> ast::Command {
    let name = host.name();
    path.push(name.clone());
    tracing::trace!(path = %path.join(" "), "converting command");

    let mut res = ast::Command {
        name,
        help: host.about().unwrap_or_default(),
        help_long: host.long_about().unwrap_or_default(),
        hide: host.is_hidden(),
        deprecated: host.deprecated().unwrap_or_default(),
        aliases: host.aliases(),
        hidden_aliases: host.hidden_aliases(),
        subcommand_required: false,
        flags: flags(host, options),
        args: args(host),
        cmds: subcommands(host, options, path),
    };
    res.subcommand_required =
        !res.cmds.is_empty() && res.args.is_empty() && !host.is_runnable();

    path.pop();
    res
}

fn subcommands<C: HostCommand>(
    host: &C,
    options: &Options,
    path: &mut Vec<String>,
) -> Vec<ast::Command> {
    host.subcommands()
        .into_iter()
        .filter(|sub| {
            let name = sub.name();
            let builtin = options.builtins.is_command(&name);
            if builtin {
                tracing::debug!(command = %name, "skipping builtin command");
            }
            !builtin
        })
        .map(|sub| cmd(sub, options, path))
        .collect()
}

/// Inherited flags first, then local ones not already seen by name.
fn flags<C: HostCommand>(host: &C, options: &Options) -> Vec<ast::Flag> {
    let mut seen: Vec<String> = Vec::new();
    let mut res = Vec::new();

    let inherited = host.inherited_flags().into_iter().map(|it| (it, true));
    let local = host.local_flags().into_iter().map(|it| (it, false));
    for (host_flag, global) in inherited.chain(local) {
        let name = host_flag.name();
        if options.builtins.is_flag(&name) {
            tracing::debug!(flag = %name, "skipping builtin flag");
            continue;
        }
        if seen.contains(&name) {
            tracing::debug!(flag = %name, "skipping flag already declared as inherited");
            continue;
        }
        let mut flag = flag(host_flag);
        flag.global = global;
        res.push(flag);
        seen.push(name);
    }
    res
}

fn flag<F: HostFlag>(host: &F) -> ast::Flag {
    let kind = host.kind();
    let long = host.long().filter(|it| !it.is_empty());

    let mut res = ast::Flag {
        short: host.short(),
        long,
        help: host.help().unwrap_or_default(),
        help_long: host.long_help().unwrap_or_default(),
        required: host.has_required_marker(),
        hide: host.is_hidden(),
        deprecated: host.deprecated().unwrap_or_default(),
        default: defaults(kind, host.defaults()),
        ..ast::Flag::default()
    };

    match kind {
        ValueKind::Bool => (),
        ValueKind::Count => {
            res.count = true;
            res.var = true;
        }
        _ => {
            res.var = kind == ValueKind::List;
            let name = res.long.clone().unwrap_or_else(|| host.name());
            let mut arg = ast::Arg::required(arg_name(&name));
            let choices = host.choices();
            if !choices.is_empty() {
                arg.choices = Some(ast::Choices { values: choices });
            }
            res.arg = Some(arg);
        }
    }
    debug_assert!(kind.takes_value() == res.arg.is_some());
    res
}

fn defaults(kind: ValueKind, values: Vec<String>) -> Vec<String> {
    values.into_iter().filter(|it| !kind.is_zero_default(it)).collect()
}

/// `dry-run` -> `DRY_RUN`.
fn arg_name(flag: &str) -> String {
    flag.chars()
        .map(|c| match c {
            '-' | '.' | ' ' => '_',
            c => c.to_ascii_uppercase(),
        })
        .collect()
}

fn args<C: HostCommand>(host: &C) -> Vec<ast::Arg> {
    let mut res = host.args();
    for arg in res.iter_mut() {
        if let Some(info) = host.positional(&arg.name) {
            let PositionalInfo { help, hide, default } = info;
            arg.help = help.unwrap_or_default();
            arg.hide = hide;
            arg.default = default.into_iter().filter(|it| !it.is_empty()).collect();
        }
    }

    let valid = host.valid_args();
    if let Some(first) = res.first_mut() {
        if !valid.is_empty() {
            first.choices = Some(ast::Choices { values: valid });
        }
    }
    res
}
