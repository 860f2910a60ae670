//! Renders a [`Spec`](ast::Spec) following the JSON schema of the `usage`
//! tool: a root `cmd` object with subcommands keyed by name.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::{ast, Result};

pub fn render(spec: &ast::Spec) -> Result<String> {
    let doc = Doc::from(spec);
    let res = serde_json::to_string_pretty(&doc)?;
    Ok(res)
}

#[derive(Serialize)]
struct Doc<'a> {
    #[serde(skip_serializing_if = "str::is_empty")]
    name: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    bin: &'a str,
    cmd: Cmd<'a>,
    #[serde(skip_serializing_if = "str::is_empty")]
    version: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    usage: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    about: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    about_long: &'a str,
}

#[derive(Serialize)]
struct Cmd<'a> {
    full_cmd: Vec<&'a str>,
    #[serde(skip_serializing_if = "str::is_empty")]
    usage: &'a str,
    // Keyed by name, in sorted order.
    subcommands: BTreeMap<&'a str, Cmd<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    args: Vec<Arg<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    flags: Vec<Flag<'a>>,
    hide: bool,
    #[serde(skip_serializing_if = "is_false")]
    subcommand_required: bool,
    name: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    help: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    help_long: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    deprecated: &'a str,
    aliases: &'a [String],
    hidden_aliases: &'a [String],
}

#[derive(Serialize)]
struct Flag<'a> {
    name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    usage: String,
    #[serde(skip_serializing_if = "str::is_empty")]
    help: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    help_long: &'a str,
    short: Vec<String>,
    long: Vec<&'a str>,
    #[serde(skip_serializing_if = "is_false")]
    required: bool,
    hide: bool,
    global: bool,
    #[serde(skip_serializing_if = "is_false")]
    count: bool,
    #[serde(skip_serializing_if = "is_false")]
    var: bool,
    #[serde(skip_serializing_if = "str::is_empty")]
    deprecated: &'a str,
    #[serde(skip_serializing_if = "no_values")]
    default: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    arg: Option<Arg<'a>>,
}

#[derive(Serialize)]
struct Arg<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "String::is_empty")]
    usage: String,
    #[serde(skip_serializing_if = "str::is_empty")]
    help: &'a str,
    required: bool,
    hide: bool,
    #[serde(skip_serializing_if = "is_false")]
    var: bool,
    #[serde(skip_serializing_if = "no_values")]
    default: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    choices: Option<Choices<'a>>,
}

#[derive(Serialize)]
struct Choices<'a> {
    choices: &'a [String],
}

fn is_false(b: &bool) -> bool {
    !*b
}

fn no_values(values: &&[String]) -> bool {
    values.is_empty()
}

impl<'a> From<&'a ast::Spec> for Doc<'a> {
    fn from(spec: &'a ast::Spec) -> Doc<'a> {
        let cmd = Cmd {
            full_cmd: Vec::new(),
            usage: "",
            subcommands: subcommands(&spec.cmds, &[]),
            args: spec.args.iter().map(Arg::from).collect(),
            flags: spec.flags.iter().map(Flag::from).collect(),
            hide: false,
            subcommand_required: false,
            name: &spec.name,
            help: "",
            help_long: "",
            deprecated: "",
            aliases: &[],
            hidden_aliases: &[],
        };
        Doc {
            name: &spec.name,
            bin: &spec.bin,
            cmd,
            version: &spec.version,
            usage: &spec.usage,
            about: &spec.about,
            about_long: &spec.long_about,
        }
    }
}

fn subcommands<'a>(cmds: &'a [ast::Command], parent: &[&'a str]) -> BTreeMap<&'a str, Cmd<'a>> {
    cmds.iter()
        .map(|sub| {
            let mut full_cmd = parent.to_vec();
            full_cmd.push(&sub.name);
            (sub.name.as_str(), cmd(sub, full_cmd))
        })
        .collect()
}

fn cmd<'a>(cmd: &'a ast::Command, full_cmd: Vec<&'a str>) -> Cmd<'a> {
    Cmd {
        subcommands: subcommands(&cmd.cmds, &full_cmd),
        full_cmd,
        usage: "",
        args: cmd.args.iter().map(Arg::from).collect(),
        flags: cmd.flags.iter().map(Flag::from).collect(),
        hide: cmd.hide,
        subcommand_required: cmd.subcommand_required,
        name: &cmd.name,
        help: &cmd.help,
        help_long: &cmd.help_long,
        deprecated: &cmd.deprecated,
        aliases: &cmd.aliases,
        hidden_aliases: &cmd.hidden_aliases,
    }
}

impl<'a> From<&'a ast::Flag> for Flag<'a> {
    fn from(flag: &'a ast::Flag) -> Flag<'a> {
        let mut usage = flag.switches();
        if let Some(arg) = &flag.arg {
            usage.push_str(&format!(" <{}>", arg.name));
        }
        Flag {
            name: flag.name(),
            usage,
            help: &flag.help,
            help_long: &flag.help_long,
            short: flag.short.iter().map(char::to_string).collect(),
            long: flag.long.as_deref().into_iter().collect(),
            required: flag.required,
            hide: flag.hide,
            global: flag.global,
            count: flag.count,
            var: flag.var,
            deprecated: &flag.deprecated,
            default: &flag.default,
            arg: flag.arg.as_ref().map(Arg::from),
        }
    }
}

impl<'a> From<&'a ast::Arg> for Arg<'a> {
    fn from(arg: &'a ast::Arg) -> Arg<'a> {
        Arg {
            name: &arg.name,
            usage: arg.usage(),
            help: &arg.help,
            required: arg.required,
            hide: arg.hide,
            var: arg.var,
            default: &arg.default,
            choices: arg.choices.as_ref().map(|it| Choices { choices: &it.values }),
        }
    }
}
