//! Renders a [`Spec`](ast::Spec) as a KDL document in the `usage` dialect.

use std::fmt::Write;

use crate::ast;

macro_rules! w {
    ($($tt:tt)*) => {
        drop(write!($($tt)*))
    };
}

const INDENT: &str = "    ";

/// Trailing marker of a variadic positional in an `arg` node.
const ELLIPSIS: char = '\u{2026}';

pub fn render(spec: &ast::Spec) -> String {
    let mut buf = String::new();

    let meta = [
        ("name", &spec.name),
        ("bin", &spec.bin),
        ("version", &spec.version),
        ("about", &spec.about),
    ];
    for (key, value) in meta {
        if !value.is_empty() {
            w!(buf, "{key} {}\n", ident(value));
        }
    }
    if !spec.long_about.is_empty() {
        w!(buf, "long_about {}\n", quote(&spec.long_about));
    }
    if !spec.usage.is_empty() {
        w!(buf, "usage {}\n", ident(&spec.usage));
    }

    for flag in &spec.flags {
        emit_flag(&mut buf, flag, 0);
    }
    for arg in &spec.args {
        emit_arg(&mut buf, arg, 0);
    }
    for cmd in &spec.cmds {
        emit_cmd(&mut buf, cmd, 0);
    }
    buf
}

fn emit_cmd(buf: &mut String, cmd: &ast::Command, depth: usize) {
    indent(buf, depth);
    w!(buf, "cmd {}", ident(&cmd.name));
    if cmd.hide {
        w!(buf, " hide=#true");
    }
    if cmd.subcommand_required {
        w!(buf, " subcommand_required=#true");
    }
    prop(buf, "help", &cmd.help);
    prop(buf, "deprecated", &cmd.deprecated);

    if !cmd.has_children() {
        w!(buf, "\n");
        return;
    }
    w!(buf, " {{\n");

    let depth1 = depth + 1;
    if !cmd.aliases.is_empty() {
        emit_aliases(buf, &cmd.aliases, depth1);
        w!(buf, "\n");
    }
    if !cmd.hidden_aliases.is_empty() {
        emit_aliases(buf, &cmd.hidden_aliases, depth1);
        w!(buf, " hide=#true\n");
    }
    if !cmd.help_long.is_empty() {
        indent(buf, depth1);
        w!(buf, "long_help {}\n", quote(&cmd.help_long));
    }
    for flag in &cmd.flags {
        emit_flag(buf, flag, depth1);
    }
    for arg in &cmd.args {
        emit_arg(buf, arg, depth1);
    }
    for sub in &cmd.cmds {
        emit_cmd(buf, sub, depth1);
    }

    close(buf, depth);
}

fn emit_aliases(buf: &mut String, aliases: &[String], depth: usize) {
    indent(buf, depth);
    w!(buf, "alias");
    for alias in aliases {
        w!(buf, " {}", ident(alias));
    }
}

fn emit_flag(buf: &mut String, flag: &ast::Flag, depth: usize) {
    indent(buf, depth);
    w!(buf, "flag {}", ident(&flag.switches()));
    prop(buf, "help", &flag.help);
    let markers = [
        ("required", flag.required),
        ("var", flag.var),
        ("hide", flag.hide),
        ("global", flag.global),
        ("count", flag.count),
    ];
    for (key, set) in markers {
        if set {
            w!(buf, " {key}=#true");
        }
    }
    prop(buf, "deprecated", &flag.deprecated);
    if let [default] = flag.default.as_slice() {
        w!(buf, " default={}", ident(default));
    }

    let has_children = !flag.help_long.is_empty() || flag.arg.is_some() || flag.default.len() > 1;
    if !has_children {
        w!(buf, "\n");
        return;
    }
    w!(buf, " {{\n");

    let depth1 = depth + 1;
    if !flag.help_long.is_empty() {
        indent(buf, depth1);
        w!(buf, "long_help {}\n", quote(&flag.help_long));
    }
    if flag.default.len() > 1 {
        emit_values(buf, "default", &flag.default, depth1);
    }
    if let Some(arg) = &flag.arg {
        indent(buf, depth1);
        w!(buf, "arg {}", ident(&arg.usage()));
        prop(buf, "help", &arg.help);
        match &arg.choices {
            Some(choices) if !choices.values.is_empty() => {
                w!(buf, " {{\n");
                emit_values(buf, "choices", &choices.values, depth1 + 1);
                close(buf, depth1);
            }
            _ => w!(buf, "\n"),
        }
    }

    close(buf, depth);
}

fn emit_arg(buf: &mut String, arg: &ast::Arg, depth: usize) {
    indent(buf, depth);
    let mut usage = arg.usage();
    if arg.var {
        usage.push(ELLIPSIS);
    }
    // `[..]` reads as a type annotation in KDL, so it is always quoted.
    if arg.required {
        w!(buf, "arg {}", ident(&usage));
    } else {
        w!(buf, "arg {}", quote(&usage));
    }
    prop(buf, "help", &arg.help);
    if !arg.required {
        w!(buf, " required=#false");
    }
    if arg.var {
        w!(buf, " var=#true");
    }
    if arg.hide {
        w!(buf, " hide=#true");
    }
    if let [default] = arg.default.as_slice() {
        w!(buf, " default={}", ident(default));
    }

    if arg.choices.is_none() && arg.default.len() <= 1 {
        w!(buf, "\n");
        return;
    }
    w!(buf, " {{\n");

    let depth1 = depth + 1;
    if arg.default.len() > 1 {
        emit_values(buf, "default", &arg.default, depth1);
    }
    if let Some(choices) = &arg.choices {
        if !choices.values.is_empty() {
            emit_values(buf, "choices", &choices.values, depth1);
        }
    }

    close(buf, depth);
}

/// `name { "a"; "b" }`, one value per line.
fn emit_values(buf: &mut String, name: &str, values: &[String], depth: usize) {
    indent(buf, depth);
    w!(buf, "{name} {{\n");
    for value in values {
        indent(buf, depth + 1);
        w!(buf, "{}\n", quote(value));
    }
    close(buf, depth);
}

fn prop(buf: &mut String, key: &str, value: &str) {
    if !value.is_empty() {
        w!(buf, " {key}={}", ident(value));
    }
}

fn indent(buf: &mut String, depth: usize) {
    for _ in 0..depth {
        buf.push_str(INDENT);
    }
}

fn close(buf: &mut String, depth: usize) {
    indent(buf, depth);
    w!(buf, "}}\n");
}

/// Bare when the string is a valid KDL identifier, quoted otherwise.
fn ident(s: &str) -> String {
    if needs_quoting(s) {
        quote(s)
    } else {
        s.to_string()
    }
}

fn quote(s: &str) -> String {
    format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
}

fn needs_quoting(s: &str) -> bool {
    let starts_with_digit = s.chars().next().map_or(true, |c| c.is_ascii_digit());
    starts_with_digit
        || s.chars().any(|c| {
            matches!(
                c,
                ' ' | '\t'
                    | '\n'
                    | '\r'
                    | '"'
                    | '\\'
                    | '/'
                    | '('
                    | ')'
                    | '{'
                    | '}'
                    | ';'
                    | '='
                    | '#'
                    | '.'
                    | ','
                    | ':'
            )
        })
}
