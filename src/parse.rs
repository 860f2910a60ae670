//! Recovers positional arguments from a free-form usage line such as
//! `rollback <service> [version] [flags]`.

use crate::ast;

/// Tokens that say "this command takes flags/subcommands" and are not args.
const PLACEHOLDERS: &[&str] = &["[flags]", "[options]", "[command]"];

const VARIADIC: &str = "...";

pub fn args(usage: &str) -> Vec<ast::Arg> {
    let p = &mut Parser::new(usage);
    // The command name.
    p.bump();

    let mut res = Vec::new();
    while let Some(token) = p.bump() {
        if is_placeholder(token) {
            continue;
        }
        match arg(token) {
            Some(arg) => res.push(arg),
            None => tracing::debug!(token, "dropping unrecognized usage token"),
        }
    }
    res
}

fn arg(token: &str) -> Option<ast::Arg> {
    let (token, var) = match token.strip_suffix(VARIADIC) {
        Some(it) => (it, true),
        None => (token, false),
    };

    let mut arg = if let Some(name) = delimited(token, '<', '>') {
        ast::Arg::required(name)
    } else if let Some(name) = delimited(token, '[', ']') {
        ast::Arg::optional(name)
    } else {
        return None;
    };
    arg.var = var;
    Some(arg)
}

fn delimited(token: &str, open: char, close: char) -> Option<&str> {
    token.strip_prefix(open)?.strip_suffix(close).filter(|it| !it.is_empty())
}

fn is_placeholder(token: &str) -> bool {
    PLACEHOLDERS.iter().any(|it| it.eq_ignore_ascii_case(token))
}

struct Parser<'a> {
    ts: Vec<&'a str>,
}

impl<'a> Parser<'a> {
    fn new(usage: &'a str) -> Self {
        let mut ts = usage.split_whitespace().collect::<Vec<_>>();
        ts.reverse();
        Self { ts }
    }

    fn bump(&mut self) -> Option<&'a str> {
        self.ts.pop()
    }
}
