use expect_test::{expect, Expect};
use serde_json::Value;

use crate::{
    assert_contains, assert_not_contains,
    fake::{Cmd, Flag},
};

fn check(cmd: &Cmd, expect: Expect) {
    let actual = usage_gen::generate_json(cmd).unwrap();
    expect.assert_eq(&actual);
}

fn parse(cmd: &Cmd) -> Value {
    let json = usage_gen::generate_json(cmd).unwrap();
    serde_json::from_str(&json).unwrap()
}

#[test]
fn root_and_subcommand() {
    check(
        &Cmd::new("mycli")
            .about("A CLI tool")
            .version("2.0.0")
            .persistent_flag(Flag::bool("verbose").short('v').help("Verbose output"))
            .sub(Cmd::new("run <target> [flags]").about("Run something")),
        expect![[r#"
            {
              "name": "mycli",
              "bin": "mycli",
              "cmd": {
                "full_cmd": [],
                "subcommands": {
                  "run": {
                    "full_cmd": [
                      "run"
                    ],
                    "subcommands": {},
                    "args": [
                      {
                        "name": "target",
                        "usage": "<target>",
                        "required": true,
                        "hide": false
                      }
                    ],
                    "hide": false,
                    "name": "run",
                    "help": "Run something",
                    "aliases": [],
                    "hidden_aliases": []
                  }
                },
                "flags": [
                  {
                    "name": "verbose",
                    "usage": "-v --verbose",
                    "help": "Verbose output",
                    "short": [
                      "v"
                    ],
                    "long": [
                      "verbose"
                    ],
                    "hide": false,
                    "global": true
                  }
                ],
                "hide": false,
                "name": "mycli",
                "aliases": [],
                "hidden_aliases": []
              },
              "version": "2.0.0",
              "about": "A CLI tool"
            }"#]],
    );
}

#[test]
fn flags_with_args() {
    check(
        &Cmd::new("app")
            .flag(Flag::string("output", "json").short('o').help("Output format").required())
            .flag(Flag::count("verbose").deprecated("too loud")),
        expect![[r#"
            {
              "name": "app",
              "bin": "app",
              "cmd": {
                "full_cmd": [],
                "subcommands": {},
                "flags": [
                  {
                    "name": "output",
                    "usage": "-o --output <OUTPUT>",
                    "help": "Output format",
                    "short": [
                      "o"
                    ],
                    "long": [
                      "output"
                    ],
                    "required": true,
                    "hide": false,
                    "global": false,
                    "default": [
                      "json"
                    ],
                    "arg": {
                      "name": "OUTPUT",
                      "usage": "<OUTPUT>",
                      "required": true,
                      "hide": false
                    }
                  },
                  {
                    "name": "verbose",
                    "usage": "--verbose",
                    "short": [],
                    "long": [
                      "verbose"
                    ],
                    "hide": false,
                    "global": false,
                    "count": true,
                    "var": true,
                    "deprecated": "too loud"
                  }
                ],
                "hide": false,
                "name": "app",
                "aliases": [],
                "hidden_aliases": []
              }
            }"#]],
    );
}

#[test]
fn choices_are_nested() {
    let json = usage_gen::generate_json(
        &Cmd::new("deploy <env>").valid_args(&["dev", "prod"]),
    )
    .unwrap();
    let expected = [
        r#"        "choices": {"#,
        r#"          "choices": ["#,
        r#"            "dev","#,
        r#"            "prod""#,
        r#"          ]"#,
        r#"        }"#,
    ];
    assert_contains(&json, &expected.join("\n"));
    assert_not_contains(&json, "\"values\"");
}

#[test]
fn full_cmd_tracks_path() {
    let doc = parse(
        &Cmd::new("app").sub(
            Cmd::new("remote")
                .aliases(&["r"])
                .sub(Cmd::new("add <name> [url]...").about("Add a remote")),
        ),
    );

    let remote = &doc["cmd"]["subcommands"]["remote"];
    assert_eq!(remote["full_cmd"], serde_json::json!(["remote"]));
    assert_eq!(remote["aliases"], serde_json::json!(["r"]));
    assert_eq!(remote["subcommand_required"], Value::Bool(true));

    let add = &remote["subcommands"]["add"];
    assert_eq!(add["full_cmd"], serde_json::json!(["remote", "add"]));
    assert_eq!(add["subcommands"], serde_json::json!({}));
    assert_eq!(add["hidden_aliases"], serde_json::json!([]));
    assert_eq!(add["args"][1]["usage"], "[url]");
    assert_eq!(add["args"][1]["var"], Value::Bool(true));
    assert_eq!(add.get("subcommand_required"), None);
}

#[test]
fn subcommands_are_keyed_by_name() {
    let json =
        usage_gen::generate_json(&Cmd::new("app").sub(Cmd::new("zeta")).sub(Cmd::new("alpha")))
            .unwrap();
    let alpha = json.find(r#""alpha": {"#).unwrap();
    let zeta = json.find(r#""zeta": {"#).unwrap();
    assert!(alpha < zeta, "{json}");

    let doc: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(doc["cmd"]["subcommands"]["zeta"]["name"], "zeta");
}

#[test]
fn hidden_command_and_bool_flag() {
    let doc = parse(
        &Cmd::new("app").sub(
            Cmd::new("internal").hidden().flag(Flag::bool("force")).flag(Flag::count("v")),
        ),
    );
    let internal = &doc["cmd"]["subcommands"]["internal"];
    assert_eq!(internal["hide"], Value::Bool(true));
    assert_eq!(internal["flags"][0].get("arg"), None);
    assert_eq!(internal["flags"][0]["usage"], "--force");
    assert_eq!(internal["flags"][1]["count"], Value::Bool(true));
    assert_eq!(internal["flags"][1]["var"], Value::Bool(true));
}

#[test]
fn empty_metadata_is_omitted() {
    let doc = parse(&Cmd::new("app"));
    let mut keys = doc.as_object().unwrap().keys().cloned().collect::<Vec<_>>();
    keys.sort();
    assert_eq!(keys, ["bin", "cmd", "name"]);
}

#[test]
fn builtins_are_skipped() {
    let cmd = Cmd::new("app")
        .persistent_flag(Flag::bool("help").short('h'))
        .flag(Flag::bool("version"))
        .flag(Flag::string("custom", ""))
        .sub(
            Cmd::new("run")
                .flag(Flag::bool("help"))
                .sub(Cmd::new("help"))
                .sub(Cmd::new("completion").sub(Cmd::new("bash")))
                .sub(Cmd::new("once")),
        )
        .sub(Cmd::new("help"))
        .sub(Cmd::new("completion"));
    let doc = parse(&cmd);

    let names = |value: &Value| -> Vec<String> {
        value.as_object().map(|it| it.keys().cloned().collect()).unwrap_or_default()
    };
    let flag_names = |value: &Value| -> Vec<String> {
        let flags = value.as_array().cloned().unwrap_or_default();
        flags.iter().map(|it| it["name"].as_str().unwrap_or_default().to_string()).collect()
    };

    assert_eq!(names(&doc["cmd"]["subcommands"]), ["run"]);
    assert_eq!(flag_names(&doc["cmd"]["flags"]), ["custom"]);
    let run = &doc["cmd"]["subcommands"]["run"];
    assert_eq!(names(&run["subcommands"]), ["once"]);
    assert_eq!(run.get("flags"), None);

    let json = usage_gen::generate_json(&cmd).unwrap();
    assert_not_contains(&json, "\"help\"");
    assert_not_contains(&json, "\"version\"");
    assert_not_contains(&json, "\"bash\"");
}
