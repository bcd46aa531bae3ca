use crate::Cli;
use crate::commands::CommandEnum;
use clap::Parser;
use std::path::Path;

fn parse_cli(args: &[&str]) -> (CommandEnum, Cli) {
    let mut cli = Cli::try_parse_from(
        ["graphql-persist", "extract"].iter().chain(args.iter()),
    ).unwrap();
    let cmd = cli.cmd.take().unwrap();
    (cmd, cli)
}

fn path_arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[tokio::test]
async fn writes_output_map_and_pushes_inverted_entries() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("src");
    std::fs::create_dir(&src).unwrap();
    std::fs::write(src.join("a.graphql"), "query A { a }").unwrap();
    std::fs::write(src.join("b.graphql"), "query B { b }").unwrap();
    let out = dir.path().join("out.json");
    let push_dir = dir.path().join("pushed");

    let (cmd, cli) = parse_cli(&[
        path_arg(&src),
        path_arg(&out),
        "--push-dir",
        path_arg(&push_dir),
    ]);
    let result = cmd.run(cli).await;
    assert!(result.is_success(), "{:?}", result.stderr);
    assert!(result.stdout.unwrap().contains("Extracted 2 distinct operations"));

    let written: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(written["query A {\n  a\n}\n"], serde_json::json!(1));
    assert_eq!(written["query B {\n  b\n}\n"], serde_json::json!(2));

    let pushed = std::fs::read_to_string(push_dir.join("persisted-query:1")).unwrap();
    assert_eq!(pushed, "query A {\n  a\n}\n");
}

#[tokio::test]
async fn unknown_strategy_fails_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("a.graphql"), "query A { a }").unwrap();
    let out = dir.path().join("out.json");

    let (cmd, cli) = parse_cli(&[
        path_arg(dir.path()),
        path_arg(&out),
        "--id-strategy",
        "crc32",
    ]);
    let result = cmd.run(cli).await;
    assert!(!result.is_success());
    assert!(result.stderr.unwrap().contains("crc32"));
    assert!(!out.exists());
}

#[tokio::test]
async fn syntax_error_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("a.graphql"), "query A { a ").unwrap();
    let out = dir.path().join("out.json");

    let (cmd, cli) = parse_cli(&[path_arg(dir.path()), path_arg(&out)]);
    let result = cmd.run(cli).await;
    assert!(!result.is_success());
    assert!(result.stderr.unwrap().contains("Extraction failed"));
}
