//! End-to-end REPL sessions.

use nestkv_cli::{Repl, ReplConfig};
use nestkv_core::Store;
use std::io::Cursor;

fn run(config: ReplConfig, script: &str) -> (String, String) {
    let mut repl = Repl::new(Store::new(), config);
    let mut out = Vec::new();
    let mut err = Vec::new();
    repl.run(Cursor::new(script), &mut out, &mut err).unwrap();
    (
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn nested_session_transcript() {
    let script = "\
WRITE a hi
read a
begin
read a
write a bye
read a
begin
remove a
read a
commit
read a
write a bye_now
read a
discard
read a
exit
";
    let (out, err) = run(ReplConfig::new().prompt(""), script);

    assert_eq!(out, "hi\nhi\nbye\nbye_now\nhi\n");
    assert_eq!(err, "key not found: a\nkey not found: a\n");
}

#[test]
fn committed_values_outlive_the_transaction() {
    let script = "begin\nwrite k A\nbegin\nwrite k B\ncommit\ncommit\ndiscard\nread k\n";
    let (out, err) = run(ReplConfig::new().prompt(""), script);

    assert_eq!(out, "b\n");
    assert!(err.is_empty());
}

#[test]
fn case_sensitive_session_keeps_keys_distinct() {
    let config = ReplConfig::new().prompt("").case_insensitive(false);
    let (out, err) = run(config, "write K upper\nwrite k lower\nread K\nread k\nREAD k\n");

    assert_eq!(out, "upper\nlower\n");
    assert_eq!(err, "unsupported command: READ\n");
}

#[test]
fn custom_prompt() {
    let (out, _) = run(ReplConfig::new().prompt("kv> "), "exit\n");
    assert_eq!(out, "kv> ");
}
