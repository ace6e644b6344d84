//! Turns grammar results into the JSON the `cmdpat` binary prints.
//!
//! Exit codes: 0 when every line matched, 1 when at least one did not.
//! Errors are returned to the caller, which reports them and exits with 2.

pub mod output;

use std::io::Write;

use crate::config::CommandEntry;
use crate::grammar::{CommandSet, Pattern};

use output::{build_dispatch_output, build_inspect_output, build_match_output};

pub fn run_inspect(usage: &str, out: &mut impl Write) -> Result<u8, anyhow::Error> {
    let pattern = Pattern::new(usage)?;
    let json = serde_json::to_string(&build_inspect_output(&pattern))?;
    writeln!(out, "{json}")?;
    Ok(0)
}

pub fn run_match(usage: &str, line: &str, out: &mut impl Write) -> Result<u8, anyhow::Error> {
    let pattern = Pattern::new(usage)?;
    let matched = pattern.match_line(line);
    let json = serde_json::to_string(&build_match_output(matched.as_ref()))?;
    writeln!(out, "{json}")?;
    Ok(if matched.is_some() { 0 } else { 1 })
}

pub fn run_dispatch(
    commands: &CommandSet<CommandEntry>,
    lines: &[String],
    out: &mut impl Write,
) -> Result<u8, anyhow::Error> {
    let mut all_matched = true;
    for line in lines {
        let dispatch = commands.dispatch(line);
        if dispatch.is_none() {
            tracing::info!(line = %line, "no command matched");
            all_matched = false;
        }
        let json = serde_json::to_string(&build_dispatch_output(line, dispatch.as_ref()))?;
        writeln!(out, "{json}")?;
    }
    Ok(if all_matched { 0 } else { 1 })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::PatternError;
    use rstest::{fixture, rstest};

    fn output_lines(buf: Vec<u8>) -> Vec<serde_json::Value> {
        String::from_utf8(buf)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[fixture]
    fn commands() -> CommandSet<CommandEntry> {
        let mut set = CommandSet::new();
        for (usage, description) in [
            ("ping", Some("Health check")),
            ("say <msg:remaining_string>", None),
        ] {
            let entry = CommandEntry {
                usage: usage.to_string(),
                description: description.map(String::from),
                example: None,
            };
            set.register(usage, entry).unwrap();
        }
        set
    }

    #[test]
    fn inspect_prints_one_json_line() {
        let mut buf = Vec::new();
        let code = run_inspect("greet <name:?>", &mut buf).unwrap();
        assert_eq!(code, 0);
        let values = output_lines(buf);
        assert_eq!(values.len(), 1);
        assert_eq!(values[0]["expression"], r"^greet(\s?[^\s]+)?$");
    }

    #[test]
    fn inspect_rejects_malformed_usage() {
        let err = run_inspect("wait <secs:float>", &mut Vec::new()).unwrap_err();
        assert!(err.downcast_ref::<PatternError>().is_some());
    }

    #[rstest]
    #[case("set on", 0, true)]
    #[case("set maybe", 1, false)]
    fn match_exit_code(#[case] line: &str, #[case] expected_code: u8, #[case] matched: bool) {
        let mut buf = Vec::new();
        let code = run_match("set (on|off)", line, &mut buf).unwrap();
        assert_eq!(code, expected_code);
        assert_eq!(output_lines(buf)[0]["matched"], matched);
    }

    #[rstest]
    fn dispatch_reports_each_line(commands: CommandSet<CommandEntry>) {
        let lines = vec!["ping".to_string(), "say  hi   there".to_string()];
        let mut buf = Vec::new();
        let code = run_dispatch(&commands, &lines, &mut buf).unwrap();
        assert_eq!(code, 0);

        let values = output_lines(buf);
        assert_eq!(values[0]["usage"], "ping");
        assert_eq!(values[0]["description"], "Health check");
        assert_eq!(values[1]["usage"], "say <msg:remaining_string>");
        assert_eq!(values[1]["line"], "say hi there");
        assert_eq!(values[1]["parameters"][0]["value"], "hi there");
    }

    #[rstest]
    fn dispatch_unmatched_line_exits_one(commands: CommandSet<CommandEntry>) {
        let lines = vec!["ping".to_string(), "pong".to_string()];
        let mut buf = Vec::new();
        let code = run_dispatch(&commands, &lines, &mut buf).unwrap();
        assert_eq!(code, 1);
        assert!(output_lines(buf)[1]["usage"].is_null());
    }
}
