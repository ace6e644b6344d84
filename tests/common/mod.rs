#![allow(dead_code)]

use cmdpat::grammar::{Match, Pattern};

pub fn compile(usage: &str) -> Pattern {
    Pattern::new(usage).unwrap_or_else(|e| panic!("failed to compile {usage:?}: {e}"))
}

pub fn match_line<'p>(pattern: &'p Pattern, line: &str) -> Match<'p> {
    pattern
        .match_line(line)
        .unwrap_or_else(|| panic!("expected {line:?} to match {:?}", pattern.text()))
}
