use std::process::{Command, ExitStatus};

use anyhow::{Context, Result};
use colored::Colorize;

const INDENT: &str = "  ";
const CONTINUATION_COLUMN: usize = 79;

/// Prints the assembled command in green, one argument per line with shell
/// continuations, expanding the filter expression one stage per line.
pub fn echo(cmd: &[String], stages: &[String]) {
    let lines = layout(cmd, stages);
    for (index, line) in lines.iter().enumerate() {
        if index + 1 == lines.len() {
            println!("{}", line.green());
        } else {
            let padded = format!("{:<width$} \\", line, width = CONTINUATION_COLUMN);
            println!("{}", padded.green());
        }
    }
}

fn layout(cmd: &[String], stages: &[String]) -> Vec<String> {
    let mut lines = Vec::new();
    for (index, arg) in cmd.iter().enumerate() {
        if index == 0 {
            lines.push(arg.clone());
        } else if arg.starts_with('"') && !stages.is_empty() {
            let last = stages.len() - 1;
            for (stage_index, stage) in stages.iter().enumerate() {
                let open = if stage_index == 0 { "\"" } else { "" };
                let close = if stage_index == last { "\"" } else { "," };
                lines.push(format!("{}{}{}{}", INDENT, open, stage, close));
            }
        } else {
            lines.push(format!("{}{}", INDENT, arg));
        }
    }
    lines
}

/// Runs the command line through the shell and returns the child's status.
/// The shell pass is what makes the quoted filter token a single argument.
pub fn run(cmd: &[String]) -> Result<ExitStatus> {
    let command_line = cmd.join(" ");
    Command::new("sh")
        .arg("-c")
        .arg(&command_line)
        .status()
        .context(format!("Failed to run '{}'", command_line))
}

// A child killed by a signal (Ctrl-C during a preview) reports no exit code;
// that maps to the user-interrupt status.
pub fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(1)
}
