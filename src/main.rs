mod caption;
mod command;
mod error;
mod filter;
mod parser;
mod runner;

use crate::command::Invocation;
use crate::filter::Style;
use crate::parser::Parser;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use colored::Colorize;

fn main() {
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            for cause in err.chain().skip(1) {
                eprintln!("    {}", cause);
            }
            std::process::exit(1);
        }
    }
}

#[derive(ClapParser)]
#[command(about = "Overlay timed, styled text captions onto a video with ffmpeg")]
struct Cli {
    #[arg(short, long, value_name = "FILE", help = "The video file to read from.")]
    input_file: String,
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "The video file to write to. If not supplied, the captions will be previewed live with ffplay."
    )]
    output_file: Option<String>,
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "The file containing the sequence of caption commands. See demos/commands.txt for the syntax."
    )]
    command_file: String,
    #[arg(
        short = 'y',
        long,
        help = "Overwrite the output file if it already exists."
    )]
    overwrite_output_file: bool,
    #[arg(short, long, help = "Do not echo the generated command before running it.")]
    quiet: bool,
}

fn run() -> Result<i32> {
    let cli = Cli::parse();

    let script = std::fs::read_to_string(&cli.command_file)
        .context(format!("Failed to open command file: '{}'", cli.command_file))?;

    let mut parser = Parser::new();
    let captions = parser
        .parse(&script)
        .context(format!("Failed to parse command file: '{}'", cli.command_file))?;

    let style = Style::default();
    let expression = filter::expression(&captions, &style)?;
    let invocation = Invocation {
        input: cli.input_file,
        output: cli.output_file,
        overwrite: cli.overwrite_output_file,
    };
    let cmd = command::assemble(&invocation, &expression);

    if !cli.quiet {
        let stages = filter::stages(&captions, &style)?;
        runner::echo(&cmd, &stages);
    }

    let status = runner::run(&cmd)?;
    Ok(runner::exit_code(status))
}
