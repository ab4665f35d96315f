use clap::Parser;
use ngsplit::cli::{Cli, Command};
use ngsplit::{cmd_analyze, cmd_convert, cmd_init};

fn main() {
    let cli = Cli::parse();

    let exit_code = match cli.command {
        Command::Analyze(args) => cmd_analyze(args),
        Command::Convert(args) => cmd_convert(args),
        Command::Init(args) => cmd_init(args),
    };

    std::process::exit(exit_code);
}
