use clap::Parser;
use nu_ansi_term::Color;

use statekeep_cli::{execute, init_logging, Cli};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match execute(&cli) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("{} {}", Color::Red.bold().paint("error:"), e);
            std::process::exit(1);
        }
    }
}
