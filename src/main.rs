// Micron: interactive shell for the Micron front end

use std::io::{self, IsTerminal};

use micron::repl::{CliAction, Repl, ReplConfig, USAGE};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match ReplConfig::from_args(std::env::args().skip(1)) {
        Ok(CliAction::Run(config)) => config,
        Ok(CliAction::Help) => {
            println!("{}", USAGE);
            return Ok(());
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };

    // Only color when a person is looking at the output
    if !io::stdout().is_terminal() {
        config.color = false;
    }

    let repl = Repl::new(config);
    repl.run(io::stdin().lock(), io::stdout().lock())?;

    Ok(())
}
