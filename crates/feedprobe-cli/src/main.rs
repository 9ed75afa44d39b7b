use clap::Parser;
use feedprobe_core::logging::{self, Verbosity};

mod cli;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();

    // Subscriber lives as long as this guard.
    let _logging = logging::init_logging(Verbosity::from_flag(cli.verbose));

    let code = cli.execute();
    if code != 0 {
        std::process::exit(code);
    }
}
