use clap::Parser;
use pitao::commands::{self, Command};
use pitao::config::PitaoConfig;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Translate Pitão (Python with Portuguese keywords) to Python and back.
#[derive(Parser)]
#[command(name = "pitao", version)]
struct Cli {
    /// Show debug logs (overridden by PITAO_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Project root used to find .pitao/config.toml
    #[arg(short = 'C', long, global = true)]
    root: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("PITAO_LOG")
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

/// Reset SIGPIPE to default behavior so piping to `head` etc. doesn't panic.
#[cfg(unix)]
fn reset_sigpipe() {
    // SAFETY: libc::signal is a standard POSIX function; this only changes the
    // disposition of SIGPIPE back to the default (terminate on broken pipe).
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}

#[cfg(not(unix))]
fn reset_sigpipe() {}

fn main() {
    reset_sigpipe();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let root = cli.root.unwrap_or_else(|| PathBuf::from("."));
    let config = PitaoConfig::load(&root);

    std::process::exit(commands::run(cli.command, &config));
}
