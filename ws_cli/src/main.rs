//! wrapserv - run service actions through whichever init system is active.

use clap::Parser;
use console::style;

use ws_core::{EXIT_USAGE, Error, InitBackend, parse_pairs};
use ws_io::{DetectorConfig, InitDetector, ProcessLauncher, SystemLauncher, ToolCandidates};

mod commands;
mod display;
mod logging;

#[derive(Parser)]
#[command(name = "wrapserv")]
#[command(about = "Run service actions through systemd, upstart or SysV init, whichever is active")]
#[command(version)]
#[command(after_help = "Pairs run left to right and stop at the first failure:\n  \
    wrapserv nginx reload php-fpm restart")]
struct Cli {
    /// Print the detected init system and exit
    #[arg(short = 'i', long)]
    show_init_name: bool,

    /// With --show-init-name, print a JSON report including tool paths
    #[arg(long, requires = "show_init_name")]
    json: bool,

    /// Print the commands that would run without running them
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Alternating service and action names, e.g. `nginx reload redis restart`
    #[arg(value_name = "SERVICE ACTION")]
    pairs: Vec<String>,
}

/// Host locations consulted at startup.
#[derive(Default)]
struct Host {
    detector: DetectorConfig,
    tools: ToolCandidates,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let launcher = SystemLauncher::new();
    match run(&cli, &launcher, Host::default()) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("{} {}", style("error:").red().bold(), e);
            std::process::exit(e.exit_code());
        }
    }
}

/// Detect the init system, then either report it, reject the arguments,
/// or run the pairs. Returns the process exit code.
fn run<L: ProcessLauncher + ?Sized>(cli: &Cli, launcher: &L, host: Host) -> Result<i32, Error> {
    let family = InitDetector::new(host.detector, launcher).detect()?;
    if !family.is_known() {
        display::print_unknown_init();
        return Ok(0);
    }
    let tools = host.tools.resolve();

    if cli.show_init_name {
        commands::init_name::run(family, &tools, cli.json)?;
        return Ok(0);
    }

    let pairs = match parse_pairs(&cli.pairs) {
        Ok(pairs) => pairs,
        Err(e) => {
            display::print_usage_error(&e.to_string());
            commands::help::show(launcher);
            return Ok(EXIT_USAGE);
        }
    };

    let backend = InitBackend::for_family(family, &tools)?;
    if cli.dry_run {
        commands::pairs::run_dry(&backend, &pairs)
    } else {
        commands::pairs::run(&backend, &pairs, launcher)
    }
}
