use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing::error;

mod commands;
mod logging;

const DEFAULT_EXECUTABLE: &str = "Wow.exe";

#[derive(Parser)]
#[command(name = "fovfix")]
#[command(version, about = "Keeps the game's field of view matched to its window shape")]
struct Cli {
    /// File receiving diagnostic output ("-" for stderr)
    #[arg(long, global = true, env = "FOVFIX_LOG", default_value = logging::DEFAULT_LOG_FILE)]
    log_file: String,

    /// Used when no subcommand is given
    #[command(flatten)]
    run: RunArgs,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    /// The subcommand to execute, `run` when none was given.
    fn into_command(self) -> Command {
        self.command.unwrap_or(Command::Run(self.run))
    }
}

#[derive(Args)]
struct RunArgs {
    /// Game executable
    #[arg(long, env = "FOVFIX_EXE", default_value = DEFAULT_EXECUTABLE)]
    exe: PathBuf,
}

#[derive(Subcommand)]
enum Command {
    /// Launch the game and keep its FoV synchronized (default)
    Run(RunArgs),
    /// Synchronize an already running game
    Attach {
        /// Process ID of the game
        #[arg(long)]
        pid: u32,
    },
    /// Print the FoV used for a window size
    Calc {
        #[arg(long)]
        width: u32,
        #[arg(long)]
        height: u32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(&cli.log_file)?;

    let result = match cli.into_command() {
        Command::Run(args) => commands::run::run(&args.exe),
        Command::Attach { pid } => commands::attach::run(pid),
        Command::Calc { width, height } => commands::calc::run(width, height),
    };

    // Startup failures must end up in the log file, not only on stderr
    if let Err(e) = &result {
        error!("{e:#}");
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_defaults_to_run() {
        let cli = Cli::try_parse_from(["fovfix"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.log_file, logging::DEFAULT_LOG_FILE);
        assert!(matches!(cli.into_command(), Command::Run(_)));
    }

    #[test]
    fn test_default_run_reads_exe_from_environment() {
        let exe = r"D:\wow\Wow.exe";
        // SAFETY: no other test reads or writes FOVFIX_EXE without an explicit --exe.
        unsafe { std::env::set_var("FOVFIX_EXE", exe) };
        let cli = Cli::try_parse_from(["fovfix"]);
        unsafe { std::env::remove_var("FOVFIX_EXE") };

        match cli.unwrap().into_command() {
            Command::Run(args) => assert_eq!(args.exe, PathBuf::from(exe)),
            _ => panic!("expected run"),
        }
    }

    #[test]
    fn test_top_level_exe_without_subcommand() {
        let cli = Cli::try_parse_from(["fovfix", "--exe", r"C:\Games\Wow.exe"]).unwrap();
        match cli.into_command() {
            Command::Run(args) => assert_eq!(args.exe, PathBuf::from(r"C:\Games\Wow.exe")),
            _ => panic!("expected run"),
        }
    }

    #[test]
    fn test_run_with_exe() {
        let cli = Cli::try_parse_from(["fovfix", "run", "--exe", r"C:\Games\Wow.exe"]).unwrap();
        match cli.into_command() {
            Command::Run(args) => assert_eq!(args.exe, PathBuf::from(r"C:\Games\Wow.exe")),
            _ => panic!("expected run"),
        }
    }

    #[test]
    fn test_attach_requires_pid() {
        assert!(Cli::try_parse_from(["fovfix", "attach"]).is_err());

        let cli = Cli::try_parse_from(["fovfix", "attach", "--pid", "1234"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Attach { pid: 1234 })));
    }

    #[test]
    fn test_global_log_file() {
        let args = ["fovfix", "calc", "--width", "16", "--height", "9", "--log-file", "-"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.log_file, "-");
        assert!(matches!(
            cli.command,
            Some(Command::Calc {
                width: 16,
                height: 9
            })
        ));
    }
}
