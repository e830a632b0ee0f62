use clap::Parser;
use archaeologist::config::constants::EXIT_PIPELINE_ERROR;
use archaeologist::structs::cli::Cli;
use archaeologist::workers::command_runner::CommandRunner;

#[tokio::main]
async fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            // --help and --version print to stdout and are not failures
            std::process::exit(if e.use_stderr() { EXIT_PIPELINE_ERROR } else { 0 });
        }
    };

    let code = CommandRunner::new().run_command(cli.command).await;
    std::process::exit(code);
}
