use std::process::ExitCode;

use blockmap_tools::cli;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let invocation = match cli::parse(&args) {
        Ok(Some(invocation)) => invocation,
        Ok(None) => {
            println!("{}", cli::USAGE);
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            eprintln!("{}", cli::USAGE);
            return ExitCode::from(2);
        }
    };

    tracing::info!(
        "{} {} -> {}",
        invocation.operation.transform().name(),
        invocation.input.display(),
        invocation.output.display(),
    );

    match blockmap_tools::run(&invocation) {
        Ok(_) => {
            println!("{}", invocation.operation.success_message(&invocation.output));
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{} failed", invocation.operation.transform().name());
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
