use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<ExitCode> {
	color_eyre::install()?;

	let args = cardseek::Args::parse();

	cardseek::run(args).await
}
