use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;

	let args = tierlens_api::Args::parse();

	tierlens_api::run(args).await
}
