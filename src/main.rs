#![allow(missing_docs)]

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "boxdoc", about = "Box-document text format tools")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Print document structure and statistics.
	Show(cmd::show::Args),
	/// Print the literal at a dotted path.
	Get(cmd::get::Args),
	/// Insert or overwrite the item at a dotted path.
	Set(cmd::set::Args),
	/// Parse a document and re-render it canonically.
	Fmt(cmd::fmt::Args),
}

fn main() {
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> boxdoc::doc::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Show(args) => cmd::show::run(args),
		Commands::Get(args) => cmd::get::run(args),
		Commands::Set(args) => cmd::set::run(args),
		Commands::Fmt(args) => cmd::fmt::run(args),
	}
}
