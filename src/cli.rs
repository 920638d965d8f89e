use clap::builder::styling::{AnsiColor, Color, Style, Styles};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::path::PathBuf;

/// Execution provider for ONNX Runtime
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Provider {
	/// Auto-detect best available (TensorRT → CUDA → CoreML → XNNPACK → CPU)
	#[default]
	Auto,
	/// CPU only
	Cpu,
	/// NVIDIA CUDA GPU
	Cuda,
	/// NVIDIA TensorRT (optimized inference)
	Tensorrt,
	/// Apple CoreML (macOS only)
	Coreml,
	/// XNNPACK (optimized CPU kernels)
	Xnnpack,
}

fn styles() -> Styles {
	let magenta = Some(Color::Ansi(AnsiColor::Magenta));
	Styles::styled()
		.header(Style::new().bold().fg_color(magenta))
		.usage(Style::new().bold().fg_color(magenta))
		.literal(Style::new().fg_color(magenta))
		.placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow))))
		.valid(Style::new().fg_color(magenta))
		.invalid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red))))
}

#[derive(Parser, Debug)]
#[command(
	name = "tunefind",
	author,
	version,
	about = "Identify a song from a description or hummed lyrics",
	styles = styles(),
	disable_help_subcommand = true,
	after_help = format!(
		"{title}
  {bin} {search}  {search_args}   {search_desc}
  {bin} {hum}     {hum_args}        {hum_desc}
  {bin} {hum}     {hum_file_args}      {hum_file_desc}
  {bin} {repl}    {repl_args}               {repl_desc}",
		title = "Examples:".bright_magenta().bold(),
		bin = "tunefind".bright_magenta(),
		search = "search".yellow(),
		search_args = "\"I feel like dancing tonight\"",
		search_desc = "Identify from a description".dimmed(),
		hum = "hum".yellow(),
		hum_args = "\"yoru no machi wo\"",
		hum_desc = "Identify from transcribed lyrics".dimmed(),
		hum_file_args = "-f transcript.txt",
		hum_file_desc = "Transcript read from a file".dimmed(),
		repl = "repl".yellow(),
		repl_args = "",
		repl_desc = "Interactive session".dimmed(),
	),
)]
pub struct Cli {
	/// Enable verbose debug output
	#[arg(short = 'v', long = "verbose", global = true)]
	pub verbose: bool,

	/// Execution provider: auto, cpu, cuda, tensorrt, coreml, xnnpack
	#[arg(short = 'p', long = "provider", global = true, default_value = "auto")]
	pub provider: Provider,

	/// Catalog snapshot directory (songs.json, lines.json, embeddings.msgpack)
	#[arg(short = 'D', long = "data", global = true, value_name = "DIR")]
	pub data: Option<PathBuf>,

	/// Directory holding text_model.onnx and tokenizer.json
	#[arg(short = 'm', long = "models", global = true, value_name = "DIR")]
	pub models: Option<PathBuf>,

	#[command(subcommand)]
	pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
	/// Identify a song from a description or remembered lyric
	Search {
		/// Free-text query
		#[arg(value_name = "QUERY")]
		query: String,

		/// Print the result as JSON
		#[arg(long = "json")]
		json: bool,
	},

	/// Identify a song from transcribed humming or singing
	Hum {
		/// Transcribed text
		#[arg(value_name = "TRANSCRIPT", conflicts_with = "file")]
		transcript: Option<String>,

		/// Read the transcript from a file
		#[arg(short = 'f', long = "file", value_name = "PATH")]
		file: Option<PathBuf>,

		/// Print the result as JSON
		#[arg(long = "json")]
		json: bool,
	},

	/// Interactive session (prefix a line with "hum " for transcript mode)
	Repl,

	/// Show catalog statistics
	Info,

	/// Show help for a subcommand
	Help {
		/// Subcommand name
		subcommand: Option<String>,
	},
}
