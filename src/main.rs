use clap::{CommandFactory, Parser};
use colored::*;
use hytek::cli::{args::Args, commands};
use std::process;

fn main() {
    let args = Args::parse();

    // If no subcommand was provided, show help and exit cleanly
    if args.command.is_none() {
        if let Err(error) = Args::command().print_help() {
            eprintln!("Failed to print help: {}", error);
            process::exit(1);
        }
        println!();
        process::exit(0);
    }

    let result = commands::setup_logging(&args).and_then(|()| commands::run(args));

    if let Err(error) = result {
        eprintln!("{} {:#}", "Error:".red().bold(), error);
        process::exit(1);
    }
}
