#![allow(clippy::doc_markdown)]
#![doc = include_str!("../README.md")]

mod api;
mod cli;
mod core;
mod error;
mod fmt;
mod prelude;
mod quantity;
mod render;
mod tables;

use std::process::ExitCode;

use clap::{Parser, crate_version};

use crate::{
    cli::{Args, Command, chart, model, summary},
    prelude::*,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().with_writer(std::io::stderr).without_time().compact().init();
    info!(version = crate_version!(), "starting…");

    let args = Args::parse();
    let result = match args.command {
        Command::Summary(args) => summary(&args).await,
        Command::Chart(args) => chart(&args).await,
        Command::Model(args) => model(&args).await,
    };

    match result {
        Ok(()) => {
            info!("done!");
            ExitCode::SUCCESS
        }
        Err(error) => {
            error!("{error:#}");
            ExitCode::FAILURE
        }
    }
}
