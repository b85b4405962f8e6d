use clap::Subcommand;

use crate::args::*;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List every operation the specification exposes.
    Operations {
        #[command(flatten)]
        spec: SpecArgs,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Execute one or more calls against the described API.
    Call {
        #[command(flatten)]
        spec: SpecArgs,
        #[command(flatten)]
        call: CallArgs,
        #[command(flatten)]
        output: OutputArgs,
    },
}
