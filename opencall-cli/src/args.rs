use std::path::PathBuf;

use clap::Args;

use crate::output::OutputFormat;

#[derive(Debug, Args, Clone)]
pub struct OutputArgs {
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,
    #[arg(long, short, global = true)]
    pub quiet: bool,
}

#[derive(Debug, Args, Clone)]
pub struct SpecArgs {
    /// URL of the OpenAPI/Swagger specification.
    #[arg(long = "spec-url", value_name = "URL")]
    pub spec_url: String,

    /// Override the server URL from the specification. Use this when the
    /// spec has no server URL or you need a different endpoint.
    #[arg(long = "base-url", value_name = "URL")]
    pub base_url: Option<String>,

    /// Request timeout in milliseconds, honored by the transport.
    #[arg(long, default_value_t = 30_000)]
    pub timeout: u64,
}

#[derive(Debug, Args, Clone)]
pub struct CallArgs {
    /// Operation selector, `method:path` (see the `operations` command).
    #[arg(long)]
    pub operation: Option<String>,

    /// Request parameter, `kind:name=value` with kind one of
    /// query|path|header|cookie. Repeatable.
    #[arg(long = "param", value_name = "KIND:NAME=VALUE")]
    pub params: Vec<String>,

    /// Literal JSON request body; empty text and `{}` mean no body.
    #[arg(long)]
    pub body: Option<String>,

    /// Path to a JSON object of credential values.
    #[arg(long)]
    pub credentials: Option<PathBuf>,

    /// Path to a JSON array of call items for batch execution.
    #[arg(long)]
    pub items: Option<PathBuf>,

    /// Record failed items as `{"error": ...}` results instead of aborting.
    #[arg(long)]
    pub continue_on_fail: bool,
}
