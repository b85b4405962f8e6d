use std::time::Duration;

use opencall_core::{list_operations, OperationEntry};
use opencall_exec::{load_spec, ReqwestHttpClient};
use serde::Serialize;

use crate::cmd::exit_code_for;
use crate::exit_codes;
use crate::output::{print_error, print_result, OutputFormat};
use crate::{OutputArgs, SpecArgs};

#[derive(Serialize)]
struct OperationsResult {
    operations: Vec<OperationEntry>,
}

pub async fn operations_cmd(spec: SpecArgs, output: OutputArgs) -> i32 {
    let client = ReqwestHttpClient::default();
    let timeout = Duration::from_millis(spec.timeout);

    let doc = match load_spec(&client, &spec.spec_url, timeout).await {
        Ok(doc) => doc,
        Err(e) => {
            print_error(
                output.format,
                output.quiet,
                &format!("failed to load specification: {e}"),
            );
            return exit_code_for(&e);
        }
    };

    let operations = list_operations(&doc);
    if output.format == OutputFormat::Text && !output.quiet {
        for op in &operations {
            println!("{}  {}", op.value, op.name);
        }
    } else {
        print_result(output.format, output.quiet, &OperationsResult { operations });
    }
    exit_codes::SUCCESS
}
