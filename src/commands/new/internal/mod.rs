//! Internal implementation for the new-project command

pub mod prompt;
pub mod report;
pub mod resolve;

use anyhow::Result;

use seedling::error::FAILURE_EXIT_CODE;
use seedling::{Config, Generator};

use self::prompt::Prompt;
use super::NewArgs;

/// Main execution logic for the new-project command
pub fn execute_new(args: NewArgs, prompt: &mut dyn Prompt) -> Result<i32> {
    let spec = match resolve::resolve(&args, prompt) {
        Ok(spec) => spec,
        Err(e) => {
            report::print_fatal(&e);
            return Ok(FAILURE_EXIT_CODE);
        }
    };

    let config = Config {
        quiet: args.json,
        ..Config::from_env()
    };

    match Generator::new(config).generate(&spec, &args.parent) {
        Ok(result) => {
            if args.json {
                report::print_json(&result)?;
            } else {
                report::print_summary(&spec, &result);
            }
            Ok(0)
        }
        Err(e) => {
            report::print_failure(&e, args.json)?;
            Ok(e.exit_code())
        }
    }
}
