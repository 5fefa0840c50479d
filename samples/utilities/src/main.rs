//! Prints each documented utility example with its result or error.
//!
//! `TYPED_CURRY_CHECK_TYPES` and `TYPED_CURRY_VALIDATION` select how the
//! utilities check their arguments; `RUST_LOG` controls the trace output.

use std::process::ExitCode;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use typed_curry::prelude::*;
use utilities::Utilities;

fn install_subscriber() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,utilities=info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .init();
}

fn curry_config() -> CurryConfig {
    CurryConfig::from_env().unwrap_or_else(|error| {
        tracing::warn!(%error, "ignoring argument checking overrides");
        CurryConfig::default()
    })
}

fn main() -> ExitCode {
    install_subscriber();

    let config = curry_config();
    let utilities = match Utilities::new(config) {
        Ok(utilities) => utilities,
        Err(error) => {
            tracing::error!(%error, "utility definitions rejected");
            return ExitCode::FAILURE;
        }
    };

    let examples = utilities.examples();
    tracing::info!(
        check_types = config.check_types,
        validation = ?config.validation,
        examples = examples.len(),
        "utilities ready"
    );

    let mut failures = 0_usize;
    for (expression, result) in examples {
        match result {
            Ok(value) => println!("> {expression}\n{value}\n"),
            Err(error) => {
                failures += 1;
                println!("> {expression}\n! {error}\n");
            }
        }
    }
    tracing::info!(failures, "examples evaluated");

    ExitCode::SUCCESS
}
