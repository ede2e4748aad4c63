//! Application entry point and dispatch.

use anyhow::Result;
use tracing::debug;

use strassen_cli::output::{to_json, write_to_file};
use strassen_cli::presenter::CLIResultPresenter;
use strassen_cli::ui::print_agreement;
use strassen_core::registry::DefaultFactory;
use strassen_core::Matrix;
use strassen_orchestration::interfaces::{MultiplicationResult, ResultPresenter};
use strassen_orchestration::orchestrator::{analyze_comparison_results, execute_multiplications};
use strassen_orchestration::selection::get_multipliers_to_run;

use crate::config::AppConfig;
use crate::input::load_operands;
use crate::version::full_version;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        strassen_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    let (a, b) = load_operands(config.input.as_deref())?;
    let opts = config.options();
    debug!(left = %a.dimensions(), right = %b.dimensions(), ?opts, "operands loaded");

    let factory = DefaultFactory::<f64>::with_options(opts.clone());
    let multipliers = get_multipliers_to_run(&config.strategy, &factory)?;
    let results = execute_multiplications(&multipliers, &a, &b);

    // Every strategy failing means the operands themselves are at fault
    if let Some(err) = first_error_if_all_failed(&results) {
        return Err(err.into());
    }

    let presenter = CLIResultPresenter::new(config.verbose, config.quiet);
    let comparison = if results.len() > 1 {
        analyze_comparison_results(&results, opts.tolerance)
    } else {
        Ok(())
    };

    let Some((strategy, product)) = results
        .iter()
        .find_map(|r| r.product().map(|p| (r.strategy.as_str(), p)))
    else {
        anyhow::bail!("no strategy produced a result");
    };

    if config.json {
        println!("{}", to_json(strategy, product)?);
    } else {
        present(config, &presenter, &results, &a, &b);
    }

    comparison?;
    if results.len() > 1 && !config.quiet && !config.json {
        print_agreement(results.len(), opts.tolerance);
    }

    // Write to file if requested
    if let Some(ref path) = config.output {
        write_to_file(path, strategy, product)?;
    }

    Ok(())
}

fn present(
    config: &AppConfig,
    presenter: &CLIResultPresenter,
    results: &[MultiplicationResult<f64>],
    a: &Matrix<f64>,
    b: &Matrix<f64>,
) {
    if config.details && !config.quiet {
        println!("{}", full_version());
        println!(
            "Operands: {} x {} (padded side {})",
            a.dimensions(),
            b.dimensions(),
            strassen_core::padded_size(a.dimensions(), b.dimensions()),
        );
    }

    for result in results {
        match &result.outcome {
            Ok(product) => {
                presenter.present_result(&result.strategy, product, result.duration, config.details);
                // Quiet mode prints a single product
                if config.quiet {
                    break;
                }
            }
            Err(e) => ResultPresenter::<f64>::present_error(
                presenter,
                &format!("{}: {e}", result.strategy),
            ),
        }
    }

    if results.len() > 1 {
        presenter.present_comparison(results);
    }
}

fn first_error_if_all_failed(
    results: &[MultiplicationResult<f64>],
) -> Option<strassen_core::MatrixError> {
    if results.iter().any(|r| r.outcome.is_ok()) {
        return None;
    }
    results.iter().find_map(|r| r.outcome.as_ref().err().cloned())
}
