mod args;
mod config;
mod reader;
mod script;
mod writer;

use atml::Result;

use script::Banks;

fn main() -> Result {
    config::configure_app()?;

    log::debug!("Application configured. Beginning process...");

    let paths = args::parse_input_args()?;
    log::debug!("Found roster {:?} and script {:?}", paths.roster, paths.script);

    let banks = script::load_banks(&paths.roster)?;

    script::run_script(&banks, &paths.script)?;

    log::debug!("Process complete. Beginning report...");

    report_to_std_out(&banks)?;

    log::debug!("Application finished successfully!");

    Ok(())
}

/// Build report from every bank's ledger, and write report to stdout
fn report_to_std_out(banks: &Banks) -> Result {
    let report = atml::build_report(banks.values().map(|bank| bank.as_ref()));
    log::debug!("Successfully built reports for {} accounts", report.len());

    let output = writer::write_report(&report)?;

    log::debug!("Writing to stdout: {output:?}");
    print!("{}", output);

    Ok(())
}
