use std::io::Write;

use atm::prelude::*;

fn main() {
    CliApp::new("atm").run(|config, writer| run_teller_script(config, writer));
}

/// Replay a teller script and print the resulting account summary
fn run_teller_script<W: Write>(config: &Config, writer: &mut W) -> Result<(), AppError> {
    let commands = CsvCommandReader::<_, FixedPoint>::from_path(&config.script)?;
    let ledger = TellerLedger::new();

    let (completed, applied, ledger) = if config.abort_on_error {
        let mut session = ScriptSession::new(ledger, AbortOnError);
        let completed = session.run(commands);
        (completed, session.applied(), session.into_ledger())
    } else {
        let mut session = ScriptSession::new(ledger, SkipErrors);
        let completed = session.run(commands);
        (completed, session.applied(), session.into_ledger())
    };

    if !completed {
        return Err(AppError::Aborted { applied });
    }

    write_summary(ledger.accounts(), writer)?;
    Ok(())
}
