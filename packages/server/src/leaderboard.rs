//! Wiping the leaderboard.
//!
//! Deleting every run is irreversible, so it is gated on the operator typing
//! [`CONFIRMATION_PHRASE`] exactly.

use std::io::{self, BufRead, Write};

use crate::db::StatementExecutor;
use crate::error::Result;
use crate::schema::GAME_RUNS;

pub const CONFIRMATION_PHRASE: &str = "CLEAREVERYTHING";

pub fn confirmation_prompt() -> String {
    format!(
        "⚠️ WARNING: This will delete ALL leaderboard records for ALL players. Type \"{}\" to confirm: ",
        CONFIRMATION_PHRASE
    )
}

/// Prompt on `output`, read one line from `input`, and compare it with the
/// confirmation phrase.
///
/// Only the line terminator is stripped: surrounding spaces or a different
/// case do not match. End of input counts as a mismatch.
pub fn read_confirmation<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<bool> {
    output.write_all(confirmation_prompt().as_bytes())?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(false);
    }

    let answer = line
        .strip_suffix('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .unwrap_or(line.as_str());

    Ok(answer == CONFIRMATION_PHRASE)
}

/// Delete every row of `game_runs`. Returns the number of rows deleted.
pub async fn clear_game_runs<E: StatementExecutor + ?Sized>(executor: &E) -> Result<u64> {
    let sql = format!("DELETE FROM {}", GAME_RUNS);
    let rows = executor.execute(&sql).await?;
    tracing::info!(table = GAME_RUNS, rows, "Cleared leaderboard");
    Ok(rows)
}
