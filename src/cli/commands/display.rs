//! Shared output helpers for commands.

use serde::Serialize;

use crate::error::Result;
use crate::ui::UserInterface;

/// Print `value` as pretty JSON, whatever the output mode.
pub fn print_json<T: Serialize + ?Sized>(ui: &mut dyn UserInterface, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(anyhow::Error::from)?;
    ui.data(&json);
    Ok(())
}

/// `yes` / `no` for boolean fields.
pub fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}
