use numscan_core::error::NumscanError;
use serde::Serialize;

pub fn print<T: Serialize>(value: &T) -> Result<(), NumscanError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
