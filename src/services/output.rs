use crate::domain::models::JsonOut;
use serde::Serialize;

fn emit_pretty<T: Serialize>(data: T) -> anyhow::Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(&JsonOut { ok: true, data })?
    );
    Ok(())
}

/// Lists as a JSON array, or one text row per item.
pub fn print_out<T: Serialize>(
    json: bool,
    data: &[T],
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        return emit_pretty(data);
    }
    for d in data {
        println!("{}", row(d));
    }
    Ok(())
}

pub fn print_one<T: Serialize>(
    json: bool,
    data: T,
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        return emit_pretty(data);
    }
    println!("{}", row(&data));
    Ok(())
}

/// Compact JSON, one event per line, for the interactive session.
pub fn print_line<T: Serialize>(ok: bool, data: T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string(&JsonOut { ok, data })?);
    Ok(())
}
