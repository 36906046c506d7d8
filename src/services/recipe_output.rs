//! Writers the recipe CLI uses to hand a session over to the annotation tool.

use std::io::Write;

use crate::{
    errors::AppResult,
    models::domain::{Example, RecipeComponents},
};

/// Writes each example as one JSON line. Stops at the first stream error;
/// lines written before it are flushed and stay in `out`.
pub fn write_stream<I, W>(stream: I, out: &mut W) -> AppResult<usize>
where
    I: IntoIterator<Item = AppResult<Example>>,
    W: Write,
{
    let mut count = 0usize;

    for example in stream {
        let example = match example {
            Ok(example) => example,
            Err(e) => {
                out.flush()?;
                log::error!("Stream stopped after {} examples: {}", count, e);
                return Err(e);
            }
        };
        serde_json::to_writer(&mut *out, &example)?;
        out.write_all(b"\n")?;
        count += 1;
    }
    out.flush()?;

    Ok(count)
}

/// Writes the session settings (dataset, view and config) as pretty JSON.
pub fn write_settings<W: Write>(settings: &RecipeComponents<()>, out: &mut W) -> AppResult<()> {
    serde_json::to_writer_pretty(&mut *out, settings)?;
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}
