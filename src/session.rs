//! The interactive prompt loop.
//!
//! Generic over tokio's async reader/writer traits so it runs against stdin
//! and stdout in the binary and against in-memory buffers in tests.

use log::{debug, warn};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::calculator::Calculator;
use crate::config::Config;
use crate::error::Result;
use crate::input;
use crate::report;

pub const BANNER: &str =
    "This program calculates the median and mode of a dataset of whole numbers.";

pub fn prompt(config: &Config) -> String {
    format!(
        "Enter a dataset (comma separated, e.g. 1,2,3,4,5) or '{}' to quit: ",
        config.quit
    )
}

/// Prompts for datasets until the quit sentinel or end of input, writing a
/// report for each one. Returns how many datasets were reported.
///
/// A line that fails to decode or parse is answered with `Error: ...` and the loop
/// carries on. Only I/O failures end the session early.
pub async fn run<R, W>(mut reader: R, mut writer: W, config: &Config) -> Result<usize>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    writer.write_all(format!("{}\n", BANNER).as_bytes()).await?;

    let mut buf = Vec::new();
    let mut reported = 0usize;
    loop {
        writer.write_all(prompt(config).as_bytes()).await?;
        writer.flush().await?;

        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            debug!("input closed");
            break;
        }

        let outcome = input::decode_line(&buf).and_then(|line| {
            if input::is_quit(line, &config.quit) {
                Ok(None)
            } else {
                process(line, config).map(Some)
            }
        });

        match outcome {
            Ok(None) => {
                debug!("quit sentinel received");
                break;
            }
            Ok(Some(output)) => {
                writer.write_all(output.as_bytes()).await?;
                reported += 1;
            }
            Err(err) => {
                warn!("rejected dataset {:?}: {}", String::from_utf8_lossy(&buf), err);
                writer
                    .write_all(format!("Error: {}\n", err).as_bytes())
                    .await?;
            }
        }
    }

    writer.flush().await?;
    Ok(reported)
}

fn process(line: &str, config: &Config) -> Result<String> {
    let calculator = Calculator::new(input::parse_sample(line)?);
    let summary = calculator.summary()?;

    if config.json {
        let mut output = report::render_json(&summary)?;
        output.push('\n');
        Ok(output)
    } else {
        Ok(report::render(&summary, config.precision))
    }
}
