//! # Interactive Command
//!
//! Reads one amount per line until the input closes.
//!
//! ```text
//! > $1,234.56
//! Minor units: 123456
//! Formatted: 1234.56
//! > ten dollars
//! Error: Invalid characters in amount: "ten dollars"
//! > ^D
//! ```

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::info;

use super::normalize_logged;
use crate::config::CliConfig;
use crate::error::CliResult;

/// Runs the read-normalize-print loop. Returns the number of lines handled.
pub async fn run_interactive<R, W>(reader: R, out: &mut W, config: &CliConfig) -> CliResult<usize>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();
    let mut handled = 0;

    loop {
        if !config.prompt.is_empty() {
            out.write_all(config.prompt.as_bytes()).await?;
            out.flush().await?;
        }

        let Some(line) = lines.next_line().await? else {
            break;
        };
        handled += 1;

        let response = match normalize_logged(line.trim(), config) {
            Ok(money) => format!("Minor units: {}\nFormatted: {money}\n", money.cents()),
            Err(e) => format!("Error: {e}\n"),
        };
        out.write_all(response.as_bytes()).await?;
    }

    if !config.prompt.is_empty() {
        // leave the terminal on a fresh line after the final prompt
        out.write_all(b"\n").await?;
    }
    out.flush().await?;

    info!(lines = handled, "Input closed");
    Ok(handled)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet() -> CliConfig {
        CliConfig {
            prompt: String::new(),
            ..CliConfig::default()
        }
    }

    #[tokio::test]
    async fn test_reads_until_eof() {
        let input: &[u8] = b"  $1,234.56  \n($500.25)\n";
        let mut out = Vec::new();

        let handled = run_interactive(input, &mut out, &quiet()).await.unwrap();

        assert_eq!(handled, 2);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Minor units: 123456\nFormatted: 1234.56\n\
             Minor units: -50025\nFormatted: -500.25\n"
        );
    }

    #[tokio::test]
    async fn test_errors_do_not_stop_the_loop() {
        let input: &[u8] = b"\nten dollars\n7\n";
        let mut out = Vec::new();

        let handled = run_interactive(input, &mut out, &quiet()).await.unwrap();

        assert_eq!(handled, 3);
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Error: Input must be a non-empty string");
        assert_eq!(lines[1], "Error: Invalid characters in amount: \"ten dollars\"");
        assert_eq!(lines[2], "Minor units: 700");
    }

    #[tokio::test]
    async fn test_prompt_is_written() {
        let input: &[u8] = b"1\n";
        let mut out = Vec::new();
        let config = CliConfig {
            prompt: "amount? ".to_string(),
            ..CliConfig::default()
        };

        run_interactive(input, &mut out, &config).await.unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "amount? Minor units: 100\nFormatted: 1.00\namount? \n"
        );
    }

    #[tokio::test]
    async fn test_empty_stream() {
        let input: &[u8] = b"";
        let mut out = Vec::new();
        assert_eq!(run_interactive(input, &mut out, &quiet()).await.unwrap(), 0);
        assert!(out.is_empty());
    }
}
