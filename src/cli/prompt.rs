//! Interactive album selection on the terminal.
//!
//! Candidates are listed as a numbered menu on stderr, so stdout only ever
//! carries the final summary.

use std::io::Write;

use async_trait::async_trait;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use crate::lookup::CandidateRelease;
use crate::workflow::{Chooser, SelectionError};

/// Reads the selection from stdin.
pub struct PromptChooser;

#[async_trait]
impl Chooser for PromptChooser {
    async fn choose_one(&self, candidates: &[CandidateRelease]) -> Result<String, SelectionError> {
        choose_from(candidates, BufReader::new(tokio::io::stdin()), std::io::stderr()).await
    }
}

/// Show the menu on `out` and read numbers from `input` until one is valid.
///
/// `q` or end of input cancels.
pub async fn choose_from<R, W>(
    candidates: &[CandidateRelease],
    input: R,
    mut out: W,
) -> Result<String, SelectionError>
where
    R: AsyncBufRead + Unpin + Send,
    W: Write + Send,
{
    let io_err = |e: std::io::Error| SelectionError::Input(e.to_string());

    writeln!(out, "Select an album:").map_err(io_err)?;
    for line in menu_lines(candidates) {
        writeln!(out, "{}", line).map_err(io_err)?;
    }

    let mut lines = input.lines();
    loop {
        write!(out, "Number [1-{}], q to quit: ", candidates.len()).map_err(io_err)?;
        out.flush().map_err(io_err)?;

        let Some(line) = lines.next_line().await.map_err(io_err)? else {
            return Err(SelectionError::Cancelled);
        };
        let line = line.trim();
        if line.eq_ignore_ascii_case("q") {
            return Err(SelectionError::Cancelled);
        }

        match parse_choice(line, candidates.len()) {
            Some(index) => return Ok(candidates[index].id.clone()),
            None => writeln!(out, "'{}' is not a number between 1 and {}", line, candidates.len())
                .map_err(io_err)?,
        }
    }
}

/// Numbered menu entries, right-aligned to the widest number.
pub fn menu_lines(candidates: &[CandidateRelease]) -> Vec<String> {
    let width = candidates.len().to_string().len();
    candidates
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let year = c
                .first_release_date
                .as_deref()
                .map(|d| format!(" ({})", crate::collection::year_of(d)))
                .unwrap_or_default();
            format!("  {:>width$}) {}{}", i + 1, c.display_name(), year, width = width)
        })
        .collect()
}

/// 1-based menu number to a candidate index.
pub fn parse_choice(input: &str, count: usize) -> Option<usize> {
    let number: usize = input.trim().parse().ok()?;
    (1..=count).contains(&number).then(|| number - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates() -> Vec<CandidateRelease> {
        vec![
            CandidateRelease {
                id: "rg-1".to_string(),
                title: Some("A Night at the Opera".to_string()),
                artist_name: Some("Queen".to_string()),
                first_release_date: Some("1975-11-21".to_string()),
            },
            CandidateRelease {
                id: "rg-2".to_string(),
                title: Some("A Day at the Races".to_string()),
                artist_name: None,
                first_release_date: None,
            },
        ]
    }

    #[test]
    fn test_parse_choice() {
        assert_eq!(parse_choice("1", 2), Some(0));
        assert_eq!(parse_choice(" 2 ", 2), Some(1));
        assert_eq!(parse_choice("0", 2), None);
        assert_eq!(parse_choice("3", 2), None);
        assert_eq!(parse_choice("two", 2), None);
        assert_eq!(parse_choice("-1", 2), None);
    }

    #[test]
    fn test_menu_lines() {
        let lines = menu_lines(&candidates());
        assert_eq!(lines[0], "  1) A Night at the Opera - Queen (1975)");
        assert_eq!(lines[1], "  2) A Day at the Races - Unknown Artist");
    }

    #[test]
    fn test_menu_alignment() {
        let many: Vec<CandidateRelease> = (0..12)
            .map(|i| CandidateRelease {
                id: format!("rg-{}", i),
                ..Default::default()
            })
            .collect();
        let lines = menu_lines(&many);
        assert!(lines[0].starts_with("   1) "));
        assert!(lines[11].starts_with("  12) "));
    }

    #[tokio::test]
    async fn test_choose_reprompts_until_valid() {
        let mut out = Vec::new();
        let input: &[u8] = b"nope\n9\n2\n";

        let id = choose_from(&candidates(), input, &mut out).await.unwrap();

        assert_eq!(id, "rg-2");
        let shown = String::from_utf8(out).unwrap();
        assert!(shown.contains("'nope' is not a number between 1 and 2"));
        assert!(shown.contains("'9' is not a number between 1 and 2"));
    }

    #[tokio::test]
    async fn test_choose_quit_cancels() {
        let input: &[u8] = b"q\n";
        let result = choose_from(&candidates(), input, Vec::new()).await;
        assert!(matches!(result, Err(SelectionError::Cancelled)));
    }

    #[tokio::test]
    async fn test_choose_end_of_input_cancels() {
        let input: &[u8] = b"";
        let result = choose_from(&candidates(), input, Vec::new()).await;
        assert!(matches!(result, Err(SelectionError::Cancelled)));
    }
}
