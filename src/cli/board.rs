//! Board command implementation.

use super::{CliError, OutputFormat};
use fun_finance::render::{render_board, TileSnapshot};
use fun_finance::Board;

/// Execute the board command.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub(crate) fn execute(format: OutputFormat) -> Result<(), CliError> {
    print!("{}", format_board(&Board::standard(), format)?);
    Ok(())
}

fn format_board(board: &Board, format: OutputFormat) -> Result<String, CliError> {
    Ok(match format {
        OutputFormat::Text => render_board(board),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&TileSnapshot::board(board))?;
            json.push('\n');
            json
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_board() {
        let text = format_board(&Board::standard(), OutputFormat::Text).unwrap();
        assert!(text.starts_with(" 0 START"));
        assert_eq!(text.lines().count(), 24);
    }

    #[test]
    fn test_json_board() {
        let json = format_board(&Board::standard(), OutputFormat::Json).unwrap();
        let tiles: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(tiles.as_array().unwrap().len(), 24);
        assert_eq!(tiles[23]["name"], "401k");
        assert_eq!(tiles[23]["cost"], 280);
    }
}
