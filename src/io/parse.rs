//! Tile and stencil text formats
//!
//! Tiles are written as blocks separated by blank lines, each opening with a
//! `Tile <id>:` header followed by N rows of `#` and `.`:
//!
//! ```text
//! Tile 2311:
//! ..##.
//! ##..#
//! ...
//! ```

use crate::algorithm::scanner::Stencil;
use crate::io::configuration::{EMPTY_PIXEL, FILLED_PIXEL, STENCIL_MARKER, TILE_HEADER_KEYWORD};
use crate::io::error::{Result, StitchError, WithPath};
use crate::spatial::bitmap::render;
use crate::spatial::tiles::{Tile, TileId};
use ndarray::Array2;
use std::path::Path;

// Rows collected for a tile whose block hasn't ended yet
struct PendingTile {
    id: TileId,
    header_line: usize,
    rows: Vec<Vec<bool>>,
}

impl PendingTile {
    fn finish(self) -> Result<Tile> {
        let side = self.rows.len();
        if side == 0 {
            return Err(parse_error(
                self.header_line,
                format!("tile {} has no pixel rows", self.id),
            ));
        }
        if let Some((offset, row)) = self
            .rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != side)
        {
            return Err(parse_error(
                self.header_line + 1 + offset,
                format!(
                    "row has {} pixels but tile {} has {side} rows",
                    row.len(),
                    self.id
                ),
            ));
        }
        let pixels = Array2::from_shape_vec((side, side), self.rows.concat())
            .map_err(|error| parse_error(self.header_line, error.to_string()))?;
        Tile::new(self.id, pixels)
    }
}

const fn parse_error(line: usize, reason: String) -> StitchError {
    StitchError::Parse { line, reason }
}

fn parse_header(rest: &str, line: usize) -> Result<TileId> {
    let number = rest
        .trim()
        .strip_suffix(':')
        .ok_or_else(|| parse_error(line, "tile header must end with ':'".to_string()))?;
    number
        .trim()
        .parse::<TileId>()
        .map_err(|error| parse_error(line, format!("invalid tile id '{number}': {error}")))
}

fn parse_row(text: &str, line: usize) -> Result<Vec<bool>> {
    text.chars()
        .enumerate()
        .map(|(col, pixel)| match pixel {
            FILLED_PIXEL => Ok(true),
            EMPTY_PIXEL => Ok(false),
            other => Err(parse_error(
                line,
                format!("unexpected character '{other}' in column {}", col + 1),
            )),
        })
        .collect()
}

/// Parse tile blocks in input order
///
/// # Errors
///
/// Returns a `Parse` error naming the line of:
/// - A header that isn't `Tile <id>:`
/// - Pixel rows before the first header
/// - A pixel other than `#` or `.`
/// - A block that is empty or not square
///
/// Tiles smaller than the minimum side are rejected as invalid input.
pub fn parse_tiles(text: &str) -> Result<Vec<Tile>> {
    let mut tiles = Vec::new();
    let mut pending: Option<PendingTile> = None;

    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        let content = raw.trim_end();

        if content.is_empty() {
            if let Some(block) = pending.take() {
                tiles.push(block.finish()?);
            }
            continue;
        }

        if let Some(rest) = content.strip_prefix(TILE_HEADER_KEYWORD) {
            if let Some(block) = pending.take() {
                tiles.push(block.finish()?);
            }
            pending = Some(PendingTile {
                id: parse_header(rest, line)?,
                header_line: line,
                rows: Vec::new(),
            });
            continue;
        }

        let Some(block) = pending.as_mut() else {
            return Err(parse_error(
                line,
                "pixel row before any tile header".to_string(),
            ));
        };
        block.rows.push(parse_row(content, line)?);
    }

    if let Some(block) = pending.take() {
        tiles.push(block.finish()?);
    }
    Ok(tiles)
}

/// Parse a stencil, one row per line
///
/// Blank lines before the first and after the last row are ignored; blank
/// lines between rows are kept as all don't-care rows.
///
/// # Errors
///
/// Returns an error if the text has no rows or no `#` cells
pub fn parse_stencil(text: &str) -> Result<Stencil> {
    let rows: Vec<&str> = text
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .collect();
    let first = rows.iter().position(|row| !row.trim().is_empty());
    let last = rows.iter().rposition(|row| !row.trim().is_empty());
    let body: &[&str] = match (first, last) {
        (Some(first), Some(last)) => rows.get(first..=last).unwrap_or_default(),
        _ => &[],
    };
    Stencil::from_rows(body, STENCIL_MARKER)
}

/// Render tiles in the format read by `parse_tiles`
pub fn format_tiles(tiles: &[Tile]) -> String {
    tiles
        .iter()
        .map(|tile| format!("{TILE_HEADER_KEYWORD} {}:\n{}", tile.id(), render(tile.pixels())))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Read and parse a puzzle file
///
/// # Errors
///
/// Returns an error if the file can't be read or doesn't parse
pub fn load_tiles(path: &Path) -> Result<Vec<Tile>> {
    let text = std::fs::read_to_string(path).with_path(path, "read puzzle")?;
    parse_tiles(&text)
}

/// Read and parse a stencil file
///
/// # Errors
///
/// Returns an error if the file can't be read or holds no valid stencil
pub fn load_stencil(path: &Path) -> Result<Stencil> {
    let text = std::fs::read_to_string(path).with_path(path, "read stencil")?;
    parse_stencil(&text)
}
