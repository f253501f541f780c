//! Wire shape spoken by the persistence/sync collaborator: an 8x8 grid of
//! `{value, crowned}` pairs, where value 0 = Empty, 1 = Red, 2 = Blue.
//!
//! The core performs no I/O; it only produces and consumes this encoding.
//! Decoding is the one fallible boundary of the crate.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::{Board, Piece, SIZE};

/// Errors decoding a wire grid back into a [`Board`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("invalid piece value {value} at row {row} col {col} (must be 0..=2)")]
    InvalidValue { value: u8, row: usize, col: usize },

    #[error("board grid must be 8x8, got {rows} rows")]
    BadRowCount { rows: usize },

    #[error("board grid must be 8x8, row {row} has {cols} columns")]
    BadColCount { row: usize, cols: usize },
}

/// One encoded cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct JsonPiece {
    #[serde(default)]
    pub value: u8,
    #[serde(default)]
    pub crowned: bool,
}

/// One encoded board: `SIZE` rows of `SIZE` cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonPieceList {
    pub list: Vec<Vec<JsonPiece>>,
}

impl From<Piece> for JsonPiece {
    fn from(piece: Piece) -> JsonPiece {
        match piece.color() {
            Some(color) => JsonPiece {
                value: color.value(),
                crowned: piece.is_crowned(),
            },
            None => JsonPiece {
                value: 0,
                crowned: false,
            },
        }
    }
}

fn piece_from(encoded: JsonPiece, row: usize, col: usize) -> Result<Piece, DecodeError> {
    match encoded.value {
        0 => Ok(Piece::Empty),
        1 => Ok(Piece::Red {
            crowned: encoded.crowned,
        }),
        2 => Ok(Piece::Blue {
            crowned: encoded.crowned,
        }),
        value => Err(DecodeError::InvalidValue { value, row, col }),
    }
}

/// Encode a board into the wire grid.
pub fn encode_board(board: &Board) -> JsonPieceList {
    let mut list = vec![Vec::with_capacity(SIZE); SIZE];
    for (cord, piece) in board.cells() {
        list[cord.row as usize].push(JsonPiece::from(piece));
    }
    JsonPieceList { list }
}

/// Decode a wire grid back into a board. The grid must be exactly 8x8 and
/// every cell value must be 0, 1 or 2.
pub fn decode_board(encoded: &JsonPieceList) -> Result<Board, DecodeError> {
    if encoded.list.len() != SIZE {
        return Err(DecodeError::BadRowCount {
            rows: encoded.list.len(),
        });
    }
    let mut cells = [[Piece::Empty; SIZE]; SIZE];
    for (row, encoded_row) in encoded.list.iter().enumerate() {
        if encoded_row.len() != SIZE {
            return Err(DecodeError::BadColCount {
                row,
                cols: encoded_row.len(),
            });
        }
        for (col, &encoded_piece) in encoded_row.iter().enumerate() {
            cells[row][col] = piece_from(encoded_piece, row, col)?;
        }
    }
    Ok(Board::from_cells(cells))
}
