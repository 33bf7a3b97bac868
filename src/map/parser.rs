//! Map parsing functionality for converting raw board layouts into structured data.

use glam::{IVec2, UVec2};
use smallvec::SmallVec;

use crate::constants::MapTile;
use crate::error::ParseError;

/// Represents the parsed data from a raw board layout.
#[derive(Debug, Clone)]
pub struct ParsedMap {
    /// The size of the board, in tiles.
    pub size: UVec2,
    /// The parsed tile layout, row-major.
    pub tiles: Vec<MapTile>,
    /// The positions of the house door tiles.
    pub house_door: [IVec2; 2],
    /// Rows whose tunnel reaches both edges of the board. Each one gets a portal pair.
    pub portal_rows: SmallVec<[i32; 2]>,
}

/// Parser for converting raw board layouts into structured map data.
pub struct MapTileParser;

impl MapTileParser {
    /// Parses a single character into a map tile.
    ///
    /// # Arguments
    ///
    /// * `c` - The character to parse
    ///
    /// # Returns
    ///
    /// The parsed map tile, or an error if the character is unknown.
    pub fn parse_character(c: char) -> Result<MapTile, ParseError> {
        match c {
            '#' => Ok(MapTile::Wall),
            '.' => Ok(MapTile::Pellet),
            'o' => Ok(MapTile::Energizer),
            ' ' => Ok(MapTile::Empty),
            'T' => Ok(MapTile::Tunnel),
            '=' => Ok(MapTile::Door),
            _ => Err(ParseError::UnknownCharacter(c)),
        }
    }

    /// Parses a raw board layout into structured map data.
    ///
    /// # Errors
    ///
    /// Returns an error if the board is empty or ragged, contains unknown characters,
    /// has a house door not made of exactly two '=' characters, or has a tunnel that
    /// only reaches one edge of the board.
    pub fn parse_board(raw_board: &[&str]) -> Result<ParsedMap, ParseError> {
        let width = raw_board.first().map(|row| row.chars().count()).ok_or(ParseError::EmptyBoard)?;
        if width == 0 {
            return Err(ParseError::EmptyBoard);
        }

        let mut tiles = Vec::with_capacity(width * raw_board.len());
        let mut doors: SmallVec<[IVec2; 2]> = SmallVec::new();
        let mut portal_rows = SmallVec::new();

        for (y, line) in raw_board.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(ParseError::RaggedRow {
                    row: y,
                    expected: width,
                    found,
                });
            }

            for (x, character) in line.chars().enumerate() {
                let tile = Self::parse_character(character)?;
                if tile == MapTile::Door {
                    doors.push(IVec2::new(x as i32, y as i32));
                }
                tiles.push(tile);
            }

            let row = &tiles[y * width..];
            match (row[0] == MapTile::Tunnel, row[width - 1] == MapTile::Tunnel) {
                (true, true) => portal_rows.push(y as i32),
                (false, false) => {}
                _ => return Err(ParseError::UnpairedTunnel(y as i32)),
            }
        }

        if doors.len() != 2 {
            return Err(ParseError::InvalidHouseDoorCount(doors.len()));
        }

        Ok(ParsedMap {
            size: UVec2::new(width as u32, raw_board.len() as u32),
            tiles,
            house_door: [doors[0], doors[1]],
            portal_rows,
        })
    }
}
