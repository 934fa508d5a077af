//! Line-oriented save format for puzzle sessions.
//!
//! A save is plain text with five lines:
//!
//! 1. grid side length `N`
//! 2. move count
//! 3. current board as comma-separated tile values (trailing comma allowed)
//! 4. original board in the same form
//! 5. an opaque caller-supplied tag, passed through unchanged (may be empty)
//!
//! Parsing is all-or-nothing: a missing line, a non-numeric field, a wrong
//! tile count, or a tile sequence that is not a permutation fails the whole
//! load and produces no session. Writing goes through a scoped [`File`] that
//! is flushed and closed on every exit path.

use std::{
    fs::File,
    io::{self, BufWriter, Read as _, Write as _},
    path::Path,
};

use slidepuzzle_core::{Board, BoardError, GridSize};

use crate::Game;

/// A serialized puzzle session plus its opaque tag.
///
/// `SaveData` is the flat representation of a [`Game`]: everything needed to
/// reconstruct the session, plus one caller-supplied string the engine never
/// interprets (typically the identifier of the image the tiles were cut
/// from).
///
/// # Examples
///
/// ```
/// use slidepuzzle_core::GridSize;
/// use slidepuzzle_game::{Game, SaveData};
/// use slidepuzzle_generator::BoardGenerator;
///
/// let generator = BoardGenerator::new(GridSize::new(3));
/// let game = Game::new(generator.generate());
///
/// let encoded = game.save_data("kitten.png").encode();
/// let (restored, tag) = SaveData::parse(&encoded).unwrap().into_game().unwrap();
/// assert_eq!(&restored, &game);
/// assert_eq!(tag, "kitten.png");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveData {
    size: GridSize,
    move_count: u32,
    tiles: Vec<u16>,
    original_tiles: Vec<u16>,
    tag: String,
}

impl SaveData {
    /// Captures a session and tag.
    #[must_use]
    pub fn snapshot(game: &Game, tag: impl Into<String>) -> Self {
        Self {
            size: game.size(),
            move_count: game.move_count(),
            tiles: game.board().tiles().to_vec(),
            original_tiles: game.original_board().tiles().to_vec(),
            tag: tag.into(),
        }
    }

    /// Returns the opaque tag.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Rebuilds the session, consuming the save data.
    ///
    /// Both tile sequences are re-validated as permutations of the declared
    /// size, so a hand-edited save with duplicated or out-of-range tiles is
    /// rejected here rather than producing a corrupt board. Solvability of
    /// the loaded arrangement is *not* re-checked; a save is trusted to come
    /// from a generated game.
    ///
    /// # Errors
    ///
    /// Returns [`SaveError::InvalidBoard`] if either sequence is not a valid
    /// permutation.
    pub fn into_game(self) -> Result<(Game, String), SaveError> {
        let board = Board::from_tiles(self.size, self.tiles)?;
        let original = Board::from_tiles(self.size, self.original_tiles)?;
        log::debug!(
            "loaded {size} session, {count} move(s), tag {tag:?}",
            size = self.size,
            count = self.move_count,
            tag = self.tag
        );
        Ok((
            Game::from_parts(board, original, self.move_count),
            self.tag,
        ))
    }

    /// Encodes the save as its five-line text form.
    #[must_use]
    pub fn encode(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("{}\n{}\n", self.size.get(), self.move_count));
        for tiles in [&self.tiles, &self.original_tiles] {
            for tile in tiles {
                out.push_str(&format!("{tile},"));
            }
            out.push('\n');
        }
        out.push_str(&self.tag);
        out.push('\n');
        out
    }

    /// Parses the five-line text form.
    ///
    /// Tolerates a trailing comma after each tile list and a missing final
    /// newline. The tag line must be present but may be empty.
    ///
    /// # Errors
    ///
    /// Returns a [`SaveError`] naming the first malformed line; nothing is
    /// partially applied.
    pub fn parse(text: &str) -> Result<Self, SaveError> {
        let mut lines = text.lines();
        let mut next_line = |name: &'static str| {
            lines.next().ok_or(SaveError::MissingLine { line: name })
        };

        let size_line = next_line("size")?;
        let n: u8 = size_line
            .trim()
            .parse()
            .map_err(|_| SaveError::MalformedNumber { line: "size" })?;
        let size = GridSize::try_new(n).ok_or(SaveError::MalformedNumber { line: "size" })?;

        let move_count: u32 = next_line("move count")?
            .trim()
            .parse()
            .map_err(|_| SaveError::MalformedNumber { line: "move count" })?;

        let tiles = parse_tile_line(size, next_line("board")?, "board")?;
        let original_tiles = parse_tile_line(size, next_line("original board")?, "original board")?;
        let tag = lines
            .next()
            .ok_or(SaveError::MissingLine { line: "tag" })?
            .to_owned();

        Ok(Self {
            size,
            move_count,
            tiles,
            original_tiles,
            tag,
        })
    }

    /// Writes the encoded save to a file.
    ///
    /// # Errors
    ///
    /// Returns [`SaveError::Io`] if the file cannot be created or written.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<(), SaveError> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(self.encode().as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    /// Reads and parses a save file.
    ///
    /// # Errors
    ///
    /// Returns [`SaveError::Io`] if the file is missing or unreadable, or a
    /// parse error for malformed content. No partial state escapes a failed
    /// load.
    pub fn read_from(path: impl AsRef<Path>) -> Result<Self, SaveError> {
        let mut text = String::new();
        File::open(path)?.read_to_string(&mut text)?;
        Self::parse(&text)
    }
}

/// Parses one comma-separated tile line, requiring exactly N² values.
fn parse_tile_line(size: GridSize, line: &str, name: &'static str) -> Result<Vec<u16>, SaveError> {
    let mut tiles = Vec::with_capacity(size.tile_count());
    for token in line.split(',').filter(|token| !token.trim().is_empty()) {
        let tile: u16 = token
            .trim()
            .parse()
            .map_err(|_| SaveError::MalformedNumber { line: name })?;
        tiles.push(tile);
    }
    if tiles.len() != size.tile_count() {
        return Err(SaveError::WrongTileCount {
            line: name,
            expected: size.tile_count(),
            actual: tiles.len(),
        });
    }
    Ok(tiles)
}

/// Errors from saving or loading a session.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum SaveError {
    /// The save file could not be read or written.
    #[display("save file I/O failed: {_0}")]
    #[from]
    Io(io::Error),
    /// A required line is missing from the save text.
    #[display("save is missing the {line} line")]
    MissingLine {
        /// Name of the missing line.
        line: &'static str,
    },
    /// A line holds a value that does not parse as the expected number.
    #[display("save has a malformed number on the {line} line")]
    MalformedNumber {
        /// Name of the malformed line.
        line: &'static str,
    },
    /// A tile line holds the wrong number of values for the declared size.
    #[display("{line} line holds {actual} tiles, expected {expected}")]
    WrongTileCount {
        /// Name of the offending line.
        line: &'static str,
        /// Number of tiles required by the declared size.
        expected: usize,
        /// Number of tiles found.
        actual: usize,
    },
    /// A tile sequence is not a valid permutation.
    #[display("save holds an invalid board: {_0}")]
    #[from]
    InvalidBoard(BoardError),
}

#[cfg(test)]
mod tests {
    use std::{env, fs};

    use slidepuzzle_generator::{BoardGenerator, BoardSeed};

    use super::*;

    fn sample_game() -> Game {
        let generator = BoardGenerator::new(GridSize::new(3));
        let mut game = Game::new(generator.generate_with_seed(BoardSeed::from_phrase("save test")));
        let blank = game.blank_index();
        let dest = if blank % 3 > 0 { blank - 1 } else { blank + 1 };
        game.apply_move(blank, dest).unwrap();
        game
    }

    #[test]
    fn test_encode_layout() {
        let board = Board::solved(GridSize::new(2));
        let game = Game::from_parts(board.clone(), board, 7);
        let encoded = game.save_data("tiles.png").encode();
        assert_eq!(encoded, "2\n7\n0,1,2,3,\n0,1,2,3,\ntiles.png\n");
    }

    #[test]
    fn test_round_trip_preserves_everything() {
        let game = sample_game();
        let encoded = game.save_data("forest.jpg").encode();
        let (restored, tag) = SaveData::parse(&encoded).unwrap().into_game().unwrap();
        assert_eq!(restored, game);
        assert_eq!(tag, "forest.jpg");
    }

    #[test]
    fn test_parse_tolerates_no_trailing_comma() {
        let parsed = SaveData::parse("2\n0\n0,1,2,3\n3,1,2,0\nimg\n").unwrap();
        let (game, tag) = parsed.into_game().unwrap();
        assert_eq!(game.board().tiles(), &[0, 1, 2, 3]);
        assert_eq!(game.original_board().tiles(), &[3, 1, 2, 0]);
        assert_eq!(tag, "img");
    }

    #[test]
    fn test_parse_allows_empty_tag() {
        let parsed = SaveData::parse("2\n0\n0,1,2,3,\n0,1,2,3,\n\n").unwrap();
        assert_eq!(parsed.tag(), "");
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        // Missing lines.
        assert!(matches!(
            SaveData::parse("3\n0\n"),
            Err(SaveError::MissingLine { line: "board" })
        ));
        assert!(matches!(
            SaveData::parse("2\n0\n0,1,2,3,\n0,1,2,3,"),
            Err(SaveError::MissingLine { line: "tag" })
        ));
        // Non-numeric headers.
        assert!(matches!(
            SaveData::parse("two\n0\n0,1,2,3,\n0,1,2,3,\nimg\n"),
            Err(SaveError::MalformedNumber { line: "size" })
        ));
        assert!(matches!(
            SaveData::parse("2\n-1\n0,1,2,3,\n0,1,2,3,\nimg\n"),
            Err(SaveError::MalformedNumber { line: "move count" })
        ));
        // Zero size.
        assert!(matches!(
            SaveData::parse("0\n0\n\n\nimg\n"),
            Err(SaveError::MalformedNumber { line: "size" })
        ));
        // Non-numeric tile.
        assert!(matches!(
            SaveData::parse("2\n0\n0,x,2,3,\n0,1,2,3,\nimg\n"),
            Err(SaveError::MalformedNumber { line: "board" })
        ));
        // Wrong token count.
        assert!(matches!(
            SaveData::parse("2\n0\n0,1,2,\n0,1,2,3,\nimg\n"),
            Err(SaveError::WrongTileCount { line: "board", expected: 4, actual: 3 })
        ));
        assert!(matches!(
            SaveData::parse("2\n0\n0,1,2,3,\n0,1,2,3,4,\nimg\n"),
            Err(SaveError::WrongTileCount { line: "original board", .. })
        ));
    }

    #[test]
    fn test_into_game_rejects_non_permutations() {
        // Duplicate tile on the board line.
        let parsed = SaveData::parse("2\n0\n0,1,1,3,\n0,1,2,3,\nimg\n").unwrap();
        assert!(matches!(parsed.into_game(), Err(SaveError::InvalidBoard(_))));
        // Out-of-range tile on the original line.
        let parsed = SaveData::parse("2\n0\n0,1,2,3,\n0,1,2,9,\nimg\n").unwrap();
        assert!(matches!(parsed.into_game(), Err(SaveError::InvalidBoard(_))));
    }

    #[test]
    fn test_file_round_trip() {
        let game = sample_game();
        let path = env::temp_dir().join(format!(
            "slidepuzzle-save-test-{}.txt",
            std::process::id()
        ));

        game.save(&path, "ocean.png").unwrap();
        let (restored, tag) = Game::load(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(restored, game);
        assert_eq!(tag, "ocean.png");
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let path = env::temp_dir().join("slidepuzzle-save-test-missing.txt");
        assert!(matches!(Game::load(&path), Err(SaveError::Io(_))));
    }
}
