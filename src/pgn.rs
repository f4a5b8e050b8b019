//! Decoding of PGN game collections (monthly archive downloads).

use pgn_reader::{BufferedReader, Outcome, RawHeader, SanPlus, Skip, Visitor};
use serde::Serialize;

use crate::error::ChessError;

/// One decoded game: its tag pairs, main-line moves in SAN and the result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PgnGame {
    /// Tag pairs in file order
    pub headers: Vec<(String, String)>,
    pub moves: Vec<String>,
    /// `1-0`, `0-1` or `1/2-1/2`; `None` for an unfinished game (`*`)
    pub outcome: Option<String>,
}

impl PgnGame {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Default)]
struct GameCollector {
    game: PgnGame,
}

impl Visitor for GameCollector {
    type Result = PgnGame;

    fn begin_game(&mut self) {
        self.game = PgnGame::default();
    }

    fn header(&mut self, key: &[u8], value: RawHeader<'_>) {
        self.game.headers.push((
            String::from_utf8_lossy(key).into_owned(),
            String::from_utf8_lossy(value.as_bytes()).into_owned(),
        ));
    }

    fn san(&mut self, san_plus: SanPlus) {
        self.game.moves.push(san_plus.to_string());
    }

    fn begin_variation(&mut self) -> Skip {
        // main line only
        Skip(true)
    }

    fn outcome(&mut self, outcome: Option<Outcome>) {
        self.game.outcome = outcome.map(|outcome| outcome.to_string());
    }

    fn end_game(&mut self) -> Self::Result {
        std::mem::take(&mut self.game)
    }
}

/// A PGN document holding any number of games.
///
/// Games are decoded lazily. [`PgnGames::iter`] can be called any number of
/// times; each call starts again from the first game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PgnGames {
    text: String,
}

impl PgnGames {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn iter(&self) -> PgnGamesIter<'_> {
        PgnGamesIter {
            reader: BufferedReader::new_cursor(self.text.as_bytes()),
            collector: GameCollector::default(),
            done: false,
        }
    }

    /// Decodes every game, failing on the first decoding error.
    pub fn to_vec(&self) -> Result<Vec<PgnGame>, ChessError> {
        self.iter().collect()
    }
}

impl<'a> IntoIterator for &'a PgnGames {
    type Item = Result<PgnGame, ChessError>;
    type IntoIter = PgnGamesIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the games of a [`PgnGames`] document.
pub struct PgnGamesIter<'a> {
    reader: BufferedReader<std::io::Cursor<&'a [u8]>>,
    collector: GameCollector,
    done: bool,
}

impl Iterator for PgnGamesIter<'_> {
    type Item = Result<PgnGame, ChessError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.reader.read_game(&mut self.collector) {
            Ok(Some(game)) => Some(Ok(game)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(ChessError::Pgn(e)))
            }
        }
    }
}
