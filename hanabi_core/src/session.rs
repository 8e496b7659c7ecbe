use std::io::{BufRead, Write};

use log::{debug, warn};

use crate::{
    command::Command,
    deck::Deck,
    error::{DeckError, SessionError},
    game::{Game, Phase, Summary},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Holds the single game a command stream talks to. A start command replaces it.
#[derive(Default)]
pub struct Session {
    game: Option<Game>,
}

impl Session {
    pub fn new() -> Self {
        Session { game: None }
    }

    pub fn game(&self) -> Option<&Game> {
        self.game.as_ref()
    }

    pub fn phase(&self) -> Phase {
        self.game.as_ref().map_or(Phase::Unstarted, Game::phase)
    }

    /// Feeds one input line and returns the summary if this line ended the game.
    pub fn handle_line(&mut self, line: &str) -> Result<Option<Summary>, DeckError> {
        match line.parse::<Command>() {
            Ok(Command::StartGame(tokens)) => self.start(&tokens).map(|()| None),
            Ok(Command::Action(action)) => {
                Ok(self.play_turn(line, |game| game.execute_action(&action)))
            }
            Err(error) => Ok(self.play_turn(line, |game| game.execute_malformed(error))),
        }
    }

    fn start(&mut self, tokens: &[String]) -> Result<(), DeckError> {
        self.game = None;
        let deck = Deck::from_tokens(tokens)?;
        self.game = Some(Game::new(deck)?);
        Ok(())
    }

    fn play_turn<F>(&mut self, line: &str, turn: F) -> Option<Summary>
    where
        F: FnOnce(&mut Game) -> bool,
    {
        match self.game.as_mut() {
            Some(game) if game.phase() == Phase::InProgress => {
                if turn(game) {
                    None
                } else {
                    Some(game.summary())
                }
            }
            _ => {
                debug!("no game in progress, ignoring `{line}`");
                None
            }
        }
    }
}

/// Reads commands until the input ends and writes one summary per finished game.
pub fn run_session<R, W>(
    input: R,
    mut output: W,
    format: OutputFormat,
) -> Result<(), SessionError>
where
    R: BufRead,
    W: Write,
{
    let mut session = Session::new();
    for line in input.lines() {
        let line = line?;
        match session.handle_line(&line) {
            Ok(Some(summary)) => write_summary(&mut output, &summary, format)?,
            Ok(None) => {}
            Err(e) => warn!("could not start game: {e}"),
        }
    }
    output.flush()?;
    Ok(())
}

fn write_summary<W: Write>(
    output: &mut W,
    summary: &Summary,
    format: OutputFormat,
) -> Result<(), SessionError> {
    match format {
        OutputFormat::Text => writeln!(output, "{summary}")?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *output, summary)?;
            writeln!(output)?;
        }
    }
    Ok(())
}
