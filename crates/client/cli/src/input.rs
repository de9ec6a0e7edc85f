//! Line-based player input.
//!
//! This module owns the text-to-command mapping so the rest of the binary
//! stays agnostic about how a human spells "cast the second card".

use std::io::{self, BufRead, Write};

use duel_core::{CombatAction, CombatState, RandomSource, Side, Spell, SpellId};
use duel_runtime::{ActionProvider, Result, RuntimeError, TurnPlan};

use crate::presentation;

/// Tier used for a Mystic Punch thrown without naming a card.
const BARE_PUNCH_TIER: u32 = 1;

/// High-level outcome of parsing one input line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Cast the hand card at this zero-based index.
    Cast(usize),
    /// Punch, powered by the tier of the card at this index if given.
    Punch(Option<usize>),
    Skip,
    Help,
    /// The line could not be understood; the message says why.
    Invalid(String),
}

impl Command {
    /// Parses commands like `cast 2`, `c2`, `punch`, `p 1`, `skip`.
    ///
    /// Card numbers are one-based, as shown to the player.
    pub fn parse(line: &str, hand_len: usize) -> Self {
        let line = line.trim().to_ascii_lowercase();
        let (verb, rest) = split_verb(&line);
        match verb {
            "c" | "cast" => match card_index(rest, hand_len) {
                Ok(Some(index)) => Command::Cast(index),
                Ok(None) => Command::Invalid("cast which card?".into()),
                Err(message) => Command::Invalid(message),
            },
            "p" | "punch" => match card_index(rest, hand_len) {
                Ok(index) => Command::Punch(index),
                Err(message) => Command::Invalid(message),
            },
            "s" | "skip" => Command::Skip,
            "h" | "help" | "?" => Command::Help,
            "" => Command::Invalid("enter a command (h for help)".into()),
            other => Command::Invalid(format!("unknown command `{other}`")),
        }
    }

    /// Actions for this command against `hand`, if it ends the turn.
    pub fn into_plan(self, hand: &[Spell]) -> Option<TurnPlan> {
        match self {
            Command::Cast(index) => {
                let spell = hand.get(index)?;
                Some(vec![
                    CombatAction::SelectSpell {
                        spell_id: spell.id.clone(),
                    },
                    CombatAction::CastSpell,
                ])
            }
            Command::Punch(index) => {
                let spell_tier = index
                    .and_then(|index| hand.get(index))
                    .map_or(BARE_PUNCH_TIER, |spell| spell.tier);
                let mut plan = Vec::with_capacity(2);
                if let Some(spell) = index.and_then(|index| hand.get(index)) {
                    plan.push(CombatAction::SelectSpell {
                        spell_id: spell.id.clone(),
                    });
                }
                plan.push(CombatAction::MysticPunch { spell_tier });
                Some(plan)
            }
            Command::Skip => Some(vec![CombatAction::SkipTurn]),
            Command::Help | Command::Invalid(_) => None,
        }
    }
}

fn split_verb(line: &str) -> (&str, &str) {
    let split = line
        .find(|c: char| c.is_ascii_digit() || c.is_whitespace())
        .unwrap_or(line.len());
    let (verb, rest) = line.split_at(split);
    (verb, rest.trim())
}

fn card_index(text: &str, hand_len: usize) -> core::result::Result<Option<usize>, String> {
    if text.is_empty() {
        return Ok(None);
    }
    match text.parse::<usize>() {
        Ok(number) if (1..=hand_len).contains(&number) => Ok(Some(number - 1)),
        _ => Err(format!("pick a card between 1 and {hand_len}")),
    }
}

/// Parses a discard answer: `excess` distinct one-based card numbers.
pub fn parse_discards(
    line: &str,
    hand_len: usize,
    excess: usize,
) -> core::result::Result<Vec<usize>, String> {
    let mut picks = Vec::with_capacity(excess);
    for token in line.split(|c: char| c == ',' || c.is_whitespace()) {
        if token.is_empty() {
            continue;
        }
        let index = card_index(token, hand_len)?.ok_or("missing card number")?;
        if picks.contains(&index) {
            return Err(format!("card {} listed twice", index + 1));
        }
        picks.push(index);
    }
    if picks.len() != excess {
        return Err(format!("discard exactly {excess} card(s)"));
    }
    Ok(picks)
}

/// Plays the player's side from a line-oriented terminal.
pub struct TerminalProvider<R, W> {
    input: R,
    output: W,
}

impl TerminalProvider<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalProvider<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn prompt(&mut self, side: Side, text: &str) -> Result<String> {
        let io_error = |error: io::Error| RuntimeError::Provider {
            side,
            message: error.to_string(),
        };
        write!(self.output, "{text}").map_err(io_error)?;
        self.output.flush().map_err(io_error)?;

        let mut line = String::new();
        if self.input.read_line(&mut line).map_err(io_error)? == 0 {
            return Err(RuntimeError::Provider {
                side,
                message: "input closed".into(),
            });
        }
        Ok(line)
    }

    fn say(&mut self, side: Side, text: &str) -> Result<()> {
        writeln!(self.output, "{text}").map_err(|error| RuntimeError::Provider {
            side,
            message: error.to_string(),
        })
    }
}

impl<R: BufRead, W: Write> ActionProvider for TerminalProvider<R, W> {
    fn provide_actions(
        &mut self,
        side: Side,
        state: &CombatState,
        _rng: &mut dyn RandomSource,
    ) -> Result<TurnPlan> {
        let hand = &state.wizard(side).hand;
        self.say(side, &presentation::turn_header(state, side))?;
        loop {
            let line = self.prompt(side, "> ")?;
            match Command::parse(&line, hand.len()) {
                Command::Help => self.say(side, presentation::HELP)?,
                Command::Invalid(message) => self.say(side, &message)?,
                command => {
                    if let Some(plan) = command.into_plan(hand) {
                        return Ok(plan);
                    }
                }
            }
        }
    }

    fn choose_discards(
        &mut self,
        side: Side,
        state: &CombatState,
        excess: usize,
    ) -> Result<Vec<SpellId>> {
        let hand = &state.wizard(side).hand;
        self.say(side, &presentation::hand_listing(state.wizard(side)))?;
        loop {
            let line = self.prompt(side, &format!("discard {excess} card(s)> "))?;
            match parse_discards(&line, hand.len(), excess) {
                Ok(picks) => {
                    return Ok(picks
                        .into_iter()
                        .filter_map(|index| hand.get(index))
                        .map(|spell| spell.id.clone())
                        .collect());
                }
                Err(message) => self.say(side, &message)?,
            }
        }
    }
}
