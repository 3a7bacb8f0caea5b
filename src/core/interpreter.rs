// Command interpreter: one line in, one reply out
//
// Rules are checked top to bottom on the trimmed, lowercased input and the
// first match answers. Rule failures become the reply text; nothing here
// returns an error to the caller.

use crate::config::Config;
use crate::core::args::{argument_after, tokens};
use crate::core::calculator;
use crate::core::calendar::{self, Clock, SystemClock};
use crate::core::picker;
use crate::error::CommandError;
use crate::session::{Entry, Session};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

const HELP_TEXT: &str = "Available commands →
ping, help, history [filter],
whatdayis [today|date|weekday],
say <text>, hello,
inoffice, lunch,
calculator <a> <+|-|*|/> <b>,
todo add <task>, todo list, todo done <task>,
mynewsongis <song>, playmysong,
lorem [count], play <song>,
vol <0-100>, twitter <query>, define <word>";

type RuleResult = std::result::Result<Entry, CommandError>;

/// Turns chat lines into replies
pub struct Interpreter<C = SystemClock, R = StdRng> {
    clock: C,
    rng: R,
    lorem_default_count: usize,
    lorem_max_count: usize,
}

impl Interpreter<SystemClock, StdRng> {
    /// Interpreter on the system clock with an entropy-seeded generator
    pub fn new() -> Self {
        Self::with_parts(SystemClock, StdRng::from_entropy())
    }

    /// Like `new`, with lorem limits taken from `config`
    pub fn from_config(config: &Config) -> Self {
        Self::new().with_lorem_counts(config.lorem_default_count, config.lorem_max_count)
    }
}

impl Default for Interpreter<SystemClock, StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock, R: Rng> Interpreter<C, R> {
    /// Interpreter with an explicit clock and random source
    pub fn with_parts(clock: C, rng: R) -> Self {
        let defaults = Config::default();
        Self {
            clock,
            rng,
            lorem_default_count: defaults.lorem_default_count,
            lorem_max_count: defaults.lorem_max_count,
        }
    }

    pub fn with_lorem_counts(mut self, default_count: usize, max_count: usize) -> Self {
        self.lorem_default_count = default_count;
        self.lorem_max_count = max_count;
        self
    }

    /// Handle one line of user input.
    ///
    /// Blank input returns `None` and leaves the session alone. Anything
    /// else appends the user's line and the reply to the transcript and
    /// returns the reply.
    pub fn process(&mut self, session: &mut Session, input: &str) -> Option<Entry> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }

        let command = input.to_lowercase();
        let reply = match self.dispatch(session, &command, input) {
            Ok(entry) => entry,
            Err(e) => {
                debug!(command = %command, error = ?e, "command rejected");
                Entry::bot(e.to_string())
            }
        };

        debug!(command = %command, reply = %reply, "handled command");
        session.record_exchange(Entry::user(input), reply.clone());

        Some(reply)
    }

    fn dispatch(&mut self, session: &mut Session, command: &str, input: &str) -> RuleResult {
        match command {
            "ping" => Ok(Entry::bot("I am active!")),
            "help" => Ok(Entry::bot(HELP_TEXT)),
            _ if command.starts_with("history") => Ok(history(session, input)),
            _ if command.starts_with("whatdayis") => self.what_day_is(input),
            _ if command.starts_with("say ") => Ok(Entry::echo(argument_after(input, "say "))),
            "hello" => Ok(Entry::bot("Hello there! How can I help you?")),
            "inoffice" => Ok(Entry::bot("Danny - WiFi, Carter - Wired")),
            "lunch" => Ok(Entry::bot(format!(
                "How about {} today?",
                picker::lunch(&mut self.rng)
            ))),
            _ if command.starts_with("calculator") => {
                let parts = tokens(input);
                let value = calculator::evaluate(&parts[1..])?;
                Ok(Entry::bot(calculator::format_number(value)))
            }
            _ if command.starts_with("todo add") => todo_add(session, input),
            "todo list" => Ok(todo_list(session)),
            _ if command.starts_with("todo done") => todo_done(session, input),
            _ if command.starts_with("mynewsongis") => save_song(session, input),
            "playmysong" => session
                .saved_song()
                .map(|song| Entry::bot(format!("Pretending to play your saved song \"{}\"", song)))
                .ok_or(CommandError::NoSavedSong),
            _ if command.starts_with("lorem") => Ok(self.lorem(input)),
            _ if command.starts_with("play") => {
                let song = required(argument_after(input, "play"), CommandError::MissingSong)?;
                Ok(Entry::bot(format!("Pretending to play \"{}\" from YouTube.", song)))
            }
            _ if command.starts_with("vol") => volume(input),
            _ if command.starts_with("twitter") => {
                let query = required(argument_after(input, "twitter"), CommandError::MissingQuery)?;
                Ok(Entry::bot(format!("Pretending to fetch tweets about \"{}\"...", query)))
            }
            _ if command.starts_with("define") => {
                let word = required(argument_after(input, "define"), CommandError::MissingWord)?;
                Ok(Entry::bot(format!(
                    "Pretending to fetch definition of \"{}\"... For demo purposes.",
                    word
                )))
            }
            _ => Ok(Entry::bot("Command not recognized.")),
        }
    }

    fn what_day_is(&self, input: &str) -> RuleResult {
        let today = self.clock.today();
        let parts = tokens(input);

        let Some(arg) = parts.get(1).copied() else {
            return Ok(Entry::bot(format!("Today is {}", calendar::format_day(today))));
        };

        if arg.eq_ignore_ascii_case("today") {
            return Ok(Entry::bot(format!("Today is {}", calendar::format_day(today))));
        }

        if arg.contains('/') {
            let date = calendar::parse_month_day(arg)
                .and_then(|(month, day)| calendar::nearest_month_day(today, month, day))
                .ok_or(CommandError::InvalidDate)?;
            return Ok(Entry::bot(format!(
                "{} is a {}",
                arg,
                calendar::weekday_name(date)
            )));
        }

        let target = calendar::parse_weekday(arg).ok_or(CommandError::UnknownDayFormat)?;
        let next = calendar::next_occurrence(today, target);
        Ok(Entry::bot(format!(
            "Next {} is on {}",
            arg.to_lowercase(),
            calendar::format_day(next)
        )))
    }

    fn lorem(&mut self, input: &str) -> Entry {
        let count = match argument_after(input, "lorem").parse::<i64>() {
            Ok(n) => usize::try_from(n.max(0)).unwrap_or(usize::MAX),
            Err(_) => self.lorem_default_count,
        }
        .min(self.lorem_max_count);

        Entry::bot(picker::lorem(&mut self.rng, count))
    }
}

fn required(value: &str, missing: CommandError) -> Result<&str, CommandError> {
    if value.is_empty() {
        Err(missing)
    } else {
        Ok(value)
    }
}

fn history(session: &Session, input: &str) -> Entry {
    let transcript = session.transcript();

    match tokens(input).get(1) {
        None if transcript.is_empty() => Entry::bot("No history yet."),
        None => Entry::bot(format!(
            "Previous commands → {}",
            transcript.rendered().join(", ")
        )),
        Some(filter) => {
            let matches = transcript.search(filter);
            if matches.is_empty() {
                Entry::bot(format!("No history matches \"{}\"", filter))
            } else {
                Entry::bot(format!("Filtered history → {}", matches.join(", ")))
            }
        }
    }
}

fn todo_add(session: &mut Session, input: &str) -> RuleResult {
    let task = required(argument_after(input, "todo add"), CommandError::MissingTask)?;
    session.add_todo(task);
    Ok(Entry::bot(format!("Task added → {}", task)))
}

fn todo_list(session: &Session) -> Entry {
    if session.todos().is_empty() {
        return Entry::bot("No tasks yet.");
    }

    let lines: Vec<String> = session
        .todos()
        .iter()
        .enumerate()
        .map(|(i, task)| format!("{}. {}", i + 1, task))
        .collect();

    Entry::bot(format!("Tasks →\n{}", lines.join("\n")))
}

fn todo_done(session: &mut Session, input: &str) -> RuleResult {
    let task = argument_after(input, "todo done");
    if session.complete_todo(task) {
        Ok(Entry::bot(format!("Task completed → {}", task)))
    } else {
        Err(CommandError::TaskNotFound)
    }
}

fn save_song(session: &mut Session, input: &str) -> RuleResult {
    let song = required(argument_after(input, "mynewsongis"), CommandError::MissingSong)?;
    session.save_song(song);
    Ok(Entry::bot(format!("Got it! Your new song is \"{}\"", song)))
}

fn volume(input: &str) -> RuleResult {
    let parts = tokens(input);
    let [_, level] = parts.as_slice() else {
        return Err(CommandError::VolumeFormat);
    };

    let level: i64 = level
        .parse()
        .map_err(|_| CommandError::VolumeNotANumber(level.to_string()))?;

    if !(0..=100).contains(&level) {
        return Err(CommandError::VolumeOutOfRange);
    }

    Ok(Entry::bot(format!("Volume set to {}%", level)))
}
