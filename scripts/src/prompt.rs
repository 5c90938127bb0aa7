//! Option resolution for the interactive scripts: a flag given on the command
//! line wins, otherwise the operator is asked, otherwise the default applies.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use anyhow::{anyhow, Result};

#[derive(Debug, Clone, Copy)]
pub struct Question {
    pub flag: &'static str,
    pub describe: &'static str,
    pub default: Option<&'static str>,
}

pub struct Prompter<R, W> {
    input: R,
    output: W,
    interactive: bool,
}

impl Prompter<StdinLock<'static>, Stdout> {
    pub fn stdio(interactive: bool) -> Self {
        Self::new(io::stdin().lock(), io::stdout(), interactive)
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W, interactive: bool) -> Self {
        Self {
            input,
            output,
            interactive,
        }
    }

    /// Empty answers (and end of input) resolve to the default, or `None`.
    pub fn optional(
        &mut self,
        given: Option<String>,
        question: &Question,
    ) -> Result<Option<String>> {
        if let Some(value) = given {
            return Ok(Some(value));
        }
        let answer = if self.interactive {
            self.ask(question)?
        } else {
            None
        };
        Ok(answer.or_else(|| question.default.map(str::to_string)))
    }

    pub fn required(&mut self, given: Option<String>, question: &Question) -> Result<String> {
        self.optional(given, question)?
            .ok_or_else(|| anyhow!("missing required option --{}", question.flag))
    }

    fn ask(&mut self, question: &Question) -> Result<Option<String>> {
        match question.default {
            Some(default) => write!(self.output, "? {} ({}) ", question.describe, default)?,
            None => write!(self.output, "? {} ", question.describe)?,
        }
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        let answer = line.trim();
        Ok((!answer.is_empty()).then(|| answer.to_string()))
    }
}
