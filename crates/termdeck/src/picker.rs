//! Numbered-list preset prompt on the terminal.

use std::cell::RefCell;
use std::io::{self, BufRead, Stderr, StdinLock, Write};

use termdeck_core::{PickOutcome, PresetPicker};
use tracing::warn;

/// Prints the choices to `output` and reads one line from `input`.
///
/// An empty line or end of input cancels. A number picks the item at that
/// position (1-based); any other text is returned as typed.
pub struct PromptPicker<R, W> {
    input: RefCell<R>,
    output: RefCell<W>,
}

impl PromptPicker<StdinLock<'static>, Stderr> {
    /// Prompt on stderr so stdout stays clean for launch output.
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> PromptPicker<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input: RefCell::new(input),
            output: RefCell::new(output),
        }
    }

    fn prompt(&self, title: &str, items: &[String]) -> io::Result<Option<String>> {
        let mut output = self.output.borrow_mut();
        writeln!(output, "{}:", title)?;
        for (index, item) in items.iter().enumerate() {
            writeln!(output, "  {}) {}", index + 1, item)?;
        }
        write!(output, "> ")?;
        output.flush()?;

        let mut line = String::new();
        if self.input.borrow_mut().read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let answer = line.trim();
        if answer.is_empty() {
            return Ok(None);
        }

        if let Ok(number) = answer.parse::<usize>()
            && let Some(item) = number.checked_sub(1).and_then(|i| items.get(i))
        {
            return Ok(Some(item.clone()));
        }

        Ok(Some(answer.to_string()))
    }
}

impl<R: BufRead, W: Write> PresetPicker for PromptPicker<R, W> {
    fn pick(&self, title: &str, items: &[String]) -> PickOutcome {
        match self.prompt(title, items) {
            Ok(Some(selection)) => PickOutcome::Selected(selection),
            Ok(None) => PickOutcome::Cancelled,
            Err(e) => {
                warn!(event = "cli.picker.prompt_failed", error = %e);
                PickOutcome::Cancelled
            }
        }
    }
}
