use std::io::{self, BufRead, Stdout, StdinLock, Write};

/// Yes/no gate asked before anything is written or deleted.
pub trait Confirm {
    fn confirm(&mut self, question: &str) -> io::Result<bool>;
}

/// Asks on `output` and reads a single line from `input`.
pub struct LinePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Confirm for LinePrompt<R, W> {
    fn confirm(&mut self, question: &str) -> io::Result<bool> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            // EOF counts as "no"
            return Ok(false);
        }
        Ok(is_affirmative(&line))
    }
}

pub fn stdin_prompt() -> LinePrompt<StdinLock<'static>, Stdout> {
    LinePrompt::new(io::stdin().lock(), io::stdout())
}

/// Fixed answer, used for `--yes`.
pub struct AutoConfirm(pub bool);

impl Confirm for AutoConfirm {
    fn confirm(&mut self, question: &str) -> io::Result<bool> {
        log::debug!("Auto-answering {:?} with {}", question.trim(), self.0);
        Ok(self.0)
    }
}

/// Only a lone `y` or `Y` is a yes.
pub fn is_affirmative(answer: &str) -> bool {
    answer.trim_end_matches(['\r', '\n']).eq_ignore_ascii_case("y")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_is_affirmative() {
        assert!(is_affirmative("y"));
        assert!(is_affirmative("Y\n"));
        assert!(is_affirmative("y\r\n"));
        for answer in ["n\n", "\n", "", "yes\n", "Yes", " y\n", "no"] {
            assert!(!is_affirmative(answer), "{answer:?}");
        }
    }

    #[test]
    fn test_line_prompt_writes_question_and_reads_answer() {
        let mut output = Vec::new();
        let mut prompt = LinePrompt::new(Cursor::new("y\n"), &mut output);

        assert!(prompt.confirm("Continue? (y/n): ").unwrap());
        assert_eq!(output, b"Continue? (y/n): ");
    }

    #[test]
    fn test_line_prompt_eof_is_no() {
        let mut prompt = LinePrompt::new(Cursor::new(""), Vec::new());
        assert!(!prompt.confirm("Continue? ").unwrap());
    }

    #[test]
    fn test_only_first_line_is_read() {
        let mut prompt = LinePrompt::new(Cursor::new("n\ny\n"), Vec::new());
        assert!(!prompt.confirm("Continue? ").unwrap());
    }
}
