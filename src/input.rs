use std::io::{self, BufRead, Write};
use std::ops::RangeInclusive;
use std::str::FromStr;

use thiserror::Error;

use crate::output::Message;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("input closed while waiting for a value")]
    Closed,

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, InputError>;

/// Line-oriented prompter that keeps asking until it gets a valid answer
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Read one line without the trailing newline. Bytes that are not UTF-8
    /// come back as U+FFFD so they fail validation instead of aborting.
    pub fn read_line(&mut self) -> Result<String> {
        self.output.flush()?;
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(InputError::Closed);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }

    /// Show a prompt and read the trimmed answer
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        Ok(self.read_line()?.trim().to_string())
    }

    pub fn warn(&mut self, text: impl Into<String>) -> Result<()> {
        writeln!(self.output, "{}", Message::warn(text).paint())?;
        Ok(())
    }

    pub fn read_non_empty(&mut self, prompt: &str) -> Result<String> {
        loop {
            let answer = self.ask(prompt)?;
            if answer.contains(char::REPLACEMENT_CHARACTER) {
                self.warn("Please enter readable text.")?;
            } else if !answer.is_empty() {
                return Ok(answer);
            } else {
                self.warn("Please enter a value.")?;
            }
        }
    }

    /// Blank answers come back as `None`
    pub fn read_optional(&mut self, prompt: &str) -> Result<Option<String>> {
        let answer = self.ask(prompt)?;
        Ok(if answer.is_empty() { None } else { Some(answer) })
    }

    pub fn read_in_range<T>(&mut self, prompt: &str, range: RangeInclusive<T>) -> Result<T>
    where
        T: FromStr + PartialOrd + std::fmt::Display,
    {
        loop {
            let answer = self.ask(prompt)?;
            match answer.parse::<T>() {
                Ok(v) if range.contains(&v) => return Ok(v),
                _ => self.warn(format!(
                    "Enter a number between {} and {}.",
                    range.start(),
                    range.end()
                ))?,
            }
        }
    }

    pub fn read_yes_no(&mut self, prompt: &str) -> Result<bool> {
        loop {
            let answer = self.ask(prompt)?.to_lowercase();
            match answer.as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => self.warn("Please enter y/n.")?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(script: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
    }

    fn printed(p: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(p.into_output()).unwrap()
    }

    // ============== Ranges ==============

    #[test]
    fn test_read_in_range_accepts_bounds() {
        let mut p = prompter("0\n100\n");
        assert_eq!(p.read_in_range::<u8>("Age: ", 0..=100).unwrap(), 0);
        assert_eq!(p.read_in_range::<u8>("Age: ", 0..=100).unwrap(), 100);
    }

    #[test]
    fn test_read_in_range_retries_until_valid() {
        let mut p = prompter("abc\n301\n4\n  28 \n");
        assert_eq!(p.read_in_range::<u16>("Wingspan (cm): ", 5..=300).unwrap(), 28);
        let text = printed(p);
        assert_eq!(text.matches("Enter a number between 5 and 300.").count(), 3);
        assert_eq!(text.matches("Wingspan (cm): ").count(), 4);
    }

    #[test]
    fn test_negative_age_is_rejected() {
        let mut p = prompter("-1\n7\n");
        assert_eq!(p.read_in_range::<u8>("Age: ", 0..=100).unwrap(), 7);
    }

    // ============== Yes / No ==============

    #[test]
    fn test_read_yes_no_variants() {
        let mut p = prompter("y\nYES\nn\nNo\n");
        assert!(p.read_yes_no("? ").unwrap());
        assert!(p.read_yes_no("? ").unwrap());
        assert!(!p.read_yes_no("? ").unwrap());
        assert!(!p.read_yes_no("? ").unwrap());
    }

    #[test]
    fn test_read_yes_no_retries() {
        let mut p = prompter("maybe\n\ny\n");
        assert!(p.read_yes_no("? ").unwrap());
        assert_eq!(printed(p).matches("Please enter y/n.").count(), 2);
    }

    // ============== Text ==============

    #[test]
    fn test_read_non_empty_skips_blank_lines() {
        let mut p = prompter("\n   \n Rex \n");
        assert_eq!(p.read_non_empty("Name: ").unwrap(), "Rex");
    }

    #[test]
    fn test_read_optional() {
        let mut p = prompter("\nShepherd\r\n");
        assert_eq!(p.read_optional("Breed: ").unwrap(), None);
        assert_eq!(p.read_optional("Breed: ").unwrap().as_deref(), Some("Shepherd"));
    }

    #[test]
    fn test_read_non_empty_rejects_undecodable_bytes() {
        let mut p = Prompter::new(Cursor::new(b"\xffRex\nRex\n".to_vec()), Vec::new());
        assert_eq!(p.read_non_empty("Name: ").unwrap(), "Rex");
        assert!(printed(p).contains("Please enter readable text."));
    }

    #[test]
    fn test_undecodable_number_is_retried() {
        let mut p = Prompter::new(Cursor::new(b"\xfe\xff\n12\n".to_vec()), Vec::new());
        assert_eq!(p.read_in_range::<u8>("Age: ", 0..=100).unwrap(), 12);
        assert!(printed(p).contains("Enter a number between 0 and 100."));
    }

    // ============== End of Input ==============

    #[test]
    fn test_eof_is_closed_error() {
        let mut p = prompter("abc\n");
        let err = p.read_in_range::<u8>("Age: ", 0..=100).unwrap_err();
        assert!(matches!(err, InputError::Closed));
    }

    #[test]
    fn test_eof_on_empty_input() {
        let mut p = prompter("");
        assert!(matches!(p.read_line(), Err(InputError::Closed)));
    }
}
