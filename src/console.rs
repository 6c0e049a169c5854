//! Interactive prompt loop: size, rows, words, results, repeat.
//!
//! The loop is generic over its reader and writer so tests can drive it with
//! in-memory buffers. End of input at any prompt ends the session cleanly.

use crate::config::FinderConfig;
use crate::display::{framed_matrix, results_to_string};
use crate::finder::WordFinder;
use crate::input::{is_yes, parse_row, parse_size, split_words};
use crate::matrix::Matrix;
use log::debug;
use std::io::{self, BufRead, Write};

pub struct Console<R, W> {
    reader: R,
    writer: W,
    config: FinderConfig,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W, config: FinderConfig) -> Self {
        Console { reader, writer, config }
    }

    /// Consume the console, handing back the writer (handy for inspecting output in tests).
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Run sessions until the user declines to repeat or input runs out.
    ///
    /// # Errors
    ///
    /// Propagates I/O failures on the reader or writer.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            if !self.run_session()? {
                return Ok(());
            }

            writeln!(self.writer, "\nThanks for using wordfinder. Do you want to repeat? (Y/N):")?;
            let again = self.read_line()?.is_some_and(|answer| is_yes(&answer));
            if !again {
                writeln!(self.writer, "Goodbye! Thanks for using wordfinder.")?;
                return Ok(());
            }
        }
    }

    /// One full pass through the prompts. Returns `false` if input ended early.
    fn run_session(&mut self) -> io::Result<bool> {
        let Some(size) = self.prompt_size()? else {
            return Ok(false);
        };
        let Some(rows) = self.prompt_rows(size)? else {
            return Ok(false);
        };

        // rows were checked against `size`, and `size` against the config
        let matrix = Matrix::with_config(rows, &self.config)?;
        writeln!(self.writer, "\nMatrix input is complete. The matrix is:")?;
        write!(self.writer, "{}", framed_matrix(&matrix))?;

        writeln!(self.writer, "\nEnter words to search (separated by space, comma, or semi-colon):")?;
        let Some(line) = self.read_line()? else {
            return Ok(false);
        };
        let words = split_words(&line);

        let finder = WordFinder::new(&matrix, self.config.max_results);
        let result = finder.find(&words);
        write!(self.writer, "\n{}", results_to_string(&result))?;
        Ok(true)
    }

    fn prompt_size(&mut self) -> io::Result<Option<usize>> {
        let (min, max) = (self.config.matrix_size_min, self.config.matrix_size_max);
        loop {
            writeln!(self.writer, "Enter the size of the matrix (between {min} and {max}):")?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match parse_size(&line, &self.config) {
                Ok(size) => return Ok(Some(size)),
                Err(e) => {
                    debug!("Rejected matrix size: {}", e.code());
                    writeln!(self.writer, "{e}\n")?;
                }
            }
        }
    }

    fn prompt_rows(&mut self, size: usize) -> io::Result<Option<Vec<String>>> {
        writeln!(self.writer, "Enter {size} rows, each with {size} characters:")?;
        let mut rows = Vec::with_capacity(size);
        while rows.len() < size {
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match parse_row(&line, size) {
                Ok(row) => rows.push(row),
                Err(e) => {
                    debug!("Rejected row {}: {}", rows.len(), e.code());
                    writeln!(self.writer, "{e} Please enter a valid row.")?;
                }
            }
        }
        Ok(Some(rows))
    }

    /// Next line without its terminator, or `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        self.writer.flush()?;
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_with(input: &str) -> String {
        let config = FinderConfig::new(2, 5, 10).unwrap();
        let mut console = Console::new(input.as_bytes(), Vec::new(), config);
        console.run().unwrap();
        String::from_utf8(console.into_writer()).unwrap()
    }

    #[test]
    fn test_single_session() {
        let out = run_with("3\nabc\nDEF\nghi\nadg, ef;zz\nn\n");
        assert!(out.contains("Enter 3 rows, each with 3 characters:"));
        assert!(out.contains("\t ___\n\t|abc|\n\t|def|\n\t|ghi|\n\t ---\n"));
        assert!(out.contains("Most repeated words found:\nadg\nef\n"));
        assert!(!out.contains("zz\n"));
        assert!(out.ends_with("Goodbye! Thanks for using wordfinder.\n"));
    }

    #[test]
    fn test_reprompts_on_bad_size() {
        let out = run_with("x\n9\n2\nab\ncd\nzz\nn\n");
        assert!(out.contains("\"x\" is not a number"));
        assert!(out.contains("Invalid matrix size 9. Please ensure it's between 2 and 5."));
        assert!(out.contains("No words found in the matrix."));
    }

    #[test]
    fn test_reprompts_on_bad_row() {
        let out = run_with("2\nabc\nab\ncd\nac\nn\n");
        assert!(out.contains("Each row must have exactly 2 characters (got 3). Please enter a valid row."));
        assert!(out.contains("Most repeated words found:\nac\n"));
    }

    #[test]
    fn test_repeat_runs_again() {
        let out = run_with("2\nab\ncd\nab\ny\n2\nxy\nzw\nxz\nN\n");
        assert_eq!(out.matches("Enter the size of the matrix").count(), 2);
        assert!(out.contains("Most repeated words found:\nxz\n"));
    }

    #[test]
    fn test_end_of_input_mid_session() {
        let out = run_with("3\nabc\n");
        assert!(out.contains("Enter 3 rows"));
        assert!(!out.contains("Goodbye"));
    }
}
