//! Operator interaction.
//!
//! The run needs two things from whoever sits at the console: the input file
//! (when it was not given on the command line) and the synthesizer number
//! embedded in the output name. Both are behind the [`Operator`] trait so the
//! padding pipeline does not care where the answers come from.

use std::io::{self, BufRead, Stdout, Write};
use std::path::PathBuf;

/// Source of the answers the run asks for.
pub trait Operator {
    /// Asks for the input file. `None` means the operator cancelled.
    fn choose_file(&mut self) -> io::Result<Option<PathBuf>>;

    /// Asks for the synthesizer number, returned without validation.
    fn machine_number(&mut self) -> io::Result<String>;
}

/// Text prompts over a pair of streams.
pub struct ConsoleOperator<R, W> {
    input: R,
    output: W,
    use_dialog: bool,
}

impl<R: BufRead, W: Write> ConsoleOperator<R, W> {
    /// Creates an operator reading answers from `input` and writing prompts to `output`.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            use_dialog: false,
        }
    }

    /// Tries the native file picker first when the `dialog` feature is enabled.
    pub fn with_dialog(mut self, use_dialog: bool) -> Self {
        self.use_dialog = use_dialog;
        self
    }

    /// Prints `message` and reads one line without its line ending.
    /// EOF reads as an empty answer.
    fn ask(&mut self, message: &str) -> io::Result<String> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

impl ConsoleOperator<io::StdinLock<'static>, Stdout> {
    /// Operator bound to the process stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Operator for ConsoleOperator<R, W> {
    fn choose_file(&mut self) -> io::Result<Option<PathBuf>> {
        if self.use_dialog {
            if let Some(path) = pick_with_dialog() {
                return Ok(Some(path));
            }
            log::debug!("File picker returned nothing; falling back to manual input");
        }

        let answer = self.ask("Enter the sequence file path (leave empty to cancel): ")?;
        let answer = answer.trim();
        Ok((!answer.is_empty()).then(|| PathBuf::from(answer)))
    }

    fn machine_number(&mut self) -> io::Result<String> {
        self.ask("Enter the synthesizer number: ")
    }
}

#[cfg(feature = "dialog")]
fn pick_with_dialog() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Select sequence file")
        .pick_file()
}

#[cfg(not(feature = "dialog"))]
fn pick_with_dialog() -> Option<PathBuf> {
    log::debug!("Built without the `dialog` feature; no file picker available");
    None
}

/// Returns the command-line path when given, otherwise asks the operator.
pub fn resolve_input(arg: Option<PathBuf>, operator: &mut dyn Operator) -> io::Result<Option<PathBuf>> {
    match arg {
        Some(path) if !path.as_os_str().is_empty() => Ok(Some(path)),
        _ => operator.choose_file(),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::path::Path;

    use super::*;

    fn scripted(answers: &str) -> ConsoleOperator<Cursor<Vec<u8>>, Vec<u8>> {
        ConsoleOperator::new(Cursor::new(answers.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_choose_file_trims_answer() {
        let mut op = scripted("  data/a_DPI_out.txt  \n");
        let path = op.choose_file().unwrap();
        assert_eq!(path.as_deref(), Some(Path::new("data/a_DPI_out.txt")));

        let prompt = String::from_utf8(op.output).unwrap();
        assert!(prompt.contains("leave empty to cancel"));
    }

    #[test]
    fn test_blank_answer_cancels() {
        assert_eq!(scripted("   \n").choose_file().unwrap(), None);
        assert_eq!(scripted("").choose_file().unwrap(), None);
    }

    #[test]
    fn test_machine_number_verbatim() {
        let mut op = scripted(" S-07 b\r\n");
        assert_eq!(op.machine_number().unwrap(), " S-07 b");
    }

    #[test]
    fn test_machine_number_at_eof_is_empty() {
        assert_eq!(scripted("").machine_number().unwrap(), "");
    }

    #[test]
    fn test_argument_wins_over_prompt() {
        let mut op = scripted("other_DPI_out.txt\n");
        let path = resolve_input(Some(PathBuf::from("arg_DPI_out.txt")), &mut op).unwrap();

        assert_eq!(path, Some(PathBuf::from("arg_DPI_out.txt")));
        assert!(op.output.is_empty());
    }

    #[test]
    fn test_prompt_when_no_argument() {
        let mut op = scripted("typed_DPI_out.txt\n");
        let path = resolve_input(None, &mut op).unwrap();
        assert_eq!(path, Some(PathBuf::from("typed_DPI_out.txt")));
    }

    #[cfg(not(feature = "dialog"))]
    #[test]
    fn test_dialog_request_without_feature_falls_back() {
        let mut op = scripted("typed_DPI_out.txt\n").with_dialog(true);
        assert_eq!(
            op.choose_file().unwrap(),
            Some(PathBuf::from("typed_DPI_out.txt"))
        );
    }
}
