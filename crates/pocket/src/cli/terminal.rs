use console::Term;
use pocketapp::confirm::{Confirmation, Confirmer};
use pocketapp::config::PocketConfig;
use pocketapp::error::{PocketError, Result};
use pocketapp::media::{MediaPicker, Permission, PickResult};
use std::io::{self, BufRead, BufReader, IsTerminal, Write};
use std::path::Path;
use tracing::debug;

/// Line-oriented input shared by a session loop and the questions it asks.
///
/// Prompts are only printed when a person is at the terminal on both ends;
/// piped scripts get clean output.
pub struct Input {
    reader: Box<dyn BufRead>,
    attended: bool,
}

impl Input {
    pub fn stdin() -> Self {
        Self {
            reader: Box::new(BufReader::new(io::stdin())),
            attended: attended(
                io::stdin().is_terminal(),
                Term::stdout().features().is_attended(),
            ),
        }
    }

    #[cfg(test)]
    pub fn from_script(script: &str) -> Self {
        Self {
            reader: Box::new(io::Cursor::new(script.to_string().into_bytes())),
            attended: false,
        }
    }

    pub fn is_attended(&self) -> bool {
        self.attended
    }

    /// Next line without its line ending, or `None` at end of input.
    pub fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        if self.attended {
            print!("{}", prompt);
            io::stdout().flush()?;
        }
        let mut buf = String::new();
        if self.reader.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim_end_matches(['\n', '\r']).to_string()))
    }
}

/// Yes/no questions on the terminal. Anything but `y`/`yes` is a no,
/// including end of input.
pub struct TerminalConfirmer<'a> {
    input: &'a mut Input,
}

impl<'a> TerminalConfirmer<'a> {
    pub fn new(input: &'a mut Input) -> Self {
        Self { input }
    }
}

impl Confirmer for TerminalConfirmer<'_> {
    fn confirm(&mut self, prompt: &str) -> Confirmation {
        let question = format!("{} [y/N] ", prompt);
        if !self.input.is_attended() {
            println!("{}", question.trim_end());
        }
        let answer = match self.input.read_line(&question) {
            Ok(Some(line)) => parse_answer(&line),
            Ok(None) => Confirmation::Cancel,
            Err(e) => {
                debug!(error = %e, "could not read confirmation, treating as no");
                Confirmation::Cancel
            }
        };
        debug!(?answer, "confirmation");
        answer
    }
}

fn attended(stdin_is_term: bool, stdout_is_term: bool) -> bool {
    stdin_is_term && stdout_is_term
}

fn parse_answer(line: &str) -> Confirmation {
    match line.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Confirmation::Proceed,
        _ => Confirmation::Cancel,
    }
}

/// A terminal has no camera roll, so "picking" means typing a path or URI.
/// Permissions come from configuration.
pub struct TerminalPicker<'a> {
    input: &'a mut Input,
    library: Permission,
    camera: Permission,
}

impl<'a> TerminalPicker<'a> {
    pub fn new(input: &'a mut Input, config: &PocketConfig) -> Self {
        let grant = |allowed: bool| {
            if allowed {
                Permission::Granted
            } else {
                Permission::Denied
            }
        };
        Self {
            input,
            library: grant(config.library_access),
            camera: grant(config.camera_access),
        }
    }

    fn ask_for_image(&mut self, prompt: &str) -> Result<PickResult> {
        if !self.input.is_attended() {
            println!("{}", prompt);
        }
        let Some(line) = self.input.read_line(&format!("{} ", prompt))? else {
            return Ok(PickResult::Cancelled);
        };
        let line = line.trim();
        if line.is_empty() {
            return Ok(PickResult::Cancelled);
        }
        to_uri(line).map(PickResult::Picked)
    }
}

/// URIs pass through untouched; local paths must exist and become `file://`.
fn to_uri(input: &str) -> Result<String> {
    if input.contains("://") {
        return Ok(input.to_string());
    }
    let path = Path::new(input);
    if !path.exists() {
        return Err(PocketError::Media(format!("No such file: {}", input)));
    }
    let absolute = path.canonicalize()?;
    Ok(format!("file://{}", absolute.display()))
}

impl MediaPicker for TerminalPicker<'_> {
    fn request_library_permission(&mut self) -> Permission {
        self.library
    }

    fn request_camera_permission(&mut self) -> Permission {
        self.camera
    }

    fn pick_from_library(&mut self) -> Result<PickResult> {
        self.ask_for_image("Image path or URI (empty to cancel):")
    }

    fn capture_from_camera(&mut self) -> Result<PickResult> {
        self.ask_for_image("Captured photo path or URI (empty to cancel):")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_line_strips_endings_and_stops_at_eof() {
        let mut input = Input::from_script("one\r\ntwo\n");
        assert_eq!(input.read_line("").unwrap().as_deref(), Some("one"));
        assert_eq!(input.read_line("").unwrap().as_deref(), Some("two"));
        assert_eq!(input.read_line("").unwrap(), None);
    }

    #[test]
    fn attended_needs_terminal_on_both_ends() {
        assert!(attended(true, true));
        assert!(!attended(false, true));
        assert!(!attended(true, false));
        assert!(!attended(false, false));
    }

    #[test]
    fn confirmer_accepts_only_yes() {
        for (line, expected) in [
            ("y\n", Confirmation::Proceed),
            ("YES\n", Confirmation::Proceed),
            ("n\n", Confirmation::Cancel),
            ("sure\n", Confirmation::Cancel),
            ("", Confirmation::Cancel),
        ] {
            let mut input = Input::from_script(line);
            let mut confirmer = TerminalConfirmer::new(&mut input);
            assert_eq!(confirmer.confirm("Really?"), expected, "input {:?}", line);
        }
    }

    #[test]
    fn picker_passes_uris_through() {
        let mut input = Input::from_script("https://example.com/me.png\n");
        let mut picker = TerminalPicker::new(&mut input, &PocketConfig::default());
        assert_eq!(
            picker.pick_from_library().unwrap(),
            PickResult::Picked("https://example.com/me.png".into())
        );
    }

    #[test]
    fn picker_empty_line_cancels() {
        let mut input = Input::from_script("\n");
        let mut picker = TerminalPicker::new(&mut input, &PocketConfig::default());
        assert_eq!(picker.capture_from_camera().unwrap(), PickResult::Cancelled);
    }

    #[test]
    fn picker_missing_file_is_media_error() {
        let mut input = Input::from_script("/definitely/not/here.png\n");
        let mut picker = TerminalPicker::new(&mut input, &PocketConfig::default());
        assert!(matches!(
            picker.pick_from_library(),
            Err(PocketError::Media(_))
        ));
    }

    #[test]
    fn picker_turns_existing_path_into_file_uri() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let mut input = Input::from_script(&format!("{}\n", file.path().display()));
        let mut picker = TerminalPicker::new(&mut input, &PocketConfig::default());
        match picker.pick_from_library().unwrap() {
            PickResult::Picked(uri) => assert!(uri.starts_with("file://")),
            other => panic!("Expected Picked, got {:?}", other),
        }
    }

    #[test]
    fn permissions_follow_config() {
        let mut input = Input::from_script("");
        let config = PocketConfig {
            camera_access: true,
            library_access: false,
            ..Default::default()
        };
        let mut picker = TerminalPicker::new(&mut input, &config);
        assert_eq!(picker.request_camera_permission(), Permission::Granted);
        assert_eq!(picker.request_library_permission(), Permission::Denied);
    }
}
