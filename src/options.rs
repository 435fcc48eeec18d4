use std::path::PathBuf;

use crate::error::{HuffmanError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ingest {
    /// Only the first line, without its terminator.
    #[default]
    FirstLine,
    WholeFile,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Options {
    /// `None` means the driver should prompt for a filename.
    pub input: Option<PathBuf>,
    pub ingest: Ingest,
    pub show_codes: bool,
    pub show_tree: bool,
}

impl Options {
    /// Parses the arguments that follow the program name.
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut options = Options::default();

        for arg in args {
            match arg.as_str() {
                "--whole-file" => options.ingest = Ingest::WholeFile,
                "--codes" => options.show_codes = true,
                "--tree" => options.show_tree = true,
                flag if flag.starts_with("--") => {
                    return Err(HuffmanError::Usage(format!("unknown option '{}'", flag)));
                }
                path => {
                    if options.input.is_some() {
                        return Err(HuffmanError::Usage(format!(
                            "unexpected extra argument '{}'",
                            path
                        )));
                    }
                    options.input = Some(PathBuf::from(path));
                }
            }
        }

        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Options> {
        Options::from_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn defaults_to_prompt_and_first_line() {
        let options = parse(&[]).unwrap();
        assert_eq!(options, Options::default());
        assert_eq!(options.ingest, Ingest::FirstLine);
        assert!(options.input.is_none());
    }

    #[test]
    fn flags_in_any_order() {
        let options = parse(&["--tree", "input.txt", "--whole-file", "--codes"]).unwrap();
        assert_eq!(options.input, Some(PathBuf::from("input.txt")));
        assert_eq!(options.ingest, Ingest::WholeFile);
        assert!(options.show_codes);
        assert!(options.show_tree);
    }

    #[test]
    fn rejects_unknown_flag() {
        assert!(matches!(parse(&["--order=2"]), Err(HuffmanError::Usage(_))));
    }

    #[test]
    fn rejects_second_path() {
        assert!(matches!(
            parse(&["a.txt", "b.txt"]),
            Err(HuffmanError::Usage(_))
        ));
    }
}
