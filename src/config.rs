// Startup configuration
//
// Figures out where the portfolio content comes from and how to host the
// terminal. Command line wins, then FOLIO_CONTENT, then ~/.folio-term, then
// the bundled document.

use crate::content::ContentStore;
use crate::error::{FolioError, Result};
use std::path::{Path, PathBuf};

/// Environment variable pointing at a content file
pub const CONTENT_ENV: &str = "FOLIO_CONTENT";

const CONTENT_DIR: &str = ".folio-term";
const CONTENT_FILE: &str = "portfolio.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Raw-mode terminal with key handling
    Interactive,
    /// One command per input line, for pipes
    Plain,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub content_path: Option<PathBuf>,
    /// None means pick based on whether we're attached to a tty
    pub mode: Option<Mode>,
    pub verbose: bool,
}

/// What the command line asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Run(Config),
    Help,
    Version,
}

/// Parse arguments (without the program name)
pub fn parse_args<I, S>(args: I) -> Result<Action>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut config = Config::default();
    let mut args = args.into_iter().map(Into::into);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "help" | "-h" | "--help" => return Ok(Action::Help),
            "version" | "-V" | "--version" => return Ok(Action::Version),
            "--content" | "-c" => {
                let path = args
                    .next()
                    .ok_or_else(|| FolioError::Config("--content needs a path".to_string()))?;
                config.content_path = Some(PathBuf::from(path));
            }
            "--plain" => config.mode = Some(Mode::Plain),
            "--interactive" => config.mode = Some(Mode::Interactive),
            "--verbose" | "-v" => config.verbose = true,
            other => {
                return Err(FolioError::Config(format!("unknown argument '{}'", other)));
            }
        }
    }

    Ok(Action::Run(config))
}

/// Pick the content file to load, if any
///
/// An empty env value counts as unset. The home-directory file only counts
/// if it actually exists; an explicit path is returned as-is so a typo shows
/// up as an error instead of silently falling back.
pub fn resolve_content_path(
    cli: Option<&Path>,
    env_value: Option<String>,
    home: Option<PathBuf>,
) -> Option<PathBuf> {
    if let Some(path) = cli {
        return Some(path.to_path_buf());
    }
    if let Some(value) = env_value.filter(|v| !v.trim().is_empty()) {
        return Some(PathBuf::from(value));
    }
    home.map(|h| h.join(CONTENT_DIR).join(CONTENT_FILE))
        .filter(|p| p.is_file())
}

impl Config {
    /// Load the content store this config points at
    pub fn load_content(&self) -> Result<ContentStore> {
        let path = resolve_content_path(
            self.content_path.as_deref(),
            std::env::var(CONTENT_ENV).ok(),
            dirs::home_dir(),
        );

        match path {
            Some(path) => {
                log::info!("loading portfolio from {}", path.display());
                ContentStore::from_path(path)
            }
            None => {
                log::info!("no portfolio file found, using the bundled one");
                ContentStore::bundled()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let action = parse_args(Vec::<String>::new()).unwrap();
        assert_eq!(action, Action::Run(Config::default()));
    }

    #[test]
    fn test_parse_flags() {
        let action = parse_args(["--content", "me.json", "--plain", "-v"]).unwrap();
        assert_eq!(
            action,
            Action::Run(Config {
                content_path: Some(PathBuf::from("me.json")),
                mode: Some(Mode::Plain),
                verbose: true,
            })
        );
    }

    #[test]
    fn test_parse_help_and_version() {
        assert_eq!(parse_args(["--help"]).unwrap(), Action::Help);
        assert_eq!(parse_args(["-v", "version"]).unwrap(), Action::Version);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(parse_args(["--content"]), Err(FolioError::Config(_))));
        assert!(matches!(parse_args(["--nope"]), Err(FolioError::Config(_))));
    }

    #[test]
    fn test_resolve_prefers_cli() {
        let path = resolve_content_path(
            Some(Path::new("cli.json")),
            Some("env.json".to_string()),
            None,
        );
        assert_eq!(path, Some(PathBuf::from("cli.json")));
    }

    #[test]
    fn test_resolve_env_then_home() {
        let home = tempfile::tempdir().unwrap();
        assert_eq!(
            resolve_content_path(None, Some("env.json".to_string()), Some(home.path().to_path_buf())),
            Some(PathBuf::from("env.json"))
        );

        // nothing in the home dir yet
        assert_eq!(
            resolve_content_path(None, Some("  ".to_string()), Some(home.path().to_path_buf())),
            None
        );

        let dir = home.path().join(CONTENT_DIR);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(CONTENT_FILE), "{}").unwrap();
        assert_eq!(
            resolve_content_path(None, None, Some(home.path().to_path_buf())),
            Some(dir.join(CONTENT_FILE))
        );
    }

    #[test]
    fn test_load_from_explicit_path() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), include_str!("../data/portfolio.json")).unwrap();

        let config = Config {
            content_path: Some(file.path().to_path_buf()),
            ..Config::default()
        };
        let store = config.load_content().unwrap();
        assert_eq!(store.profile().name, "Alex Rivera");
    }
}
