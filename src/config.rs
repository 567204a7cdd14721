use std::path::{Path, PathBuf};

use clap::Parser;

/// Location of the Do Not Disturb database relative to the home directory.
pub const DND_DB_DIR: &str = "Library/DoNotDisturb/DB";
pub const ASSERTIONS_FILE: &str = "Assertions.json";
pub const MODES_FILE: &str = "ModeConfigurations.json";
pub const DEFAULT_OUTPUT: &str = "current_focus.txt";

#[derive(Debug, Clone, Parser)]
#[command(name = "current-focus")]
#[command(about = "Write the active macOS Focus mode to a text file", long_about = None)]
#[command(version)]
pub struct Config {
    /// Output file path
    #[arg(long, env = "CURRENT_FOCUS_OUTPUT", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Path to Assertions.json [default: ~/Library/DoNotDisturb/DB/Assertions.json]
    #[arg(long, env = "CURRENT_FOCUS_ASSERTIONS")]
    pub assertions: Option<PathBuf>,

    /// Path to ModeConfigurations.json [default: ~/Library/DoNotDisturb/DB/ModeConfigurations.json]
    #[arg(long, env = "CURRENT_FOCUS_MODES")]
    pub modes: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    pub assertions: PathBuf,
    pub modes: PathBuf,
    pub output: PathBuf,
}

impl Config {
    pub fn resolve_paths(&self) -> ResolvedPaths {
        self.resolve_paths_with_home(dirs::home_dir().as_deref())
    }

    /// Fill in defaults. Without a home directory the DB path stays relative.
    pub fn resolve_paths_with_home(&self, home: Option<&Path>) -> ResolvedPaths {
        let db_dir = match home {
            Some(home) => home.join(DND_DB_DIR),
            None => PathBuf::from(DND_DB_DIR),
        };

        let assertions = self
            .assertions
            .clone()
            .unwrap_or_else(|| db_dir.join(ASSERTIONS_FILE));
        let modes = self
            .modes
            .clone()
            .unwrap_or_else(|| db_dir.join(MODES_FILE));

        ResolvedPaths {
            assertions,
            modes,
            output: self.output.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Config {
        let mut argv = vec!["current-focus"];
        argv.extend_from_slice(args);
        Config::try_parse_from(argv).unwrap()
    }

    #[test]
    fn defaults_live_under_home() {
        let config = Config {
            output: PathBuf::from(DEFAULT_OUTPUT),
            assertions: None,
            modes: None,
            verbose: false,
        };
        let paths = config.resolve_paths_with_home(Some(Path::new("/Users/someone")));
        assert_eq!(
            paths.assertions,
            PathBuf::from("/Users/someone/Library/DoNotDisturb/DB/Assertions.json")
        );
        assert_eq!(
            paths.modes,
            PathBuf::from("/Users/someone/Library/DoNotDisturb/DB/ModeConfigurations.json")
        );
        assert_eq!(paths.output, PathBuf::from("current_focus.txt"));
    }

    #[test]
    fn modes_default_ignores_assertions_flag() {
        let config = parse(&["--assertions", "/tmp/dnd/Assertions.json"]);
        let paths = config.resolve_paths_with_home(Some(Path::new("/Users/someone")));
        assert_eq!(paths.assertions, PathBuf::from("/tmp/dnd/Assertions.json"));
        assert_eq!(
            paths.modes,
            PathBuf::from("/Users/someone/Library/DoNotDisturb/DB/ModeConfigurations.json")
        );
    }

    #[test]
    fn explicit_flags_win() {
        let config = parse(&[
            "--output",
            "out.txt",
            "--assertions",
            "a.json",
            "--modes",
            "/elsewhere/m.json",
            "-v",
        ]);
        let paths = config.resolve_paths_with_home(Some(Path::new("/home/x")));
        assert_eq!(paths.assertions, PathBuf::from("a.json"));
        assert_eq!(paths.modes, PathBuf::from("/elsewhere/m.json"));
        assert_eq!(paths.output, PathBuf::from("out.txt"));
        assert!(config.verbose);
    }

    #[test]
    fn relative_fallback_without_home() {
        let config = Config {
            output: PathBuf::from(DEFAULT_OUTPUT),
            assertions: None,
            modes: None,
            verbose: false,
        };
        let paths = config.resolve_paths_with_home(None);
        assert_eq!(
            paths.assertions,
            PathBuf::from("Library/DoNotDisturb/DB/Assertions.json")
        );
    }
}
