use clap::{ArgGroup, Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, with the git hash appended for dev builds.
/// Format: "0.3.2" without git metadata, "0.3.2@abc1234" otherwise
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "shelf", bin_name = "shelf", version = get_version())]
#[command(
    about = "A personal library catalog",
    long_about = "A personal library catalog.\n\n\
                  Run without a command for the interactive menu."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Session snapshot file (overrides the configured one)
    #[arg(long, global = true, value_name = "PATH")]
    pub snapshot: Option<PathBuf>,

    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a book
    Add { title: String, author: String },

    /// List all books
    #[command(alias = "ls")]
    List,

    /// Search by title or author (case-insensitive)
    #[command(group(ArgGroup::new("field").required(true).args(["title", "author"])))]
    Search {
        /// Search titles
        #[arg(long)]
        title: bool,

        /// Search authors
        #[arg(long)]
        author: bool,

        query: String,
    },

    /// Change the title and/or author of a book
    #[command(group(ArgGroup::new("changes").required(true).multiple(true).args(["title", "author"])))]
    Edit {
        /// Book number, as shown by `list`
        position: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        author: Option<String>,
    },

    /// Delete a book
    #[command(alias = "rm")]
    Delete {
        /// Book number, as shown by `list`
        position: String,
    },

    /// Sort the library by title
    Sort,

    /// Save the library to a text file
    Export { file: PathBuf },

    /// Append books from a text file
    Import { file: PathBuf },

    /// Show the configuration, or write the default one
    Config {
        /// Write a config file with default values if none exists
        #[arg(long)]
        init: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("shelf").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn no_command_means_menu() {
        let cli = parse(&[]);
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn parses_add() {
        match parse(&["add", "War and Peace", "Tolstoy"]).command {
            Some(Commands::Add { title, author }) => {
                assert_eq!(title, "War and Peace");
                assert_eq!(author, "Tolstoy");
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn search_requires_exactly_one_field() {
        match parse(&["search", "--author", "tolstoy"]).command {
            Some(Commands::Search {
                title,
                author,
                query,
            }) => {
                assert!(!title);
                assert!(author);
                assert_eq!(query, "tolstoy");
            }
            other => panic!("unexpected: {:?}", other),
        }

        assert!(Cli::try_parse_from(["shelf", "search", "tolstoy"]).is_err());
        assert!(
            Cli::try_parse_from(["shelf", "search", "--title", "--author", "x"]).is_err()
        );
    }

    #[test]
    fn edit_needs_a_change() {
        assert!(Cli::try_parse_from(["shelf", "edit", "1"]).is_err());
        match parse(&["edit", "2", "--author", "Leo Tolstoy"]).command {
            Some(Commands::Edit {
                position,
                title,
                author,
            }) => {
                assert_eq!(position, "2");
                assert_eq!(title, None);
                assert_eq!(author.as_deref(), Some("Leo Tolstoy"));
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn global_options_after_command() {
        let cli = parse(&["list", "--snapshot", "/tmp/books.json", "-v", "--no-color"]);
        assert_eq!(cli.snapshot, Some(PathBuf::from("/tmp/books.json")));
        assert!(cli.verbose);
        assert!(cli.no_color);
    }

    #[test]
    fn version_has_package_version() {
        assert!(get_version().starts_with(env!("CARGO_PKG_VERSION")));
    }
}
