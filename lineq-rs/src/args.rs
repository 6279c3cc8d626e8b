use clap::{Parser, ValueEnum};
use lineq_solve::fmt::{FormatOptions, Language};
use std::path::PathBuf;

/// Language of the step titles and explanations.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum Lang {
    #[value(alias = "english")]
    En,

    #[value(alias = "spanish")]
    Es,
}

impl From<Lang> for Language {
    fn from(lang: Lang) -> Self {
        match lang {
            Lang::En => Self::English,
            Lang::Es => Self::Spanish,
        }
    }
}

/// Solves linear equations in `x` step by step.
///
/// Equations are read one per line from FILE, or from stdin when it is piped. Otherwise an
/// interactive prompt is started.
#[derive(Debug, Parser)]
#[command(name = "lineq", version, about = "Step-by-step linear equation solver")]
pub struct Args {
    /// Language of the step titles and explanations
    #[arg(long, value_enum, default_value = "en")]
    pub lang: Lang,

    /// Print each solution as a line of JSON
    #[arg(long)]
    pub json: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long)]
    pub verbose: bool,

    /// File to read equations from, one per line (`-` for stdin)
    pub file: Option<PathBuf>,
}

impl Args {
    /// Formatting options for the steps.
    pub fn format_options(&self) -> FormatOptions {
        Language::from(self.lang).inside(FormatOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn command_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["lineq"]).unwrap();
        assert_eq!(args.lang, Lang::En);
        assert_eq!(args.format_options(), FormatOptions::default());
        assert!(!args.json);
        assert!(!args.verbose);
        assert_eq!(args.file, None);
    }

    #[test]
    fn all_options() {
        let args = Args::try_parse_from(["lineq", "--lang", "es", "--json", "-v", "equations.txt"])
            .unwrap();
        assert_eq!(args.format_options().language, Language::Spanish);
        assert!(args.json);
        assert!(args.verbose);
        assert_eq!(args.file, Some(PathBuf::from("equations.txt")));
    }

    #[test]
    fn language_alias() {
        let args = Args::try_parse_from(["lineq", "--lang=spanish"]).unwrap();
        assert_eq!(args.lang, Lang::Es);
    }

    #[test]
    fn bad_arguments() {
        assert!(Args::try_parse_from(["lineq", "--lang", "fr"]).is_err());
        assert!(Args::try_parse_from(["lineq", "--lang"]).is_err());
        assert!(Args::try_parse_from(["lineq", "--fast"]).is_err());
        assert!(Args::try_parse_from(["lineq", "a", "b"]).is_err());
    }
}
