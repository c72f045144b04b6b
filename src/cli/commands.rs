// src/cli/commands.rs
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate a random password
    Generate {
        /// Password length
        #[arg(long, short = 'l')]
        length: Option<usize>,

        /// Leave out lowercase letters
        #[arg(long)]
        no_lowercase: bool,

        /// Leave out uppercase letters
        #[arg(long)]
        no_uppercase: bool,

        /// Leave out numbers
        #[arg(long)]
        no_numbers: bool,

        /// Leave out symbols
        #[arg(long)]
        no_symbols: bool,

        /// Drop easily confused characters (0, O, 1, l, I)
        #[arg(long)]
        exclude_ambiguous: bool,

        /// Save the generated password to history
        #[arg(long)]
        save: bool,
    },

    /// Generate a pronounceable password
    Pronounceable {
        /// Password length
        #[arg(long, short = 'l')]
        length: Option<usize>,

        /// Work one digit into the result
        #[arg(long)]
        numbers: bool,

        /// Randomly uppercase some letters
        #[arg(long)]
        uppercase: bool,

        /// Work one symbol into the result
        #[arg(long)]
        symbols: bool,

        /// Save the generated password to history
        #[arg(long)]
        save: bool,
    },

    /// Score the strength of a password
    Score {
        /// Password to score
        #[arg(required = true)]
        password: String,
    },

    /// Show recently saved passwords
    History {
        /// Number of entries to show
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },
}
