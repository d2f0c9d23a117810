use clap::{Parser, Subcommand};

use singlish_cli::commands::{config_ops, convert_ops, session_ops};

#[derive(Parser)]
#[command(name = "singtool", about = "Singlish conversion diagnostics")]
struct Cli {
    /// Path to a custom rules TOML file (defaults embedded)
    #[arg(long, global = true)]
    rules: Option<String>,
    /// Path to a custom lexicon TOML file (defaults embedded)
    #[arg(long, global = true)]
    lexicon: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a Singlish string to Sinhala script
    Convert {
        /// Input text
        text: String,
    },

    /// Show the per-token breakdown of a conversion
    Inspect {
        /// Input text
        text: String,
        /// Output as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Simulate typing the input one keystroke at a time
    Type {
        /// Input text
        text: String,
        /// Print only the final rendering
        #[arg(long)]
        quiet: bool,
    },

    /// Print the embedded default rules TOML
    RulesExport,

    /// Parse and validate a rules TOML file
    RulesValidate {
        /// Path to the rules file
        file: String,
    },

    /// Print the embedded default lexicon TOML
    LexiconExport,

    /// Parse and validate a lexicon TOML file
    LexiconValidate {
        /// Path to the lexicon file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();
    config_ops::init_custom_tables(cli.rules.as_deref(), cli.lexicon.as_deref());

    match cli.command {
        Command::Convert { text } => convert_ops::convert_cmd(&text),
        Command::Inspect { text, json } => convert_ops::inspect_cmd(&text, json),
        Command::Type { text, quiet } => session_ops::type_cmd(&text, quiet),
        Command::RulesExport => config_ops::rules_export(),
        Command::RulesValidate { file } => config_ops::rules_validate(&file),
        Command::LexiconExport => config_ops::lexicon_export(),
        Command::LexiconValidate { file } => config_ops::lexicon_validate(&file),
    }
}
