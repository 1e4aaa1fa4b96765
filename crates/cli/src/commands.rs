use clap::Subcommand;
use filter::TranslatorDialect;

#[derive(Subcommand)]
pub enum Commands {
    /// Translate a filter expression into a SQL condition
    Translate {
        #[arg(long, help = "Schema file declaring the allowed identifiers")]
        schema: String,

        #[arg(long, help = "SQL dialect; overrides the dialect of the schema file")]
        dialect: Option<TranslatorDialect>,

        #[arg(
            long,
            help = "If specified, writes the condition to this file instead of stdout"
        )]
        output: Option<String>,

        /// Filter expression
        query: String,
    },
    /// Print the parsed expression tree as JSON
    Ast {
        /// Filter expression
        query: String,
    },
}
