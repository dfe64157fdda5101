use clap::Parser;

use crate::services::tables::number_constraints;

#[derive(Parser, Debug)]
#[command(
    name = "numspell",
    version,
    about = "Spells out numbers into words and word-and-digit form",
    after_help = number_constraints()
)]
pub struct Cli {
    #[arg(long, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        value_name = "NUMBER",
        help = "Digit string to spell; read interactively when omitted"
    )]
    pub number: Option<String>,
}
