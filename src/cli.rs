use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(author, version, about = "film club statistics")]
pub struct Cli {
    /// Directory containing films.json and members.json
    #[arg(long, default_value = "data", global = true)]
    pub data_dir: String,

    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Show a member's statistics profile with club-wide ranks
    Member {
        /// Member name (case-insensitive)
        name: String,
    },
    /// List films with optional filters and sorting
    Films(FilmsArgs),
    /// Work out whose turn it is to select the next film
    UpNext,
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct FilmsArgs {
    /// Match title or director, case-insensitive substring
    #[arg(long)]
    pub search: Option<String>,

    /// Keep films listing this exact genre
    #[arg(long)]
    pub genre: Option<String>,

    /// Keep films selected by this member (exact name)
    #[arg(long)]
    pub selector: Option<String>,

    /// Keep only films with at least one club rating
    #[arg(long)]
    pub rated: bool,

    /// Keep only films rated by this member
    #[arg(long)]
    pub rated_by: Option<String>,

    /// Sort column
    #[arg(long, value_enum, default_value_t = SortColumn::Title)]
    pub sort: SortColumn,

    /// Reverse the sort column's default direction
    #[arg(long)]
    pub reverse: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq)]
pub enum SortColumn {
    Title,
    Year,
    Average,
    WatchDate,
    /// Requires --rated-by to name whose score to sort on
    Score,
    Spread,
}
