use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use finmgr_core::model::PayFrequency;
use jiff::civil::Date;

#[derive(Parser, Debug)]
#[command(name = "finmgr", version)]
#[command(about = "Personal finance calculator for loans, incomes, portfolios and budgets")]
pub struct Cli {
    /// Path to the data directory (default: ~/.finmgr/)
    #[arg(short, long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error); overrides the configured level
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,

    /// Print results as JSON regardless of the configured output
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Amortize a loan and print its payment schedule
    Loan(LoanArgs),
    /// Compare two loans month by month
    Compare(CompareArgs),
    /// Project next paydays and pay amounts for incomes
    Income(IncomeArgs),
    /// Total a set of stock positions
    Portfolio(PortfolioArgs),
    /// Daily value of stock holdings over a look-back window
    History(HistoryArgs),
    /// Work out what to save each pay to reach a goal
    Savings(SavingsArgs),
    /// Monthly budget from loans, incomes, bills and credit cards
    Summary(SummaryArgs),
    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Args, Debug)]
pub struct LoanArgs {
    /// Loan JSON file
    #[arg(short, long, conflicts_with_all = ["total", "rate", "term", "payment"])]
    pub file: Option<PathBuf>,

    /// Principal borrowed
    #[arg(long, required_unless_present = "file")]
    pub total: Option<f64>,

    /// Annual interest rate in percent
    #[arg(long, required_unless_present = "file")]
    pub rate: Option<f64>,

    /// Term in months
    #[arg(long)]
    pub term: Option<i32>,

    /// Fixed monthly payment
    #[arg(long)]
    pub payment: Option<f64>,
}

#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Existing loan JSON file
    #[arg(long)]
    pub original: PathBuf,

    /// Candidate loan JSON file
    #[arg(long)]
    pub candidate: PathBuf,
}

#[derive(Args, Debug)]
pub struct IncomeArgs {
    /// Income JSON file (one income or an array)
    #[arg(short, long)]
    pub file: PathBuf,

    /// Project as of this date (default: today)
    #[arg(long)]
    pub now: Option<Date>,
}

#[derive(Args, Debug)]
pub struct PortfolioArgs {
    /// Positions JSON file
    #[arg(short, long)]
    pub file: PathBuf,
}

#[derive(Args, Debug)]
pub struct HistoryArgs {
    /// Holdings JSON file
    #[arg(long)]
    pub holdings: PathBuf,

    /// Daily price bars JSON file
    #[arg(long)]
    pub bars: PathBuf,

    /// Days to look back (default: the configured history_days)
    #[arg(long)]
    pub days: Option<i64>,

    /// End of the window (default: now)
    #[arg(long)]
    pub now: Option<Date>,
}

#[derive(Args, Debug)]
pub struct SavingsArgs {
    /// Amount to have saved by the deadline
    #[arg(long, default_value_t = 0.0)]
    pub goal: f64,

    /// Amount to set aside each pay
    #[arg(long, default_value_t = 0.0)]
    pub amount: f64,

    /// weekly, bi-weekly or monthly
    #[arg(long)]
    pub pay_frequency: PayFrequency,

    #[arg(long)]
    pub next_pay: Date,

    #[arg(long)]
    pub deadline: Date,

    #[arg(long)]
    pub now: Option<Date>,
}

#[derive(Args, Debug)]
pub struct SummaryArgs {
    /// Budget JSON file with loans, incomes, bills and creditCards
    #[arg(short, long)]
    pub file: PathBuf,

    /// Summarize the month containing this date (default: today)
    #[arg(long)]
    pub now: Option<Date>,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Write the default configuration file
    Init {
        /// Replace an existing file
        #[arg(long)]
        force: bool,
    },
}
