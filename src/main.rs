use cashpoint::application::engine::Atm;
use cashpoint::domain::breakdown::BreakdownStrategy;
use cashpoint::domain::money::Currency;
use cashpoint::error::AtmError;
use cashpoint::infrastructure::in_memory::{InMemoryBank, InMemoryMoneyDeposit};
use cashpoint::interfaces::csv::account_reader::AccountReader;
use cashpoint::interfaces::csv::outcome_writer::{OutcomeWriter, WithdrawalOutcome};
use cashpoint::interfaces::csv::request_reader::RequestReader;
use cashpoint::interfaces::csv::stock_reader::StockReader;
use cashpoint::interfaces::json;
use clap::{Parser, ValueEnum};
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Withdrawal requests CSV file (card, pin, amount, currency)
    input: PathBuf,

    /// Bank accounts CSV file (card, pin, balance, currency)
    #[arg(long)]
    accounts: PathBuf,

    /// Cassette stock CSV file (currency, denomination, count)
    #[arg(long)]
    stock: PathBuf,

    /// Operating currency of the machine.
    #[arg(long, env = "CASHPOINT_CURRENCY", default_value = "PLN")]
    currency: Currency,

    /// How amounts are split into banknotes.
    #[arg(long, env = "CASHPOINT_STRATEGY", value_enum, default_value_t = StrategyArg::Greedy)]
    strategy: StrategyArg,

    /// Output format for the outcomes written to stdout.
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,
}

#[derive(Clone, Copy, ValueEnum)]
enum StrategyArg {
    Greedy,
    Exact,
}

impl From<StrategyArg> for BreakdownStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Greedy => BreakdownStrategy::Greedy,
            StrategyArg::Exact => BreakdownStrategy::Exact,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Csv,
    Json,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let bank = InMemoryBank::new();
    let accounts = AccountReader::new(File::open(&cli.accounts).into_diagnostic()?)
        .accounts()
        .into_diagnostic()?;
    for account in accounts {
        let balance = account.balance();
        bank.open_account(account.card, account.pin, balance).await;
    }

    let deposit = InMemoryMoneyDeposit::new(cli.currency);
    let stock = StockReader::new(File::open(&cli.stock).into_diagnostic()?)
        .stock()
        .into_diagnostic()?;
    for record in stock {
        if !deposit.load(record.banknote(), record.count).await {
            return Err(AtmError::ValidationError(format!(
                "{} banknotes cannot be loaded into a {} machine",
                record.currency, cli.currency
            )))
            .into_diagnostic();
        }
    }
    tracing::info!(currency = %cli.currency, stock = deposit.total().await, "machine loaded");

    let atm = Atm::new(Box::new(bank), cli.currency)
        .with_strategy(cli.strategy.into())
        .with_deposit(Box::new(deposit.clone()));

    // Process requests in file order against the one machine
    let file = File::open(&cli.input).into_diagnostic()?;
    let mut outcomes = Vec::new();
    for request in RequestReader::new(file).requests() {
        match request {
            Ok(request) => {
                let result = atm
                    .withdraw(&request.pin, &request.card, request.money())
                    .await;
                outcomes.push(WithdrawalOutcome::new(&request, &result));
            }
            Err(e) => {
                tracing::error!(error = %e, "Error reading request");
            }
        }
    }

    let served = outcomes.iter().filter(|o| o.is_success()).count();
    tracing::info!(
        requests = outcomes.len(),
        served,
        remaining = deposit.total().await,
        "all requests processed"
    );

    let stdout = io::stdout();
    match cli.format {
        OutputFormat::Csv => {
            let mut writer = OutcomeWriter::new(stdout.lock());
            writer.write_outcomes(&outcomes).into_diagnostic()?;
        }
        OutputFormat::Json => {
            json::write_outcomes(stdout.lock(), &outcomes).into_diagnostic()?;
        }
    }

    Ok(())
}
