use bnm_api::{BnmAPI, DateArgs, Error, Payload, ResponseFormat};
use clap::{Args, Parser, Subcommand};
use log::{error, info};
use std::process::exit;

mod utils;

#[derive(Parser)]
#[command(name = "bnm")]
#[command(about = "Query Bank Negara Malaysia's open data API", long_about = None)]
struct Cli {
    /// Output as json or tabular [default: BNM_API_FORMAT, then json]
    #[arg(short, long, global = true, value_parser = parse_format)]
    format: Option<ResponseFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Default)]
struct DateOpts {
    /// Exact date, YYYY-MM-DD
    #[arg(long)]
    date: Option<String>,
    /// Year, used together with --month
    #[arg(long)]
    year: Option<i32>,
    /// Month 1-12, used together with --year
    #[arg(long)]
    month: Option<u32>,
}

impl DateOpts {
    fn as_args(&self) -> DateArgs<'_> {
        DateArgs {
            date: self.date.as_deref(),
            year: self.year,
            month: self.month,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Base rates and base lending rates
    BaseRate {
        /// SWIFT code of a single bank
        bank_code: Option<String>,
    },
    /// Daily interbank FX turnover
    FxTurnover {
        #[command(flatten)]
        date: DateOpts,
    },
    /// Exchange rates
    ExchangeRate {
        /// ISO 4217 currency code
        currency: Option<String>,
        /// Snapshot session: 0900, 1130, 1200 or 1700
        #[arg(long)]
        session: Option<String>,
        /// Quote basis: rm or fx
        #[arg(long)]
        quote: Option<String>,
        #[command(flatten)]
        date: DateOpts,
    },
    /// Financial consumer alerts
    ConsumerAlert {
        /// Name to search for
        query: Option<String>,
    },
    /// Interbank swap volumes
    InterbankSwap {
        #[command(flatten)]
        date: DateOpts,
    },
    /// Interbank interest rates
    InterestRate {
        /// money_market_operations, interbank or overall
        #[arg(long)]
        product: Option<String>,
        #[command(flatten)]
        date: DateOpts,
    },
    /// Interbank interest volumes
    InterestVolume {
        /// money_market_operations, interbank or overall
        #[arg(long)]
        product: Option<String>,
        #[command(flatten)]
        date: DateOpts,
    },
    /// Islamic interbank rates
    IslamicInterbankRate {
        #[command(flatten)]
        date: DateOpts,
    },
    /// Kijang Emas gold coin prices
    KijangEmas {
        #[command(flatten)]
        date: DateOpts,
    },
    /// Overnight policy rate
    Opr {
        #[arg(long)]
        year: Option<i32>,
    },
    /// Renminbi deposit acceptance rates
    RenminbiDeposit,
    /// Renminbi FX forward prices
    RenminbiForward,
    /// USD interbank intraday rates
    UsdIntraday {
        #[command(flatten)]
        date: DateOpts,
    },
    /// Kuala Lumpur USD/MYR reference rates
    KlUsdReference {
        #[command(flatten)]
        date: DateOpts,
    },
}

fn parse_format(s: &str) -> Result<ResponseFormat, String> {
    s.parse().map_err(|e: bnm_model::UnknownFormat| e.to_string())
}

fn run(api: &BnmAPI, command: &Commands, format: Option<ResponseFormat>) -> Result<Payload, Error> {
    match command {
        Commands::BaseRate { bank_code } => api.base_rate(bank_code.as_deref(), format),
        Commands::FxTurnover { date } => api.fx_turnover(date.as_args(), format),
        Commands::ExchangeRate {
            currency,
            session,
            quote,
            date,
        } => api.exchange_rate(
            session.as_deref(),
            quote.as_deref(),
            currency.as_deref(),
            date.as_args(),
            format,
        ),
        Commands::ConsumerAlert { query } => api.consumer_alert(query.as_deref(), format),
        Commands::InterbankSwap { date } => api.interbank_swap(date.as_args(), format),
        Commands::InterestRate { product, date } => {
            api.interest_rate(product.as_deref(), date.as_args(), format)
        }
        Commands::InterestVolume { product, date } => {
            api.interest_volume(product.as_deref(), date.as_args(), format)
        }
        Commands::IslamicInterbankRate { date } => {
            api.islamic_interbank_rate(date.as_args(), format)
        }
        Commands::KijangEmas { date } => api.kijang_emas(date.as_args(), format),
        Commands::Opr { year } => api.opr(*year, format),
        Commands::RenminbiDeposit => api.renminbi_deposit_acceptance_rate(format),
        Commands::RenminbiForward => api.renminbi_fx_forward_price(format),
        Commands::UsdIntraday { date } => api.usd_interbank_intraday_rate(date.as_args(), format),
        Commands::KlUsdReference { date } => api.kl_usd_reference_rate(date.as_args(), format),
    }
}

fn main() {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    let cli = Cli::parse();

    let api = match BnmAPI::from_env() {
        Ok(api) => api,
        Err(e) => {
            error!("Could not create config: {}", e);
            exit(1);
        }
    };
    info!("Using {}", api.config().base_url());

    let payload = match run(&api, &cli.command, cli.format) {
        Ok(payload) => payload,
        Err(e) => {
            error!("{}", e);
            exit(1);
        }
    };

    match utils::render_payload(&payload) {
        Ok(text) => println!("{}", text),
        Err(e) => {
            error!("Could not render response: {}", e);
            exit(1);
        }
    }
}
