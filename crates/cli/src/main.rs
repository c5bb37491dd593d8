//! Command Line Interface for the DIESEL dashboard.
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use diesel_data::{DashboardLoader, PoolQuery, PoolSource, SnapshotProvider};
use diesel_domain::collateral::{BorrowPosition, CollateralParams};
use diesel_domain::entities::{available_vaults, find_vault};
use diesel_domain::format::{format_percent, format_price, format_token_amount, format_usd};
use diesel_domain::mint::expected_yield;
use diesel_domain::pricing::DIESEL_SYMBOL;
use diesel_domain::value_objects::AlkaneId;
use diesel_execution::lending::{LendingBackend, UnavailableLending};
use diesel_execution::mint::{MintConfig, prepare_mint};
use diesel_execution::wallet::WalletSession;
use dotenv::dotenv;
use prettytable::{Table, row};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

mod config;

use config::CliConfig;

#[derive(Parser)]
#[command(name = "diesel")]
#[command(about = "DIESEL token dashboard calculations", long_about = None)]
struct Cli {
    /// Dashboard snapshot file (overrides DIESEL_SNAPSHOT)
    #[arg(long, global = true)]
    snapshot: Option<PathBuf>,

    /// Pools requested for the price estimate (overrides DIESEL_POOL_LIMIT)
    #[arg(long, global = true)]
    pool_limit: Option<usize>,

    /// Fee rate in sat/vB (overrides DIESEL_FEE_RATE)
    #[arg(long, global = true)]
    fee_rate: Option<u32>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate a token's price from the pool listing
    Price {
        /// Token symbol to price
        #[arg(short, long, default_value = DIESEL_SYMBOL)]
        symbol: String,
    },
    /// Show mint progress and preview a mint
    Mint {
        /// Alkane id of the token (block:tx)
        #[arg(short, long, default_value = "2:0")]
        alkane: AlkaneId,

        /// Number of mints in the request (1-10)
        #[arg(short, long, default_value = "1")]
        count: String,

        /// Wallet address; builds the mint request when given
        #[arg(long)]
        address: Option<String>,
    },
    /// Quote a borrow against BTC collateral
    Borrow {
        /// Collateral in BTC
        #[arg(long)]
        collateral: Option<String>,

        /// DIESEL to borrow
        #[arg(long)]
        borrow: Option<String>,

        /// Wallet address used with --submit
        #[arg(long)]
        address: Option<String>,

        /// Submit the borrow to the lending backend
        #[arg(long)]
        submit: bool,
    },
    /// List the dashboard vaults
    Vaults {
        /// Show a single vault in detail
        #[arg(long)]
        id: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config =
        CliConfig::from_env()?.with_overrides(cli.snapshot.clone(), cli.pool_limit, cli.fee_rate);

    match &cli.command {
        Commands::Price { symbol } => {
            let provider = load_snapshot(&config).await?;
            let query = PoolQuery::default().with_limit(config.pool_limit);
            let loader = DashboardLoader::new(provider.clone(), provider.clone(), provider.clone())
                .with_query(query);

            let Some(estimate) = loader.price_estimate(symbol).await else {
                println!("❌ No pool contains {symbol}.");
                return Ok(());
            };

            println!("\n📊 {symbol} Price");
            println!("════════════════════════════════════");
            println!("Price (BTC):     {}", format_price(estimate.price_in_btc));
            println!("Price (USD):     {}", format_usd(estimate.price_in_usd));
            println!("BTC Price:       {}", format_usd(estimate.btc_price_usd));
            println!("Total TVL:       {}", format_usd(estimate.total_tvl));
            println!("24h Volume:      {}", format_usd(estimate.total_vol_24h));
            println!("Pools:           {}", estimate.pool_count);
            println!("Top Pool:        {}", estimate.top_pool.pair_name());
            println!("════════════════════════════════════");

            let pools = provider.list_pools(&query).await?;
            let mut table = Table::new();
            table.add_row(row!["Pool", "TVL", "24h Volume"]);
            for pool in pools.iter().filter(|p| p.contains_symbol(symbol)) {
                table.add_row(row![
                    pool.pair_name(),
                    format_usd(pool.tvl_usd),
                    format_usd(pool.vol_24h_usd)
                ]);
            }
            table.printstd();
        }
        Commands::Mint {
            alkane,
            count,
            address,
        } => {
            let provider = load_snapshot(&config).await?;
            let loader = DashboardLoader::new(provider.clone(), provider.clone(), provider);
            let state = loader
                .token_state(alkane)
                .await
                .with_context(|| format!("Failed to load token data for {alkane}"))?;
            let progress = state.progress();

            println!("\n⛏️  {} ({})", state.display_name(), state.id);
            println!("════════════════════════════════════");
            let cap = state
                .cap
                .map(|cap| format_token_amount(&state.amount(cap)))
                .unwrap_or_else(|| "unknown".to_string());
            println!(
                "Minted:          {} / {}",
                format_token_amount(&state.amount(state.minted)),
                cap
            );
            println!("Progress:        {}", format_percent(progress.display_pct()));
            println!(
                "Per Mint:        {} {}",
                format_token_amount(&state.amount(state.value_per_mint)),
                state.symbol
            );
            if let Some(reason) = progress.availability.reason(&state.symbol) {
                println!("Status:          {reason}");
            }

            match count.parse() {
                Ok(multiplier) => {
                    let received = expected_yield(&state, multiplier)?;
                    println!(
                        "You receive:     {} {}",
                        format_token_amount(&received),
                        state.symbol
                    );
                }
                Err(err) => println!("Count:           {err}"),
            }
            println!("════════════════════════════════════");

            if let Some(address) = address {
                let wallet = WalletSession::connected(address.as_str());
                let mint_config = MintConfig {
                    fee_rate: config.fee_rate,
                };
                let prepared = prepare_mint(&wallet, &state, count, &mint_config)?;
                println!("🧾 Mint request for {}", wallet.short_address().unwrap_or_default());
                println!("Protostone:      {}", prepared.request.protostone());
                println!("Fee rate:        {} sat/vB", prepared.request.fee_rate);
            }
        }
        Commands::Borrow {
            collateral,
            borrow,
            address,
            submit,
        } => {
            let params = CollateralParams::default();
            let position = BorrowPosition::from_inputs(
                collateral.as_deref().unwrap_or_default(),
                borrow.as_deref().unwrap_or_default(),
            );
            let quote = params.quote(&position);

            println!("\n🏦 BTC Collateral Vault");
            println!("════════════════════════════════════");
            println!("Collateral:      {} BTC", position.collateral_amount);
            println!("Borrow:          {} DIESEL", position.borrow_amount);
            println!("Max Borrow:      {} DIESEL", quote.max_borrow_display());
            println!("Health Factor:   {}", quote.health_factor_display());
            if let Some(band) = quote.band {
                println!("Health:          {band:?}");
            }
            println!("Liquidation at:  {}% LTV", params.liquidation_threshold_pct);
            println!("════════════════════════════════════");

            if *submit {
                let wallet = address
                    .as_deref()
                    .map(WalletSession::connected)
                    .unwrap_or_default();
                let backend: Arc<dyn LendingBackend> = Arc::new(UnavailableLending);
                let txid = backend.borrow(&wallet, &position).await?;
                println!("✅ Borrow submitted: {txid}");
            }
        }
        Commands::Vaults { id } => {
            let vaults = match id {
                Some(id) => vec![find_vault(id).with_context(|| format!("Unknown vault: {id}"))?],
                None => available_vaults(),
            };

            let mut table = Table::new();
            table.add_row(row!["Vault", "Deposit", "Receive", "Est. APY", "Boost", "Status"]);
            for vault in &vaults {
                let boost = vault
                    .boost
                    .as_ref()
                    .map(|b| match b.multiplier {
                        Some(m) => format!("{} x{m}", b.token_symbol),
                        None => b.token_symbol.clone(),
                    })
                    .unwrap_or_else(|| "-".to_string());
                table.add_row(row![
                    vault.name,
                    vault.input_asset,
                    vault.output_asset,
                    vault
                        .estimated_apy
                        .map(format_percent)
                        .unwrap_or_else(|| "-".to_string()),
                    boost,
                    vault.badge.as_deref().unwrap_or("-")
                ]);
            }
            table.printstd();
        }
    }

    Ok(())
}

async fn load_snapshot(config: &CliConfig) -> Result<Arc<SnapshotProvider>> {
    let provider = SnapshotProvider::load(&config.snapshot_path)
        .await
        .with_context(|| {
            format!(
                "Failed to load dashboard snapshot from {}",
                config.snapshot_path.display()
            )
        })?;
    Ok(Arc::new(provider))
}
