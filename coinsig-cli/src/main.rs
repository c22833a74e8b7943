//! COINSIG CLI — evaluate the decision pipeline from the command line.
//!
//! Commands:
//! - `evaluate` — fetch candles (Binance or synthetic), compute indicator
//!   snapshots, combine them into a technical signal, optionally score a
//!   text through the sentiment model, and run the risk gate
//! - `sentiment` — classify a single text through the configured model
//! - `fear-greed` — print the current crypto Fear & Greed index

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

use coinsig_core::data::{
    random_walk_candles, BinanceClient, FearGreedClient, HttpSentimentModel, SentimentModel,
};
use coinsig_core::domain::{Candle, Signal};
use coinsig_core::indicators::compute_snapshots;
use coinsig_core::risk::RiskGate;
use coinsig_core::signals::{combine, SentimentClassifier};

mod config;
mod report;

use config::EvalConfig;
use report::{write_decision_report, DecisionRow};

const TOKEN_ENV_VAR: &str = "COINSIG_API_TOKEN";

#[derive(Parser)]
#[command(name = "coinsig", about = "COINSIG CLI — crypto trading-signal pipeline")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate the full pipeline for one symbol and print the decision.
    Evaluate {
        /// Path to a TOML config file. Flags below override its values.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Trading pair (e.g. BTCUSDT).
        #[arg(long)]
        symbol: Option<String>,

        /// Candle interval (e.g. 1m, 15m, 1h, 1d).
        #[arg(long)]
        interval: Option<String>,

        /// Number of candles to fetch.
        #[arg(long)]
        limit: Option<u32>,

        /// Use synthetic candles instead of the exchange (offline).
        #[arg(long, default_value_t = false)]
        synthetic: bool,

        /// Seed for the synthetic random walk.
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Text to score through the sentiment model alongside the
        /// technical signal.
        #[arg(long)]
        text: Option<String>,

        /// Sentiment inference endpoint (overrides the config file).
        #[arg(long)]
        endpoint: Option<String>,

        /// Write the per-candle decision report to this CSV file.
        #[arg(long)]
        output: Option<PathBuf>,

        /// Print the decision as JSON instead of plain text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Classify a single text through the sentiment model.
    Sentiment {
        /// Text to classify.
        text: String,

        /// Sentiment inference endpoint.
        #[arg(long)]
        endpoint: String,

        /// Confidence threshold (strict).
        #[arg(long, default_value_t = 0.8)]
        threshold: f64,
    },
    /// Print the current Fear & Greed index.
    FearGreed,
}

/// Final decision for one `evaluate` run.
#[derive(Debug, Serialize)]
struct DecisionSummary {
    symbol: String,
    interval: String,
    candles: usize,
    evaluated: usize,
    technical_signal: Signal,
    #[serde(skip_serializing_if = "Option::is_none")]
    sentiment_signal: Option<Signal>,
    entry_price: f64,
    position_size: f64,
    notional: f64,
    order_within_cap: bool,
    halted: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Evaluate {
            config,
            symbol,
            interval,
            limit,
            synthetic,
            seed,
            text,
            endpoint,
            output,
            json,
        } => cmd_evaluate(
            config, symbol, interval, limit, synthetic, seed, text, endpoint, output, json,
        ),
        Commands::Sentiment {
            text,
            endpoint,
            threshold,
        } => cmd_sentiment(&text, &endpoint, threshold),
        Commands::FearGreed => cmd_fear_greed(),
    }
}

#[allow(clippy::too_many_arguments)]
fn cmd_evaluate(
    config_path: Option<PathBuf>,
    symbol: Option<String>,
    interval: Option<String>,
    limit: Option<u32>,
    synthetic: bool,
    seed: u64,
    text: Option<String>,
    endpoint: Option<String>,
    output: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let mut config = match config_path {
        Some(path) => EvalConfig::load(&path)?,
        None => EvalConfig::default(),
    };
    if let Some(symbol) = symbol {
        config.symbol = symbol;
    }
    if let Some(interval) = interval {
        config.interval = interval;
    }
    if let Some(limit) = limit {
        config.limit = limit;
    }
    if endpoint.is_some() {
        config.sentiment_endpoint = endpoint;
    }

    let candles = fetch_candles(&config, synthetic, seed)?;
    let warmup = config.indicators.warmup();
    if candles.len() <= warmup {
        bail!(
            "need more than {warmup} candles for the configured indicators, got {}",
            candles.len()
        );
    }

    let snapshots = compute_snapshots(&candles, &config.indicators)?;

    let mut rows = Vec::with_capacity(candles.len());
    let mut last_signal: Option<Signal> = None;
    let mut evaluated = 0;
    for (candle, snapshot) in candles.iter().zip(&snapshots) {
        let signal = combine(snapshot, candle.close).ok();
        if let Some(signal) = signal {
            last_signal = Some(signal);
            evaluated += 1;
        }
        rows.push(DecisionRow {
            open_time: candle.open_time,
            close: candle.close,
            rsi: snapshot.rsi,
            macd_hist: snapshot.macd_hist,
            bb_upper: snapshot.bb_upper,
            bb_lower: snapshot.bb_lower,
            signal: signal.map(|s| s.to_string()).unwrap_or_default(),
        });
    }
    let technical_signal =
        last_signal.context("every candle fell inside the indicator warm-up window")?;

    let sentiment_signal = match &text {
        Some(text) => Some(score_sentiment(&config, text)?),
        None => None,
    };

    let mut gate = RiskGate::new(config.risk.clone());
    gate.reset_daily();
    let last = candles.last().context("no candles fetched")?;
    let position_size = gate.compute_position_size(last.close);
    let notional = position_size * last.close;

    let summary = DecisionSummary {
        symbol: config.symbol.clone(),
        interval: config.interval.clone(),
        candles: candles.len(),
        evaluated,
        technical_signal,
        sentiment_signal,
        entry_price: last.close,
        position_size,
        notional,
        order_within_cap: gate.check_order_size(notional),
        halted: !gate.can_trade(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&summary);
    }

    if let Some(path) = output {
        write_decision_report(&path, &rows)?;
        println!("report: {}", path.display());
    }

    Ok(())
}

fn fetch_candles(config: &EvalConfig, synthetic: bool, seed: u64) -> Result<Vec<Candle>> {
    if synthetic {
        return Ok(random_walk_candles(config.limit as usize, 50_000.0, 0.02, seed));
    }
    let client = BinanceClient::mainnet()?;
    let candles = client
        .get_klines(&config.symbol, &config.interval, config.limit)
        .with_context(|| format!("fetching {} {} klines", config.symbol, config.interval))?;
    Ok(candles)
}

fn score_sentiment(config: &EvalConfig, text: &str) -> Result<Signal> {
    let endpoint = config
        .sentiment_endpoint
        .clone()
        .context("sentiment scoring needs an endpoint (--endpoint or sentiment_endpoint in config)")?;
    let token = std::env::var(TOKEN_ENV_VAR).ok();
    let model = HttpSentimentModel::new(endpoint, token)?;
    let observation = model.analyze(text)?;
    let classifier = SentimentClassifier::new(config.sentiment_threshold);
    let signal = classifier.classify(&observation);
    println!(
        "sentiment: {signal} ({:?} @ {:.4})",
        observation.label, observation.confidence
    );
    Ok(signal)
}

fn print_summary(summary: &DecisionSummary) {
    println!(
        "{} {} — {} candles, {} evaluated",
        summary.symbol, summary.interval, summary.candles, summary.evaluated
    );
    println!("technical signal: {}", summary.technical_signal);
    if let Some(signal) = summary.sentiment_signal {
        println!("sentiment signal: {signal}");
    }
    println!(
        "position size @ {:.2}: {:.6} units (notional {:.2}, cap ok: {})",
        summary.entry_price, summary.position_size, summary.notional, summary.order_within_cap
    );
    println!("halted: {}", summary.halted);
}

fn cmd_sentiment(text: &str, endpoint: &str, threshold: f64) -> Result<()> {
    let token = std::env::var(TOKEN_ENV_VAR).ok();
    let model = HttpSentimentModel::new(endpoint, token)?;
    let observation = model.analyze(text)?;
    let classifier = SentimentClassifier::new(threshold);
    println!(
        "{} (label={:?}, confidence={:.4})",
        classifier.classify(&observation),
        observation.label,
        observation.confidence
    );
    Ok(())
}

fn cmd_fear_greed() -> Result<()> {
    let client = FearGreedClient::new()?;
    let index = client.latest()?;
    println!(
        "Fear & Greed: {} ({}) as of {}",
        index.value,
        index.classification,
        index.timestamp.format("%Y-%m-%d %H:%M UTC")
    );
    Ok(())
}
