use anyhow::{Context, Result};
use clap::Parser;
use pack_order::gateways::http::{CreateOrderResponse, ErrorResponse};
use serde_json::json;

#[derive(Debug, Parser)]
#[command(name = "order_client")]
#[command(about = "Ask a running pack-order server how to pack a quantity")]
struct Args {
    #[arg(long, default_value = "http://localhost:3000")]
    url: String,

    /// Number of items to ship
    #[arg(allow_negative_numbers = true)]
    quantity: i64,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().with_target(false).without_time().init();

    let args = Args::parse();

    match send(&args).await {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("❌ {:#}", e);
            std::process::exit(3);
        }
    }
}

async fn send(args: &Args) -> Result<i32> {
    let endpoint = format!("{}/orders", args.url.trim_end_matches('/'));
    tracing::debug!("POST {}", endpoint);

    let response = reqwest::Client::new()
        .post(&endpoint)
        .json(&json!({ "quantity": args.quantity }))
        .send()
        .await
        .with_context(|| format!("request to {} failed", endpoint))?;

    let status = response.status();

    if status.is_success() {
        let order: CreateOrderResponse = response.json().await.context("decode order")?;

        println!("✅ {} items:", args.quantity);
        for row in &order.data.rows {
            println!("  {:>6} x {}", row.quantity, row.pack);
        }
        println!(
            "📦 shipped {} items in {} packs",
            order.data.shipped_quantity(),
            order.data.pack_count()
        );
        return Ok(0);
    }

    let message = response
        .json::<ErrorResponse>()
        .await
        .map(|e| e.error)
        .unwrap_or_else(|_| status.to_string());
    eprintln!("❌ {} ({})", message, status);

    Ok(if status.is_client_error() { 1 } else { 3 })
}
