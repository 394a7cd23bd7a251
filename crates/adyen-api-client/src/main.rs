use std::process::ExitCode;

use adyen_client::{
    AdyenClient, AdyenError, ClientConfig, DirectoryLookupRequest, NotificationRequest,
};
use chrono::{Duration, SecondsFormat, Utc};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const USAGE: &str = "\
usage:
  adyen-hpp directory-lookup <merchantReference> <minorAmount> [countryCode] [--fetch]
  adyen-hpp verify-notification <file.json>";

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file if present
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let result = match args.first().map(String::as_str) {
        Some("directory-lookup") => directory_lookup(&args[1..]).await,
        Some("verify-notification") => verify_notification(&args[1..]),
        _ => {
            eprintln!("{USAGE}");
            return ExitCode::from(2);
        }
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn client() -> Result<AdyenClient, AdyenError> {
    ClientConfig::from_env()?.into_client()
}

/// Print the signed directory lookup URL for an order; with `--fetch`, also
/// perform the lookup and list the payment methods.
async fn directory_lookup(args: &[String]) -> Result<ExitCode, AdyenError> {
    let fetch = args.iter().any(|a| a == "--fetch");
    let positional: Vec<&str> = args
        .iter()
        .map(String::as_str)
        .filter(|a| *a != "--fetch")
        .collect();

    let (reference, amount, country) = match positional.as_slice() {
        [reference, amount] => (*reference, *amount, ""),
        [reference, amount, country] => (*reference, *amount, *country),
        _ => {
            eprintln!("{USAGE}");
            return Ok(ExitCode::from(2));
        }
    };
    let payment_amount: u64 = amount
        .parse()
        .map_err(|_| AdyenError::Config(format!("invalid minor amount '{amount}'")))?;

    let client = client()?;
    let now = Utc::now();
    let request = DirectoryLookupRequest {
        currency_code: client.currency().to_string(),
        payment_amount,
        merchant_reference: reference.to_string(),
        session_validity: (now + Duration::hours(1)).to_rfc3339_opts(SecondsFormat::Secs, false),
        ship_before_date: (now + Duration::days(3)).format("%Y-%m-%d").to_string(),
        country_code: country.to_string(),
        ..Default::default()
    };

    let url = client.hpp().directory_lookup_url(request.clone())?;
    println!("{url}");

    if fetch {
        let response = client.hpp().directory_lookup(request).await?;
        for method in &response.payment_methods {
            println!("  {:<16} {}", method.brand_code, method.name);
            for issuer in &method.issuers {
                println!("    {:<14} {}", issuer.issuer_id, issuer.name);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Validate every item of a notification document. Exits non-zero when any
/// item is rejected.
fn verify_notification(args: &[String]) -> Result<ExitCode, AdyenError> {
    let [path] = args else {
        eprintln!("{USAGE}");
        return Ok(ExitCode::from(2));
    };

    let raw = std::fs::read_to_string(path)
        .map_err(|e| AdyenError::Config(format!("cannot read {path}: {e}")))?;
    let document: NotificationRequest = serde_json::from_str(&raw)?;

    let client = client()?;
    let mut rejected = 0usize;
    for wrapper in &document.notification_items {
        let item = &wrapper.notification_request_item;
        match client.notifications().validate(item) {
            Ok(true) => println!("{} accepted", item.psp_reference),
            Ok(false) => {
                rejected += 1;
                println!("{} rejected", item.psp_reference);
            }
            Err(e) => {
                rejected += 1;
                println!("{} rejected ({e})", item.psp_reference);
            }
        }
    }

    tracing::info!(
        items = document.notification_items.len(),
        rejected,
        live = %document.live,
        "notification document checked"
    );

    if rejected > 0 {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
