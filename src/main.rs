use chrono::NaiveDate;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bezerras::infrastructure::AppState;
use bezerras::{config, db, seed};

/// Value following `flag` on the command line, if any
fn arg_after(args: &[String], flag: &str, offset: usize) -> Option<String> {
    args.iter()
        .position(|arg| arg == flag)
        .and_then(|pos| args.get(pos + offset))
        .cloned()
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| format!("invalid date '{}' (expected YYYY-MM-DD): {}", value, e))
}

fn report_range(args: &[String]) -> Option<Result<(NaiveDate, NaiveDate), String>> {
    if !args.iter().any(|arg| arg == "--report") {
        return None;
    }

    let (Some(start), Some(end)) = (arg_after(args, "--report", 1), arg_after(args, "--report", 2))
    else {
        return Some(Err("usage: --report <YYYY-MM-DD> <YYYY-MM-DD>".to_string()));
    };

    Some(parse_date(&start).and_then(|start| Ok((start, parse_date(&end)?))))
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bezerras=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    dotenvy::dotenv().ok();

    let args: Vec<String> = std::env::args().collect();
    let config = config::Config::from_env_with_profile(arg_after(&args, "--profile", 1));

    // Initialize database
    let db = db::init_db(&config.database_url)
        .await
        .expect("Failed to initialize database");
    let state = AppState::new(db);

    if config.seed_demo {
        tracing::info!("Seeding demo data...");
        match seed::seed_demo_data(&state).await {
            Ok(true) => tracing::info!("Demo data seeded successfully."),
            Ok(false) => {}
            Err(e) => tracing::error!("Failed to seed data: {}", e),
        }
    }

    let orders = state.order_service();

    let output = match report_range(&args) {
        Some(Ok((start, end))) => orders
            .report(start, end)
            .await
            .map(|rows| serde_json::to_string_pretty(&rows)),
        Some(Err(usage)) => {
            tracing::error!("{}", usage);
            std::process::exit(2);
        }
        None => orders.find_pending_orders().await.map(|pending| {
            tracing::info!("{} pending order(s)", pending.len());
            serde_json::to_string_pretty(&pending)
        }),
    };

    match output {
        Ok(Ok(json)) => println!("{}", json),
        Ok(Err(e)) => {
            tracing::error!("Failed to encode output: {}", e);
            std::process::exit(1);
        }
        Err(e) => {
            tracing::error!("{}", e);
            std::process::exit(1);
        }
    }
}
