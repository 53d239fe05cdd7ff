use anyhow::Result;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::db::Database;
use crate::models::{LeadTime, Recurrence, Subscription};

pub(crate) fn as_cli(args: &[String], db: &mut Database) -> Result<()> {
    match args[1].as_str() {
        "add" => cli_add(&args[2..], db),
        "list" | "ls" => cli_list(&args[2..], db),
        "remove" | "rm" => cli_remove(&args[2..], db),
        "budget" | "b" => cli_budget(&args[2..], db),
        "alerts" | "a" => cli_alerts(&args[2..], db),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("subtrack {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

pub(crate) fn print_usage() {
    println!("SubTrack — local-only subscription tracker");
    println!();
    println!("Usage: subtrack <command>");
    println!();
    println!("Commands:");
    let recurrences = Recurrence::all()
        .iter()
        .map(|r| r.as_str())
        .collect::<Vec<_>>()
        .join(" | ");
    let leads = LeadTime::all()
        .iter()
        .map(|lt| lt.as_str())
        .collect::<Vec<_>>()
        .join("|");
    println!("  add <service> <cost> <date> <recurrence>   Add a subscription");
    println!("    <date>                      Purchase date, YYYY-MM-DD");
    println!("    <recurrence>                {recurrences}");
    println!("    --remind <{leads}>   Reminder lead time (default: none)");
    println!("  list                          List subscriptions, newest first");
    println!("  remove <id>                   Delete a subscription");
    println!("  budget                        Period totals and annualized category totals");
    println!("  alerts                        Days left until each renewal reminder");
    println!("  --user <id>                   Owning user for any command (default: 1)");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
}

fn user_flag(args: &[String]) -> Result<i64> {
    match args.windows(2).find(|w| w[0] == "--user") {
        Some(w) => w[1]
            .parse()
            .map_err(|_| anyhow::anyhow!("Invalid user id: {}", w[1])),
        None => Ok(1),
    }
}

fn cli_add(args: &[String], db: &mut Database) -> Result<()> {
    let positional: Vec<&String> = args.iter().take_while(|a| !a.starts_with("--")).collect();
    if positional.len() != 4 {
        anyhow::bail!(
            "Usage: subtrack add <service> <cost> <YYYY-MM-DD> <recurrence> [--remind <none|1d|3d|1w>] [--user <id>]"
        );
    }

    let user_id = user_flag(args)?;
    let service = positional[0].clone();
    let cost = Decimal::from_str(positional[1])
        .map_err(|_| anyhow::anyhow!("Invalid cost: {}", positional[1]))?;
    let recurrence = Recurrence::parse(positional[3]);
    if recurrence.is_none() {
        let valid = Recurrence::all()
            .iter()
            .map(|r| r.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        anyhow::bail!("Invalid recurrence: {} (expected one of: {valid})", positional[3]);
    }
    let lead_time = args
        .windows(2)
        .find(|w| w[0] == "--remind")
        .map(|w| LeadTime::parse(&w[1]))
        .unwrap_or(LeadTime::None);

    let sub = Subscription::create(user_id, service, cost, positional[2], lead_time, recurrence)?;
    let id = db.insert_subscription(&sub)?;
    println!(
        "Added #{id}: {} ${:.2} {} — reminder on {}",
        sub.service,
        sub.cost,
        sub.recurrence.map(|r| r.as_str()).unwrap_or("?"),
        sub.reminder_date
    );
    Ok(())
}

fn cli_list(args: &[String], db: &mut Database) -> Result<()> {
    let user_id = user_flag(args)?;
    let subs = db.subscriptions_for_user(user_id)?;
    if subs.is_empty() {
        println!("No subscriptions");
        return Ok(());
    }

    println!(
        "{:<4} {:<16} {:<12} {:>10} {:<10} {:<12} Reminder",
        "ID", "Service", "Category", "Cost", "Recurs", "Purchased"
    );
    println!("{}", "─".repeat(80));
    for sub in &subs {
        println!(
            "{:<4} {:<16} {:<12} {:>10} {:<10} {:<12} {}",
            sub.id.unwrap_or(0),
            sub.service,
            sub.category,
            format!("${:.2}", sub.cost),
            sub.recurrence.map(|r| r.as_str()).unwrap_or("?"),
            sub.purchase_date,
            sub.reminder_date,
        );
    }
    Ok(())
}

fn cli_remove(args: &[String], db: &mut Database) -> Result<()> {
    let id: i64 = args
        .first()
        .and_then(|a| a.parse().ok())
        .ok_or_else(|| anyhow::anyhow!("Usage: subtrack remove <id>"))?;

    match db.get_subscription_by_id(id)? {
        Some(sub) => {
            db.delete_subscription(id)?;
            println!("Removed #{id}: {}", sub.service);
        }
        None => println!("No subscription with id {id}"),
    }
    Ok(())
}

fn cli_budget(args: &[String], db: &mut Database) -> Result<()> {
    let user_id = user_flag(args)?;
    let subs = db.subscriptions_for_user(user_id)?;
    let summary = crate::budget::compute_budget(&subs);

    println!("SubTrack — budget for user {user_id}");
    println!("{}", "─".repeat(40));
    println!("  Weekly:     ${:.2}", summary.weekly);
    println!("  Monthly:    ${:.2}", summary.monthly);
    println!("  Annually:   ${:.2}", summary.annually);

    if !summary.categories.is_empty() {
        println!();
        println!("Annualized by Category:");
        for (name, total) in &summary.categories {
            let label = if name.is_empty() { "(uncategorized)" } else { name };
            println!("  {label:<24} ${total:.2}");
        }
    }
    Ok(())
}

fn cli_alerts(args: &[String], db: &mut Database) -> Result<()> {
    let user_id = user_flag(args)?;
    let subs = db.subscriptions_for_user(user_id)?;
    if subs.is_empty() {
        println!("No subscriptions");
        return Ok(());
    }

    // "Now" is supplied here; the engine never reads the clock itself.
    let now = chrono::Local::now().naive_local();
    let alerts = crate::schedule::renewal_alerts(&subs, now);

    println!("{:<16} {:>10} Days left", "Service", "Cost");
    println!("{}", "─".repeat(40));
    for alert in &alerts {
        println!(
            "{:<16} {:>10} {}",
            alert.service,
            format!("${:.2}", alert.cost),
            alert.days_left,
        );
    }
    Ok(())
}
