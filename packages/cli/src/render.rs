//! Terminal rendering: result cards, the ratings histogram, notices.

use std::path::Path;

use colored::Colorize;

use finder::{BusinessProfile, Coordinate, SearchState, FETCH_FAILED_NOTICE};

pub fn print_header(category: &str, region: &str, bias: Option<Coordinate>) {
    println!();
    println!(
        "{} {} {} {}",
        "Searching".bright_cyan().bold(),
        category.bright_white().bold(),
        "in".bright_cyan(),
        region.bright_white().bold(),
    );
    if let Some(coordinate) = bias {
        println!(
            "{}",
            format!(
                "grounding biased toward {:.4}, {:.4}",
                coordinate.lat, coordinate.lng
            )
            .dimmed()
        );
    }
    println!();
}

/// Print cards for every result, the stats block, and any notice.
pub fn print_results(state: &SearchState) {
    for profile in &state.results {
        print_card(profile);
        println!();
    }

    if !state.results.is_empty() {
        print_stats(&state.results);
        println!();
    }

    if let Some(notice) = &state.error {
        if notice == FETCH_FAILED_NOTICE {
            eprintln!("{}", notice.bright_red().bold());
        } else {
            println!("{}", notice.yellow());
        }
    }
}

pub fn print_raw(raw_text: &str) {
    println!("{}", "Raw model reply".bold().underline());
    println!("{}", raw_text.dimmed());
    println!();
}

pub fn print_export_path(path: &Path) {
    println!("{} {}", "wrote".bright_green().bold(), path.display());
}

fn print_card(profile: &BusinessProfile) {
    let rating = match profile.rating {
        Some(rating) if rating != 0.0 => rating.to_string(),
        _ => "N/A".to_string(),
    };
    println!(
        "{}  {} {}",
        profile.name.bright_green().bold(),
        "★".bright_yellow(),
        rating.bold()
    );

    if let Some(about) = non_empty(&profile.about) {
        println!("  {}", about.italic());
    }

    match non_empty(&profile.address) {
        Some(address) => println!("  {}", address),
        None => println!("  {}", "Address not listed".dimmed()),
    }

    if let Some(phone) = non_empty(&profile.phone) {
        println!("  {} {}", "phone:".dimmed(), phone);
    }
    if let Some(email) = non_empty(&profile.email) {
        println!("  {} {}", "email:".dimmed(), email);
    }
    if let Some(owner) = non_empty(&profile.owner) {
        println!("  {} {}", "Owner/Manager:".dimmed(), owner);
    }
    if let Some(website) = non_empty(&profile.website) {
        println!("  {} {}", "web:".dimmed(), website_display(website));
    }
    if let Some(map_url) = non_empty(&profile.map_url) {
        println!("  {} {}", "map:".dimmed(), map_url.bright_blue().underline());
    }
}

/// A field parsed from a bare label line is an empty string; the card
/// treats it like a missing field.
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}

fn print_stats(results: &[BusinessProfile]) {
    println!("{}", "Ratings Distribution".bold());
    for (bucket, count) in rating_buckets(results).iter().enumerate() {
        if *count == 0 {
            continue;
        }
        println!(
            "  {}★ {} {}",
            bucket + 1,
            "█".repeat(*count).bright_cyan(),
            count
        );
    }
    println!(
        "{} {}",
        "Total extracted:".bold(),
        results.len().to_string().bright_green().bold()
    );
}

/// Count results per whole-star bucket (1★ through 5★).
///
/// Unrated results and ratings below 1 fall outside every bucket but
/// still count toward the total.
fn rating_buckets(results: &[BusinessProfile]) -> [usize; 5] {
    let mut buckets = [0usize; 5];
    for profile in results {
        let bucket = profile.rating.unwrap_or(0.0).floor() as i64;
        if (1..=5).contains(&bucket) {
            buckets[(bucket - 1) as usize] += 1;
        }
    }
    buckets
}

/// Strip the scheme and a trailing slash for display.
fn website_display(website: &str) -> &str {
    let display = website
        .strip_prefix("https://")
        .or_else(|| website.strip_prefix("http://"))
        .unwrap_or(website);
    display.strip_suffix('/').unwrap_or(display)
}
