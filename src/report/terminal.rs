use std::collections::HashMap;

use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::models::{Difficulty, EnrichedVideo};

const TITLE_WIDTH: usize = 60;

/// Render a colored terminal summary of a classified listing.
pub fn render(videos: &[EnrichedVideo], verbose: bool, quiet: bool) {
    let total = videos.len();
    let basic = count_difficulty(videos, Difficulty::Basic);
    let intermediate = count_difficulty(videos, Difficulty::Intermediate);
    let advanced = count_difficulty(videos, Difficulty::Advanced);

    if quiet {
        println!(
            "Total: {}  Basic: {}  Intermediate: {}  Advanced: {}",
            total,
            basic.to_string().green(),
            intermediate.to_string().yellow(),
            advanced.to_string().red(),
        );
        return;
    }

    println!(
        "\n {} v{}\n",
        "channel-catalog".bold(),
        env!("CARGO_PKG_VERSION")
    );

    println!(" ┌────────────────────────────────────────────────────┐");
    println!(" │  {:<48} │", "SUMMARY".bold());
    println!(" │  {:<48} │", format!("Videos classified : {}", total));
    println!(" │  {:<48} │", format!("{}  Basic        : {:>4}", "●".green(), basic));
    println!(
        " │  {:<48} │",
        format!("{}  Intermediate : {:>4}", "●".yellow(), intermediate)
    );
    println!(" │  {:<48} │", format!("{}  Advanced     : {:>4}", "●".red(), advanced));
    println!(" └────────────────────────────────────────────────────┘\n");

    println!(" {} Videos per category:\n", "[CATEGORIES]".cyan().bold());
    render_category_table(videos);
    println!();

    if verbose {
        println!(" {} All videos:\n", "[VIDEOS]".cyan().bold());
        render_video_table(videos);
        println!();
    }
}

fn count_difficulty(videos: &[EnrichedVideo], difficulty: Difficulty) -> usize {
    videos.iter().filter(|v| v.difficulty == difficulty).count()
}

fn render_category_table(videos: &[EnrichedVideo]) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Category").add_attribute(Attribute::Bold),
            Cell::new("Videos").add_attribute(Attribute::Bold),
            Cell::new("Basic").add_attribute(Attribute::Bold),
            Cell::new("Intermediate").add_attribute(Attribute::Bold),
            Cell::new("Advanced").add_attribute(Attribute::Bold),
        ]);

    for (category, count, by_tier) in summarize_categories(videos) {
        table.add_row(vec![
            Cell::new(category),
            Cell::new(count).set_alignment(CellAlignment::Right),
            Cell::new(by_tier[0]).fg(Color::Green).set_alignment(CellAlignment::Right),
            Cell::new(by_tier[1]).fg(Color::Yellow).set_alignment(CellAlignment::Right),
            Cell::new(by_tier[2]).fg(Color::Red).set_alignment(CellAlignment::Right),
        ]);
    }

    println!("{}", table);
}

fn render_video_table(videos: &[EnrichedVideo]) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Id").add_attribute(Attribute::Bold),
            Cell::new("Title").add_attribute(Attribute::Bold),
            Cell::new("Category").add_attribute(Attribute::Bold),
            Cell::new("Difficulty").add_attribute(Attribute::Bold),
            Cell::new("Tags").add_attribute(Attribute::Bold),
        ]);

    for video in videos {
        let difficulty_color = match video.difficulty {
            Difficulty::Basic => Color::Green,
            Difficulty::Intermediate => Color::Yellow,
            Difficulty::Advanced => Color::Red,
        };

        table.add_row(vec![
            Cell::new(&video.video.id),
            Cell::new(truncate(&video.video.title, TITLE_WIDTH)),
            Cell::new(&video.category),
            Cell::new(video.difficulty.to_string())
                .fg(difficulty_color)
                .set_alignment(CellAlignment::Center),
            Cell::new(video.tags.join(", ")).fg(Color::DarkGrey),
        ]);
    }

    println!("{}", table);
}

/// `(category, total, [basic, intermediate, advanced])`, most common first;
/// equal counts keep first-seen order.
fn summarize_categories(videos: &[EnrichedVideo]) -> Vec<(String, usize, [usize; 3])> {
    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, [usize; 3]> = HashMap::new();

    for video in videos {
        let entry = counts.entry(video.category.clone()).or_insert_with(|| {
            order.push(video.category.clone());
            [0; 3]
        });
        let slot = match video.difficulty {
            Difficulty::Basic => 0,
            Difficulty::Intermediate => 1,
            Difficulty::Advanced => 2,
        };
        entry[slot] += 1;
    }

    let mut rows: Vec<(String, usize, [usize; 3])> = order
        .into_iter()
        .map(|category| {
            let by_tier = counts[&category];
            (category, by_tier.iter().sum(), by_tier)
        })
        .collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1));
    rows
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max_chars.saturating_sub(1)).collect();
    out.push('…');
    out
}
