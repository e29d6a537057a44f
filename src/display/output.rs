use aram_pick::{ChampionPool, ChampionState};
use colored::*;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct PickRow {
    #[tabled(rename = "")]
    marker: String,
    key: String,
    champion: String,
    score: String,
    #[tabled(rename = "comp score")]
    comp_score: String,
    #[tabled(rename = "wr score")]
    wr_score: String,
    #[tabled(rename = "raw wr")]
    raw_wr: String,
}

impl PickRow {
    fn scored(marker: &str, champ: &ChampionState<'_>) -> Self {
        PickRow {
            marker: marker.to_string(),
            key: champ.id().to_string(),
            champion: champ.name().to_string(),
            score: format!("{:.1}", champ.score()),
            comp_score: format!("{:.1}", champ.normalized_gain()),
            wr_score: format!("{:.1}", champ.normalized_win_rate()),
            raw_wr: format!("{:.1}%", champ.raw_win_rate()),
        }
    }

    fn teammate(champ: &ChampionState<'_>) -> Self {
        PickRow {
            marker: String::new(),
            key: champ.id().to_string(),
            champion: champ.name().to_string(),
            score: String::new(),
            comp_score: String::new(),
            wr_score: String::new(),
            raw_wr: format!("{:.1}%", champ.raw_win_rate()),
        }
    }
}

pub fn display_evaluation(pool: &ChampionPool<'_>, top_n: Option<usize>) {
    println!("\n{}", "🎲 CHAMPION SELECT".bold().cyan());
    println!("{}\n", "=".repeat(60).cyan());

    let team_rows: Vec<PickRow> = pool
        .team()
        .iter()
        .map(|champ| {
            if pool.is_player(champ) {
                PickRow::scored(">", champ)
            } else {
                PickRow::teammate(champ)
            }
        })
        .collect();

    let mut table = Table::new(team_rows);
    table.with(Style::rounded());
    println!("{}", "Team".bold());
    println!("{}\n", table);

    let limit = top_n.unwrap_or(usize::MAX);
    let bench_rows: Vec<PickRow> = pool
        .bench()
        .iter()
        .take(limit)
        .map(|champ| PickRow::scored("", champ))
        .collect();

    if bench_rows.is_empty() {
        println!("{}", "No bench champions to reroll into".yellow());
    } else {
        let mut table = Table::new(bench_rows);
        table.with(Style::rounded());
        println!("{}", "Bench".bold());
        println!("{}", table);
    }

    display_verdict(pool);
    println!();
}

fn display_verdict(pool: &ChampionPool<'_>) {
    let player = pool.player();
    let Some(best) = pool.bench().first() else {
        return;
    };

    println!();
    if best.score() > player.score() {
        println!(
            "{} {} scores {:.1} vs your {} at {:.1}",
            "🔁 Consider swapping:".bold().yellow(),
            best.name().green(),
            best.score(),
            player.name(),
            player.score()
        );
    } else {
        println!(
            "{} {} ({:.1}) beats every bench option",
            "✓ Keep your pick:".bold().green(),
            player.name(),
            player.score()
        );
    }
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}
