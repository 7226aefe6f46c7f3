use crate::analysis::benchmarks::Tier;
use crate::analysis::lens::LensReport;
use crate::analysis::tags::{Severity, Tag, TagKind};
use crate::api::models::MatchDto;
use colored::*;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct MatchRow {
    #[tabled(rename = "#")]
    number: String,
    champion: String,
    result: String,
    kda: String,
    #[tabled(rename = "CS/min")]
    cs_per_min: String,
}

#[derive(Tabled)]
struct RadarRow {
    category: String,
    score: String,
    value: String,
    #[tabled(rename = "tier avg")]
    baseline: String,
}

#[derive(Tabled)]
struct TagRow {
    tag: String,
    #[tabled(rename = "type")]
    kind: String,
    severity: String,
    #[tabled(rename = "z")]
    score: String,
    description: String,
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

pub fn display_match_summary(matches: &[MatchDto], puuid: &str) {
    let mut rows = vec![];
    let mut wins = 0usize;

    for (idx, m) in matches.iter().enumerate() {
        let me = match m.info.participants.iter().find(|p| p.puuid == puuid) {
            Some(p) => p,
            None => continue,
        };
        if me.win {
            wins += 1;
        }

        let minutes = m.info.duration_minutes();
        let cs = (me.total_minions_killed + me.neutral_minions_killed) as f64;
        let result = if me.win {
            "WIN".green().to_string()
        } else {
            "LOSS".red().to_string()
        };

        rows.push(MatchRow {
            number: format!("{}", idx + 1),
            champion: me.champion_name.clone(),
            result,
            kda: format!("{}/{}/{}", me.kills, me.deaths, me.assists),
            cs_per_min: if minutes > 0.0 {
                format!("{:.1}", cs / minutes)
            } else {
                "-".to_string()
            },
        });
    }

    let total = rows.len();
    if total == 0 {
        return;
    }
    let losses = total - wins;
    let win_rate = (wins as f64 / total as f64) * 100.0;

    println!("\n{}", format!("📊 MATCH HISTORY (Last {} Games)", total).bold().cyan());
    println!("{}\n", "=".repeat(70).cyan());
    println!(
        "{} {} W / {} L ({:.1}% WR)\n",
        "📈 Overall:".bold(),
        wins.to_string().green(),
        losses.to_string().red(),
        win_rate
    );

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}

pub fn display_lens_report(report: &LensReport, tier: Tier) {
    println!("\n{}", format!("🔍 LENS REPORT vs {}", tier).bold().cyan());
    println!("{}\n", "=".repeat(70).cyan());

    if report.metrics.is_empty() {
        println!("{}", "No valid games to analyze (Unranked)".yellow());
        return;
    }

    let rows: Vec<RadarRow> = report
        .metrics
        .iter()
        .map(|m| RadarRow {
            category: m.category.as_str().to_string(),
            score: format!("{}/100", m.score),
            value: format!("{:.1} {}", m.value, m.label),
            baseline: format!("{:.1}", m.baseline),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);

    let grade = match report.grade {
        "S+" | "S" => report.grade.green().bold(),
        "A" | "B" => report.grade.cyan().bold(),
        _ => report.grade.yellow().bold(),
    };
    println!(
        "\n{} {}/100 (grade {})\n",
        "🌐 Global Score:".bold(),
        report.global_score,
        grade
    );

    let baseline = tier.baseline();

    println!("{}", "Fighting".bold().yellow());
    println!(
        "  KP {:.1}%  ·  DPM {:.0}  ·  damage share {:.1}%  ·  solo kills {:.1}/game",
        report.fighting.kill_participation * 100.0,
        report.fighting.damage_per_minute,
        report.fighting.damage_share * 100.0,
        report.fighting.solo_kills_per_game
    );
    println!(
        "  multikills {:.1}/game  ·  first blood {:.0}%  ·  {:.1} kills + {:.1} assists/game",
        report.fighting.multikills_per_game,
        report.fighting.first_blood_rate * 100.0,
        report.fighting.kills_per_game,
        report.fighting.assists_per_game
    );

    println!("{}", "Laning".bold().yellow());
    println!(
        "  CS/min {:.1}  ·  gold/min {:.0} (tier avg {:.0})  ·  plates {:.1}/game  ·  XP/min {:.0}",
        report.laning.cs_per_min,
        report.laning.gold_per_min,
        baseline.gold_per_min,
        report.laning.plates_per_game,
        report.laning.xp_per_min
    );

    println!("{}", "Vision".bold().yellow());
    println!(
        "  vision/min {:.2}  ·  wards {:.1}/game (tier avg {:.0})  ·  cleared {:.1}  ·  control {:.1}",
        report.vision.vision_per_min,
        report.vision.wards_placed_per_game,
        baseline.wards_placed,
        report.vision.wards_destroyed_per_game,
        report.vision.control_wards_per_game
    );

    println!("{}", "Survivability".bold().yellow());
    println!(
        "  deaths {:.1}/game (tier avg {:.1})  ·  low-death games {:.0}%  ·  death share {:.1}%",
        report.survivability.deaths_per_game,
        baseline.deaths,
        report.survivability.low_death_rate * 100.0,
        report.survivability.death_share * 100.0
    );

    println!("{}", "Objectives".bold().yellow());
    println!(
        "  dragons {:.1}/game  ·  objective dmg/min {:.0}  ·  turret dmg {:.0}/game (tier avg {:.0})",
        report.objectives.dragon_takedowns_per_game,
        report.objectives.objective_damage_per_min,
        report.objectives.turret_damage_per_game,
        baseline.turret_dmg
    );

    println!("{}", "Team impact".bold().yellow());
    println!(
        "  KP {:.1}%  ·  CC {:.0}s/game  ·  damage share {:.1}%  ·  assist ratio {:.2}\n",
        report.team.kill_participation * 100.0,
        report.team.cc_seconds_per_game,
        report.team.damage_share * 100.0,
        report.team.assist_ratio
    );
}

pub fn display_tags(tags: &[Tag], player_name: &str) {
    println!(
        "\n{}",
        format!("🏷️  IDENTITY TAGS for {}", player_name).bold().cyan()
    );
    println!("{}\n", "=".repeat(70).cyan());

    if tags.is_empty() {
        println!("{}", "No standout traits detected (not enough data)".yellow());
        return;
    }

    let rows: Vec<TagRow> = tags
        .iter()
        .map(|t| {
            let label = match t.kind {
                TagKind::Strength => t.label.as_str().green().to_string(),
                TagKind::Weakness => t.label.as_str().red().to_string(),
            };
            let severity = match t.severity {
                Severity::Extreme => t.severity.as_str().red().bold().to_string(),
                Severity::High => t.severity.as_str().yellow().to_string(),
                Severity::Normal => t.severity.as_str().to_string(),
            };
            TagRow {
                tag: label,
                kind: t.kind.as_str().to_string(),
                severity,
                score: format!("{:+.2}", t.score),
                description: t.description.to_string(),
            }
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);

    if let Some(top) = tags.first() {
        match top.kind {
            TagKind::Strength => {
                println!(
                    "\n{} {} ({:+.2} standard deviations from the benchmark)\n",
                    "Defining strength:".bold().green(),
                    top.label.as_str(),
                    top.score
                );
            }
            TagKind::Weakness => {
                println!(
                    "\n{} {} ({:+.2} standard deviations from the benchmark)\n",
                    "Biggest weakness:".bold().red(),
                    top.label.as_str(),
                    top.score
                );
            }
        }
    }
}
