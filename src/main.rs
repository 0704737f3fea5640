use std::{process, time::SystemTime};

use anyhow::{Context, Result};
use catalog::{EnemySource, Roster};
use combat::{pick_enemy, Engagement, Outcome, Phase, SeededDice};
use hero::{Hero, StatAllocation};
use items::Equipment;
use tracing_subscriber::EnvFilter;

/// Usage: battle_arena [HERO] [EQUIPMENT|none] [SEED]
///
/// Picks a hero, spends the whole allocation budget on the class's primary
/// attribute, draws an enemy from the built-in roster and auto-resolves
/// the fight, printing the battle history as the screen would.
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let hero = match args.first() {
        Some(name) => Hero::by_name(name).with_context(|| format!("unknown hero '{name}'"))?,
        None => Hero::new(hero::Class::Paladin),
    };
    let equipment = match args.get(1).map(String::as_str) {
        Some("none") | None => None,
        Some(name) => {
            Some(Equipment::by_name(name).with_context(|| format!("unknown equipment '{name}'"))?)
        }
    };
    let seed = match args.get(2) {
        Some(raw) => raw.parse::<u64>().context("seed must be an integer")?,
        None => {
            let time = SystemTime::now()
                .duration_since(SystemTime::UNIX_EPOCH)?
                .as_nanos();
            (time ^ (process::id() as u128)) as u64
        }
    };
    tracing::info!(hero = %hero.name, seed, "new fight");

    let mut alloc = StatAllocation::new();
    let primary = hero.class.primary_attribute();
    while alloc.remaining() > 0 {
        alloc.spend(primary)?;
    }
    let champion = hero.finalize(&alloc, equipment.as_ref());

    let mut dice = SeededDice::new(seed);
    let roster = Roster::builtin()?;
    let pool = roster.fetch_enemies()?;
    let enemy = pick_enemy(&pool, &mut dice)?.clone();

    println!("⚔ Battle Arena ⚔");
    println!(
        "{} ({}) [HP {} STR {}]  vs  {} ({}) [HP {} STR {}]",
        champion.name,
        champion.kind,
        champion.hp(),
        champion.strength(),
        enemy.name,
        enemy.kind,
        enemy.hp(),
        enemy.strength(),
    );

    let mut fight = Engagement::new(champion, enemy);
    while !fight.phase().is_resolved() {
        let report = fight.resolve_turn(&mut dice)?;
        tracing::debug!(
            hero_damage = report.hero_damage,
            counter_damage = ?report.counter_damage,
            phase = ?report.phase,
            "turn resolved"
        );
    }

    println!("\nBattle History");
    for entry in fight.log().newest_first() {
        println!("  {entry}");
    }

    match fight.phase() {
        Phase::Resolved(Outcome::Victory) => println!("\nYou won!"),
        Phase::Resolved(Outcome::Defeat) => println!("\nYou lost!"),
        Phase::Idle | Phase::InProgress => {}
    }

    Ok(())
}
