//! Runs one combat session end to end against stock content and prints the
//! narration. Useful for eyeballing balance and log output:
//!
//! ```text
//! RUST_LOG=combat_runtime=debug cargo run --example skirmish
//! ```

use std::collections::BTreeMap;
use std::sync::Arc;

use combat_core::{
    BaseAttributes, DamageType, MonsterId, MonsterSkillAssignment, MonsterSkillId,
    MonsterSkillTemplate, MonsterTemplate, NarrativeSet, PlayerId, QueuedAction, SessionStatus,
    SkillId, SkillTemplate,
};
use combat_runtime::{
    CombatService, CombatTarget, InMemoryLogRepo, InMemoryPlayerRepo, InMemorySessionRepo,
    MonsterCatalog, PlayerRecord, PlayerRepository, SkillCatalog, ThreadRngSource,
};
use tracing_subscriber::EnvFilter;

fn content() -> (SkillCatalog, MonsterCatalog) {
    let skills = SkillCatalog::from_templates(vec![
        SkillTemplate {
            id: SkillId(1),
            name: "Vertical".into(),
            damage_type: DamageType::Physical,
            amp: 16,
            accuracy: 95,
            speed: 10,
            ap_cost: 4,
            status: None,
            self_heal: 0,
            narrative: NarrativeSet {
                use_line: Some("A falling vertical arc.".into()),
                hit: Some("Vertical cuts deep for {damage}!".into()),
                miss: None,
                crit: None,
            },
        },
        SkillTemplate {
            id: SkillId(2),
            name: "Sonic Leap".into(),
            damage_type: DamageType::Physical,
            amp: 28,
            accuracy: 90,
            speed: 14,
            ap_cost: 9,
            status: None,
            self_heal: 0,
            narrative: NarrativeSet {
                use_line: Some("A burst of speed closes the gap.".into()),
                hit: Some("Sonic Leap slams in for {damage}!".into()),
                miss: None,
                crit: None,
            },
        },
    ]);

    let mut monsters = MonsterCatalog::new();
    monsters.insert_skill(MonsterSkillTemplate {
        id: MonsterSkillId(1),
        name: "Tusk Charge".into(),
        base_damage: 18,
        accuracy: 80,
        narrative: NarrativeSet {
            use_line: Some("The boar paws the ground and charges.".into()),
            hit: Some("Tusks gore you for {damage}!".into()),
            miss: Some("You sidestep the charge.".into()),
            crit: None,
        },
    });
    monsters.insert_monster(MonsterTemplate {
        id: MonsterId(1),
        name: "Frenzy Boar".into(),
        max_hp: 90,
        ap_pool: 30,
        attack: 14,
        magic_attack: 0,
        defense: 4,
        magic_defense: 2,
        accuracy: 80,
        evasion: 5,
        speed: 8,
        xp_reward: 25,
        col_reward: 12,
        skills: vec![MonsterSkillAssignment::new(MonsterSkillId(1))],
        attack_patterns: vec![vec![MonsterSkillId(1)]],
    });
    (skills, monsters)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let players = Arc::new(InMemoryPlayerRepo::new());
    players
        .save(&PlayerRecord {
            id: PlayerId(1),
            name: "Kirito".into(),
            attributes: BaseAttributes::new(14, 12, 10, 4, 8, 5),
            current_hp: 200,
            current_ap: 60,
            max_ap: 60,
            xp: 0,
            col: 300,
            skill_uses: BTreeMap::new(),
        })
        .expect("seed player");

    let (skills, monsters) = content();
    let mut service = CombatService::new(
        Arc::new(InMemorySessionRepo::new()),
        players,
        Arc::new(InMemoryLogRepo::new()),
        skills,
        monsters,
        ThreadRngSource::new(),
    );

    let summary = service
        .start_combat(PlayerId(1), CombatTarget::Monster(MonsterId(1)))
        .expect("start combat");
    println!(
        "== Engaging {} ({} HP) ==",
        summary.monster_name, summary.monster_hp.current
    );

    let session_id = summary.session_id;
    loop {
        let queue = vec![
            QueuedAction::new(SkillId(1), "Vertical"),
            QueuedAction::new(SkillId(2), "Sonic Leap"),
        ];
        let result = service
            .resolve_turn(session_id, queue)
            .expect("resolve turn");

        println!("\n-- Turn {} --", result.turn - 1);
        println!("{}", result.narration);
        println!(
            "[you {}/{} HP, {}/{} AP | {} {} HP]",
            result.player_hp.current,
            result.player_hp.maximum,
            result.player_ap.current,
            result.player_ap.maximum,
            summary.monster_name,
            result.monster_hp.current,
        );

        match result.status {
            SessionStatus::Active => continue,
            status => {
                println!("\n== Session over: {status} ==");
                if let Some(rewards) = result.rewards {
                    println!("Earned {} XP and {} Col.", rewards.xp, rewards.col);
                }
                break;
            }
        }
    }
}
