use std::collections::HashMap;

use crate::entity::{CombatEntity, ResourceMeter};
use crate::env::{
    CombatEnv, DamageType, MonsterOracle, MonsterSkillAssignment, MonsterSkillTemplate,
    MonsterTemplate, NarrativeSet, Pcg32, SequenceSource, SkillOracle, SkillTemplate,
};
use crate::ids::{MonsterId, MonsterSkillId, PlayerId, SessionId, SkillId};
use crate::intent::EnemyIntent;
use crate::log::Actor;
use crate::queue::{PlayerQueue, QueuedAction};
use crate::session::{SessionState, SessionStatus};
use crate::stats::BaseAttributes;

use super::{ResolveError, resolve_flee, resolve_turn};

#[derive(Default)]
struct TestContent {
    skills: HashMap<SkillId, SkillTemplate>,
    monsters: HashMap<MonsterId, MonsterTemplate>,
    monster_skills: HashMap<MonsterSkillId, MonsterSkillTemplate>,
}

impl SkillOracle for TestContent {
    fn skill(&self, id: SkillId) -> Option<&SkillTemplate> {
        self.skills.get(&id)
    }
}

impl MonsterOracle for TestContent {
    fn monster(&self, id: MonsterId) -> Option<&MonsterTemplate> {
        self.monsters.get(&id)
    }

    fn monster_skill(&self, id: MonsterSkillId) -> Option<&MonsterSkillTemplate> {
        self.monster_skills.get(&id)
    }
}

fn slash(id: u32, amp: u32, ap_cost: u32) -> SkillTemplate {
    SkillTemplate {
        id: SkillId(id),
        name: format!("Slash-{id}"),
        damage_type: DamageType::Physical,
        amp,
        accuracy: 95,
        speed: 10,
        ap_cost,
        status: None,
        self_heal: 0,
        narrative: NarrativeSet {
            use_line: Some("A horizontal arc of light.".into()),
            hit: Some("The blade bites for {damage}!".into()),
            miss: None,
            crit: None,
        },
    }
}

fn boar(hp: u32) -> MonsterTemplate {
    MonsterTemplate {
        id: MonsterId(1),
        name: "Frenzy Boar".into(),
        max_hp: hp,
        ap_pool: 30,
        attack: 12,
        magic_attack: 0,
        defense: 4,
        magic_defense: 2,
        accuracy: 80,
        evasion: 5,
        speed: 8,
        xp_reward: 25,
        col_reward: 12,
        skills: vec![MonsterSkillAssignment::new(MonsterSkillId(1))],
        attack_patterns: vec![],
    }
}

fn tusk_charge() -> MonsterSkillTemplate {
    MonsterSkillTemplate {
        id: MonsterSkillId(1),
        name: "Tusk Charge".into(),
        base_damage: 20,
        accuracy: 80,
        narrative: NarrativeSet {
            use_line: None,
            hit: Some("Tusks gore you for {damage}!".into()),
            miss: Some("You sidestep the charge.".into()),
            crit: None,
        },
    }
}

struct Fixture {
    content: TestContent,
    player: CombatEntity,
    monster: CombatEntity,
    session: SessionState,
}

/// Player: 100 HP (VIT 0), 50 AP, AGI 0; monster: Frenzy Boar.
fn fixture(monster_hp: u32) -> Fixture {
    let mut content = TestContent::default();
    content.skills.insert(SkillId(1), slash(1, 20, 5));
    content
        .monster_skills
        .insert(MonsterSkillId(1), tusk_charge());
    let template = boar(monster_hp);
    let monster = CombatEntity::from_template(&template);
    content.monsters.insert(MonsterId(1), template);

    let player = CombatEntity::from_attributes(
        PlayerId(7),
        "Kirito",
        BaseAttributes::default(),
        100,
        50,
        50,
    );

    let session = SessionState::new(
        SessionId(1),
        PlayerId(7),
        MonsterId(1),
        ResourceMeter::new(100, player.hp.maximum),
        ResourceMeter::new(50, 50),
        ResourceMeter::full(monster_hp),
        EnemyIntent::empty(),
    );

    Fixture {
        content,
        player,
        monster,
        session,
    }
}

fn queue_of(ids: &[u32]) -> PlayerQueue {
    PlayerQueue::from_actions(
        ids.iter()
            .map(|id| QueuedAction::new(SkillId(*id), format!("Slash-{id}")))
            .collect(),
    )
    .unwrap()
}

#[test]
fn single_skill_turn_against_healthy_monster() {
    let f = fixture(30);
    let env = CombatEnv::new(&f.content, &f.content);
    let mut rng = SequenceSource::fixed(0.5); // variance exactly 1.0

    let outcome = resolve_turn(
        f.session,
        &f.player,
        &f.monster,
        &queue_of(&[1]),
        &EnemyIntent::empty(),
        &env,
        &mut rng,
    )
    .unwrap();

    assert_eq!(outcome.session.monster_hp.current, 10);
    assert_eq!(outcome.session.status, SessionStatus::Active);
    assert_eq!(outcome.session.player_ap.current, 45);
    assert_eq!(outcome.session.turn, 2);
    assert_eq!(outcome.entry.turn, 1);
    assert_eq!(outcome.skill_uses.get(&SkillId(1)), Some(&1));
    assert!(outcome.rewards.is_none());
}

#[test]
fn kill_skips_monster_phase_and_grants_rewards() {
    let f = fixture(15);
    let env = CombatEnv::new(&f.content, &f.content);
    let mut rng = SequenceSource::fixed(0.5);
    let intent = EnemyIntent {
        skills: vec![MonsterSkillId(1)],
    };

    let outcome = resolve_turn(
        f.session,
        &f.player,
        &f.monster,
        &queue_of(&[1]),
        &intent,
        &env,
        &mut rng,
    )
    .unwrap();

    assert_eq!(outcome.session.status, SessionStatus::Won);
    assert_eq!(outcome.session.monster_hp.current, 0);
    let rewards = outcome.rewards.unwrap();
    assert_eq!((rewards.xp, rewards.col), (25, 12));

    // The monster died in phase A: no monster line may exist.
    assert!(
        outcome
            .entry
            .lines
            .iter()
            .all(|line| line.actor != Actor::Monster)
    );
    assert!(outcome.entry.narration.contains("Victory!"));
}

#[test]
fn insufficient_ap_halts_the_rest_of_the_queue() {
    let mut f = fixture(1000);
    f.content.skills.insert(SkillId(2), slash(2, 20, 60)); // unaffordable at 50 AP
    let env = CombatEnv::new(&f.content, &f.content);
    let mut rng = SequenceSource::fixed(0.5);

    let outcome = resolve_turn(
        f.session,
        &f.player,
        &f.monster,
        &queue_of(&[2, 1, 1]),
        &EnemyIntent::empty(),
        &env,
        &mut rng,
    )
    .unwrap();

    let energy_lines: Vec<_> = outcome
        .entry
        .lines
        .iter()
        .filter(|line| line.text.contains("lack the energy"))
        .collect();
    assert_eq!(energy_lines.len(), 1);

    // No damage was dealt and nothing after the unaffordable action ran.
    assert_eq!(outcome.session.monster_hp.current, 1000);
    assert_eq!(outcome.session.player_ap.current, 50);
    assert!(outcome.skill_uses.is_empty());
    // The turn still advances.
    assert_eq!(outcome.session.turn, 2);
}

#[test]
fn dangling_skill_reference_is_skipped_silently() {
    let f = fixture(30);
    let env = CombatEnv::new(&f.content, &f.content);
    let mut rng = SequenceSource::fixed(0.5);

    let outcome = resolve_turn(
        f.session,
        &f.player,
        &f.monster,
        &queue_of(&[99, 1]),
        &EnemyIntent::empty(),
        &env,
        &mut rng,
    )
    .unwrap();

    // The dangling id produced no narration; the valid skill still ran.
    assert_eq!(outcome.session.monster_hp.current, 10);
    assert_eq!(outcome.skill_uses.get(&SkillId(1)), Some(&1));
    assert!(!outcome.entry.narration.contains("Slash-99"));
}

#[test]
fn damage_variance_is_bounded() {
    let mut rng = Pcg32::new(0xC0FFEE);
    for _ in 0..2_000 {
        let f = fixture(10_000);
        let env = CombatEnv::new(&f.content, &f.content);
        let outcome = resolve_turn(
            f.session,
            &f.player,
            &f.monster,
            &queue_of(&[1]),
            &EnemyIntent::empty(),
            &env,
            &mut rng,
        )
        .unwrap();
        let damage = 10_000 - outcome.session.monster_hp.current;
        // amp 20: floor(0.9 × 20) ..= floor(1.0999 × 20)
        assert!((18..=21).contains(&damage), "damage out of bounds: {damage}");
    }
}

#[test]
fn meters_stay_in_range_over_many_turns() {
    let mut rng = Pcg32::new(42);
    let f = fixture(10_000);
    let env = CombatEnv::new(&f.content, &f.content);
    let intent = EnemyIntent {
        skills: vec![MonsterSkillId(1)],
    };
    let mut session = f.session;

    for _ in 0..40 {
        if session.status.is_terminal() {
            break;
        }
        let outcome = resolve_turn(
            session,
            &f.player,
            &f.monster,
            &queue_of(&[1]),
            &intent,
            &env,
            &mut rng,
        )
        .unwrap();
        session = outcome.session;

        assert!(session.player_hp.current <= session.player_hp.maximum);
        assert!(session.player_ap.current <= session.player_ap.maximum);
        assert!(session.monster_hp.current <= session.monster_hp.maximum);
    }
}

#[test]
fn terminal_session_refuses_to_resolve() {
    let f = fixture(30);
    let env = CombatEnv::new(&f.content, &f.content);
    let mut rng = SequenceSource::fixed(0.5);

    let mut session = f.session;
    session.status = SessionStatus::Won;
    let turn_before = session.turn;

    let err = resolve_turn(
        session.clone(),
        &f.player,
        &f.monster,
        &queue_of(&[1]),
        &EnemyIntent::empty(),
        &env,
        &mut rng,
    )
    .unwrap_err();

    assert_eq!(
        err,
        ResolveError::SessionNotActive {
            id: SessionId(1),
            status: SessionStatus::Won,
        }
    );
    assert_eq!(session.turn, turn_before);
}

#[test]
fn monster_hit_applies_vit_reduction_with_floor_of_one() {
    // VIT 10 → reduction 5; base 20 → 15 damage. Accuracy 80, AGI 0 → chance 80.
    let mut f = fixture(1000);
    f.player = CombatEntity::from_attributes(
        PlayerId(7),
        "Kirito",
        BaseAttributes::new(0, 0, 10, 0, 0, 0),
        200,
        50,
        50,
    );
    f.session.player_hp = ResourceMeter::new(200, 200);
    let env = CombatEnv::new(&f.content, &f.content);
    let intent = EnemyIntent {
        skills: vec![MonsterSkillId(1)],
    };
    // Draws: variance for the player action, then hit roll 0.5 → 50 < 80.
    let mut rng = SequenceSource::new(vec![0.5, 0.5]);

    let outcome = resolve_turn(
        f.session,
        &f.player,
        &f.monster,
        &queue_of(&[1]),
        &intent,
        &env,
        &mut rng,
    )
    .unwrap();

    assert_eq!(outcome.session.player_hp.current, 185);
    assert!(outcome.entry.narration.contains("Tusks gore you for 15!"));
}

#[test]
fn unclamped_hit_chance_goes_negative_and_never_lands() {
    // AGI 200 → hit chance 80 − 100 < 0; even a roll of 0 misses.
    let mut f = fixture(1000);
    f.player = CombatEntity::from_attributes(
        PlayerId(7),
        "Kirito",
        BaseAttributes::new(0, 200, 0, 0, 0, 0),
        100,
        50,
        50,
    );
    let env = CombatEnv::new(&f.content, &f.content);
    let intent = EnemyIntent {
        skills: vec![MonsterSkillId(1)],
    };
    let mut rng = SequenceSource::new(vec![0.5, 0.0]);

    let outcome = resolve_turn(
        f.session,
        &f.player,
        &f.monster,
        &queue_of(&[1]),
        &intent,
        &env,
        &mut rng,
    )
    .unwrap();

    assert_eq!(outcome.session.player_hp.current, 100);
    assert!(outcome.entry.narration.contains("You sidestep the charge."));
}

#[test]
fn assignment_overrides_replace_template_values() {
    let mut f = fixture(1000);
    let template = f.content.monsters.get_mut(&MonsterId(1)).unwrap();
    template.skills[0].accuracy_override = Some(100);
    template.skills[0].damage_override = Some(40);
    let env = CombatEnv::new(&f.content, &f.content);
    let intent = EnemyIntent {
        skills: vec![MonsterSkillId(1)],
    };
    // Hit roll 0.99 → 99 < 100 still hits under the override.
    let mut rng = SequenceSource::new(vec![0.5, 0.99]);

    let outcome = resolve_turn(
        f.session,
        &f.player,
        &f.monster,
        &queue_of(&[1]),
        &intent,
        &env,
        &mut rng,
    )
    .unwrap();

    assert_eq!(outcome.session.player_hp.current, 100 - 40);
}

#[test]
fn player_death_in_monster_phase_stops_remaining_intent() {
    let mut f = fixture(1000);
    f.session.player_hp = ResourceMeter::new(15, 100);
    let env = CombatEnv::new(&f.content, &f.content);
    let intent = EnemyIntent {
        skills: vec![MonsterSkillId(1), MonsterSkillId(1)],
    };
    // Variance, then one hit roll; the second intent action must never roll.
    let mut rng = SequenceSource::new(vec![0.5, 0.1]);

    let outcome = resolve_turn(
        f.session,
        &f.player,
        &f.monster,
        &queue_of(&[1]),
        &intent,
        &env,
        &mut rng,
    )
    .unwrap();

    assert_eq!(outcome.session.status, SessionStatus::Lost);
    assert_eq!(outcome.session.player_hp.current, 0);
    let monster_hits = outcome
        .entry
        .lines
        .iter()
        .filter(|line| line.actor == Actor::Monster)
        .count();
    assert_eq!(monster_hits, 1);
    assert!(outcome.entry.narration.contains("collapses"));
}

// ---------------------------------------------------------------------------
// Flee
// ---------------------------------------------------------------------------

/// Player AGI 45 vs evasion 5 → diff +40, chance clamps to 90.
fn flee_fixture() -> Fixture {
    let mut f = fixture(1000);
    f.player = CombatEntity::from_attributes(
        PlayerId(7),
        "Kirito",
        BaseAttributes::new(0, 45, 0, 0, 0, 0),
        100,
        50,
        50,
    );
    f
}

#[test]
fn flee_succeeds_below_the_clamped_ceiling() {
    let f = flee_fixture();
    let mut rng = SequenceSource::new(vec![0.8999]); // roll 89.99 < 90

    let outcome = resolve_flee(f.session, &f.player, &f.monster, &mut rng).unwrap();

    assert!(outcome.fled);
    assert_eq!(outcome.session.status, SessionStatus::Fled);
    assert_eq!(outcome.session.player_hp.current, 100);
    assert!(outcome.entry.narration.contains("slip away"));
}

#[test]
fn flee_fails_at_the_boundary_roll() {
    let f = flee_fixture();
    let turn_before = f.session.turn;
    let mut rng = SequenceSource::new(vec![0.90]); // roll 90 ≥ 90

    let outcome = resolve_flee(f.session, &f.player, &f.monster, &mut rng).unwrap();

    assert!(!outcome.fled);
    assert_eq!(outcome.session.status, SessionStatus::Active);
    // Free always-hit attack: max(1, 12 − 0) = 12.
    assert_eq!(outcome.session.player_hp.current, 88);
    assert_eq!(outcome.session.turn, turn_before + 1);
}

#[test]
fn flee_chance_floor_is_ten_percent() {
    // AGI 0 vs evasion 5 → 45; drop evasion influence far below the floor.
    let mut f = fixture(1000);
    let template = f.content.monsters.get_mut(&MonsterId(1)).unwrap();
    template.evasion = 200;
    f.monster = CombatEntity::from_template(template);

    // chance = clamp(50 + (0 − 200)) = 10; roll 9.9 still succeeds.
    let mut rng = SequenceSource::new(vec![0.099]);
    let outcome = resolve_flee(f.session, &f.player, &f.monster, &mut rng).unwrap();
    assert!(outcome.fled);
}

#[test]
fn failed_flee_can_lose_the_session() {
    let mut f = flee_fixture();
    f.session.player_hp = ResourceMeter::new(5, 100);
    let mut rng = SequenceSource::new(vec![0.95]);

    let outcome = resolve_flee(f.session, &f.player, &f.monster, &mut rng).unwrap();

    assert!(!outcome.fled);
    assert_eq!(outcome.session.status, SessionStatus::Lost);
    assert_eq!(outcome.session.player_hp.current, 0);
}

#[test]
fn flee_on_terminal_session_is_rejected() {
    let mut f = flee_fixture();
    f.session.status = SessionStatus::Fled;
    let mut rng = SequenceSource::fixed(0.0);

    let err = resolve_flee(f.session, &f.player, &f.monster, &mut rng).unwrap_err();
    assert!(matches!(err, ResolveError::SessionNotActive { .. }));
}
