//! The three public combat operations.
//!
//! [`CombatService`] is the single entry point external callers (formerly
//! HTTP routes) invoke: start a session, resolve a turn, attempt to flee.
//! It loads state through the repositories, runs the pure resolver, and
//! persists whatever comes back; all validation happens before the first
//! write so a rejected request never mutates anything.

mod errors;
mod types;

pub use errors::ServiceError;
pub use types::{CombatTarget, FleeResult, SessionSummary, TurnResult};

use std::sync::Arc;

use combat_core::{
    CombatEntity, CombatEnv, MonsterOracle, PlayerId, PlayerQueue, QueuedAction, ResourceMeter,
    Rewards, RngSource, SessionId, SessionState, SessionStatus, select_intent,
};

use crate::content::{MonsterCatalog, SkillCatalog};
use crate::player::PlayerRecord;
use crate::repository::{CombatLogRepository, PlayerRepository, SessionRepository};

pub struct CombatService<R> {
    sessions: Arc<dyn SessionRepository>,
    players: Arc<dyn PlayerRepository>,
    logs: Arc<dyn CombatLogRepository>,
    skills: SkillCatalog,
    monsters: MonsterCatalog,
    rng: R,
    next_session: u64,
}

impl<R: RngSource> CombatService<R> {
    pub fn new(
        sessions: Arc<dyn SessionRepository>,
        players: Arc<dyn PlayerRepository>,
        logs: Arc<dyn CombatLogRepository>,
        skills: SkillCatalog,
        monsters: MonsterCatalog,
        rng: R,
    ) -> Self {
        Self {
            sessions,
            players,
            logs,
            skills,
            monsters,
            rng,
            next_session: 1,
        }
    }

    /// Open a combat session against a monster or the first monster of an
    /// area.
    ///
    /// Enforces the one-active-session-per-player invariant before touching
    /// anything else.
    pub fn start_combat(
        &mut self,
        player_id: PlayerId,
        target: CombatTarget,
    ) -> Result<SessionSummary, ServiceError> {
        if let Some(existing) = self.sessions.find_active(player_id)? {
            return Err(ServiceError::AlreadyInCombat {
                player: player_id,
                session: existing.id,
            });
        }

        let player = self
            .players
            .load(player_id)?
            .ok_or(ServiceError::PlayerNotFound(player_id))?;

        let monster_id = match target {
            CombatTarget::Monster(id) => id,
            CombatTarget::Area(id) => self
                .monsters
                .area(id)
                .and_then(|area| area.monsters.first().copied())
                .ok_or(ServiceError::AreaNotFound(id))?,
        };
        let (monster_name, monster_max_hp, intent) = {
            let template = self
                .monsters
                .monster(monster_id)
                .ok_or(ServiceError::MonsterNotFound(monster_id))?;
            (template.name.clone(), template.max_hp, select_intent(template))
        };

        let entity = player_entity(&player, player.current_hp, player.current_ap);
        let session = SessionState::new(
            self.allocate_session_id(),
            player_id,
            monster_id,
            entity.hp,
            entity.ap,
            ResourceMeter::full(monster_max_hp),
            intent,
        );
        self.sessions.save(&session)?;

        tracing::info!(
            session = %session.id,
            player = %player_id,
            monster = %monster_id,
            "combat session started"
        );
        Ok(SessionSummary::from_session(&session, &monster_name))
    }

    /// Resolve one turn of an active session.
    pub fn resolve_turn(
        &mut self,
        session_id: SessionId,
        actions: Vec<QueuedAction>,
    ) -> Result<TurnResult, ServiceError> {
        // Queue shape is validated before any load or mutation.
        let queue = PlayerQueue::from_actions(actions)?;

        let session = self.load_active(session_id)?;
        let player = self
            .players
            .load(session.player_id)?
            .ok_or(ServiceError::PlayerNotFound(session.player_id))?;
        let template = self
            .monsters
            .monster(session.monster_id)
            .ok_or(ServiceError::MonsterNotFound(session.monster_id))?;

        let player_entity = player_entity(
            &player,
            session.player_hp.current,
            session.player_ap.current,
        );
        let monster_entity = CombatEntity::from_template(template);
        let intent = session.enemy_intent.clone();
        let env = CombatEnv::new(&self.skills, &self.monsters);

        let outcome = combat_core::resolve_turn(
            session,
            &player_entity,
            &monster_entity,
            &queue,
            &intent,
            &env,
            &mut self.rng,
        )
        .map_err(|_| ServiceError::SessionNotFound(session_id))?;

        let mut session = outcome.session;
        if session.status.is_active() {
            session.enemy_intent = select_intent(template);
        }

        let mut player = player;
        player.record_uses(&outcome.skill_uses);
        match session.status {
            SessionStatus::Won => {
                player.set_meters(session.player_hp.current, session.player_ap.current);
                player.credit(outcome.rewards.unwrap_or(Rewards { xp: 0, col: 0 }));
            }
            SessionStatus::Lost => player.apply_defeat_penalty(),
            SessionStatus::Active | SessionStatus::Fled => {
                player.set_meters(session.player_hp.current, session.player_ap.current);
            }
        }

        self.sessions.save(&session)?;
        self.players.save(&player)?;
        self.logs.append(session.id, &outcome.entry)?;

        tracing::debug!(
            session = %session.id,
            turn = outcome.entry.turn,
            status = %session.status,
            monster_hp = session.monster_hp.current,
            player_hp = session.player_hp.current,
            "turn resolved"
        );
        Ok(TurnResult {
            session_id: session.id,
            turn: session.turn,
            status: session.status,
            narration: outcome.entry.narration,
            player_hp: session.player_hp,
            player_ap: session.player_ap,
            monster_hp: session.monster_hp,
            rewards: outcome.rewards,
        })
    }

    /// Attempt to flee an active session.
    pub fn flee(&mut self, session_id: SessionId) -> Result<FleeResult, ServiceError> {
        let session = self.load_active(session_id)?;
        let player = self
            .players
            .load(session.player_id)?
            .ok_or(ServiceError::PlayerNotFound(session.player_id))?;
        let template = self
            .monsters
            .monster(session.monster_id)
            .ok_or(ServiceError::MonsterNotFound(session.monster_id))?;

        let player_entity = player_entity(
            &player,
            session.player_hp.current,
            session.player_ap.current,
        );
        let monster_entity = CombatEntity::from_template(template);

        let outcome =
            combat_core::resolve_flee(session, &player_entity, &monster_entity, &mut self.rng)
                .map_err(|_| ServiceError::SessionNotFound(session_id))?;

        let session = outcome.session;
        let mut player = player;
        match session.status {
            SessionStatus::Lost => player.apply_defeat_penalty(),
            _ => player.set_meters(session.player_hp.current, session.player_ap.current),
        }

        self.sessions.save(&session)?;
        self.players.save(&player)?;
        self.logs.append(session.id, &outcome.entry)?;

        tracing::info!(
            session = %session.id,
            fled = outcome.fled,
            status = %session.status,
            "flee attempt resolved"
        );
        Ok(FleeResult {
            session_id: session.id,
            fled: outcome.fled,
            status: session.status,
            narration: outcome.entry.narration,
            player_hp: session.player_hp,
        })
    }

    /// Load a session that exists *and* is still active; anything else is
    /// `SessionNotFound` (terminal sessions are history, not targets).
    fn load_active(&self, id: SessionId) -> Result<SessionState, ServiceError> {
        self.sessions
            .load(id)?
            .filter(|session| session.status.is_active())
            .ok_or(ServiceError::SessionNotFound(id))
    }

    fn allocate_session_id(&mut self) -> SessionId {
        let id = SessionId(self.next_session);
        self.next_session += 1;
        id
    }
}

/// Build the player-side entity; during combat the session meters are
/// authoritative, so callers pass those rather than the record's.
fn player_entity(player: &PlayerRecord, hp: u32, ap: u32) -> CombatEntity {
    CombatEntity::from_attributes(
        player.id,
        player.name.clone(),
        player.attributes,
        hp,
        ap,
        player.max_ap,
    )
}
