//! Player action queue: ordered, bounded declarations for one turn.

use arrayvec::ArrayVec;

use crate::ids::SkillId;

/// Maximum number of actions a player may declare per turn.
pub const QUEUE_CAP: usize = 5;

/// One declared action: a skill reference plus the display name the client
/// submitted. The resolver reads only the id (dangling ids skip silently);
/// the name travels with the declaration for clients replaying a queue.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueuedAction {
    pub skill: SkillId,
    pub name: String,
}

impl QueuedAction {
    pub fn new(skill: SkillId, name: impl Into<String>) -> Self {
        Self {
            skill,
            name: name.into(),
        }
    }
}

/// Queue shape violations detected before any state mutation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum QueueError {
    #[error("queue holds {len} actions, cap is {cap}")]
    TooManyActions { len: usize, cap: usize },
}

/// Ordered, bounded list of player actions for one turn.
///
/// The cap is enforced at construction; resolution never sees an oversized
/// queue. AP affordability is deliberately *not* checked here: it depends on
/// remaining AP at execution time, so it belongs to the resolver.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerQueue {
    actions: ArrayVec<QueuedAction, QUEUE_CAP>,
}

impl PlayerQueue {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Validate and adopt a submitted action list.
    pub fn from_actions(actions: Vec<QueuedAction>) -> Result<Self, QueueError> {
        if actions.len() > QUEUE_CAP {
            return Err(QueueError::TooManyActions {
                len: actions.len(),
                cap: QUEUE_CAP,
            });
        }
        let mut queue = ArrayVec::new();
        queue.extend(actions);
        Ok(Self { actions: queue })
    }

    pub fn iter(&self) -> impl Iterator<Item = &QueuedAction> {
        self.actions.iter()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn action(id: u32) -> QueuedAction {
        QueuedAction::new(SkillId(id), format!("skill-{id}"))
    }

    #[test]
    fn accepts_up_to_cap() {
        let queue = PlayerQueue::from_actions((0..5).map(action).collect()).unwrap();
        assert_eq!(queue.len(), 5);
    }

    #[test]
    fn rejects_oversized_queue() {
        let err = PlayerQueue::from_actions((0..6).map(action).collect()).unwrap_err();
        assert_eq!(err, QueueError::TooManyActions { len: 6, cap: 5 });
    }

    #[test]
    fn preserves_submission_order() {
        let queue = PlayerQueue::from_actions(vec![action(3), action(1), action(2)]).unwrap();
        let ids: Vec<u32> = queue.iter().map(|a| a.skill.0).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }
}
