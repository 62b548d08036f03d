//! Joker location tracking and identity resolution.
//!
//! An identity starts on its origin square. Once its piece moves, the tracker
//! records the new square; once the piece is captured or promoted the identity
//! is extinguished and no square resolves to it again, whatever later stands
//! there.

use std::collections::{BTreeMap, BTreeSet};

use log::debug;

use crate::game_state::chess_types::*;
use crate::jokers::joker_assignment::{JokerAssignment, JokerId, JokerIdentity};
use crate::move_generation::movement_resolver::MovementResolver;

/// Change to a joker identity caused by one move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JokerEvent {
    Relocated {
        identity: JokerIdentity,
        from: Square,
        to: Square,
    },
    Extinguished {
        identity: JokerIdentity,
        at: Square,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JokerTracker {
    /// Current square of every identity that has left its origin and is still alive.
    relocated: BTreeMap<Square, JokerId>,
    /// Identities no longer on their origin square, alive or not.
    departed: BTreeSet<JokerId>,
}

impl JokerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Identity carried by the `color` piece on `square`.
    pub fn identity_at(
        &self,
        assignment: &JokerAssignment,
        square: Square,
        color: Color,
    ) -> Option<JokerId> {
        if let Some(&id) = self.relocated.get(&square) {
            if id.color == color {
                return Some(id);
            }
        }
        assignment
            .originating_at(square, color)
            .filter(|identity| !self.departed.contains(&identity.id))
            .map(|identity| identity.id)
    }

    /// Current square of `id`, or `None` once it has been extinguished.
    pub fn location_of(&self, assignment: &JokerAssignment, id: JokerId) -> Option<Square> {
        if !self.departed.contains(&id) {
            return assignment.get(id).map(|identity| identity.origin);
        }
        self.relocated
            .iter()
            .find(|(_, &tracked)| tracked == id)
            .map(|(&square, _)| square)
    }

    pub fn is_extinguished(&self, assignment: &JokerAssignment, id: JokerId) -> bool {
        self.location_of(assignment, id).is_none()
    }

    fn relocate(&mut self, id: JokerId, to: Square) {
        self.relocated.retain(|_, tracked| *tracked != id);
        self.relocated.insert(to, id);
        self.departed.insert(id);
    }

    fn extinguish(&mut self, id: JokerId) {
        self.relocated.retain(|_, tracked| *tracked != id);
        self.departed.insert(id);
    }

    /// Update identities for a completed move.
    ///
    /// `captured` is the square and piece removed by the move (for en passant
    /// that square differs from `to`). `promoted` marks a piece that changed kind
    /// on arrival, which extinguishes any identity it carried.
    pub fn record_move(
        &mut self,
        assignment: &JokerAssignment,
        mover: Piece,
        from: Square,
        to: Square,
        captured: Option<(Square, Piece)>,
        promoted: bool,
    ) -> Vec<JokerEvent> {
        let mut events = Vec::new();

        if let Some((at, victim)) = captured {
            if let Some(id) = self.identity_at(assignment, at, victim.color) {
                self.extinguish(id);
                if let Some(&identity) = assignment.get(id) {
                    debug!("joker {:?} captured on {at}", id);
                    events.push(JokerEvent::Extinguished { identity, at });
                }
            }
        }

        if let Some(id) = self.identity_at(assignment, from, mover.color) {
            let Some(&identity) = assignment.get(id) else {
                return events;
            };
            if promoted {
                self.extinguish(id);
                debug!("joker {:?} promoted on {to}; identity dropped", id);
                events.push(JokerEvent::Extinguished { identity, at: to });
            } else {
                self.relocate(id, to);
                debug!("joker {:?} moved {from} -> {to}", id);
                events.push(JokerEvent::Relocated { identity, from, to });
            }
        }

        events
    }
}

/// Borrowed view pairing the immutable assignment with the live tracker.
#[derive(Debug, Clone, Copy)]
pub struct JokerContext<'a> {
    pub assignment: &'a JokerAssignment,
    pub tracker: &'a JokerTracker,
}

impl<'a> JokerContext<'a> {
    pub fn new(assignment: &'a JokerAssignment, tracker: &'a JokerTracker) -> Self {
        Self {
            assignment,
            tracker,
        }
    }

    /// Movement kind overriding the printed kind of the `color` piece on
    /// `square`, if that piece carries a joker identity.
    pub fn effective_movement_type(&self, square: Square, color: Color) -> Option<PieceKind> {
        let id = self.tracker.identity_at(self.assignment, square, color)?;
        self.assignment.get(id).map(|identity| identity.movement)
    }
}

impl MovementResolver for JokerContext<'_> {
    fn movement_kind(&self, square: Square, piece: Piece) -> PieceKind {
        self.effective_movement_type(square, piece.color)
            .unwrap_or(piece.kind)
    }
}
