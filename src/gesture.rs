//! Drag gesture lifecycle as an explicit state machine.
//!
//! The embedding grid feeds discrete pointer events into [`step`] and acts
//! on the returned [`FillRequest`], if any. No listener registration or
//! teardown lives here, so the lifecycle is unit-testable without a DOM.
//! Aborting a drag discards mid-gesture state without touching the data
//! store.

use serde::{Deserialize, Serialize};

use crate::types::CellRange;

/// Gesture state. A new drag cannot begin before the previous release has
/// been stepped, matching the synchronous event model of the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// Fill handle grabbed; `current` is `origin` extended toward the
    /// pointer.
    Dragging {
        origin: CellRange,
        current: CellRange,
    },
}

/// Discrete inputs from the host's pointer/touch handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragInput {
    /// Fill handle grabbed on the given selected range.
    Grab { origin: CellRange },
    /// Pointer moved over cell `(row, cell)`.
    Move { row: u32, cell: u32 },
    /// Pointer released: the gesture completes.
    Release,
    /// Gesture aborted (pointer left the document, Escape, ...).
    Abort,
}

/// Fill operation to perform after a completed gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FillRequest {
    /// The range selected before the drag began.
    pub source: CellRange,
    /// The extended range at release.
    pub target: CellRange,
}

/// Result of one state-machine step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// State after the input.
    pub state: DragState,
    /// Fill to perform, present only on a release that extended the range.
    pub fill: Option<FillRequest>,
}

impl Step {
    const fn to(state: DragState) -> Self {
        Self { state, fill: None }
    }
}

/// Advance the gesture by one input. Pure: the only side effect a caller
/// ever performs is the returned fill.
///
/// Inputs that are not valid in the current state are ignored; a `Grab`
/// while dragging restarts the gesture with the new origin.
#[must_use]
pub fn step(state: DragState, input: DragInput) -> Step {
    match (state, input) {
        (_, DragInput::Grab { origin }) => Step::to(DragState::Dragging {
            origin,
            current: origin,
        }),
        (DragState::Dragging { origin, .. }, DragInput::Move { row, cell }) => {
            Step::to(DragState::Dragging {
                origin,
                current: origin.extended_to(row, cell),
            })
        }
        (DragState::Dragging { origin, current }, DragInput::Release) => Step {
            state: DragState::Idle,
            fill: (current != origin).then_some(FillRequest {
                source: origin,
                target: current,
            }),
        },
        (DragState::Dragging { .. }, DragInput::Abort) => Step::to(DragState::Idle),
        // Move/Release/Abort while idle
        (DragState::Idle, _) => Step::to(DragState::Idle),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grab_move_release_requests_fill() {
        let origin = CellRange::new(1, 1, 1, 1);
        let s = step(DragState::Idle, DragInput::Grab { origin });
        let s = step(s.state, DragInput::Move { row: 3, cell: 1 });
        let s = step(s.state, DragInput::Release);
        assert_eq!(s.state, DragState::Idle);
        assert_eq!(
            s.fill,
            Some(FillRequest {
                source: origin,
                target: CellRange::new(1, 3, 1, 1),
            })
        );
    }

    #[test]
    fn release_without_movement_is_a_noop() {
        let origin = CellRange::new(2, 4, 2, 4);
        let s = step(DragState::Idle, DragInput::Grab { origin });
        let s = step(s.state, DragInput::Release);
        assert_eq!(s.state, DragState::Idle);
        assert!(s.fill.is_none());
    }

    #[test]
    fn abort_discards_the_gesture() {
        let origin = CellRange::new(0, 0, 0, 0);
        let s = step(DragState::Idle, DragInput::Grab { origin });
        let s = step(s.state, DragInput::Move { row: 9, cell: 9 });
        let s = step(s.state, DragInput::Abort);
        assert_eq!(s.state, DragState::Idle);
        assert!(s.fill.is_none());
    }

    #[test]
    fn inputs_while_idle_are_ignored() {
        for input in [
            DragInput::Move { row: 1, cell: 1 },
            DragInput::Release,
            DragInput::Abort,
        ] {
            let s = step(DragState::Idle, input);
            assert_eq!(s.state, DragState::Idle);
            assert!(s.fill.is_none());
        }
    }

    #[test]
    fn move_tracks_bounding_box_of_origin_and_pointer() {
        let origin = CellRange::new(2, 3, 2, 3);
        let s = step(DragState::Idle, DragInput::Grab { origin });
        // Pointer above-left of the origin grows up and left
        let s = step(s.state, DragInput::Move { row: 0, cell: 1 });
        assert_eq!(
            s.state,
            DragState::Dragging {
                origin,
                current: CellRange::new(0, 3, 1, 3),
            }
        );
        // Moving back inside the origin shrinks current back to it
        let s = step(s.state, DragInput::Move { row: 2, cell: 3 });
        assert_eq!(
            s.state,
            DragState::Dragging {
                origin,
                current: origin,
            }
        );
    }

    #[test]
    fn grab_while_dragging_restarts() {
        let first = CellRange::new(0, 0, 0, 0);
        let second = CellRange::new(5, 5, 5, 5);
        let s = step(DragState::Idle, DragInput::Grab { origin: first });
        let s = step(s.state, DragInput::Grab { origin: second });
        assert_eq!(
            s.state,
            DragState::Dragging {
                origin: second,
                current: second,
            }
        );
    }
}
