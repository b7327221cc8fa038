// Pointer capture for the clock face
//
// egui already folds touch into the pointer stream, so mouse and touch both
// arrive here as the same primary-button events.

use egui::{Pos2, Rect};

use crate::services::clock::{PointerPhase, PointerSample};

/// Raw pointer facts for one frame, read from `egui::InputState`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerFrame {
    pub pressed: bool,
    pub released: bool,
    pub down: bool,
    pub moved: bool,
    pub pos: Option<Pos2>,
}

impl PointerFrame {
    pub fn read(ctx: &egui::Context) -> Self {
        ctx.input(|i| Self {
            pressed: i.pointer.primary_pressed(),
            released: i.pointer.primary_released(),
            down: i.pointer.primary_down(),
            moved: i.pointer.is_moving(),
            pos: i.pointer.interact_pos().or(i.pointer.latest_pos()),
        })
    }
}

/// Turn one frame of pointer input into face events.
///
/// A gesture starts only when the press lands inside `face`. Once started,
/// moves and the release are reported wherever the pointer is, so letting go
/// outside the face still finishes the pick. `last_pos` stands in when the
/// pointer has gone (touch end) and no position is known.
pub fn face_samples(
    frame: PointerFrame,
    face: Rect,
    dragging: bool,
    last_pos: Pos2,
) -> Vec<PointerSample> {
    let mut samples = Vec::with_capacity(2);
    let pos = frame.pos.unwrap_or(last_pos);
    let mut active = dragging;

    if frame.pressed && frame.pos.is_some_and(|p| face.contains(p)) {
        samples.push(PointerSample::new(PointerPhase::Down, pos));
        active = true;
    } else if dragging && frame.down && frame.moved {
        samples.push(PointerSample::new(PointerPhase::Move, pos));
    }

    if active && (frame.released || !frame.down) {
        samples.push(PointerSample::new(PointerPhase::Up, pos));
    }
    samples
}

#[cfg(test)]
mod tests {
    use super::*;

    fn face() -> Rect {
        Rect::from_min_max(Pos2::new(0.0, 0.0), Pos2::new(100.0, 100.0))
    }

    fn phases(samples: &[PointerSample]) -> Vec<PointerPhase> {
        samples.iter().map(|s| s.phase).collect()
    }

    #[test]
    fn test_press_inside_starts_gesture() {
        let frame = PointerFrame {
            pressed: true,
            down: true,
            pos: Some(Pos2::new(50.0, 10.0)),
            ..Default::default()
        };
        let samples = face_samples(frame, face(), false, Pos2::ZERO);
        assert_eq!(phases(&samples), vec![PointerPhase::Down]);
    }

    #[test]
    fn test_press_outside_is_ignored() {
        let frame = PointerFrame {
            pressed: true,
            down: true,
            pos: Some(Pos2::new(150.0, 10.0)),
            ..Default::default()
        };
        assert!(face_samples(frame, face(), false, Pos2::ZERO).is_empty());
    }

    #[test]
    fn test_quick_click_gives_down_then_up() {
        let frame = PointerFrame {
            pressed: true,
            released: true,
            down: false,
            pos: Some(Pos2::new(50.0, 10.0)),
            ..Default::default()
        };
        assert_eq!(
            phases(&face_samples(frame, face(), false, Pos2::ZERO)),
            vec![PointerPhase::Down, PointerPhase::Up]
        );
    }

    #[test]
    fn test_move_only_while_dragging() {
        let frame = PointerFrame {
            down: true,
            moved: true,
            pos: Some(Pos2::new(60.0, 20.0)),
            ..Default::default()
        };
        let samples = face_samples(frame, face(), true, Pos2::ZERO);
        assert_eq!(phases(&samples), vec![PointerPhase::Move]);
        assert!(face_samples(frame, face(), false, Pos2::ZERO).is_empty());
    }

    #[test]
    fn test_release_outside_face_still_finishes() {
        let frame = PointerFrame {
            released: true,
            pos: Some(Pos2::new(500.0, 500.0)),
            ..Default::default()
        };
        let samples = face_samples(frame, face(), true, Pos2::ZERO);
        assert_eq!(phases(&samples), vec![PointerPhase::Up]);
    }

    #[test]
    fn test_pointer_gone_uses_last_position() {
        let frame = PointerFrame::default();
        let last = Pos2::new(40.0, 40.0);
        let samples = face_samples(frame, face(), true, last);
        assert_eq!(samples, vec![PointerSample::new(PointerPhase::Up, last)]);
    }
}
