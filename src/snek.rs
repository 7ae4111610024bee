use crate::grid::{Direction, Pos, Size};
use rand::Rng;
use std::collections::VecDeque;

/// Outcome of one movement step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slither {
    Onward,
    Smashed,
}

#[derive(Debug)]
pub struct Snek {
    /// Body cells, head at the front.
    body: VecDeque<Pos>,
    /// Target body size; the tail is only dropped once `body` exceeds it,
    /// so growth granted this tick materializes on the next step.
    length: usize,
    direction: Direction,
    /// Buffered steering input, consumed once per tick.
    pending: Option<Direction>,
    /// Tail cell dropped this tick, `None` when the body grew. The
    /// renderer blanks this cell instead of repainting the whole arena.
    last: Option<Pos>,
    /// Where a reset puts the snek back.
    home: Pos,
}

impl Snek {
    pub fn new(size: Size) -> Self {
        let home = size.center();
        Snek {
            body: VecDeque::from([home]),
            length: 1,
            direction: Direction::Right,
            pending: None,
            last: None,
            home,
        }
    }

    pub fn head(&self) -> Pos {
        self.body[0]
    }

    pub fn cells(&self) -> &VecDeque<Pos> {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn last(&self) -> Option<Pos> {
        self.last
    }

    /// Buffers a steering input for the next tick. A reversal straight
    /// into the neck is silently ignored; only the current direction is
    /// consulted, not an already-buffered one.
    pub fn set_pending_direction(&mut self, dir: Direction) {
        if dir != self.direction.opposite() {
            self.pending = Some(dir);
        }
    }

    pub fn apply_pending_direction(&mut self) {
        if let Some(dir) = self.pending.take() {
            self.direction = dir;
        }
    }

    /// Raises the target length by one; the body catches up on the next
    /// slither.
    pub fn nom(&mut self) {
        self.length += 1;
    }

    /// Advances one cell in the current direction, wrapping at the arena
    /// edges.
    ///
    /// Hitting the body at index 0 or 1 is tolerated: during a tight turn
    /// the new head lands next to the cells it just vacated. Any deeper
    /// hit is a wipeout and resets the snek in place.
    pub fn slither(&mut self, size: Size, rng: &mut impl Rng) -> Slither {
        let new_head = self.head().step(self.direction, size);

        if let Some(index) = self.body.iter().position(|&p| p == new_head) {
            if index > 1 {
                self.reset(rng);
                return Slither::Smashed;
            }
        }

        self.body.push_front(new_head);
        self.last = if self.body.len() > self.length {
            self.body.pop_back()
        } else {
            None
        };
        Slither::Onward
    }

    pub fn reset(&mut self, rng: &mut impl Rng) {
        self.length = 1;
        self.body.clear();
        self.body.push_front(self.home);
        self.direction = Direction::random(rng);
        self.pending = None;
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const ARENA: Size = Size {
        width: 640,
        height: 480,
    };

    fn rng() -> StdRng {
        StdRng::seed_from_u64(99)
    }

    #[test]
    fn test_new_snek_is_centered() {
        let snek = Snek::new(ARENA);
        assert_eq!(snek.head(), Pos { x: 320, y: 240 });
        assert_eq!(snek.len(), 1);
        assert_eq!(snek.length, 1);
        assert_eq!(snek.direction(), Direction::Right);
        assert_eq!(snek.pending, None);
        assert_eq!(snek.last(), None);
    }

    #[test]
    fn test_reversal_is_ignored() {
        for dir in [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ] {
            let mut snek = Snek::new(ARENA);
            snek.direction = dir;

            snek.set_pending_direction(dir.opposite());
            assert_eq!(snek.pending, None);

            // An already-buffered input survives a rejected reversal
            snek.set_pending_direction(dir);
            snek.set_pending_direction(dir.opposite());
            assert_eq!(snek.pending, Some(dir));
        }
    }

    #[test]
    fn test_pending_direction_is_consumed_once() {
        let mut snek = Snek::new(ARENA);
        snek.set_pending_direction(Direction::Up);
        assert_eq!(snek.pending, Some(Direction::Up));

        snek.apply_pending_direction();
        assert_eq!(snek.direction(), Direction::Up);
        assert_eq!(snek.pending, None);

        // A second apply is a no-op
        snek.apply_pending_direction();
        assert_eq!(snek.direction(), Direction::Up);
    }

    #[test]
    fn test_only_current_direction_guards_reversal() {
        let mut snek = Snek::new(ARENA);
        snek.direction = Direction::Right;

        // Up is buffered, then Down: Down is not the opposite of the
        // *current* direction, so it overwrites the buffer.
        snek.set_pending_direction(Direction::Up);
        snek.set_pending_direction(Direction::Down);
        assert_eq!(snek.pending, Some(Direction::Down));
    }

    #[test]
    fn test_slither_moves_one_cell() {
        let mut snek = Snek::new(ARENA);
        assert_eq!(snek.slither(ARENA, &mut rng()), Slither::Onward);
        assert_eq!(snek.head(), Pos { x: 340, y: 240 });
        assert_eq!(snek.len(), 1);
        assert_eq!(snek.last(), Some(Pos { x: 320, y: 240 }));
    }

    #[test]
    fn test_slither_wraps_at_the_edge() {
        let mut snek = Snek::new(ARENA);
        // Ride the row all the way around
        for _ in 0..16 {
            snek.slither(ARENA, &mut rng());
        }
        assert_eq!(snek.head(), Pos { x: 0, y: 240 });
    }

    #[test]
    fn test_growth_materializes_on_the_next_slither() {
        let mut snek = Snek::new(ARENA);
        snek.nom();
        assert_eq!(snek.len(), 1);

        // Tail retained, nothing to erase this tick
        snek.slither(ARENA, &mut rng());
        assert_eq!(snek.len(), 2);
        assert_eq!(snek.last(), None);

        // Back to steady state: tail dropped again
        snek.slither(ARENA, &mut rng());
        assert_eq!(snek.len(), 2);
        assert_eq!(snek.last(), Some(Pos { x: 320, y: 240 }));
    }

    #[test]
    fn test_neck_overlap_is_within_the_grace_window() {
        // Head at (340,240) pointed straight back at its neck cell. The
        // anti-reversal guard normally prevents this, but the movement
        // step itself must tolerate a hit at index 1.
        let mut snek = Snek {
            body: VecDeque::from([Pos { x: 340, y: 240 }, Pos { x: 320, y: 240 }]),
            length: 2,
            direction: Direction::Left,
            pending: None,
            last: None,
            home: ARENA.center(),
        };

        assert_eq!(snek.slither(ARENA, &mut rng()), Slither::Onward);
        assert_eq!(snek.head(), Pos { x: 320, y: 240 });
        assert_eq!(snek.len(), 2);
    }

    #[test]
    fn test_deep_body_hit_is_a_wipeout() {
        // A hook curling back over the head; stepping up lands on index 3
        let mut snek = Snek {
            body: VecDeque::from([
                Pos { x: 320, y: 240 },
                Pos { x: 340, y: 240 },
                Pos { x: 340, y: 220 },
                Pos { x: 320, y: 220 },
            ]),
            length: 4,
            direction: Direction::Up,
            pending: None,
            last: None,
            home: ARENA.center(),
        };

        assert_eq!(snek.slither(ARENA, &mut rng()), Slither::Smashed);
        // The fatal head is not prepended; the snek is already reset
        assert_eq!(snek.len(), 1);
        assert_eq!(snek.head(), Pos { x: 320, y: 240 });
        assert_eq!(snek.length, 1);
    }

    #[test]
    fn test_wipeout_after_a_tight_loop() {
        let mut snek = Snek::new(ARENA);
        for _ in 0..4 {
            snek.nom();
        }
        for _ in 0..4 {
            assert_eq!(snek.slither(ARENA, &mut rng()), Slither::Onward);
        }
        assert_eq!(snek.len(), 5);

        // Curl back into the body: up, left, then down onto index 3
        snek.set_pending_direction(Direction::Up);
        snek.apply_pending_direction();
        assert_eq!(snek.slither(ARENA, &mut rng()), Slither::Onward);

        snek.set_pending_direction(Direction::Left);
        snek.apply_pending_direction();
        assert_eq!(snek.slither(ARENA, &mut rng()), Slither::Onward);

        snek.set_pending_direction(Direction::Down);
        snek.apply_pending_direction();
        assert_eq!(snek.slither(ARENA, &mut rng()), Slither::Smashed);
        assert_eq!(snek.len(), 1);
        assert_eq!(snek.head(), ARENA.center());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut snek = Snek::new(ARENA);
        snek.nom();
        snek.nom();
        snek.slither(ARENA, &mut rng());
        snek.slither(ARENA, &mut rng());
        snek.set_pending_direction(Direction::Up);

        snek.reset(&mut rng());
        assert_eq!(snek.len(), 1);
        assert_eq!(snek.length, 1);
        assert_eq!(snek.head(), Pos { x: 320, y: 240 });
        assert_eq!(snek.pending, None);
        assert_eq!(snek.last(), None);
    }
}
