use crate::consts::{SPEED_STEP, START_SPEED, STONE_MILESTONE};
use crate::grid::{Direction, Pos, Size};
use crate::snek::{Slither, Snek};
use crate::spawn::{random_cell, NoFreeCell};
use rand::Rng;
use std::time::Duration;

/// Outcome of one tick, for the caller's logging.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepResult {
    Ongoing,
    /// Ate the morsel; carries the score after eating.
    Nommed(u32),
    /// Hit a stone or its own body; the run was reset.
    Smashed,
}

/// The static hazard field. Stones never move, but the field grows as the
/// snek does and shrinks back after a wipeout.
#[derive(Debug)]
pub struct StoneField {
    stones: Vec<Pos>,
    initial: usize,
}

impl StoneField {
    /// Scatters `count` stones, each avoiding the morsel and the stones
    /// placed before it.
    pub fn scatter(
        rng: &mut impl Rng,
        size: Size,
        count: usize,
        morsel: Pos,
    ) -> Result<StoneField, NoFreeCell> {
        let mut stones: Vec<Pos> = Vec::with_capacity(count);
        for _ in 0..count {
            let mut avoid = stones.clone();
            avoid.push(morsel);
            stones.push(random_cell(rng, size, &avoid)?);
        }
        Ok(StoneField {
            stones,
            initial: count,
        })
    }

    pub fn grow(&mut self, rng: &mut impl Rng, size: Size, morsel: Pos) -> Result<(), NoFreeCell> {
        let mut avoid = self.stones.clone();
        avoid.push(morsel);
        self.stones.push(random_cell(rng, size, &avoid)?);
        Ok(())
    }

    pub fn contains(&self, pos: Pos) -> bool {
        self.stones.contains(&pos)
    }

    /// Drops the most recently added stones until only the starting
    /// field is left.
    pub fn reset_to_initial(&mut self) {
        self.stones.truncate(self.initial);
    }

    pub fn cells(&self) -> &[Pos] {
        &self.stones
    }

    pub fn len(&self) -> usize {
        self.stones.len()
    }
}

#[derive(Debug)]
pub struct SnekHaus {
    size: Size,
    snek: Snek,
    morsel: Pos,
    stones: StoneField,
    score: u32,
    speed: u16,
}

impl SnekHaus {
    pub fn new(size: Size, stone_count: usize, rng: &mut impl Rng) -> Result<SnekHaus, NoFreeCell> {
        let snek = Snek::new(size);
        let body: Vec<Pos> = snek.cells().iter().copied().collect();
        let morsel = random_cell(rng, size, &body)?;
        let stones = StoneField::scatter(rng, size, stone_count, morsel)?;
        Ok(SnekHaus {
            size,
            snek,
            morsel,
            stones,
            score: 0,
            speed: START_SPEED,
        })
    }

    pub fn steer(&mut self, dir: Direction) {
        self.snek.set_pending_direction(dir);
    }

    /// Runs one tick: steering, movement, morsel and stone resolution.
    ///
    /// An internal wipeout resets score, speed and the stone field but
    /// the tick still runs the remaining checks against the reset snek.
    pub fn slither_on(&mut self, rng: &mut impl Rng) -> Result<StepResult, NoFreeCell> {
        self.snek.apply_pending_direction();

        let mut result = StepResult::Ongoing;

        if self.snek.slither(self.size, rng) == Slither::Smashed {
            self.reset_run();
            result = StepResult::Smashed;
        }

        if self.snek.head() == self.morsel {
            self.snek.nom();
            self.score += 1;

            let mut avoid: Vec<Pos> = self.snek.cells().iter().copied().collect();
            avoid.extend_from_slice(self.stones.cells());
            self.morsel = random_cell(rng, self.size, &avoid)?;

            if self.snek.len() % STONE_MILESTONE == 0 {
                self.stones.grow(rng, self.size, self.morsel)?;
                self.speed += SPEED_STEP;
            }

            if result == StepResult::Ongoing {
                result = StepResult::Nommed(self.score);
            }
        }

        if self.stones.contains(self.snek.head()) {
            self.snek.reset(rng);
            self.reset_run();
            result = StepResult::Smashed;
        }

        Ok(result)
    }

    fn reset_run(&mut self) {
        self.score = 0;
        self.speed = START_SPEED;
        self.stones.reset_to_initial();
    }

    pub fn tick_len(&self) -> Duration {
        Duration::from_millis(1_000 / u64::from(self.speed))
    }

    pub fn snek(&self) -> &Snek {
        &self.snek
    }

    pub fn morsel(&self) -> Pos {
        self.morsel
    }

    pub fn stones(&self) -> &StoneField {
        &self.stones
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn speed(&self) -> u16 {
        self.speed
    }
}
