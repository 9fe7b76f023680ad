use tracing::{debug, info};

use crate::{
    layout::{SeatLayout, TileType},
    neighbor::{Env8Neighbors, NeighborPolicy, NeighborTable, VisibleNeighbors},
    Error,
};

/// Fill a seat nobody sits around, leave a seat once `n` or more neighbors are occupied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChgForOccupiedN {
    n: usize,
}

impl ChgForOccupiedN {
    pub fn new(n: usize) -> Self {
        Self { n }
    }

    pub fn threshold(&self) -> usize {
        self.n
    }

    pub fn apply(&self, tt: TileType, occupied_n: usize) -> TileType {
        match tt {
            TileType::Empty if occupied_n == 0 => TileType::Occupied,
            TileType::Occupied if occupied_n >= self.n => TileType::Empty,
            other => other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleSet {
    /// Touching seats only, four occupied to leave.
    Adjacent,
    /// First visible seats, five occupied to leave.
    Visible,
}

impl RuleSet {
    pub fn policy(&self) -> &'static dyn NeighborPolicy {
        match self {
            RuleSet::Adjacent => &Env8Neighbors,
            RuleSet::Visible => &VisibleNeighbors,
        }
    }

    pub fn rule(&self) -> ChgForOccupiedN {
        match self {
            RuleSet::Adjacent => ChgForOccupiedN::new(4),
            RuleSet::Visible => ChgForOccupiedN::new(5),
        }
    }
}

impl SeatLayout {
    /// Layout after one round, with the count of seats that changed.
    pub fn next<N: NeighborPolicy + ?Sized>(
        &self,
        policy: &N,
        rule: &ChgForOccupiedN,
    ) -> Result<(SeatLayout, usize), Error> {
        let table = NeighborTable::new(policy, self);
        self.next_with(&table, rule)
    }

    pub fn next_with(
        &self,
        table: &NeighborTable,
        rule: &ChgForOccupiedN,
    ) -> Result<(SeatLayout, usize), Error> {
        let mut next = self.clone();
        let chg_count = self.step_into(table, rule, &mut next)?;

        Ok((next, chg_count))
    }

    // Reads only from self, so the order tiles are visited in doesn't matter.
    fn step_into(
        &self,
        table: &NeighborTable,
        rule: &ChgForOccupiedN,
        out: &mut SeatLayout,
    ) -> Result<usize, Error> {
        if !out.same_size(self) {
            *out = self.clone();
        }

        let mut chg_count = 0;
        for pos in self.positions() {
            let tt = self.tile(&pos)?;
            let new_tt = if tt.is_seat() {
                let mut occupied_n = 0;
                for neighbor in table.neighbors(&pos)? {
                    if self.tile(neighbor)? == TileType::Occupied {
                        occupied_n += 1;
                    }
                }
                rule.apply(tt, occupied_n)
            } else {
                tt
            };

            if new_tt != tt {
                chg_count += 1;
            }
            *out.tile_mut(&pos).ok_or(Error::OutOfBounds(pos))? = new_tt;
        }

        Ok(chg_count)
    }
}

/// Runs a seat layout round after round until nobody moves.
pub struct SeatMap {
    seat_bufs: [SeatLayout; 2],
    cur_buf_ind: usize,
    table: NeighborTable,
    rule: ChgForOccupiedN,
    step_count: usize,
    round_count: usize,
}

impl SeatMap {
    pub fn new(layout: SeatLayout, rule_set: RuleSet) -> Self {
        Self::with_policy(layout, rule_set.policy(), rule_set.rule())
    }

    pub fn with_policy<N: NeighborPolicy + ?Sized>(
        layout: SeatLayout,
        policy: &N,
        rule: ChgForOccupiedN,
    ) -> Self {
        let table = NeighborTable::new(policy, &layout);
        Self {
            seat_bufs: [layout.clone(), layout],
            cur_buf_ind: 0,
            table,
            rule,
            step_count: 0,
            round_count: 0,
        }
    }

    /// Applies one round and returns how many seats changed.
    pub fn step(&mut self) -> Result<usize, Error> {
        let table = &self.table;
        let rule = &self.rule;
        let (r_buf, w_buf) = Self::rw_buf(&mut self.seat_bufs, self.cur_buf_ind);
        let chg_count = r_buf.step_into(table, rule, w_buf)?;
        self.swap_buf();

        self.step_count += 1;
        if chg_count > 0 {
            self.round_count += 1;
        }
        debug!(step = self.step_count, changed = chg_count, "applied seating round");

        Ok(chg_count)
    }

    /// Steps until a round changes nothing and returns the occupied seat count.
    ///
    /// At least one round is always applied. With `max_steps`, gives up with
    /// [`Error::NoConvergence`] once that many rounds ran without settling.
    pub fn stabilize(&mut self, max_steps: Option<usize>) -> Result<usize, Error> {
        loop {
            if max_steps.is_some_and(|max| self.step_count >= max) {
                return Err(Error::NoConvergence(self.step_count));
            }

            if self.step()? == 0 {
                break;
            }
        }

        let occupied_n = self.count(TileType::Occupied);
        info!(
            rounds = self.round_count,
            occupied = occupied_n,
            "seat layout stabilized"
        );

        Ok(occupied_n)
    }

    pub fn layout(&self) -> &SeatLayout {
        &self.seat_bufs[self.cur_buf_ind]
    }

    pub fn count(&self, c_tt: TileType) -> usize {
        self.layout().count(c_tt)
    }

    /// Rounds which changed at least one seat.
    pub fn rounds(&self) -> usize {
        self.round_count
    }

    pub fn steps(&self) -> usize {
        self.step_count
    }

    fn rw_buf(bufs: &mut [SeatLayout; 2], cur_ind: usize) -> (&SeatLayout, &mut SeatLayout) {
        let (left, right) = bufs.split_at_mut(1);
        if cur_ind == 0 {
            (&left[0], &mut right[0])
        } else {
            (&right[0], &mut left[0])
        }
    }

    fn swap_buf(&mut self) {
        self.cur_buf_ind = 1 - self.cur_buf_ind;
    }
}
