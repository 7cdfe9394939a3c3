use searcher::{Cost, Problem};

/// A width x height grid with walls, walked in unit steps from the top-left
/// corner to the bottom-right one.
#[derive(Debug, Clone)]
pub struct Walled {
    pub width: i32,
    pub height: i32,
    pub walls: Vec<(i32, i32)>,
}

impl Walled {
    pub fn open(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            walls: Vec::new(),
        }
    }

    pub fn goal(&self) -> (i32, i32) {
        (self.width - 1, self.height - 1)
    }

    pub fn manhattan(&self) -> impl Fn(&(i32, i32)) -> Cost + Clone + Send + Sync {
        let (gx, gy) = self.goal();
        move |&(x, y): &(i32, i32)| ((gx - x).abs() + (gy - y).abs()) as Cost
    }

    fn open_at(&self, (x, y): (i32, i32)) -> bool {
        x >= 0 && y >= 0 && x < self.width && y < self.height && !self.walls.contains(&(x, y))
    }

    fn neighbors(&self, (x, y): (i32, i32)) -> Vec<(i32, i32)> {
        [(x, y - 1), (x - 1, y), (x + 1, y), (x, y + 1)]
            .iter()
            .copied()
            .filter(|p| self.open_at(*p))
            .collect()
    }
}

impl Problem for Walled {
    type State = (i32, i32);
    type Action = (i32, i32);

    fn initial_state(&self) -> Self::State {
        (0, 0)
    }

    fn actions(&self, state: &Self::State) -> Vec<Self::Action> {
        self.neighbors(*state)
    }

    fn result(&self, _state: &Self::State, action: &Self::Action) -> Self::State {
        *action
    }

    fn is_goal(&self, state: &Self::State) -> bool {
        *state == self.goal()
    }

    fn goal_state(&self) -> Option<Self::State> {
        Some(self.goal())
    }

    fn predecessors(&self, state: &Self::State) -> Option<Vec<(Self::Action, Self::State)>> {
        Some(self.neighbors(*state).into_iter().map(|p| (*state, p)).collect())
    }
}
