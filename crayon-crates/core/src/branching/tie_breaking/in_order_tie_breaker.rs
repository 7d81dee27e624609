use super::Direction;
use super::TieBreaker;

/// A tie-breaker which simply selects the first element that it receives with the "best" value
/// according to the provided [`Direction`].
///
/// Since the selectors consider nodes in ascending order, this breaks ties in favour of the
/// smallest node index, which makes the search deterministic.
#[derive(Debug, Clone, Copy)]
pub struct InOrderTieBreaker<Var, Value> {
    /// The selected element, could be [None] if nothing has been considered yet
    selected_variable: Option<Var>,
    /// The selected value, could be [None] if nothing has been considered yet
    selected_value: Option<Value>,
    /// Whether the tie-breaker should find the element with the maximum or minimum value
    direction: Direction,
}

impl<Var, Value> InOrderTieBreaker<Var, Value> {
    pub fn new(direction: Direction) -> Self {
        Self {
            selected_variable: None,
            selected_value: None,
            direction,
        }
    }

    fn reset(&mut self) {
        self.selected_variable = None;
        self.selected_value = None;
    }
}

impl<Var: Copy, Value: PartialOrd> TieBreaker<Var, Value> for InOrderTieBreaker<Var, Value> {
    fn consider(&mut self, variable: Var, value: Value) {
        let is_improvement = match (&self.selected_value, self.direction) {
            (None, _) => true,
            (Some(selected_value), Direction::Maximum) => value > *selected_value,
            (Some(selected_value), Direction::Minimum) => value < *selected_value,
        };

        if is_improvement {
            self.selected_variable = Some(variable);
            self.selected_value = Some(value);
        }
    }

    fn select(&mut self) -> Option<Var> {
        let selected = self.selected_variable;
        self.reset();
        selected
    }

    fn get_direction(&self) -> Direction {
        self.direction
    }
}
