//! Symbolic transition matrix and the state elimination step.

use crate::kleene::expr::Expr;
use crate::validation::Automaton;
use std::sync::Arc;

/// Square matrix of expressions indexed by state position.
///
/// Cell `(i, k)` describes the words leading from state `i` to state `k`
/// through the states eliminated so far.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitionMatrix {
    size: usize,
    cells: Vec<Arc<Expr>>,
}

impl TransitionMatrix {
    /// The base matrix `R⁻¹`, before any state is eliminated.
    ///
    /// Each cell is an alternation of the symbols on direct transitions from
    /// `i` to `k`, in transition order. Diagonal cells also contain `eps`.
    /// A cell with nothing in it holds `{}`.
    ///
    /// Transitions whose endpoints are not declared states are skipped.
    pub fn base(automaton: &Automaton) -> Self {
        let size = automaton.states().len();
        let mut branches: Vec<Vec<Arc<Expr>>> = vec![Vec::new(); size * size];

        for transition in automaton.transitions() {
            if let (Some(from), Some(to)) = (
                automaton.state_index(&transition.source),
                automaton.state_index(&transition.target),
            ) {
                branches[from * size + to].push(Arc::new(Expr::symbol(&transition.symbol)));
            }
        }

        let epsilon = Arc::new(Expr::Epsilon);
        for i in 0..size {
            branches[i * size + i].push(epsilon.clone());
        }

        let empty = Arc::new(Expr::Empty);
        let cells = branches
            .into_iter()
            .map(|mut cell| {
                if cell.is_empty() {
                    cell.push(empty.clone());
                }
                Arc::new(Expr::Union(cell))
            })
            .collect();

        Self { size, cells }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, row: usize, column: usize) -> &Arc<Expr> {
        &self.cells[row * self.size + column]
    }

    /// Eliminate state `j`, producing `R^(j)` from `R^(j-1)`.
    ///
    /// Every cell becomes `R[i][j] R[j][j]* R[j][k] | R[i][k]`: words that pass
    /// through `j` any number of times, or avoid it.
    pub fn eliminate(&self, j: usize) -> Self {
        let size = self.size;
        let through = self.get(j, j);
        let mut cells = Vec::with_capacity(size * size);

        for i in 0..size {
            for k in 0..size {
                let via = Arc::new(Expr::Concat(vec![
                    self.get(i, j).clone(),
                    Arc::new(Expr::Star(through.clone())),
                    self.get(j, k).clone(),
                ]));
                cells.push(Arc::new(Expr::Union(vec![via, self.get(i, k).clone()])));
            }
        }

        Self { size, cells }
    }

    /// Eliminate every state in declaration order.
    pub fn eliminate_all(self) -> Self {
        (0..self.size).fold(self, |matrix, j| matrix.eliminate(j))
    }
}
