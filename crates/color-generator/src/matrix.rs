use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Target contrast scores between named UI roles.
///
/// `matrix[i][j]` is the score (0-100) wanted between `nodes[i]` and
/// `nodes[j]`; `0` means there is no requirement. The order of `nodes` is the
/// order in which the solver fills unset roles, so earlier roles constrain
/// later ones and never the other way around.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContrastMatrix {
    pub nodes: Vec<String>,
    pub matrix: Vec<Vec<f32>>,
}

const ROLES: [&str; 7] = [
    "background",
    "text",
    "primary",
    "secondary",
    "accent",
    "muted",
    "border",
];

#[rustfmt::skip]
static LIGHT: Lazy<ContrastMatrix> = Lazy::new(|| ContrastMatrix::from_rows(&ROLES, &[
    //  bg    text  prim  sec   acc   muted border
    [   0.0, 95.0, 55.0, 45.0, 35.0, 10.0, 12.0],
    [  95.0,  0.0, 40.0, 50.0, 60.0, 85.0, 80.0],
    [  55.0, 40.0,  0.0, 15.0, 15.0, 45.0, 40.0],
    [  45.0, 50.0, 15.0,  0.0, 10.0, 35.0, 30.0],
    [  35.0, 60.0, 15.0, 10.0,  0.0, 25.0, 20.0],
    [  10.0, 85.0, 45.0, 35.0, 25.0,  0.0,  5.0],
    [  12.0, 80.0, 40.0, 30.0, 20.0,  5.0,  0.0],
]));

#[rustfmt::skip]
static DARK: Lazy<ContrastMatrix> = Lazy::new(|| ContrastMatrix::from_rows(&ROLES, &[
    //  bg    text  prim  sec   acc   muted border
    [   0.0, 93.0, 50.0, 45.0, 50.0, 10.0, 15.0],
    [  93.0,  0.0, 45.0, 48.0, 45.0, 83.0, 78.0],
    [  50.0, 45.0,  0.0, 15.0, 15.0, 40.0, 35.0],
    [  45.0, 48.0, 15.0,  0.0, 10.0, 35.0, 30.0],
    [  50.0, 45.0, 15.0, 10.0,  0.0, 40.0, 35.0],
    [  10.0, 83.0, 40.0, 35.0, 40.0,  0.0,  5.0],
    [  15.0, 78.0, 35.0, 30.0, 35.0,  5.0,  0.0],
]));

impl ContrastMatrix {
    pub fn new(nodes: Vec<String>, matrix: Vec<Vec<f32>>) -> Self {
        ContrastMatrix { nodes, matrix }
    }

    fn from_rows(nodes: &[&str], rows: &[[f32; 7]]) -> Self {
        ContrastMatrix {
            nodes: nodes.iter().map(|n| n.to_string()).collect(),
            matrix: rows.iter().map(|row| row.to_vec()).collect(),
        }
    }

    /// The built-in light mode preset.
    pub fn light() -> Self {
        LIGHT.clone()
    }

    /// The built-in dark mode preset.
    pub fn dark() -> Self {
        DARK.clone()
    }

    pub fn for_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Self::dark()
        } else {
            Self::light()
        }
    }

    /// Roles in the order the solver fills them.
    pub fn fill_order(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(String::as_str)
    }

    pub fn index_of(&self, node: &str) -> Option<usize> {
        self.nodes.iter().position(|n| n == node)
    }

    /// Target score from `nodes[from]` to `nodes[to]`. Cells missing from a
    /// short or ragged matrix read as "no requirement".
    pub fn target(&self, from: usize, to: usize) -> f32 {
        self.matrix
            .get(from)
            .and_then(|row| row.get(to))
            .copied()
            .unwrap_or(0.0)
    }

    /// Describes every structural problem with the matrix. Empty when the
    /// matrix is well formed.
    pub fn problems(&self) -> Vec<String> {
        let mut problems = vec![];

        if self.matrix.len() != self.nodes.len() {
            problems.push(format!(
                "Expected {} rows, one per node, but found {}",
                self.nodes.len(),
                self.matrix.len()
            ));
        }

        for (i, row) in self.matrix.iter().enumerate() {
            if row.len() != self.nodes.len() {
                problems.push(format!(
                    "Row {} has {} columns, expected {}",
                    i + 1,
                    row.len(),
                    self.nodes.len()
                ));
            }

            for (j, target) in row.iter().enumerate() {
                if !(0.0..=100.0).contains(target) {
                    problems.push(format!(
                        "Target {} at row {}, column {} is outside 0-100",
                        target,
                        i + 1,
                        j + 1
                    ));
                }
            }
        }

        for (i, node) in self.nodes.iter().enumerate() {
            if self.nodes[..i].contains(node) {
                problems.push(format!("Node `{}` is listed more than once", node));
            }
        }

        problems
    }
}
