use crate::Balancer::errors::BalanceError;
use crate::Balancer::rational::{from_integer, to_rational_matrix};
use log::{debug, info};
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

/// Reduces the matrix in place to reduced row echelon form by Gauss-Jordan elimination
/// with exact rationals. The pivot of every column is the entry of largest magnitude
/// among the remaining rows. Returns the pivot columns, their count is the rank
pub fn row_reduce(matrix: &mut [Vec<BigRational>]) -> Vec<usize> {
    let m = matrix.len();
    let n = matrix.first().map_or(0, |row| row.len());
    let mut pivots = Vec::new();
    let mut row = 0;
    for col in 0..n {
        if row >= m {
            break;
        }
        let i_max = (row..m)
            .max_by(|&a, &b| matrix[a][col].abs().cmp(&matrix[b][col].abs()))
            .unwrap_or(row);
        if matrix[i_max][col].is_zero() {
            continue;
        }
        matrix.swap(row, i_max);

        let pivot = matrix[row][col].clone();
        for j in col..n {
            matrix[row][j] = &matrix[row][j] / &pivot;
        }
        for i in 0..m {
            if i == row || matrix[i][col].is_zero() {
                continue;
            }
            let factor = matrix[i][col].clone();
            for j in col..n {
                let amount = &factor * &matrix[row][j];
                matrix[i][j] -= amount;
            }
        }
        pivots.push(col);
        row += 1;
    }
    pivots
}

/// Basis of the null space of an integer matrix with `columns` columns.
/// One basis vector per free column: the free variable is 1, the other free variables are 0,
/// pivot variables are minus the corresponding entries of the reduced matrix
pub fn null_space(rows: &[Vec<i64>], columns: usize) -> Vec<Vec<BigRational>> {
    let mut matrix = to_rational_matrix(rows);
    let pivots = row_reduce(&mut matrix);
    debug!("rank {} of {}x{} matrix, pivot columns {:?}", pivots.len(), rows.len(), columns, pivots);

    (0..columns)
        .filter(|col| !pivots.contains(col))
        .map(|free| {
            let mut vector = vec![from_integer(0); columns];
            vector[free] = BigRational::one();
            for (r, &pivot_col) in pivots.iter().enumerate() {
                vector[pivot_col] = -matrix[r][free].clone();
            }
            vector
        })
        .collect()
}

/// The stoichiometric solution up to scale: the null space must be exactly one-dimensional
pub fn solve(rows: &[Vec<i64>], columns: usize) -> Result<Vec<BigRational>, BalanceError> {
    let mut basis = null_space(rows, columns);
    match basis.len() {
        0 => Err(BalanceError::Unbalanceable),
        1 => {
            let solution = basis.remove(0);
            info!(
                "null space vector: [{}]",
                solution
                    .iter()
                    .map(|x| x.to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            );
            Ok(solution)
        }
        dimension => Err(BalanceError::Underdetermined { dimension }),
    }
}
