//! Edit distance between keypad strings.

/// Levenshtein distance between `a` and `b`, counted in characters.
///
/// Fills the whole `(|a| + 1) x (|b| + 1)` matrix. Both operands are short
/// (a single input line at most), so the quadratic cost does not matter.
///
/// ```
/// use t9search::levenshtein;
///
/// assert_eq!(levenshtein("228", "28"), 1);
/// assert_eq!(levenshtein("kitten", "sitting"), 3);
/// ```
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let rows = a.len() + 1;
    let cols = b.len() + 1;

    // row-major, cell (i, j) at i * cols + j
    let mut matrix = vec![0usize; rows * cols];
    for (j, cell) in matrix.iter_mut().take(cols).enumerate() {
        *cell = j;
    }
    for i in 0..rows {
        matrix[i * cols] = i;
    }

    for i in 1..rows {
        for j in 1..cols {
            let diagonal = matrix[(i - 1) * cols + j - 1];
            matrix[i * cols + j] = if a[i - 1] == b[j - 1] {
                diagonal
            } else {
                let above = matrix[(i - 1) * cols + j];
                let left = matrix[i * cols + j - 1];
                1 + diagonal.min(above).min(left)
            };
        }
    }

    matrix[rows * cols - 1]
}

/// Edit distance between `field` and `pattern` minus their length gap.
///
/// A short pattern found intact inside a long field scores 0: the deletions
/// needed to trim the field down are not counted as errors. The length gap
/// is a lower bound of the distance, so the result is never negative.
///
/// ```
/// use t9search::adjusted_distance;
///
/// assert_eq!(adjusted_distance("228", "28"), 0);
/// assert_eq!(adjusted_distance("2", "222"), 4);
/// ```
pub fn adjusted_distance(field: &str, pattern: &str) -> i64 {
    let distance = levenshtein(field, pattern) as i64;
    let gap = field.chars().count() as i64 - pattern.chars().count() as i64;
    distance - gap
}
