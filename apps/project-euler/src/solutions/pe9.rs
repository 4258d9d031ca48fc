use crate::ProblemError;

/// PE9: Special Pythagorean Triplet
/// Find the product abc where a + b + c = 1000 and a² + b² = c².
pub fn solve() -> Result<String, ProblemError> {
    let (a, b, c) = pythagorean_triplet(1000).ok_or(ProblemError::NoSolution(9))?;
    Ok((a * b * c).to_string())
}

/// First triplet a < b < c with a + b + c = perimeter and a² + b² = c².
fn pythagorean_triplet(perimeter: u64) -> Option<(u64, u64, u64)> {
    for a in 1..perimeter / 3 {
        for b in (a + 1)..=(perimeter - a) / 2 {
            let c = perimeter - a - b;
            if a * a + b * b == c * c {
                return Some((a, b, c));
            }
        }
    }
    None
}
