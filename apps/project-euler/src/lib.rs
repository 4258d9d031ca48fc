pub mod report;
pub mod solutions;

use math::MathError;
use thiserror::Error;

pub use report::MultiplesReport;

/// Available problem IDs
pub const PROBLEMS: &[u32] = &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProblemError {
    #[error("problem {0} is not implemented")]
    NotImplemented(u32),

    #[error("problem {0} has no solution")]
    NoSolution(u32),

    #[error(transparent)]
    Math(#[from] MathError),
}

/// Run a specific problem and return the answer
pub fn run_problem(id: u32) -> Result<String, ProblemError> {
    match id {
        1 => solutions::pe1::solve(),
        2 => solutions::pe2::solve(),
        3 => solutions::pe3::solve(),
        4 => solutions::pe4::solve(),
        5 => solutions::pe5::solve(),
        6 => solutions::pe6::solve(),
        7 => solutions::pe7::solve(),
        8 => solutions::pe8::solve(),
        9 => solutions::pe9::solve(),
        10 => solutions::pe10::solve(),
        _ => Err(ProblemError::NotImplemented(id)),
    }
}
