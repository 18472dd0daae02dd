//! Enumeration of non-attacking queen placements on rectangular M x N
//! chessboards: the Eight Queens puzzle generalized to boards that need not
//! be square.

pub mod board;
pub mod attacks;
pub mod solve;
pub mod puzzle;
pub mod render;
