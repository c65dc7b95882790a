pub mod projection;
pub mod valuation;
