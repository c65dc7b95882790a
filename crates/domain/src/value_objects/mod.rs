pub mod amount;
pub mod eta;
pub mod percentage;
pub mod price;
pub mod swap_progress;

pub use amount::{Amount, BASE_DECIMALS};
pub use eta::Eta;
pub use percentage::Percentage;
pub use price::Price;
pub use swap_progress::SwapProgressView;
