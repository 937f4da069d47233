//! Indicator calculator: moving averages, momentum, and volatility.
//!
//! Every calculation returns `Option` and yields `None` when the series is
//! shorter than the required window. Short history is expected input, not
//! an error.

pub mod calculator;
pub mod momentum;
pub mod moving_average;
pub mod volatility;

pub use calculator::compute_indicator_set;
pub use momentum::{calculate_macd, calculate_macd_default, calculate_rsi, calculate_rsi_default};
pub use moving_average::{calculate_ema, calculate_sma};
pub use volatility::{calculate_bollinger, calculate_bollinger_default};
