//! Lamport/SOL conversion.

/// Number of lamports in one SOL.
pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

/// Decimal places used when presenting a balance.
pub const BALANCE_DECIMALS: u32 = 4;

/// Number of decimal digits in [`LAMPORTS_PER_SOL`].
const SOL_DECIMALS: u32 = 9;

/// Convert lamports to SOL as a float.
///
/// Lossy for large balances; use [`format_sol`] for display.
pub fn lamports_to_sol(lamports: u64) -> f64 {
    lamports as f64 / LAMPORTS_PER_SOL as f64
}

/// Format a lamport amount as SOL with exactly `decimals` fractional digits.
///
/// Uses integer arithmetic and rounds half up, so the output does not depend
/// on float representation.
///
/// # Example
///
/// ```
/// assert_eq!(sol_rpc::format_sol(1_234_500_000, 4), "1.2345");
/// assert_eq!(sol_rpc::format_sol(1_234_550_000, 4), "1.2346");
/// assert_eq!(sol_rpc::format_sol(0, 4), "0.0000");
/// ```
pub fn format_sol(lamports: u64, decimals: u32) -> String {
    let decimals = decimals.min(SOL_DECIMALS);
    let divisor = 10u128.pow(SOL_DECIMALS - decimals);
    let scale = 10u128.pow(decimals);

    // u128 keeps the rounding offset from overflowing near u64::MAX
    let scaled = (lamports as u128 + divisor / 2) / divisor;
    let whole = scaled / scale;

    if decimals == 0 {
        return whole.to_string();
    }

    let frac = scaled % scale;
    format!("{}.{:0width$}", whole, frac, width = decimals as usize)
}
