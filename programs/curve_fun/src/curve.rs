use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::CurveFunError;
use crate::state::Pool;

/// Quote for a single buy or sell against the curve.
///
/// `cost` is the gross lamport value of the trade, `platform_fee` the cut
/// taken by the platform and `net_amount` the remainder credited to (buy) or
/// paid out of (sell) the pool escrow. The split is exact:
/// `platform_fee + net_amount == cost` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TradeQuote {
    pub cost: u64,
    pub platform_fee: u64,
    pub net_amount: u64,
}

/// Spot price of one token at the given market cap
///
/// Formula: price = base_price * e^(growth_factor * market_cap)
///
/// The exponent is evaluated in PRECISION fixed point,
/// x = market_cap * growth_factor / GROWTH_FACTOR_PRECISION,
/// and e^x is approximated with the first four Taylor terms:
///
///   exp = PRECISION + x + x^2/2 + x^3/6
///
/// where each power is renormalized into the PRECISION domain before the
/// factorial division. All intermediates are u128; the final result must fit
/// back into u64 or the whole computation fails with MathOverflow. Division
/// truncates, matching on-chain settlement.
pub fn spot_price(current_market_cap: u64, base_price: u64, growth_factor: u64) -> Result<u64> {
    require!(base_price > 0, CurveFunError::InvalidPool);
    require!(growth_factor > 0, CurveFunError::InvalidPool);

    let precision = PRECISION as u128;

    let x = (current_market_cap as u128)
        .checked_mul(growth_factor as u128)
        .ok_or(CurveFunError::MathOverflow)?
        .checked_div(GROWTH_FACTOR_PRECISION as u128)
        .ok_or(CurveFunError::MathOverflow)?;

    let x_squared = x
        .checked_mul(x)
        .ok_or(CurveFunError::MathOverflow)?
        .checked_div(precision)
        .ok_or(CurveFunError::MathOverflow)?;

    let x_cubed = x_squared
        .checked_mul(x)
        .ok_or(CurveFunError::MathOverflow)?
        .checked_div(precision)
        .ok_or(CurveFunError::MathOverflow)?;

    let exp_approx = precision
        .checked_add(x)
        .ok_or(CurveFunError::MathOverflow)?
        .checked_add(x_squared / 2)
        .ok_or(CurveFunError::MathOverflow)?
        .checked_add(x_cubed / 6)
        .ok_or(CurveFunError::MathOverflow)?;

    let price = (base_price as u128)
        .checked_mul(exp_approx)
        .ok_or(CurveFunError::MathOverflow)?
        .checked_div(precision)
        .ok_or(CurveFunError::MathOverflow)?;

    u64::try_from(price).map_err(|_| error!(CurveFunError::MathOverflow))
}

/// Quote a purchase of `amount` tokens against the pool's current state.
///
/// The whole trade settles at the pre-trade spot price; the curve is not
/// integrated over the purchased range. This discretization is what the
/// deployed settlement uses and must not be "improved".
pub fn quote_buy(pool: &Pool, amount: u64, fee_percentage: u64) -> Result<TradeQuote> {
    require!(amount > 0, CurveFunError::InvalidAmount);

    let price = spot_price(pool.current_market_cap, pool.base_price, pool.growth_factor)?;
    quote_at(price, amount, fee_percentage)
}

/// Quote a sale of `amount` tokens back to the curve.
///
/// Mirrors `quote_buy`: the payout is priced at the pre-trade spot price.
/// Selling more than the outstanding synthetic supply is rejected.
pub fn quote_sell(pool: &Pool, amount: u64, fee_percentage: u64) -> Result<TradeQuote> {
    require!(amount > 0, CurveFunError::InvalidAmount);
    require!(amount <= pool.total_supply, CurveFunError::InsufficientFunds);

    let price = spot_price(pool.current_market_cap, pool.base_price, pool.growth_factor)?;
    quote_at(price, amount, fee_percentage)
}

/// Split a gross lamport value into the platform fee and the remainder.
///
/// fee = total * fee_percentage / 100, truncating; the remainder absorbs the
/// rounding so the two parts always sum back to `total`.
pub fn split_fee(total: u64, fee_percentage: u64) -> Result<(u64, u64)> {
    let fee = (total as u128)
        .checked_mul(fee_percentage as u128)
        .ok_or(CurveFunError::MathOverflow)?
        .checked_div(100)
        .ok_or(CurveFunError::MathOverflow)?;
    let fee = u64::try_from(fee).map_err(|_| error!(CurveFunError::MathOverflow))?;

    let remainder = total
        .checked_sub(fee)
        .ok_or(CurveFunError::MathOverflow)?;

    Ok((fee, remainder))
}

/// True once the market cap has reached the migration threshold (inclusive).
pub fn is_past_threshold(market_cap: u64, threshold: u64) -> bool {
    market_cap >= threshold
}

fn quote_at(price: u64, amount: u64, fee_percentage: u64) -> Result<TradeQuote> {
    let cost = (price as u128)
        .checked_mul(amount as u128)
        .ok_or(CurveFunError::MathOverflow)?;
    let cost = u64::try_from(cost).map_err(|_| error!(CurveFunError::MathOverflow))?;

    let (platform_fee, net_amount) = split_fee(cost, fee_percentage)?;

    Ok(TradeQuote {
        cost,
        platform_fee,
        net_amount,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::error::Error;

    fn pool(base_price: u64, growth_factor: u64, market_cap: u64, total_supply: u64) -> Pool {
        Pool {
            token_mint: Pubkey::default(),
            creator: Pubkey::default(),
            base_price,
            growth_factor,
            current_market_cap: market_cap,
            total_supply,
            past_threshold: false,
            is_migrated: false,
            bump: 0,
        }
    }

    #[test]
    fn spot_price_at_zero_market_cap_is_base_price() {
        assert_eq!(spot_price(0, 1_000_000, 3606).unwrap(), 1_000_000);
        assert_eq!(spot_price(0, 1, 1).unwrap(), 1);
        assert_eq!(spot_price(0, PRECISION, GROWTH_FACTOR_PRECISION).unwrap(), PRECISION);
    }

    #[test]
    fn spot_price_monotone_in_market_cap() {
        let caps = [
            0u64,
            1,
            PRECISION,
            100 * PRECISION,
            10_000 * PRECISION,
            MIGRATION_THRESHOLD,
            100_000 * PRECISION,
        ];
        let mut last = 0u64;
        for cap in caps {
            let price = spot_price(cap, 1_000_000, 3606).unwrap();
            assert!(price >= last, "price regressed at market cap {}", cap);
            last = price;
        }
    }

    #[test]
    fn spot_price_monotone_in_growth_factor() {
        let factors = [1u64, 100, 3606, 1_000_000, 100_000_000, GROWTH_FACTOR_PRECISION];
        let cap = 5_000 * PRECISION;
        let mut last = 0u64;
        for factor in factors {
            let price = spot_price(cap, 1_000_000, factor).unwrap();
            assert!(price >= last, "price regressed at growth factor {}", factor);
            last = price;
        }
    }

    #[test]
    fn spot_price_rises_off_zero() {
        let flat = spot_price(0, PRECISION, 3606).unwrap();
        let risen = spot_price(50_000 * PRECISION, PRECISION, 3606).unwrap();
        assert!(risen > flat);
    }

    #[test]
    fn spot_price_is_deterministic() {
        let a = spot_price(12_345 * PRECISION, 1_000_000, 3606).unwrap();
        let b = spot_price(12_345 * PRECISION, 1_000_000, 3606).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn spot_price_rejects_malformed_pool() {
        assert_eq!(
            spot_price(0, 0, 3606).unwrap_err(),
            Error::from(CurveFunError::InvalidPool)
        );
        assert_eq!(
            spot_price(0, 1_000_000, 0).unwrap_err(),
            Error::from(CurveFunError::InvalidPool)
        );
    }

    #[test]
    fn spot_price_overflow_is_an_error_not_a_saturation() {
        assert_eq!(
            spot_price(u64::MAX, u64::MAX, u64::MAX).unwrap_err(),
            Error::from(CurveFunError::MathOverflow)
        );
        // Moderate exponent, huge base: the final downcast must be checked too.
        assert_eq!(
            spot_price(1_000 * PRECISION, u64::MAX, GROWTH_FACTOR_PRECISION).unwrap_err(),
            Error::from(CurveFunError::MathOverflow)
        );
    }

    #[test]
    fn quote_buy_fee_split_is_exact() {
        // cost = 1_000_000 lamports at 2% -> 20_000 fee, 980_000 net
        let p = pool(1_000_000, 3606, 0, 0);
        let quote = quote_buy(&p, 1, FEE_PERCENTAGE).unwrap();
        assert_eq!(quote.cost, 1_000_000);
        assert_eq!(quote.platform_fee, 20_000);
        assert_eq!(quote.net_amount, 980_000);
    }

    #[test]
    fn quote_fee_and_net_always_sum_to_cost() {
        let p = pool(1_000_000, 3606, 4_200 * PRECISION, u64::MAX);
        for amount in [1u64, 3, 7, 999, 123_456, 10_000_000] {
            for fee in [0u64, 1, 2, 33, 99, 100] {
                let quote = quote_buy(&p, amount, fee).unwrap();
                assert_eq!(quote.platform_fee + quote.net_amount, quote.cost);
            }
        }
    }

    #[test]
    fn quote_buy_rejects_zero_amount() {
        let p = pool(1_000_000, 3606, 0, 0);
        assert_eq!(
            quote_buy(&p, 0, FEE_PERCENTAGE).unwrap_err(),
            Error::from(CurveFunError::InvalidAmount)
        );
    }

    #[test]
    fn quote_buy_overflows_on_huge_amount() {
        let p = pool(PRECISION, 3606, 0, 0);
        assert_eq!(
            quote_buy(&p, u64::MAX, FEE_PERCENTAGE).unwrap_err(),
            Error::from(CurveFunError::MathOverflow)
        );
    }

    #[test]
    fn quote_sell_rejects_zero_amount() {
        let p = pool(1_000_000, 3606, PRECISION, 100);
        assert_eq!(
            quote_sell(&p, 0, FEE_PERCENTAGE).unwrap_err(),
            Error::from(CurveFunError::InvalidAmount)
        );
    }

    #[test]
    fn quote_sell_rejects_amount_beyond_supply() {
        let p = pool(1_000_000, 3606, PRECISION, 100);
        assert_eq!(
            quote_sell(&p, 101, FEE_PERCENTAGE).unwrap_err(),
            Error::from(CurveFunError::InsufficientFunds)
        );
        // Boundary: selling the entire supply is allowed.
        assert!(quote_sell(&p, 100, FEE_PERCENTAGE).is_ok());
    }

    #[test]
    fn buy_and_sell_quote_identically_at_the_same_state() {
        let p = pool(1_000_000, 3606, 777 * PRECISION, 1_000_000);
        let buy = quote_buy(&p, 500, FEE_PERCENTAGE).unwrap();
        let sell = quote_sell(&p, 500, FEE_PERCENTAGE).unwrap();
        assert_eq!(buy, sell);
    }

    #[test]
    fn threshold_boundary_is_inclusive() {
        assert!(!is_past_threshold(MIGRATION_THRESHOLD - 1, MIGRATION_THRESHOLD));
        assert!(is_past_threshold(MIGRATION_THRESHOLD, MIGRATION_THRESHOLD));
        assert!(is_past_threshold(MIGRATION_THRESHOLD + 1, MIGRATION_THRESHOLD));
    }

    #[test]
    fn split_fee_truncates_toward_the_remainder() {
        // 99 * 2 / 100 truncates to 1; the lamport lost to rounding stays
        // with the payout side, never the fee.
        let (fee, net) = split_fee(99, 2).unwrap();
        assert_eq!(fee, 1);
        assert_eq!(net, 98);

        let (fee, net) = split_fee(0, 2).unwrap();
        assert_eq!((fee, net), (0, 0));
    }

    #[test]
    fn math_overflow_maps_to_error_code_6000() {
        let err = Error::from(CurveFunError::MathOverflow);
        match err {
            Error::AnchorError(e) => assert_eq!(e.error_code_number, 6000),
            Error::ProgramError(_) => panic!("expected an anchor error"),
        }
    }
}
