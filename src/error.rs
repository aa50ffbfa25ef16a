//! Unified error types for the pair engine.
//!
//! Every fallible operation in the crate returns [`PairError`]. Each
//! failure is a distinct, named condition so that calling collaborators
//! can branch on the cause instead of parsing a message.

use crate::domain::Amount;

/// All failure conditions of the pair engine.
///
/// A failing entry point aborts with full rollback of pair storage and
/// host state; there is no partial application.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PairError {
    /// `quote` was asked to price a zero amount.
    #[error("insufficient amount")]
    InsufficientAmount,

    /// A reserve is zero, or an output would exceed / breach the
    /// virtual-liquidity floor of its reserve.
    #[error("insufficient liquidity")]
    InsufficientLiquidity,

    /// Output below the caller's minimum, or no output requested.
    #[error("insufficient output amount")]
    InsufficientOutputAmount,

    /// Zero input to a pricing function, or a swap that supplied no input.
    #[error("insufficient input amount")]
    InsufficientInputAmount,

    /// The exact input needed for a clamped buy exceeds what was sent.
    #[error("excessive input amount")]
    ExcessiveInputAmount,

    /// `burn` called without the LP unit having been sent to the pair.
    #[error("insufficient liquidity sent")]
    InsufficientLiquiditySent,

    /// An LP transfer exceeds the sender's LP balance.
    #[error("insufficient LP balance")]
    InsufficientLpBalance,

    /// `mint` called on an already bootstrapped pair.
    #[error("already minted")]
    AlreadyMinted,

    /// A reserve would exceed `MAX_RESERVE`.
    #[error("reserve overflow")]
    Overflow,

    /// The call deadline has passed.
    #[error("expired")]
    Expired,

    /// The pair has graduated and no longer trades on the curve.
    #[error("locked")]
    Locked,

    /// The swap recipient is one of the pair's own assets.
    #[error("invalid recipient")]
    InvalidTo,

    /// A guarded entry point was invoked while another one is running.
    #[error("reentrant call")]
    ReentrantCall,

    /// Deletion attempted by someone other than the registry's deployer.
    #[error("caller is not the deployer")]
    NotDeployer,

    /// Deletion attempted while reserves are non-zero.
    #[error("pool not migrated")]
    NotMigrated,

    /// The pair has been deleted; its storage is gone.
    #[error("pool deleted")]
    Deleted,

    /// A call consumed more attached value than the caller sent.
    #[error("not enough coins sent: spent {spent}, sent {sent}")]
    NotEnoughCoinsSent {
        /// Value consumed by the call.
        spent: Amount,
        /// Value attached by the caller.
        sent: Amount,
    },

    /// Checked arithmetic overflowed.
    #[error("arithmetic overflow: {0}")]
    ArithmeticOverflow(&'static str),

    /// Checked arithmetic underflowed.
    #[error("arithmetic underflow: {0}")]
    ArithmeticUnderflow(&'static str),

    /// Division by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// Rejected pair configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// An external asset or coin call was refused by the host.
    #[error("asset call failed: {0}")]
    AssetCall(&'static str),
}

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, PairError>;
