//! C8 — the vault invariant under a declared split. Redemption parity (1 EU
//! cert <-> fixed base units at genesis) holds because certificate face
//! values and backing balances scale by the same cumulative factor.

use the_primitives::{Amount, Hash256};
use the_split::policy::SplitFactor;
use the_split::Height;

/// An owned balance in THE base units, invariant-level only: this core does
/// not model vault creation, ownership transfer, or redemption — only what
/// a declared split must do to an existing balance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VaultState {
    pub owner: Hash256,
    pub id: u64,
    pub balance_the: Amount,
    pub created_at_height: Height,
    pub updated_at_height: Height,
}

/// For every vault, on a declared split `factor` at `height`:
/// `balance_the *= factor`, `updated_at_height = height`. Owner, id, and
/// `created_at_height` are preserved. No rounding occurs: factors are
/// integers and balances are integer base units.
pub fn apply_split_to_vault(vault: &mut VaultState, factor: SplitFactor, height: Height) {
    vault.balance_the *= factor.as_amount();
    vault.updated_at_height = height;
}
