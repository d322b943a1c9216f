//! Value movement helpers.
//!
//! Called by handlers strictly after the ledger has been updated.

use anchor_lang::prelude::*;
use anchor_lang::solana_program::program::{invoke, invoke_signed};
use anchor_lang::solana_program::system_instruction;
use anchor_spl::token::{self, Transfer};

/// Move lamports from a signing wallet into a program vault.
pub fn deposit_lamports<'info>(
    from: AccountInfo<'info>,
    to: AccountInfo<'info>,
    system_program: AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    let ix = system_instruction::transfer(from.key, to.key, amount);
    invoke(&ix, &[from, to, system_program])?;
    Ok(())
}

/// Move lamports out of the system-owned stake vault PDA.
pub fn release_lamports<'info>(
    stake_vault: AccountInfo<'info>,
    to: AccountInfo<'info>,
    system_program: AccountInfo<'info>,
    signer_seeds: &[&[&[u8]]],
    amount: u64,
) -> Result<()> {
    let ix = system_instruction::transfer(stake_vault.key, to.key, amount);
    invoke_signed(&ix, &[stake_vault, to, system_program], signer_seeds)?;
    Ok(())
}

/// Transfer SPL tokens out of a vault owned by the stake pool PDA, or from a
/// token account that approved the pool as delegate.
pub fn transfer_as_pool<'info>(
    from: AccountInfo<'info>,
    to: AccountInfo<'info>,
    stake_pool: AccountInfo<'info>,
    token_program: AccountInfo<'info>,
    signer_seeds: &[&[&[u8]]],
    amount: u64,
) -> Result<()> {
    let cpi_accounts = Transfer {
        from,
        to,
        authority: stake_pool,
    };
    let cpi_ctx = CpiContext::new_with_signer(token_program, cpi_accounts, signer_seeds);
    token::transfer(cpi_ctx, amount)
}
