#![no_std]

multiversx_sc::imports!();

pub mod config;
pub mod errors;
pub mod events;
pub mod execution;
pub mod marketplace_proxy;
pub mod membership;
pub mod nft;
pub mod proposal;
pub mod signature;
pub mod types;
pub mod voting;

use errors::{
    ERR_INVALID_FEE_CONFIG, ERR_INVALID_QUORUM_PERCENTAGE, ERR_INVALID_VOTING_PERIOD,
    ERR_INVALID_VOTING_WINDOW,
};

/// Upper bound for the quorum percentage
const MAX_QUORUM_PERCENTAGE: u64 = 100;

// ============================================================
// Contract
// ============================================================

/// Membership-gated DAO: members pay a fixed fee, propose action sets,
/// vote directly or through off-line signatures, and any caller can
/// execute a proposal that passed majority and quorum.
#[multiversx_sc::contract]
pub trait CollectorDao:
    config::ConfigModule
    + events::EventsModule
    + membership::MembershipModule
    + proposal::ProposalModule
    + voting::VotingModule
    + execution::ExecutionModule
    + nft::NftModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(
        &self,
        membership_fee: BigUint,
        voting_delay: u64,
        voting_period: u64,
        quorum_percentage: u64,
        chain_id: ManagedBuffer,
    ) {
        require!(membership_fee > 0u64, ERR_INVALID_FEE_CONFIG);
        require!(voting_period > 0, ERR_INVALID_VOTING_PERIOD);
        require!(
            voting_delay.checked_add(voting_period).is_some(),
            ERR_INVALID_VOTING_WINDOW
        );
        require!(
            quorum_percentage > 0 && quorum_percentage <= MAX_QUORUM_PERCENTAGE,
            ERR_INVALID_QUORUM_PERCENTAGE
        );

        self.membership_fee().set(&membership_fee);
        self.voting_delay().set(voting_delay);
        self.voting_period().set(voting_period);
        self.quorum_percentage().set(quorum_percentage);
        self.chain_id().set(&chain_id);
    }

    #[upgrade]
    fn upgrade(&self) {}
}
