multiversx_sc::imports!();

use crate::types::{ProposalId, VoteType};

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("membershipPurchased")]
    fn membership_purchased_event(&self, #[indexed] member: &ManagedAddress, fee: &BigUint);

    #[event("proposalCreated")]
    fn proposal_created_event(
        &self,
        #[indexed] proposal_id: &ProposalId<Self::Api>,
        #[indexed] proposer: &ManagedAddress,
        #[indexed] vote_start: u64,
        #[indexed] vote_end: u64,
        description: &ManagedBuffer,
    );

    #[event("voted")]
    fn voted_event(
        &self,
        #[indexed] proposal_id: &ProposalId<Self::Api>,
        #[indexed] voter: &ManagedAddress,
        #[indexed] support: VoteType,
    );

    #[event("voteSkipped")]
    fn vote_skipped_event(
        &self,
        #[indexed] proposal_id: &ProposalId<Self::Api>,
        #[indexed] voter: &ManagedAddress,
        reason: &ManagedBuffer,
    );

    #[event("proposalExecuted")]
    fn proposal_executed_event(
        &self,
        #[indexed] proposal_id: &ProposalId<Self::Api>,
        #[indexed] executor: &ManagedAddress,
    );

    #[event("nftPurchased")]
    fn nft_purchased_event(
        &self,
        #[indexed] marketplace: &ManagedAddress,
        #[indexed] nft_contract: &ManagedAddress,
        #[indexed] nft_id: u64,
        price: &BigUint,
    );
}
