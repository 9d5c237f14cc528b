multiversx_sc::imports!();

use crate::errors::{
    ERR_EMPTY_PROPOSAL, ERR_INVALID_PROPOSAL_LENGTH, ERR_ONLY_MEMBERS_CAN_PROPOSE,
    ERR_PROPOSAL_EXISTS, ERR_UNKNOWN_PROPOSAL,
};
use crate::types::{CallData, ProposalCore, ProposalId, ProposalState};

const PERCENTAGE_DENOMINATOR: u64 = 100;

/// Smallest vote count that is at least `percentage` of `member_count`.
pub fn quorum_threshold(member_count: u64, percentage: u64) -> u64 {
    (member_count * percentage + PERCENTAGE_DENOMINATOR - 1) / PERCENTAGE_DENOMINATOR
}

#[multiversx_sc::module]
pub trait ProposalModule:
    crate::config::ConfigModule
    + crate::membership::MembershipModule
    + crate::events::EventsModule
{
    // ========================================================
    // ENDPOINT: propose
    // Members only. The fingerprint is the proposal's identity;
    // only the description hash goes into it.
    // ========================================================

    #[endpoint(propose)]
    fn propose(
        &self,
        targets: ManagedVec<ManagedAddress>,
        values: ManagedVec<BigUint>,
        payloads: ManagedVec<CallData<Self::Api>>,
        description: ManagedBuffer,
    ) -> ProposalId<Self::Api> {
        let caller = self.blockchain().get_caller();
        require!(self.is_member(&caller), ERR_ONLY_MEMBERS_CAN_PROPOSE);
        self.require_valid_shape(&targets, &values, &payloads);

        let description_hash = self.crypto().keccak256(&description);
        let proposal_id = self.hash_proposal(targets, values, payloads, description_hash);
        require!(
            self.proposals(&proposal_id).is_empty(),
            ERR_PROPOSAL_EXISTS
        );

        let created_at = self.blockchain().get_block_nonce();
        let quorum = quorum_threshold(
            self.members().len() as u64,
            self.quorum_percentage().get(),
        );

        let proposal = ProposalCore {
            proposer: caller.clone(),
            created_at,
            quorum,
            for_votes: 0,
            against_votes: 0,
            abstain_votes: 0,
            executed: false,
        };
        self.proposals(&proposal_id).set(&proposal);

        let (vote_start, vote_end) = self.voting_window(created_at);
        self.proposal_created_event(&proposal_id, &caller, vote_start, vote_end, &description);

        proposal_id
    }

    /// Same fingerprint the contract uses internally, for off-chain callers.
    #[view(hashProposal)]
    fn hash_proposal(
        &self,
        targets: ManagedVec<ManagedAddress>,
        values: ManagedVec<BigUint>,
        payloads: ManagedVec<CallData<Self::Api>>,
        description_hash: ManagedByteArray<Self::Api, 32>,
    ) -> ProposalId<Self::Api> {
        let encoded = self
            .serializer()
            .top_encode_to_managed_buffer(&(targets, values, payloads, description_hash));
        self.crypto().keccak256(&encoded)
    }

    // ========================================================
    // VIEWS — lifecycle
    // ========================================================

    #[view(state)]
    fn state(&self, proposal_id: ProposalId<Self::Api>) -> ProposalState {
        match self.current_state(&proposal_id) {
            Some(state) => state,
            None => sc_panic!(ERR_UNKNOWN_PROPOSAL),
        }
    }

    #[view(getProposal)]
    fn get_proposal(&self, proposal_id: ProposalId<Self::Api>) -> ProposalCore<Self::Api> {
        require!(
            !self.proposals(&proposal_id).is_empty(),
            ERR_UNKNOWN_PROPOSAL
        );
        self.proposals(&proposal_id).get()
    }

    /// Tallies as (against, for, abstain).
    #[view(getProposalVotes)]
    fn get_proposal_votes(&self, proposal_id: ProposalId<Self::Api>) -> MultiValue3<u64, u64, u64> {
        let proposal = self.get_proposal(proposal_id);
        (proposal.against_votes, proposal.for_votes, proposal.abstain_votes).into()
    }

    /// First block nonce at which votes are accepted.
    #[view(getProposalSnapshot)]
    fn get_proposal_snapshot(&self, proposal_id: ProposalId<Self::Api>) -> u64 {
        let proposal = self.get_proposal(proposal_id);
        self.voting_window(proposal.created_at).0
    }

    /// First block nonce at which votes are no longer accepted.
    #[view(getProposalDeadline)]
    fn get_proposal_deadline(&self, proposal_id: ProposalId<Self::Api>) -> u64 {
        let proposal = self.get_proposal(proposal_id);
        self.voting_window(proposal.created_at).1
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    /// Derives the lifecycle state from the stored record and the
    /// current block nonce. `None` for an untracked fingerprint.
    fn current_state(&self, proposal_id: &ProposalId<Self::Api>) -> Option<ProposalState> {
        let mapper = self.proposals(proposal_id);
        if mapper.is_empty() {
            return None;
        }

        let proposal = mapper.get();
        if proposal.executed {
            return Some(ProposalState::Executed);
        }

        let now = self.blockchain().get_block_nonce();
        let (vote_start, vote_end) = self.voting_window(proposal.created_at);

        let state = if now < vote_start {
            ProposalState::Pending
        } else if now < vote_end {
            ProposalState::Active
        } else if proposal.is_successful() {
            ProposalState::Succeeded
        } else {
            ProposalState::Defeated
        };
        Some(state)
    }

    /// `[start, end)` block nonces of the voting window. Saturates so a
    /// window near the end of the nonce range never wraps back.
    fn voting_window(&self, created_at: u64) -> (u64, u64) {
        let vote_start = created_at.saturating_add(self.voting_delay().get());
        let vote_end = vote_start.saturating_add(self.voting_period().get());
        (vote_start, vote_end)
    }

    fn require_valid_shape(
        &self,
        targets: &ManagedVec<ManagedAddress>,
        values: &ManagedVec<BigUint>,
        payloads: &ManagedVec<CallData<Self::Api>>,
    ) {
        require!(
            targets.len() == values.len() && targets.len() == payloads.len(),
            ERR_INVALID_PROPOSAL_LENGTH
        );
        require!(!targets.is_empty(), ERR_EMPTY_PROPOSAL);
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("proposals")]
    fn proposals(
        &self,
        proposal_id: &ProposalId<Self::Api>,
    ) -> SingleValueMapper<ProposalCore<Self::Api>>;
}
