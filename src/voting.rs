multiversx_sc::imports!();

use crate::errors::{
    ERR_PROPOSAL_NOT_ACTIVE, ERR_UNEXPECTED_VOTER, ERR_VOTER_ALREADY_VOTED, ERR_VOTER_CANT_VOTE,
};
use crate::signature::{Ed25519Verifier, SignatureVerifier};
use crate::types::{ProposalId, ProposalState, SigningDomain, VoteMessage, VoteSignature, VoteType};

pub const DOMAIN_NAME: &[u8] = b"CollectorDAO";
pub const DOMAIN_VERSION: &[u8] = b"1";

pub type SignedBallot<M> =
    MultiValue4<ManagedAddress<M>, ProposalId<M>, VoteType, VoteSignature<M>>;

#[multiversx_sc::module]
pub trait VotingModule:
    crate::config::ConfigModule
    + crate::membership::MembershipModule
    + crate::proposal::ProposalModule
    + crate::events::EventsModule
{
    // ========================================================
    // ENDPOINT: castVote
    // One vote per member per proposal, only while Active.
    // ========================================================

    #[endpoint(castVote)]
    fn cast_vote(&self, proposal_id: ProposalId<Self::Api>, support: VoteType) {
        let caller = self.blockchain().get_caller();
        if let Err(reason) = self.try_record_vote(&caller, &proposal_id, support) {
            sc_panic!(reason);
        }
    }

    // ========================================================
    // ENDPOINT: castVoteBySig
    // Anyone may relay a vote signed off-line by `voter`.
    // ========================================================

    #[endpoint(castVoteBySig)]
    fn cast_vote_by_sig(
        &self,
        voter: ManagedAddress,
        proposal_id: ProposalId<Self::Api>,
        support: VoteType,
        signature: VoteSignature<Self::Api>,
    ) {
        if let Err(reason) = self.try_record_signed_vote(&voter, &proposal_id, support, &signature)
        {
            sc_panic!(reason);
        }
    }

    // ========================================================
    // ENDPOINT: castVoteBySigBulk
    // Tolerant batch: a rejected ballot is skipped, never aborts
    // the call. Returns how many ballots were recorded.
    // ========================================================

    #[endpoint(castVoteBySigBulk)]
    fn cast_vote_by_sig_bulk(&self, ballots: MultiValueEncoded<SignedBallot<Self::Api>>) -> u32 {
        let mut recorded = 0u32;

        for ballot in ballots.into_iter() {
            let (voter, proposal_id, support, signature) = ballot.into_tuple();

            match self.try_record_signed_vote(&voter, &proposal_id, support, &signature) {
                Ok(()) => recorded += 1,
                Err(reason) => {
                    self.vote_skipped_event(&proposal_id, &voter, &ManagedBuffer::from(reason));
                }
            }
        }

        recorded
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(hasVoted)]
    fn has_voted_on(&self, proposal_id: ProposalId<Self::Api>, voter: ManagedAddress) -> bool {
        self.has_voted(&proposal_id, &voter).get()
    }

    #[view(getSigningDomain)]
    fn signing_domain(&self) -> SigningDomain<Self::Api> {
        SigningDomain {
            name: ManagedBuffer::from(DOMAIN_NAME),
            version: ManagedBuffer::from(DOMAIN_VERSION),
            chain_id: self.chain_id().get(),
            verifying_contract: self.blockchain().get_sc_address(),
        }
    }

    /// The exact bytes a voter signs off-line for `castVoteBySig`.
    #[view(getVoteDigest)]
    fn vote_digest(
        &self,
        proposal_id: ProposalId<Self::Api>,
        support: VoteType,
    ) -> ManagedByteArray<Self::Api, 32> {
        let message = VoteMessage {
            domain: self.signing_domain(),
            proposal_id,
            support,
        };
        let encoded = self.serializer().top_encode_to_managed_buffer(&message);
        self.crypto().keccak256(&encoded)
    }

    // ========================================================
    // INTERNAL: validation chain shared by every vote path
    // ========================================================

    fn try_record_signed_vote(
        &self,
        voter: &ManagedAddress,
        proposal_id: &ProposalId<Self::Api>,
        support: VoteType,
        signature: &VoteSignature<Self::Api>,
    ) -> Result<(), &'static str> {
        let digest = self.vote_digest(proposal_id.clone(), support);
        let signed_by_voter = Ed25519Verifier.verify(
            &voter.to_byte_array(),
            &digest.to_byte_array(),
            &signature.to_byte_array(),
        );
        if !signed_by_voter {
            return Err(ERR_UNEXPECTED_VOTER);
        }

        self.try_record_vote(voter, proposal_id, support)
    }

    /// Applies the vote only if every check passes; a rejection leaves
    /// storage untouched.
    fn try_record_vote(
        &self,
        voter: &ManagedAddress,
        proposal_id: &ProposalId<Self::Api>,
        support: VoteType,
    ) -> Result<(), &'static str> {
        if !self.is_member(voter) {
            return Err(ERR_VOTER_CANT_VOTE);
        }
        if self.current_state(proposal_id) != Some(ProposalState::Active) {
            return Err(ERR_PROPOSAL_NOT_ACTIVE);
        }
        if self.has_voted(proposal_id, voter).get() {
            return Err(ERR_VOTER_ALREADY_VOTED);
        }

        self.proposals(proposal_id)
            .update(|proposal| proposal.record_vote(support));
        self.has_voted(proposal_id, voter).set(true);

        self.voted_event(proposal_id, voter, support);
        Ok(())
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("hasVoted")]
    fn has_voted(
        &self,
        proposal_id: &ProposalId<Self::Api>,
        voter: &ManagedAddress,
    ) -> SingleValueMapper<bool>;
}
