multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// Proposal fingerprint: keccak256 over the action list and description hash.
pub type ProposalId<M> = ManagedByteArray<M, 32>;

/// Raw ed25519 signature bytes.
pub type VoteSignature<M> = ManagedByteArray<M, 64>;

// ============================================================
// Proposal State — derived from stored facts, never stored
// ============================================================

/// Ordinals are part of the public interface, do not reorder.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum ProposalState {
    /// Created, voting delay not yet elapsed.
    Pending,
    /// Voting window open.
    Active,
    /// Window closed without majority or quorum. Terminal.
    Defeated,
    /// Window closed with majority and quorum. Executable.
    Succeeded,
    /// Actions performed. Terminal.
    Executed,
}

// ============================================================
// Vote Type — shared by direct, signed and bulk votes
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum VoteType {
    Against,
    For,
    Abstain,
}

// ============================================================
// Proposal — the stored governance record
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct ProposalCore<M: ManagedTypeApi> {
    pub proposer: ManagedAddress<M>,
    /// Block nonce at creation
    pub created_at: u64,
    /// Minimum combined vote count, fixed from membership size at creation
    pub quorum: u64,
    pub for_votes: u64,
    pub against_votes: u64,
    pub abstain_votes: u64,
    pub executed: bool,
}

impl<M: ManagedTypeApi> ProposalCore<M> {
    pub fn total_votes(&self) -> u64 {
        self.for_votes + self.against_votes + self.abstain_votes
    }

    /// Majority of for over against, with quorum counted over all three buckets.
    pub fn is_successful(&self) -> bool {
        self.for_votes > self.against_votes && self.total_votes() >= self.quorum
    }

    pub fn record_vote(&mut self, support: VoteType) {
        match support {
            VoteType::Against => self.against_votes += 1,
            VoteType::For => self.for_votes += 1,
            VoteType::Abstain => self.abstain_votes += 1,
        }
    }
}

// ============================================================
// Call Data — payload of a single proposal action
// ============================================================

/// An empty endpoint means a plain EGLD transfer to the target.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, ManagedVecItem, Clone, Debug)]
pub struct CallData<M: ManagedTypeApi> {
    pub endpoint: ManagedBuffer<M>,
    pub arguments: ManagedVec<M, ManagedBuffer<M>>,
}

impl<M: ManagedTypeApi> CallData<M> {
    /// Payload of a plain EGLD transfer action, the value travels alone.
    pub fn transfer() -> Self {
        CallData {
            endpoint: ManagedBuffer::new(),
            arguments: ManagedVec::new(),
        }
    }

    /// Payload of an action that calls `endpoint` on the target with raw,
    /// already top-encoded arguments.
    pub fn call(endpoint: ManagedBuffer<M>, arguments: ManagedVec<M, ManagedBuffer<M>>) -> Self {
        CallData {
            endpoint,
            arguments,
        }
    }

    pub fn is_transfer(&self) -> bool {
        self.endpoint.is_empty()
    }
}

// ============================================================
// Signed vote message
// ============================================================

/// Context bound into every off-line signed vote so a signature cannot be
/// replayed against another deployment or chain.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct SigningDomain<M: ManagedTypeApi> {
    pub name: ManagedBuffer<M>,
    pub version: ManagedBuffer<M>,
    pub chain_id: ManagedBuffer<M>,
    pub verifying_contract: ManagedAddress<M>,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct VoteMessage<M: ManagedTypeApi> {
    pub domain: SigningDomain<M>,
    pub proposal_id: ProposalId<M>,
    pub support: VoteType,
}
