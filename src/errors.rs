// Admission
pub const ERR_INVALID_MEMBERSHIP_FEE: &str = "Invalid membership fee";
pub const ERR_MEMBER_ALREADY_EXISTS: &str = "Member already exists";

// Identity / authorization
pub const ERR_ONLY_MEMBERS_CAN_PROPOSE: &str = "Only members can propose";
pub const ERR_VOTER_CANT_VOTE: &str = "Voter can't vote";
pub const ERR_UNEXPECTED_VOTER: &str = "Unexpected voter";
pub const ERR_ONLY_DAO_CAN_BUY: &str = "Only the DAO can buy NFTs";

// Lifecycle
pub const ERR_UNKNOWN_PROPOSAL: &str = "Unknown proposal";
pub const ERR_PROPOSAL_EXISTS: &str = "Proposal already exists";
pub const ERR_PROPOSAL_NOT_ACTIVE: &str = "Proposal not active";
pub const ERR_PROPOSAL_NOT_EXECUTABLE: &str = "Proposal not executable";

// Double action
pub const ERR_VOTER_ALREADY_VOTED: &str = "Voter already voted";

// Proposal shape and funds
pub const ERR_INVALID_PROPOSAL_LENGTH: &str = "Invalid proposal length";
pub const ERR_EMPTY_PROPOSAL: &str = "Empty proposal";
pub const ERR_INSUFFICIENT_FUNDS: &str = "Insufficient fund balance";
pub const ERR_NFT_PRICE_EXCEEDS_LIMIT: &str = "NFT price exceeds limit";

// Deployment
pub const ERR_INVALID_FEE_CONFIG: &str = "Invalid membership fee config";
pub const ERR_INVALID_VOTING_PERIOD: &str = "Invalid voting period";
pub const ERR_INVALID_VOTING_WINDOW: &str = "Invalid voting window";
pub const ERR_INVALID_QUORUM_PERCENTAGE: &str = "Invalid quorum percentage";
