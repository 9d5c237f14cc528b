multiversx_sc::imports!();

/// Deployment parameters. Written once by `init`.
#[multiversx_sc::module]
pub trait ConfigModule {
    #[view(getConfig)]
    fn get_config(&self) -> MultiValue4<BigUint, u64, u64, u64> {
        (
            self.membership_fee().get(),
            self.voting_delay().get(),
            self.voting_period().get(),
            self.quorum_percentage().get(),
        )
            .into()
    }

    /// Exact EGLD amount a new member pays
    #[storage_mapper("membershipFee")]
    fn membership_fee(&self) -> SingleValueMapper<BigUint>;

    /// Blocks between proposal creation and the start of voting
    #[storage_mapper("votingDelay")]
    fn voting_delay(&self) -> SingleValueMapper<u64>;

    /// Blocks the voting window stays open
    #[storage_mapper("votingPeriod")]
    fn voting_period(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("quorumPercentage")]
    fn quorum_percentage(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("chainId")]
    fn chain_id(&self) -> SingleValueMapper<ManagedBuffer>;
}
