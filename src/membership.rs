multiversx_sc::imports!();

use crate::errors::{ERR_INVALID_MEMBERSHIP_FEE, ERR_MEMBER_ALREADY_EXISTS};

#[multiversx_sc::module]
pub trait MembershipModule: crate::config::ConfigModule + crate::events::EventsModule {
    // ========================================================
    // ENDPOINT: purchaseMembership
    // Exact fee, once per address. The fee stays in the
    // contract and funds executed proposals.
    // ========================================================

    #[endpoint(purchaseMembership)]
    #[payable("EGLD")]
    fn purchase_membership(&self) {
        let caller = self.blockchain().get_caller();
        let payment_amount = self.call_value().egld_value().clone_value();

        require!(!self.is_member(&caller), ERR_MEMBER_ALREADY_EXISTS);
        require!(
            payment_amount == self.membership_fee().get(),
            ERR_INVALID_MEMBERSHIP_FEE
        );

        self.members().insert(caller.clone());

        self.membership_purchased_event(&caller, &payment_amount);
    }

    #[view(isMember)]
    fn is_member(&self, address: &ManagedAddress) -> bool {
        self.members().contains(address)
    }

    #[view(getMemberCount)]
    fn get_member_count(&self) -> usize {
        self.members().len()
    }

    #[storage_mapper("members")]
    fn members(&self) -> UnorderedSetMapper<ManagedAddress>;
}
