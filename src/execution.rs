multiversx_sc::imports!();

use crate::errors::{ERR_INSUFFICIENT_FUNDS, ERR_PROPOSAL_NOT_EXECUTABLE};
use crate::types::{CallData, ProposalId, ProposalState};

#[multiversx_sc::module]
pub trait ExecutionModule:
    crate::config::ConfigModule
    + crate::membership::MembershipModule
    + crate::proposal::ProposalModule
    + crate::events::EventsModule
{
    // ========================================================
    // ENDPOINT: execute
    // Anyone can trigger a Succeeded proposal. All actions run
    // in this transaction: one failing call reverts every
    // transfer and the executed flag, so it can be retried.
    // ========================================================

    #[endpoint(execute)]
    fn execute(
        &self,
        targets: ManagedVec<ManagedAddress>,
        values: ManagedVec<BigUint>,
        payloads: ManagedVec<CallData<Self::Api>>,
        description_hash: ManagedByteArray<Self::Api, 32>,
    ) -> ProposalId<Self::Api> {
        self.require_valid_shape(&targets, &values, &payloads);
        let proposal_id = self.hash_proposal(
            targets.clone(),
            values.clone(),
            payloads.clone(),
            description_hash,
        );
        require!(
            self.current_state(&proposal_id) == Some(ProposalState::Succeeded),
            ERR_PROPOSAL_NOT_EXECUTABLE
        );

        let mut total_value = BigUint::zero();
        for value in values.iter() {
            total_value += &*value;
        }
        let fund_balance = self
            .blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0);
        require!(total_value <= fund_balance, ERR_INSUFFICIENT_FUNDS);

        self.proposals(&proposal_id)
            .update(|proposal| proposal.executed = true);

        for index in 0..targets.len() {
            let target = targets.get(index);
            let value = values.get(index);
            let payload = payloads.get(index);
            self.perform_action(&target, &value, &payload);
        }

        let caller = self.blockchain().get_caller();
        self.proposal_executed_event(&proposal_id, &caller);

        proposal_id
    }

    fn perform_action(
        &self,
        target: &ManagedAddress,
        value: &BigUint,
        payload: &CallData<Self::Api>,
    ) {
        if payload.is_transfer() {
            if *value > 0u64 {
                self.send().direct_egld(target, value);
            }
            return;
        }

        self.tx()
            .to(target)
            .egld(value)
            .raw_call(payload.endpoint.clone())
            .arguments_raw(payload.arguments.clone().into())
            .sync_call();
    }
}
