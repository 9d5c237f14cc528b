multiversx_sc::imports!();

use crate::errors::{ERR_INSUFFICIENT_FUNDS, ERR_NFT_PRICE_EXCEEDS_LIMIT, ERR_ONLY_DAO_CAN_BUY};
use crate::marketplace_proxy;

#[multiversx_sc::module]
pub trait NftModule: crate::events::EventsModule {
    // ========================================================
    // ENDPOINT: buyNft
    // Only reachable through an executed proposal whose action
    // targets this contract with endpoint `buyNft`.
    // ========================================================

    #[endpoint(buyNft)]
    fn buy_nft(
        &self,
        marketplace: ManagedAddress,
        nft_contract: ManagedAddress,
        nft_id: u64,
        max_price: BigUint,
    ) {
        let caller = self.blockchain().get_caller();
        require!(
            caller == self.blockchain().get_sc_address(),
            ERR_ONLY_DAO_CAN_BUY
        );

        let price: BigUint = self
            .tx()
            .to(&marketplace)
            .typed(marketplace_proxy::MarketplaceProxy)
            .get_price(nft_contract.clone(), nft_id)
            .returns(ReturnsResult)
            .sync_call_readonly();
        require!(price <= max_price, ERR_NFT_PRICE_EXCEEDS_LIMIT);

        let fund_balance = self
            .blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0);
        require!(price <= fund_balance, ERR_INSUFFICIENT_FUNDS);

        self.tx()
            .to(&marketplace)
            .typed(marketplace_proxy::MarketplaceProxy)
            .buy(nft_contract.clone(), nft_id)
            .egld(&price)
            .sync_call();

        self.nft_purchased_event(&marketplace, &nft_contract, nft_id, &price);
    }
}
