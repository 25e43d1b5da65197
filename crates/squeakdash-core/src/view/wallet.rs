// Wallet screen: node summary and on-chain balance.

use squeakdash_api::models::{LndInfo, WalletBalance};

use super::{Calls, Reaction, Screen, ScreenId, read_failed};
use crate::error::CoreError;
use crate::projection::{FIELD_COLUMNS, Table, node_info_rows, wallet_rows};
use crate::service::AdminService;

pub enum WalletCompletion {
    Info(Result<LndInfo, CoreError>),
    Balance(Result<WalletBalance, CoreError>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletScreen {
    node_info: Table<2>,
    balance: Table<2>,
}

impl Default for WalletScreen {
    fn default() -> Self {
        Self {
            node_info: Table::empty(FIELD_COLUMNS),
            balance: Table::empty(FIELD_COLUMNS),
        }
    }
}

impl WalletScreen {
    pub fn node_info(&self) -> &Table<2> {
        &self.node_info
    }

    pub fn balance(&self) -> &Table<2> {
        &self.balance
    }
}

impl Screen for WalletScreen {
    type Completion = WalletCompletion;

    const ID: ScreenId = ScreenId::Wallet;

    fn on_enter<A>(&self, calls: &mut Calls<'_, A, WalletCompletion>)
    where
        A: AdminService + Sync + 'static,
    {
        calls.issue(|svc| async move { WalletCompletion::Info(svc.lnd_get_info().await) });
        calls.issue(|svc| async move { WalletCompletion::Balance(svc.lnd_wallet_balance().await) });
    }

    fn on_completion(&mut self, completion: WalletCompletion) -> Reaction {
        match completion {
            WalletCompletion::Info(Ok(info)) => {
                self.node_info = node_info_rows(&info);
                Reaction::loaded()
            }
            WalletCompletion::Balance(Ok(balance)) => {
                self.balance = wallet_rows(&balance);
                Reaction::loaded()
            }
            WalletCompletion::Info(Err(e)) => read_failed(Self::ID, "lnd_get_info", &e),
            WalletCompletion::Balance(Err(e)) => read_failed(Self::ID, "lnd_wallet_balance", &e),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::view::ViewController;
    use crate::view::fake::{FakeAdmin, FakeData};

    #[tokio::test]
    async fn balance_survives_info_failure() {
        let fake = Arc::new(FakeAdmin::with_data(FakeData {
            balance: WalletBalance {
                total_balance: 1_500,
                confirmed_balance: 1_000,
                unconfirmed_balance: 500,
            },
            ..FakeData::default()
        }));
        fake.fail("lnd_get_info", "wallet locked");
        let mut ctl = ViewController::<WalletScreen, _>::new(Arc::clone(&fake));

        ctl.mount();
        assert!(ctl.settle().await.is_empty());

        assert!(ctl.screen().node_info().is_empty());
        assert_eq!(ctl.screen().balance().rows()[1][1], "1000 sat");
    }
}
