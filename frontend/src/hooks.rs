//! Reactive wrappers around the core execution chain.

use leptos::*;
use std::rc::Rc;

use profiles::{LoadingFlag, NetworkConfig, TransactionExecutor, TransactionRequest};

use crate::services::{fullnode_client, WalletSigner};

/// Executor signing through the connected wallet, plus a signal mirroring
/// its loading flag (e.g. to disable a submit button).
///
/// With `wait_for_tx`, `on_success` fires only after the full node reports
/// the transaction as finalized.
pub fn use_sign_and_execute_transaction<A: 'static>(
    config: &NetworkConfig,
    build: impl Fn(A) -> TransactionRequest + 'static,
    wait_for_tx: bool,
) -> (TransactionExecutor<A>, ReadSignal<bool>) {
    let (is_loading, set_is_loading) = create_signal(false);
    let loading = LoadingFlag::with_observer(move |loading| set_is_loading.set(loading));

    let signer = Rc::new(WalletSigner::new(config.network.as_str()));
    let mut executor = TransactionExecutor::new(signer, build).with_loading_flag(loading);

    if wait_for_tx {
        executor = executor.wait_for_confirmation(Rc::new(fullnode_client(config)));
    }

    (executor, is_loading)
}
