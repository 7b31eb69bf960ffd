//! Transaction execution wrapper.
//!
//! Adapts a wallet "sign and execute" capability into a fluent chain:
//!
//! ```rust,ignore
//! let executor = TransactionExecutor::new(signer, move |(name, description)| {
//!     create_profile_tx(&config, name, description)
//! })
//! .wait_for_confirmation(client);
//!
//! executor
//!     .handle_sign_and_execute_transaction(("Alice".into(), "bio".into()))
//!     .before_execute(|| async { Ok(()) })
//!     .on_success(|output| async move { log::info!("{}", output.digest) })
//!     .on_error(|err| log::error!("{}", err))
//!     .on_settled(|_| async {})
//!     .on_execute()
//!     .await;
//! ```
//!
//! # Lifecycle
//!
//! ```text
//! Idle ──on_execute──▶ Executing ──▶ Settled(Success | Error) ──▶ Idle
//!   ▲                     │
//!   └── Skipped ◀─────────┘ (on_execute while another chain is executing)
//! ```
//!
//! All chains created by one executor share its [`LoadingFlag`]; at most one
//! of them runs at a time and overlapping calls are dropped, not queued.
//! `on_settled` fires exactly once for every execution that passed the
//! guard, whichever step failed.

use async_trait::async_trait;
use futures::future::{FutureExt, LocalBoxFuture};
use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::fmt;
use std::future::Future;
use std::rc::Rc;

use crate::error::{ExecutionError, ExecutionResult};
use crate::transaction::TransactionRequest;

// =============================================================================
// External capabilities
// =============================================================================

/// Raw result of a wallet sign-and-execute call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionOutput {
    /// Transaction digest (base58).
    pub digest: String,
    /// Signed transaction bytes (base64).
    #[serde(default)]
    pub bytes: Option<String>,
    #[serde(default)]
    pub signature: Option<String>,
    /// BCS-encoded effects (base64).
    #[serde(default)]
    pub effects: Option<String>,
}

/// Wallet capability: sign a request and submit it.
#[async_trait(?Send)]
pub trait SignAndExecute {
    async fn sign_and_execute(&self, request: &TransactionRequest) -> ExecutionResult<ExecutionOutput>;
}

/// Client capability: wait until a digest is finalized.
#[async_trait(?Send)]
pub trait ConfirmTransaction {
    async fn wait_for_transaction(&self, digest: &str) -> ExecutionResult<()>;
}

// =============================================================================
// LoadingFlag
// =============================================================================

/// Shared "execution in flight" flag.
///
/// Cloning yields another handle on the same flag. An optional observer is
/// told about every change (a UI mirrors it into its own reactive state).
#[derive(Clone, Default)]
pub struct LoadingFlag {
    state: Rc<Cell<bool>>,
    observer: Option<Rc<dyn Fn(bool)>>,
}

impl LoadingFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flag whose changes are reported to `observer`.
    pub fn with_observer(observer: impl Fn(bool) + 'static) -> Self {
        Self {
            state: Rc::new(Cell::new(false)),
            observer: Some(Rc::new(observer)),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.state.get()
    }

    /// Set the flag if it was clear. The guard clears it again on drop.
    fn acquire(&self) -> Option<LoadingGuard> {
        if self.state.replace(true) {
            return None;
        }
        self.notify(true);
        Some(LoadingGuard { flag: self.clone() })
    }

    fn notify(&self, loading: bool) {
        if let Some(observer) = &self.observer {
            observer(loading);
        }
    }
}

impl fmt::Debug for LoadingFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadingFlag")
            .field("loading", &self.is_loading())
            .field("observed", &self.observer.is_some())
            .finish()
    }
}

struct LoadingGuard {
    flag: LoadingFlag,
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.flag.state.set(false);
        self.flag.notify(false);
    }
}

// =============================================================================
// TransactionExecutor
// =============================================================================

/// Wraps a signer; hands out one [`TransactionChain`] per invocation.
///
/// `A` is the argument type of the request builder, e.g. `(String, String)`
/// for a name/description pair.
pub struct TransactionExecutor<A> {
    signer: Rc<dyn SignAndExecute>,
    confirmer: Option<Rc<dyn ConfirmTransaction>>,
    build: Rc<dyn Fn(A) -> TransactionRequest>,
    loading: LoadingFlag,
}

impl<A> Clone for TransactionExecutor<A> {
    fn clone(&self) -> Self {
        Self {
            signer: Rc::clone(&self.signer),
            confirmer: self.confirmer.clone(),
            build: Rc::clone(&self.build),
            loading: self.loading.clone(),
        }
    }
}

impl<A> TransactionExecutor<A> {
    /// Executor that reports success as soon as the wallet returns.
    pub fn new(
        signer: Rc<dyn SignAndExecute>,
        build: impl Fn(A) -> TransactionRequest + 'static,
    ) -> Self {
        Self {
            signer,
            confirmer: None,
            build: Rc::new(build),
            loading: LoadingFlag::new(),
        }
    }

    /// Wait for finality through `confirmer` before `on_success` fires.
    pub fn wait_for_confirmation(mut self, confirmer: Rc<dyn ConfirmTransaction>) -> Self {
        self.confirmer = Some(confirmer);
        self
    }

    /// Use an existing (possibly observed) flag.
    pub fn with_loading_flag(mut self, loading: LoadingFlag) -> Self {
        self.loading = loading;
        self
    }

    pub fn wait_for_tx(&self) -> bool {
        self.confirmer.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_loading()
    }

    pub fn loading_flag(&self) -> LoadingFlag {
        self.loading.clone()
    }

    /// Build the request now and return a chain to register callbacks on.
    pub fn handle_sign_and_execute_transaction(&self, args: A) -> TransactionChain {
        TransactionChain {
            request: (self.build)(args),
            signer: Rc::clone(&self.signer),
            confirmer: self.confirmer.clone(),
            loading: self.loading.clone(),
            callbacks: Callbacks::default(),
        }
    }
}

// =============================================================================
// TransactionChain
// =============================================================================

type BeforeExecuteFn = Box<dyn FnOnce() -> LocalBoxFuture<'static, ExecutionResult<()>>>;
type SuccessFn = Box<dyn FnOnce(ExecutionOutput) -> LocalBoxFuture<'static, ()>>;
type ErrorFn = Box<dyn FnOnce(ExecutionError)>;
type SettledFn = Box<dyn FnOnce(Option<ExecutionOutput>) -> LocalBoxFuture<'static, ()>>;

#[derive(Default)]
struct Callbacks {
    before_execute: Option<BeforeExecuteFn>,
    on_success: Option<SuccessFn>,
    on_error: Option<ErrorFn>,
    on_settled: Option<SettledFn>,
}

/// What [`TransactionChain::on_execute`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExecuteOutcome {
    /// Another execution was in flight; nothing ran.
    Skipped,
    Succeeded,
    Failed,
}

/// Single-use callback chain around one built request.
///
/// Each registration replaces any earlier callback of the same kind.
pub struct TransactionChain {
    request: TransactionRequest,
    signer: Rc<dyn SignAndExecute>,
    confirmer: Option<Rc<dyn ConfirmTransaction>>,
    loading: LoadingFlag,
    callbacks: Callbacks,
}

/// Failure inside the guarded sequence, with the wallet output if signing got that far.
struct Failure {
    error: ExecutionError,
    output: Option<ExecutionOutput>,
}

impl TransactionChain {
    /// The request that will be signed.
    pub fn request(&self) -> &TransactionRequest {
        &self.request
    }

    /// Runs to completion before the wallet is asked to sign.
    /// An error aborts the execution and goes to `on_error`.
    pub fn before_execute<F, Fut>(mut self, callback: F) -> Self
    where
        F: FnOnce() -> Fut + 'static,
        Fut: Future<Output = ExecutionResult<()>> + 'static,
    {
        self.callbacks.before_execute = Some(Box::new(move || callback().boxed_local()));
        self
    }

    pub fn on_success<F, Fut>(mut self, callback: F) -> Self
    where
        F: FnOnce(ExecutionOutput) -> Fut + 'static,
        Fut: Future<Output = ()> + 'static,
    {
        self.callbacks.on_success = Some(Box::new(move |output| callback(output).boxed_local()));
        self
    }

    pub fn on_error<F>(mut self, callback: F) -> Self
    where
        F: FnOnce(ExecutionError) + 'static,
    {
        self.callbacks.on_error = Some(Box::new(callback));
        self
    }

    /// Receives the wallet output when there is one, `None` otherwise.
    pub fn on_settled<F, Fut>(mut self, callback: F) -> Self
    where
        F: FnOnce(Option<ExecutionOutput>) -> Fut + 'static,
        Fut: Future<Output = ()> + 'static,
    {
        self.callbacks.on_settled = Some(Box::new(move |output| callback(output).boxed_local()));
        self
    }

    /// Execute the chain.
    ///
    /// Returns [`ExecuteOutcome::Skipped`] without running anything if the
    /// shared flag is already set. Errors are delivered to `on_error` (or
    /// dropped with a warning), never returned.
    pub async fn on_execute(self) -> ExecuteOutcome {
        let TransactionChain {
            request,
            signer,
            confirmer,
            loading,
            callbacks,
        } = self;

        let Some(guard) = loading.acquire() else {
            log::debug!("Transaction already in flight, execute ignored");
            return ExecuteOutcome::Skipped;
        };

        let Callbacks {
            before_execute,
            on_success,
            on_error,
            on_settled,
        } = callbacks;

        let (outcome, settled) = match submit(
            before_execute,
            signer.as_ref(),
            confirmer.as_deref(),
            &request,
        )
        .await
        {
            Ok(output) => {
                log::info!("Transaction {} executed", output.digest);
                if let Some(callback) = on_success {
                    callback(output.clone()).await;
                }
                (ExecuteOutcome::Succeeded, Some(output))
            }
            Err(Failure { error, output }) => {
                match on_error {
                    Some(callback) => {
                        log::debug!("Transaction failed: {}", error);
                        callback(error);
                    }
                    None => log::warn!("Unhandled transaction error: {}", error),
                }
                (ExecuteOutcome::Failed, output)
            }
        };

        if let Some(callback) = on_settled {
            callback(settled).await;
        }

        drop(guard);
        outcome
    }
}

/// before_execute → sign & execute → optional confirmation.
async fn submit(
    before_execute: Option<BeforeExecuteFn>,
    signer: &dyn SignAndExecute,
    confirmer: Option<&dyn ConfirmTransaction>,
    request: &TransactionRequest,
) -> Result<ExecutionOutput, Failure> {
    if let Some(callback) = before_execute {
        callback()
            .await
            .map_err(|error| Failure { error, output: None })?;
    }

    let output = signer
        .sign_and_execute(request)
        .await
        .map_err(|error| Failure { error, output: None })?;

    if let Some(confirmer) = confirmer {
        log::debug!("Waiting for {} to be finalized", output.digest);
        if let Err(error) = confirmer.wait_for_transaction(&output.digest).await {
            return Err(Failure { error, output: Some(output) });
        }
    }

    Ok(output)
}
