//! Transaction builder.
//!
//! A [`TransactionRequest`] is a plain, serializable description of a
//! programmable transaction. It is never signed here: the wallet side
//! (see `frontend/src/js/wallet.js`) turns the JSON form into an SDK
//! transaction and submits it.
//!
//! # JSON form
//!
//! ```json
//! {
//!   "commands": [{
//!     "kind": "moveCall",
//!     "package": "0x…",
//!     "module": "manage",
//!     "function": "creat_profile",
//!     "typeArguments": [],
//!     "arguments": [
//!       {"kind": "pure", "value": {"type": "string", "value": "Alice"}},
//!       {"kind": "pure", "value": {"type": "string", "value": "bio"}},
//!       {"kind": "object", "value": "0x…"}
//!     ]
//!   }]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{NetworkConfig, ObjectId, CREATE_PROFILE_FUNCTION, PROFILE_MODULE};

// =============================================================================
// Arguments
// =============================================================================

/// A pure (non-object) Move value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum PureArg {
    String(String),
    /// Carried as a decimal string so JavaScript does not round it.
    U64(#[serde(with = "u64_string")] u64),
    Bool(bool),
    Address(ObjectId),
}

/// One argument of a Move call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum CallArg {
    Pure(PureArg),
    /// Owned or shared object, resolved by the wallet SDK.
    Object(ObjectId),
}

impl CallArg {
    pub fn pure_string(value: impl Into<String>) -> Self {
        CallArg::Pure(PureArg::String(value.into()))
    }

    pub fn pure_u64(value: u64) -> Self {
        CallArg::Pure(PureArg::U64(value))
    }

    pub fn pure_bool(value: bool) -> Self {
        CallArg::Pure(PureArg::Bool(value))
    }

    pub fn pure_address(address: ObjectId) -> Self {
        CallArg::Pure(PureArg::Address(address))
    }

    pub fn object(id: ObjectId) -> Self {
        CallArg::Object(id)
    }
}

// =============================================================================
// Commands
// =============================================================================

/// Call of a Move entry or public function.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveCall {
    pub package: ObjectId,
    pub module: String,
    pub function: String,
    #[serde(default)]
    pub type_arguments: Vec<String>,
    pub arguments: Vec<CallArg>,
}

impl MoveCall {
    pub fn new(package: ObjectId, module: impl Into<String>, function: impl Into<String>) -> Self {
        Self {
            package,
            module: module.into(),
            function: function.into(),
            type_arguments: Vec::new(),
            arguments: Vec::new(),
        }
    }

    /// Append an argument.
    pub fn arg(mut self, arg: CallArg) -> Self {
        self.arguments.push(arg);
        self
    }

    /// Append a type argument such as `0x2::sui::SUI`.
    pub fn type_arg(mut self, type_tag: impl Into<String>) -> Self {
        self.type_arguments.push(type_tag.into());
        self
    }

    /// `package::module::function`.
    pub fn target(&self) -> String {
        format!("{}::{}::{}", self.package, self.module, self.function)
    }
}

/// A programmable transaction command.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Command {
    MoveCall(MoveCall),
}

// =============================================================================
// TransactionRequest
// =============================================================================

/// Unsigned transaction description handed to a wallet.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRequest {
    pub commands: Vec<Command>,
}

impl TransactionRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_call(mut self, call: MoveCall) -> Self {
        self.commands.push(Command::MoveCall(call));
        self
    }

    /// Move calls in command order.
    pub fn move_calls(&self) -> impl Iterator<Item = &MoveCall> {
        self.commands.iter().map(|command| match command {
            Command::MoveCall(call) => call,
        })
    }

    /// JSON form consumed by the wallet shim.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Build the `manage::creat_profile(name, description, &mut State)` call.
///
/// No local validation: bad input surfaces as an on-chain failure.
pub fn create_profile_tx(
    config: &NetworkConfig,
    name: impl Into<String>,
    description: impl Into<String>,
) -> TransactionRequest {
    let call = MoveCall::new(config.package_id.clone(), PROFILE_MODULE, CREATE_PROFILE_FUNCTION)
        .arg(CallArg::pure_string(name))
        .arg(CallArg::pure_string(description))
        .arg(CallArg::object(config.state_object_id.clone()));

    TransactionRequest::new().move_call(call)
}

mod u64_string {
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &u64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
        String::deserialize(deserializer)?
            .parse()
            .map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Network;
    use serde_json::json;

    fn config() -> NetworkConfig {
        NetworkConfig::new(Network::Testnet, "0xa11ce", "0x57a7e").unwrap()
    }

    #[test]
    fn test_create_profile_tx_shape() {
        let config = config();
        let tx = create_profile_tx(&config, "Alice", "bio");

        let calls: Vec<_> = tx.move_calls().collect();
        assert_eq!(calls.len(), 1);
        let call = calls[0];
        assert_eq!(call.package, config.package_id);
        assert_eq!(call.module, "manage");
        assert_eq!(call.function, "creat_profile");
        assert!(call.type_arguments.is_empty());
        assert_eq!(
            call.arguments,
            vec![
                CallArg::pure_string("Alice"),
                CallArg::pure_string("bio"),
                CallArg::object(config.state_object_id.clone()),
            ]
        );
        assert_eq!(call.target(), format!("{}::manage::creat_profile", config.package_id));
    }

    #[test]
    fn test_create_profile_tx_is_deterministic() {
        let config = config();
        assert_eq!(
            create_profile_tx(&config, "Alice", "bio"),
            create_profile_tx(&config, "Alice".to_string(), "bio".to_string())
        );
        assert_ne!(
            create_profile_tx(&config, "Alice", "bio"),
            create_profile_tx(&config, "Bob", "bio")
        );
    }

    #[test]
    fn test_no_local_validation() {
        let tx = create_profile_tx(&config(), "", "x".repeat(10_000));
        let call = tx.move_calls().next().unwrap();
        assert_eq!(call.arguments[0], CallArg::pure_string(""));
    }

    #[test]
    fn test_json_form() {
        let config = config();
        let value = serde_json::to_value(create_profile_tx(&config, "Alice", "bio")).unwrap();

        assert_eq!(
            value,
            json!({
                "commands": [{
                    "kind": "moveCall",
                    "package": config.package_id.as_str(),
                    "module": "manage",
                    "function": "creat_profile",
                    "typeArguments": [],
                    "arguments": [
                        {"kind": "pure", "value": {"type": "string", "value": "Alice"}},
                        {"kind": "pure", "value": {"type": "string", "value": "bio"}},
                        {"kind": "object", "value": config.state_object_id.as_str()}
                    ]
                }]
            })
        );
    }

    #[test]
    fn test_u64_carried_as_string() {
        let arg = CallArg::pure_u64(u64::MAX);
        let value = serde_json::to_value(&arg).unwrap();
        assert_eq!(value, json!({"kind": "pure", "value": {"type": "u64", "value": "18446744073709551615"}}));

        let back: CallArg = serde_json::from_value(value).unwrap();
        assert_eq!(back, arg);
    }
}
