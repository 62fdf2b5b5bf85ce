//! Deployment identity read from the environment
//!
//! Only used to label records; never consulted by the emission path.

use crate::core::Field;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;

pub const POD_NAME_VAR: &str = "POD_NAME";
pub const NAMESPACE_VAR: &str = "NAMESPACE";
pub const DEPLOYMENT_VAR: &str = "DEPLOYMENT_NAME";
pub const PEER_ID_VAR: &str = "CORE_PEER_ID";

/// Role of the node this process runs as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    Peer,
    Orderer,
}

impl NodeType {
    pub fn to_str(&self) -> &'static str {
        match self {
            NodeType::Peer => "peer",
            NodeType::Orderer => "orderer",
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

fn var(name: &str) -> String {
    env::var(name).unwrap_or_default()
}

/// `POD_NAME`, empty when unset
pub fn pod_name() -> String {
    var(POD_NAME_VAR)
}

/// `NAMESPACE`, empty when unset
pub fn namespace() -> String {
    var(NAMESPACE_VAR)
}

/// `DEPLOYMENT_NAME`, empty when unset
pub fn deployment() -> String {
    var(DEPLOYMENT_VAR)
}

/// Peer when `CORE_PEER_ID` is set to a non-empty value, orderer otherwise
pub fn node_type() -> NodeType {
    node_type_from(env::var(PEER_ID_VAR).ok().as_deref())
}

fn node_type_from(peer_id: Option<&str>) -> NodeType {
    match peer_id {
        Some(id) if !id.is_empty() => NodeType::Peer,
        _ => NodeType::Orderer,
    }
}

/// Labelling fields for every record: `pod`, `namespace`, `deployment`, `node_type`
///
/// Unset variables are skipped; `node_type` is always present.
pub fn identity_fields() -> Vec<Field> {
    let mut fields: Vec<Field> = [
        ("pod", pod_name()),
        ("namespace", namespace()),
        ("deployment", deployment()),
    ]
    .into_iter()
    .filter(|(_, value)| !value.is_empty())
    .map(Field::from)
    .collect();

    fields.push(Field::new("node_type", node_type().to_str()));
    fields
}
