//! Scheme document as stored by the persistence service.

use hy_graph::GraphDef;
use serde::{Deserialize, Serialize};

/// A named scheme: `{ name, data: { modules, connections } }`.
///
/// Store-assigned fields are carried through untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Scheme {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub data: GraphDef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Scheme {
    pub fn new(name: impl Into<String>, data: GraphDef) -> Self {
        Self {
            id: None,
            name: name.into(),
            data,
            created_at: None,
            updated_at: None,
        }
    }
}

/// Body of a solve request: a stored scheme or a bare graph.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum RequestBody {
    Scheme(Scheme),
    Graph(GraphDef),
}

impl RequestBody {
    /// Normalize to a scheme; a bare graph is named `fallback_name`.
    pub fn into_scheme(self, fallback_name: &str) -> Scheme {
        match self {
            RequestBody::Scheme(s) => s,
            RequestBody::Graph(g) => Scheme::new(fallback_name, g),
        }
    }
}
