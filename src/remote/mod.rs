//! Client for the external compile/execute flow service.
//!
//! The core keeps this interface narrow and synchronous; scheduling, request
//! racing and cancellation policy belong to the calling layer. Transport
//! failures and non-success responses carry their text verbatim so the caller
//! can surface them in the user's output log unmodified.

use crate::error::RemoteError;
use crate::ir::FlowIr;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Serialize)]
struct ExecuteRequest<'a> {
    code: &'a str,
    filename: &'a str,
}

#[derive(Debug, Deserialize)]
struct CompileResponse {
    code: String,
}

/// Outcome of a remote compile-and-run, exactly as the service reported it.
///
/// `success: false` is a *successful* exchange whose report carries the
/// compiler's failure text; only transport problems are errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionReport {
    pub success: bool,
    pub compile_output: String,
    pub execution_output: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// HTTP client for a running flow service.
pub struct FlowServiceClient {
    base_url: String,
    agent: ureq::Agent,
}

impl FlowServiceClient {
    /// Creates a client for the service at `base_url`
    /// (e.g. `http://localhost:3000`).
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            agent: ureq::Agent::new_with_defaults(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Checks that the service is reachable.
    pub fn health(&self) -> Result<(), RemoteError> {
        self.agent
            .get(format!("{}/api/health", self.base_url))
            .call()
            .map_err(|e| RemoteError::Transport(e.to_string()))?;
        Ok(())
    }

    /// Sends IR to the code generator and returns the generated source.
    pub fn compile(&self, ir: &FlowIr) -> Result<String, RemoteError> {
        debug!(nodes = ir.nodes.len(), connections = ir.connections.len(), "sending compile request");
        let response = self
            .agent
            .post(format!("{}/api/compile", self.base_url))
            .send_json(ir)
            .map_err(|e| RemoteError::Transport(e.to_string()))?;
        let body: CompileResponse = response
            .into_body()
            .read_json()
            .map_err(|e| RemoteError::MalformedResponse(e.to_string()))?;
        Ok(body.code)
    }

    /// Asks the service to compile and run generated source, returning its
    /// report verbatim.
    pub fn execute(&self, code: &str, filename: &str) -> Result<ExecutionReport, RemoteError> {
        debug!(filename, "sending execute request");
        let response = self
            .agent
            .post(format!("{}/api/execute", self.base_url))
            .send_json(ExecuteRequest { code, filename })
            .map_err(|e| RemoteError::Transport(e.to_string()))?;
        response
            .into_body()
            .read_json()
            .map_err(|e| RemoteError::MalformedResponse(e.to_string()))
    }
}
