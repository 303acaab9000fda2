use ureq::Error::{Status, Transport};

use super::{FileDownloader, Response};

/// Blocking GET through a shared `ureq` agent. Redirects are followed by the
/// agent; no timeouts are set.
pub struct UReqFetcher {
    agent: ureq::Agent,
}

impl FileDownloader for UReqFetcher {
    fn fetch(&self, url: &str) -> Response {
        let response = self.agent.request("GET", url).call();

        match response {
            Ok(response) if (200..300).contains(&response.status()) => {
                Response::ok(response.into_reader())
            }

            Ok(response) => Response::status(response.status()),

            Err(Status(code, _)) => Response::status(code),

            Err(Transport(transport)) => Response::network_error(transport.to_string()),
        }
    }
}

impl UReqFetcher {
    pub fn new() -> Self {
        Self::with_agent(ureq::AgentBuilder::new().build())
    }

    pub fn with_agent(agent: ureq::Agent) -> Self {
        UReqFetcher { agent }
    }
}

impl Default for UReqFetcher {
    fn default() -> Self {
        Self::new()
    }
}
