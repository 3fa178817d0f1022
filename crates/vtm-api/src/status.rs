// Appliance-level endpoints
//
// API version discovery, the list of managed nodes, the statistics
// categories a node exposes, and its global counters.

use tracing::debug;

use crate::client::VtmClient;
use crate::error::Error;
use crate::models::StatisticsMap;

impl VtmClient {
    /// List the API versions the appliance serves.
    ///
    /// `GET <host>:<port>/api/tm` (the base path without its version)
    pub async fn get_api_versions(&self) -> Result<Vec<String>, Error> {
        debug!("listing api versions");
        self.list_at(self.api_root_url()).await
    }

    /// List the traffic-manager nodes known to this appliance.
    ///
    /// `GET status`
    pub async fn status(&self) -> Result<Vec<String>, Error> {
        debug!("listing nodes");
        self.list_children(&["status"]).await
    }

    /// List the statistics categories available for a node
    /// (`pools`, `virtual_servers`, `globals`, ...).
    ///
    /// `GET status/{node}/statistics`
    pub async fn server_stats(&self, node: &str) -> Result<Vec<String>, Error> {
        debug!(node, "listing statistics categories");
        self.list_children(&["status", node, "statistics"]).await
    }

    /// Global counters for a node.
    ///
    /// `GET status/{node}/statistics/globals`
    pub async fn get_global_stats(&self, node: &str) -> Result<StatisticsMap, Error> {
        debug!(node, "fetching global stats");
        self.statistics(&["status", node, "statistics", "globals"])
            .await
    }
}
